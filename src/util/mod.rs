//! Value helpers used while turning a glTF document into GPU data.
//!
//! - `format` maps accessor layouts to vertex and index formats
//! - `resource` pads buffer allocation sizes
//! - `bbox` merges and centers axis-aligned bounding boxes
//! - `color` converts HSV to RGBA
//!
//! Everything here is pure and safe to call from any thread.

pub mod bbox;
pub mod color;
pub mod format;
pub mod resource;
