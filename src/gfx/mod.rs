//! Adapter between the viewer and the graphics toolchain.
//!
//! - `status` turns raw status codes into [`GraphicsApiFailure`](crate::error::GraphicsApiFailure)s
//! - `shader` compiles WGSL files to SPIR-V, forwarding compiler diagnostics to the log

pub mod shader;
pub mod status;
