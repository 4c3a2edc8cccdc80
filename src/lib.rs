//! flow-viewer-util
//!
//! Small helpers shared by the glTF model viewer. Nothing in here owns GPU
//! resources or drives a render loop: every function is either a pure value
//! computation or a thin pass-through to the shader toolchain.
//!
//! High-level modules
//! - `util`: vertex formats, buffer sizes, bounding boxes and colors
//! - `gfx`: status-code translation and shader compilation
//! - `error`: the error types returned by both
//! - `logging`: logger bootstrap for binaries embedding the viewer
//!

pub mod error;
pub mod gfx;
pub mod logging;
pub mod util;

// Re-exports commonly used types for convenience in downstream code.
pub use error::{Error, GraphicsApiFailure, UnsupportedFormat};
pub use gfx::{
    shader::{
        CompileFlags, CompiledShader, DiagnosticSink, LogSink, ShaderDefine, compile_shader,
        compile_shader_with,
    },
    status::{Status, throw_if_failed},
};
pub use util::{
    bbox::BoundingBox,
    color::{Rgba, distinct_color, hsv_to_rgb},
    format::{ComponentFormat, determine_vertex_format},
    resource::{MIN_RESOURCE_SIZE, resource_size},
};
