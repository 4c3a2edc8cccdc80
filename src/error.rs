//! Error types returned by the viewer helpers.
//!
//! Two failure kinds exist: an accessor layout with no GPU format mapping
//! ([`UnsupportedFormat`]) and a failing status code reported by the graphics
//! toolchain ([`GraphicsApiFailure`]). [`Error`] wraps both so loaders can use
//! `?` on either.

use gltf::accessor::{DataType, Dimensions};

use crate::gfx::status::Status;

/// An accessor whose (dimensions, component type) pair has no vertex format.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Unknown accessor types: {dimensions:?} of {data_type:?}")]
pub struct UnsupportedFormat {
    pub dimensions: Dimensions,
    pub data_type: DataType,
}

/// A failing status code together with its formatted message.
///
/// The message is rendered once in [`GraphicsApiFailure::new`] and owned by the
/// error, so formatting never touches state shared between errors or threads.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct GraphicsApiFailure {
    status: Status,
    message: String,
}

impl GraphicsApiFailure {
    pub fn new(status: Status) -> Self {
        let message = format!("Failure with HRESULT of {:08X}", status.bits());
        Self { status, message }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<Status> for GraphicsApiFailure {
    fn from(status: Status) -> Self {
        Self::new(status)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormat),

    #[error(transparent)]
    GraphicsApi(#[from] GraphicsApiFailure),
}
