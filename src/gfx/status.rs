//! HRESULT-style status codes.
//!
//! A status is a 32-bit signed code; the sign bit marks failure. Codes coming
//! from other error sources (I/O, the shader compiler) are mapped onto the same
//! space so every graphics failure is reported the same way.

use std::{fmt, io};

use crate::error::GraphicsApiFailure;

#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Status(pub i32);

impl Status {
    pub const OK: Status = Status(0);
    pub const FALSE: Status = Status(1);
    pub const E_FAIL: Status = Status::from_bits(0x8000_4005);
    pub const E_INVALIDARG: Status = Status::from_bits(0x8007_0057);
    pub const E_OUTOFMEMORY: Status = Status::from_bits(0x8007_000E);
    pub const E_ACCESSDENIED: Status = Status::from_bits(0x8007_0005);
    /// `ERROR_FILE_NOT_FOUND` wrapped as an HRESULT.
    pub const ERROR_FILE_NOT_FOUND: Status = Status::from_bits(0x8007_0002);

    /// Build a status from its unsigned bit pattern, e.g. `0x80004005`.
    pub const fn from_bits(bits: u32) -> Self {
        Status(bits as i32)
    }

    pub const fn bits(self) -> u32 {
        self.0 as u32
    }

    pub const fn is_failure(self) -> bool {
        self.0 < 0
    }

    pub const fn is_success(self) -> bool {
        !self.is_failure()
    }

    /// `Err` with the formatted failure when the code marks failure.
    pub fn check(self) -> Result<(), GraphicsApiFailure> {
        if self.is_failure() {
            return Err(GraphicsApiFailure::new(self));
        }
        Ok(())
    }

    pub fn from_io_error(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Status::ERROR_FILE_NOT_FOUND,
            io::ErrorKind::PermissionDenied => Status::E_ACCESSDENIED,
            io::ErrorKind::OutOfMemory => Status::E_OUTOFMEMORY,
            _ => Status::E_FAIL,
        }
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status(0x{:08X})", self.bits())
    }
}

impl From<i32> for Status {
    fn from(code: i32) -> Self {
        Status(code)
    }
}

/// Translate a status code returned by the graphics API into a `Result`.
pub fn throw_if_failed<S: Into<Status>>(status: S) -> Result<(), GraphicsApiFailure> {
    status.into().check()
}
