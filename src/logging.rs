//! Logger bootstrap.
//!
//! The helpers only talk to the `log` facade. Binaries that embed the viewer
//! call [`init`] once at startup; filtering follows `RUST_LOG`.

/// Install `env_logger` as the global logger.
///
/// Returns `false` when another logger was installed first. That is not an
/// error: tests and host applications frequently bring their own.
pub fn init() -> bool {
    if let Err(e) = env_logger::try_init() {
        log::debug!("Could not initialize logger: {}", e);
        return false;
    }
    true
}
