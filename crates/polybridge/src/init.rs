//! Logging setup for host applications.
//!
//! The converters log through the `log` facade only. Hosts that have no
//! logger of their own can call [`init_logging`] once at startup.

/// Installs an `env_logger` backend configured from `RUST_LOG`.
///
/// Returns `false` if a logger was already installed, which is not an error;
/// conversions keep logging to whichever backend won.
///
/// # Example
///
/// ```no_run
/// polybridge::init_logging();
/// log::info!("ready to convert");
/// ```
pub fn init_logging() -> bool {
    let installed = env_logger::try_init().is_ok();
    if installed {
        log::debug!("polybridge logging initialized");
    }
    installed
}
