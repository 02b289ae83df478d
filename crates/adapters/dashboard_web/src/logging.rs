//! Browser console logging.
//!
//! `tracing` events reach the `log` facade through the `log` feature of
//! `tracing` and are printed by `console_log`.

/// Install the console logger. A second call is a no-op.
pub fn init() {
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        tracing::debug!(error = %err, "console logging already initialized");
    }
}
