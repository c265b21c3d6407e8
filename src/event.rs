//! Log callback system.
//!
//! The library does not pick a logging framework for its host. Hosts that want
//! diagnostics register a callback; without one, log calls are no-ops.

use std::sync::{Arc, Mutex, OnceLock};

/// Log level for diagnostic callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

type LogCallback = Arc<dyn Fn(LogLevel, &str) + Send + Sync + 'static>;

fn log_callback() -> &'static Mutex<Option<LogCallback>> {
    static CALLBACK: OnceLock<Mutex<Option<LogCallback>>> = OnceLock::new();
    CALLBACK.get_or_init(|| Mutex::new(None))
}

/// Set the global log callback, replacing any previous one.
///
/// The callback runs outside the registry lock, so it may itself log or
/// replace the callback.
pub fn set_log_callback<F>(callback: F)
where
    F: Fn(LogLevel, &str) + Send + Sync + 'static,
{
    // A poisoned lock only means an earlier callback panicked; replacing it is fine.
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *guard = Some(Arc::new(callback));
}

/// Remove the global log callback.
pub fn clear_log_callback() {
    let mut guard = log_callback()
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    *guard = None;
}

/// Emit a log event.
pub fn emit_log(level: LogLevel, message: &str) {
    let callback = match log_callback().lock() {
        Ok(guard) => guard.clone(),
        Err(_) => return,
    };
    if let Some(callback) = callback {
        callback(level, message);
    }
}
