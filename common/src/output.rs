//! Logging macros shared by every crate in the workspace.
//!
//! The CLI installs a formatter that renders levels as `[+]`/`[*]`/`[-]`
//! symbols, so callers just pick the macro matching the tone of the message.

/// Status message, rendered as `[+]`.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

/// Non-fatal problem, rendered as `[*]`.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        tracing::warn!($($arg)*)
    };
}

/// Fatal problem, rendered as `[-]`.
#[macro_export]
macro_rules! fail {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}
