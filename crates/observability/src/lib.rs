//! Tracing/logging setup shared by the binaries.

/// Tracing configuration (filters, formatters).
pub mod tracing;

pub use self::tracing::LogFormat;

/// Initialize process-wide logging (tracing subscriber, stdout).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    tracing::init(format);
}
