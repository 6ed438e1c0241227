//! Shared tracing/logging setup for the merx service binaries.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init(service: &str) {
    tracing::init(service);
}

/// Tracing configuration (filters, layers).
pub mod tracing;
