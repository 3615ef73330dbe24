//! Error types for dialect operations

/// Errors that can occur when selecting or driving a dialect.
///
/// The transforms themselves are total: malformed input is passed through rather than rejected,
/// so the only failures are about picking a dialect that does not exist or cannot do the job.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranscodeError {
    /// Dialect not found in registry
    #[error("Dialect '{0}' not found")]
    DialectNotFound(String),
    /// Dialect does not support the requested direction
    #[error("Operation not supported: {0}")]
    NotSupported(String),
}
