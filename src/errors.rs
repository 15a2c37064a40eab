use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all exopack operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ExopackError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or unparseable module manifest.
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check the module manifest for syntax errors"))]
    Manifest { message: String },

    /// Malformed artifact coordinate (missing or empty field).
    #[error("Coordinate error: {message}")]
    #[diagnostic(help("Coordinates are written as group:artifact:packaging:version"))]
    Coordinate { message: String },

    /// Inconsistent dependency graph (dangling reference, unexpected cycle).
    #[error("Graph error: {message}")]
    Graph { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ExopackResult<T> = miette::Result<T>;
