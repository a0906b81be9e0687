use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all modsel operations.
#[derive(Debug, Error, Diagnostic)]
pub enum ModselError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed registry snapshot.
    #[error("Snapshot error: {message}")]
    #[diagnostic(help("Each [[module]] entry needs a name and a version"))]
    Snapshot { message: String },

    /// Invalid or malformed configuration file.
    #[error("Config error: {message}")]
    #[diagnostic(help("Check the [resolver] section of your config for typos"))]
    Config { message: String },

    /// The dependency graph could not be introspected (adjacency, SCCs).
    #[error("Graph error: {message}")]
    Graph { message: String },

    /// Resolution results could not be rendered or written.
    #[error("Output error: {message}")]
    Output { message: String },
}

/// Result type of the operation and CLI layers.
pub type ModselResult<T> = miette::Result<T>;
