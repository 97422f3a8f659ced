//! Application-level errors (wraps parse and I/O failures)

use thiserror::Error;

use crate::application::edges::EdgeParseError;

/// Application errors add source context around reading and parsing inputs.
///
/// A rejected tree is not an error: it is reported through the verdict.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: EdgeParseError,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
