//! Error types for module generation

use thiserror::Error;

/// Errors that can occur while generating a module
#[derive(Error, Debug)]
pub enum GenerateError {
    /// A language selector other than `c` or `c++`
    #[error("unknown language '{0}' (expected 'c' or 'c++')")]
    UnknownLanguage(String),

    /// The rendered module could not be written out
    #[error("failed to write module: {0}")]
    Io(#[from] std::io::Error),
}
