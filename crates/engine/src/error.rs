use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to read file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file '{}' not found", path.display())]
    MissingInput { path: PathBuf },

    #[error("{}:{line}: {source}", path.display())]
    InvalidSample {
        path: PathBuf,
        line: usize,
        #[source]
        source: SampleError,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// A two-token line whose tokens do not parse as `<integer> <float>`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    #[error("invalid index '{token}': {source}")]
    InvalidIndex {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid value '{token}': {source}")]
    InvalidValue {
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
