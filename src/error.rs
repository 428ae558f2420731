//! Error types

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which of the two `---` markers could not be found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterPosition {
    Opening,
    Closing,
}

impl fmt::Display for DelimiterPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DelimiterPosition::Opening => f.write_str("opening"),
            DelimiterPosition::Closing => f.write_str("closing"),
        }
    }
}

/// Errors produced while turning a document into an HTML page
#[derive(Error, Debug)]
pub enum Error {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing {position} metadata delimiter `---`")]
    MissingDelimiter { position: DelimiterPosition },

    #[error("Invalid metadata block: {0}")]
    Metadata(#[from] serde_yaml::Error),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
