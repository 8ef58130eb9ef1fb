use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a simulation's inputs.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Malformed batch: {reason}")]
    MalformedBatch { reason: String },

    #[error("Cannot read batch {}: {source}", path.display())]
    BatchUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot read draw sequence {}: {source}", path.display())]
    DrawSourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed draw sequence at line {line}: {value:?}")]
    MalformedDrawSequence { line: usize, value: String },

    #[error("Draw index {index} is beyond the sequence length {len}")]
    DrawSourceExhausted { index: usize, len: usize },
}

impl Error {
    pub fn malformed_batch(reason: impl Into<String>) -> Error {
        Error::MalformedBatch {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
