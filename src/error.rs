// src/error.rs

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving species or reading the rate repository.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("could not find an element corresponding to the name {0:?}")]
    UnknownElement(String),

    #[error("could not find an isotope corresponding to the name {0:?}")]
    UnknownIsotope(String),

    #[error("could not find an element or isotope corresponding to the name {0:?}")]
    UnknownSpecies(String),

    #[error("invalid transition key {0:?}, expected \"upper -> lower\"")]
    InvalidTransition(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rate files must hold a JSON object keyed by charge state.
    #[error("top level of {0:?} is not a JSON object")]
    NotAnObject(PathBuf),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;

impl RepositoryError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json { path: path.into(), source }
    }
}
