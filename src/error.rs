//! Error types for the graph poet

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building a poet
#[derive(Error, Debug)]
pub enum PoetError {
    /// The corpus file could not be opened or read
    #[error("failed to read corpus {path:?}")]
    CorpusRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PoetError {
    /// Path of the corpus involved in the failure
    pub fn path(&self) -> &std::path::Path {
        match self {
            PoetError::CorpusRead { path, .. } => path,
        }
    }
}
