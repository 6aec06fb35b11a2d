use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the extractor and the dataset/export layers.
///
/// The phrase engine itself only ever fails on a zero result budget; every
/// other variant comes from reading or writing files.
#[derive(Debug, Error)]
pub enum PhraseError {
    #[error("top_n must be at least 1, got {0}")]
    InvalidTopN(usize),

    #[error("path does not exist: {}", .0.display())]
    MissingPath(PathBuf),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl PhraseError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PhraseError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PhraseError>;
