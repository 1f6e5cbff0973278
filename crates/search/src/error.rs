use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to extract text from {path:?}: {reason}")]
    Extract { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
