use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory '{}' does not exist", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("Invalid chart file {}: {reason}", path.display())]
    InvalidChart { path: PathBuf, reason: String },

    #[error("Server error: {0}")]
    Server(String),
}

pub type Result<T> = std::result::Result<T, GalleryError>;
