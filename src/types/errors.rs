use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    /// The disk image could not be attached, or produced no usable mount point.
    #[error("Mount failed for {archive}: {reason}")]
    Mount { archive: PathBuf, reason: String },
    #[error("Archive error: {0}")]
    Archive(String),
    /// A localization project document is missing a required element.
    #[error("Malformed document {document}: {reason}")]
    Document { document: PathBuf, reason: String },
    #[error("Invalid language identifier: {0:?}")]
    InvalidLanguage(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub fn document(document: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Document {
            document: document.into(),
            reason: reason.into(),
        }
    }

    pub fn mount(archive: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::Mount {
            archive: archive.into(),
            reason: reason.into(),
        }
    }
}

pub type ConvertResult<T> = Result<T, ConvertError>;
