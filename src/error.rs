//! Unified error types for the PNG sorter.

use std::path::PathBuf;
use thiserror::Error;

/// Application-specific errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// The startup path does not name an existing directory
    #[error("{} is not a valid directory", .0.display())]
    InvalidDirectory(PathBuf),
    /// Error scanning directory for image files
    #[error("Directory scan error: {0}")]
    DirectoryScan(#[from] std::io::Error),
    /// Error loading or decoding an image file
    #[error("Image load error: {0}")]
    ImageLoad(#[from] image::ImageError),
    /// Error copying an image into a label folder
    #[error("Failed to copy {file} into {}: {source}", .folder.display())]
    Copy {
        file: String,
        folder: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
