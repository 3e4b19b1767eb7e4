//! Service for sorting images into label folders.
//!
//! Copies the current image into `<directory>/<label>/`, creating the folder
//! on demand. Existing copies are overwritten without asking.

use crate::error::{AppError, Result};
use crate::file_utils;
use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Folder an image can be sorted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortLabel {
    /// Numbered folders `1` through `5`.
    Rank(u8),
    Cool,
    Other,
}

impl SortLabel {
    /// All labels, in keyboard order.
    #[cfg(test)]
    pub const ALL: [SortLabel; 7] = [
        SortLabel::Rank(1),
        SortLabel::Rank(2),
        SortLabel::Rank(3),
        SortLabel::Rank(4),
        SortLabel::Rank(5),
        SortLabel::Cool,
        SortLabel::Other,
    ];

    /// Name of the subfolder this label copies into.
    pub fn folder_name(&self) -> String {
        match self {
            SortLabel::Rank(n) => n.to_string(),
            SortLabel::Cool => "cool".to_string(),
            SortLabel::Other => "other".to_string(),
        }
    }
}

impl fmt::Display for SortLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.folder_name())
    }
}

impl FromStr for SortLabel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cool" => Ok(SortLabel::Cool),
            "other" => Ok(SortLabel::Other),
            _ => match s.parse::<u8>() {
                Ok(n @ 1..=5) if s.len() == 1 => Ok(SortLabel::Rank(n)),
                _ => Err(format!("unknown sort label: {s}")),
            },
        }
    }
}

/// Copies `file_name` from `directory` into the folder for `label`.
///
/// Returns the path of the written copy.
pub fn copy_to_label(directory: &Path, file_name: &str, label: SortLabel) -> Result<PathBuf> {
    let folder = directory.join(label.folder_name());
    let copy_error = |source| AppError::Copy {
        file: file_name.to_string(),
        folder: folder.clone(),
        source,
    };

    fs::create_dir_all(&folder).map_err(copy_error)?;

    let src = directory.join(file_name);
    let dst = folder.join(file_name);
    let bytes = file_utils::copy_preserving_times(&src, &dst).map_err(copy_error)?;

    info!("Copied {} ({} bytes) -> {}", file_name, bytes, folder.display());
    Ok(dst)
}
