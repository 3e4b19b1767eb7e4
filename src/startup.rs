//! Command line parsing and startup directory validation.

use crate::config::{BrowserSettings, DEFAULT_JUMP_SIZE, DEFAULT_PRELOAD_RADIUS};
use crate::error::{AppError, Result};
use clap::Parser;
use std::path::PathBuf;

/// Browse the PNG files in a directory and sort them into folders.
///
/// Left/Right step through images, Enter/Space jump forward/back, 1-5, c and
/// o copy the current image into the folders 1-5, cool and other.
#[derive(Debug, Parser)]
#[command(name = "png-sorter", version, about, long_about = None)]
pub struct Args {
    /// Directory containing the PNG files (defaults to the current directory)
    pub directory: Option<PathBuf>,

    /// Images kept decoded on each side of the current one
    #[arg(long, default_value_t = DEFAULT_PRELOAD_RADIUS)]
    pub preload_radius: usize,

    /// Images skipped by Enter and Space
    #[arg(long, default_value_t = DEFAULT_JUMP_SIZE, value_parser = parse_jump_size)]
    pub jump_size: usize,
}

impl Args {
    pub fn settings(&self) -> BrowserSettings {
        BrowserSettings {
            preload_radius: self.preload_radius,
            jump_size: self.jump_size,
        }
    }
}

fn parse_jump_size(value: &str) -> std::result::Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("jump size must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

/// Returns the directory to browse: `requested`, or the working directory.
///
/// Fails with `AppError::InvalidDirectory` unless the path names an existing directory.
pub fn resolve_directory(requested: Option<PathBuf>) -> Result<PathBuf> {
    let directory = match requested {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    if !directory.is_dir() {
        return Err(AppError::InvalidDirectory(directory));
    }
    Ok(directory)
}
