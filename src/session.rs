//! The image browser session.
//!
//! Owns the sorted image list, the cursor, the window cache and the display
//! target. Every operation runs synchronously on the UI thread: a cursor
//! change re-syncs the cache window and renders before returning.

use crate::config::{BrowserSettings, IDLE_TITLE};
use crate::error::Result;
use crate::file_utils;
use crate::image_cache::{CachedImage, DecodeCache};
use crate::image_loader;
use crate::services::{self, SortLabel};
use crate::state::NavigationState;
use log::info;
use std::path::{Path, PathBuf};

/// Something that can show one image and a title.
pub trait ImageDisplay {
    /// Shows `image` under `title`. `None` clears the display.
    fn render(&self, image: Option<&CachedImage>, title: &str);
}

/// A user action, decoupled from the key that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StepBackward,
    StepForward,
    JumpForward,
    JumpBackward,
    CopyTo(SortLabel),
}

pub struct BrowserSession<D: ImageDisplay> {
    directory: PathBuf,
    navigation: NavigationState,
    cache: DecodeCache<CachedImage>,
    display: D,
}

impl<D: ImageDisplay> BrowserSession<D> {
    /// Scans `directory`, decodes the initial window and renders the first image.
    pub fn open(directory: &Path, settings: BrowserSettings, display: D) -> Result<Self> {
        let image_files = file_utils::scan_directory(directory)?;
        info!(
            "Found {} PNG images in {}",
            image_files.len(),
            directory.display()
        );

        let mut session = Self {
            directory: directory.to_path_buf(),
            navigation: NavigationState::new(image_files, settings.jump_size),
            cache: DecodeCache::new(settings.preload_radius),
            display,
        };
        session.sync_window();
        session.render_current();
        Ok(session)
    }

    pub fn step_backward(&mut self) -> bool {
        let moved = self.navigation.step_backward();
        self.after_move(moved)
    }

    pub fn step_forward(&mut self) -> bool {
        let moved = self.navigation.step_forward();
        self.after_move(moved)
    }

    pub fn jump_forward(&mut self) -> bool {
        let moved = self.navigation.jump_forward();
        self.after_move(moved)
    }

    pub fn jump_backward(&mut self) -> bool {
        let moved = self.navigation.jump_backward();
        self.after_move(moved)
    }

    fn after_move(&mut self, moved: Option<usize>) -> bool {
        if moved.is_none() {
            return false;
        }
        self.sync_window();
        self.render_current();
        true
    }

    /// Copies the current image into the folder for `label`.
    ///
    /// Returns a confirmation message, or `None` when there is no current image.
    pub fn copy_to_folder(&self, label: SortLabel) -> Result<Option<String>> {
        let Some(file_name) = self.navigation.current_file() else {
            return Ok(None);
        };

        let dst = services::copy_to_label(&self.directory, file_name, label)?;
        let folder = dst.parent().unwrap_or(self.directory.as_path());
        Ok(Some(format!("Copied {} -> {}", file_name, folder.display())))
    }

    /// Runs one command. Navigation yields `None`; a copy yields its confirmation.
    pub fn apply(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::StepBackward => self.step_backward(),
            Command::StepForward => self.step_forward(),
            Command::JumpForward => self.jump_forward(),
            Command::JumpBackward => self.jump_backward(),
            Command::CopyTo(label) => return self.copy_to_folder(label),
        };
        Ok(None)
    }

    fn render_current(&self) {
        let cursor = self.navigation.cursor();
        match (self.cache.get(cursor), self.navigation.status_title()) {
            (Some(image), Some(title)) => self.display.render(Some(image), &title),
            _ => self.display.render(None, IDLE_TITLE),
        }
    }

    fn sync_window(&mut self) {
        let directory = &self.directory;
        let navigation = &self.navigation;
        self.cache
            .sync(navigation.cursor(), navigation.len(), |index| {
                match navigation.file_at(index) {
                    Some(name) => image_loader::decode_for_display(&directory.join(name)),
                    None => CachedImage::Failed(format!("no image at position {index}")),
                }
            });
    }
}

#[cfg(test)]
impl<D: ImageDisplay> BrowserSession<D> {
    pub fn cursor(&self) -> usize {
        self.navigation.cursor()
    }

    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    pub fn cache(&self) -> &DecodeCache<CachedImage> {
        &self.cache
    }

    pub fn display(&self) -> &D {
        &self.display
    }
}
