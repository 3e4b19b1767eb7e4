//! Navigation state for the image file list and the current position.

use log::debug;

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Holds the sorted image names and the cursor into them.
///
/// The list is fixed at construction; only the cursor moves.
#[derive(Debug, Clone)]
pub struct NavigationState {
    image_files: Vec<String>,
    cursor: usize,
    jump_size: usize,
}

impl NavigationState {
    /// Creates a navigation state positioned on the first image.
    pub fn new(image_files: Vec<String>, jump_size: usize) -> Self {
        Self {
            image_files,
            cursor: 0,
            jump_size: jump_size.max(1),
        }
    }

    /// Moves the cursor by `distance` in `direction`, clamped to the list bounds.
    ///
    /// Returns the new index, or `None` when the cursor could not move.
    fn navigate_by(&mut self, direction: Direction, distance: usize) -> Option<usize> {
        if self.image_files.is_empty() {
            debug!("No images available for navigation");
            return None;
        }

        let last = self.image_files.len() - 1;
        let new_index = match direction {
            Direction::Next => self.cursor.saturating_add(distance).min(last),
            Direction::Previous => self.cursor.saturating_sub(distance),
        };

        if new_index == self.cursor {
            debug!("Already at the {:?} boundary ({})", direction, self.cursor);
            return None;
        }

        self.cursor = new_index;
        Some(new_index)
    }

    pub fn step_forward(&mut self) -> Option<usize> {
        self.navigate_by(Direction::Next, 1)
    }

    pub fn step_backward(&mut self) -> Option<usize> {
        self.navigate_by(Direction::Previous, 1)
    }

    pub fn jump_forward(&mut self) -> Option<usize> {
        self.navigate_by(Direction::Next, self.jump_size)
    }

    pub fn jump_backward(&mut self) -> Option<usize> {
        self.navigate_by(Direction::Previous, self.jump_size)
    }

    /// Returns the current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the file name under the cursor, if the list is non-empty.
    pub fn current_file(&self) -> Option<&str> {
        self.image_files.get(self.cursor).map(String::as_str)
    }

    /// Returns the file name at `index`.
    pub fn file_at(&self, index: usize) -> Option<&str> {
        self.image_files.get(index).map(String::as_str)
    }

    /// Formats `filename (position/total)` for the current image.
    pub fn status_title(&self) -> Option<String> {
        self.current_file()
            .map(|name| format!("{} ({}/{})", name, self.cursor + 1, self.len()))
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    #[cfg(test)]
    pub fn image_files(&self) -> &[String] {
        &self.image_files
    }
}
