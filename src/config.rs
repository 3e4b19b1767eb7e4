//! Application configuration constants and runtime settings.

/// Name suffix (compared case-insensitively) of the images the browser lists.
pub const PNG_SUFFIX: &str = ".png";

/// Number of images kept decoded on each side of the current one.
pub const DEFAULT_PRELOAD_RADIUS: usize = 5;

/// Number of images skipped by a single jump.
pub const DEFAULT_JUMP_SIZE: usize = 100;

/// Window title used while no image is displayed.
pub const IDLE_TITLE: &str = "PNG Sorter";

/// Hint shown in the status bar until the first copy.
pub const KEY_HINTS: &str = "←/→ step · Enter/Space ±jump · 1-5/c/o copy";

/// Tunable browsing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserSettings {
    pub preload_radius: usize,
    pub jump_size: usize,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            preload_radius: DEFAULT_PRELOAD_RADIUS,
            jump_size: DEFAULT_JUMP_SIZE,
        }
    }
}
