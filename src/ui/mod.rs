//! UI module for handling user interactions and UI updates.
//!
//! Threading model: everything runs on the Slint event loop thread. There
//! are no background workers; decoding and copying complete inside the key
//! handler that triggered them.

pub mod handlers;
pub mod image_display;
pub mod keymap;
mod state_helpers;

pub use handlers::setup_handlers;
pub use image_display::SlintDisplay;
