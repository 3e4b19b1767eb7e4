//! Service layer for file operations.
//!
//! Keeps filesystem side effects out of the session and UI handlers.

pub mod copy_service;

pub use copy_service::{SortLabel, copy_to_label};
