//! State management for the image browser.

pub mod navigation;

pub use navigation::NavigationState;
