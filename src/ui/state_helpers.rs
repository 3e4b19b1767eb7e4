//! Helper functions to set grouped ViewState properties.

use slint::ComponentHandle;

/// Sets the displayed image, or clears it when `image` is `None`.
///
/// Groups: dynamic-image, image-loaded, error-message
pub fn set_image(ui: &crate::AppWindow, image: Option<slint::Image>, error_message: &str) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_image_loaded(image.is_some());
    view_state.set_dynamic_image(image.unwrap_or_default());
    view_state.set_error_message(error_message.into());
}

/// Sets the window title and status bar label.
pub fn set_title(ui: &crate::AppWindow, title: &str) {
    ui.global::<crate::ViewState>().set_title(title.into());
}

/// Sets the right-hand status bar text, highlighted when it reports a failure.
///
/// Groups: status-text, status-is-error
pub fn set_status(ui: &crate::AppWindow, status: &str, is_error: bool) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_status_text(status.into());
    view_state.set_status_is_error(is_error);
}
