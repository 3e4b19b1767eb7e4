//! Slint-backed display target for the browser session.

use crate::image_cache::CachedImage;
use crate::session::ImageDisplay;
use crate::ui::state_helpers;
use log::debug;

/// Renders session output into the `AppWindow` ViewState.
pub struct SlintDisplay {
    ui: slint::Weak<crate::AppWindow>,
}

impl SlintDisplay {
    pub fn new(ui: slint::Weak<crate::AppWindow>) -> Self {
        Self { ui }
    }
}

impl ImageDisplay for SlintDisplay {
    fn render(&self, image: Option<&CachedImage>, title: &str) {
        let Some(ui) = self.ui.upgrade() else {
            return;
        };

        match image {
            Some(CachedImage::Decoded {
                image,
                width,
                height,
            }) => {
                debug!("Rendering {} ({}x{})", title, width, height);
                state_helpers::set_image(&ui, Some(image.clone()), "");
            }
            // Placeholder: no pixels, just the reason.
            Some(CachedImage::Failed(reason)) => {
                let message = format!("Cannot display {}: {}", title, reason);
                state_helpers::set_image(&ui, None, &message);
            }
            None => state_helpers::set_image(&ui, None, ""),
        }
        state_helpers::set_title(&ui, title);
    }
}
