//! Event handlers for UI callbacks.
//!
//! Every key press is handled synchronously on the Slint event loop thread:
//! the session decodes, evicts and copies before the next event is processed.

use crate::error::Result;
use crate::session::BrowserSession;
use crate::ui::image_display::SlintDisplay;
use crate::ui::keymap::command_for_key;
use crate::ui::state_helpers::set_status;
use log::{error, info};
use slint::ComponentHandle;
use std::cell::RefCell;
use std::rc::Rc;

/// Status bar text produced by a command, and whether it reports a failure.
#[derive(Debug, PartialEq, Eq)]
struct StatusLine {
    text: String,
    is_error: bool,
}

/// Maps a command outcome to the status bar line that replaces the current one.
///
/// Navigation (`Ok(None)`) leaves the status bar untouched.
fn status_line(outcome: Result<Option<String>>) -> Option<StatusLine> {
    match outcome {
        Ok(Some(message)) => Some(StatusLine {
            text: message,
            is_error: false,
        }),
        Ok(None) => None,
        Err(e) => Some(StatusLine {
            text: format!("Copy failed: {}", e),
            is_error: true,
        }),
    }
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, session: Rc<RefCell<BrowserSession<SlintDisplay>>>) {
    ui.global::<crate::Logic>().on_key_pressed({
        let ui_handle = ui.as_weak();
        move |text| {
            let Some(command) = command_for_key(&text) else {
                return false;
            };

            let outcome = session.borrow_mut().apply(command);
            let Some(line) = status_line(outcome) else {
                return true;
            };

            if line.is_error {
                error!("{}", line.text);
            } else {
                println!("{}", line.text);
                info!("{}", line.text);
            }
            if let Some(ui) = ui_handle.upgrade() {
                set_status(&ui, &line.text, line.is_error);
            }
            true
        }
    });
}
