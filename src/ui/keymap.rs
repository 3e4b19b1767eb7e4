//! Key bindings.
//!
//! Maps the text of a Slint key event to a session command.

use crate::services::SortLabel;
use crate::session::Command;
use slint::SharedString;
use slint::platform::Key;

fn key_text(key: Key) -> SharedString {
    key.into()
}

/// Returns the command bound to `text`, or `None` for unbound keys.
pub fn command_for_key(text: &str) -> Option<Command> {
    let command = match text {
        " " => Command::JumpBackward,
        "c" => Command::CopyTo(SortLabel::Cool),
        "o" => Command::CopyTo(SortLabel::Other),
        "1" | "2" | "3" | "4" | "5" => Command::CopyTo(text.parse().ok()?),
        t if t == key_text(Key::LeftArrow).as_str() => Command::StepBackward,
        t if t == key_text(Key::RightArrow).as_str() => Command::StepForward,
        t if t == key_text(Key::Return).as_str() => Command::JumpForward,
        _ => return None,
    };
    Some(command)
}
