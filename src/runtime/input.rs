//! Keyboard event to message mapping
//!
//! Typed input routes to whichever text field currently holds focus; the
//! panel itself has no keyboard interactions.

use winit::keyboard::{Key, NamedKey};

use companion::commands::Cmd;
use companion::messages::{AgentMsg, ChatMsg, Msg};
use companion::model::{AppModel, FocusTarget};
use companion::update::update;

/// Handle a pressed key, routing it to the focused input field
pub fn handle_key(model: &mut AppModel, logical_key: &Key) -> Option<Cmd> {
    match logical_key {
        Key::Named(NamedKey::Enter) => dispatch_submit(model),
        Key::Named(NamedKey::Backspace) => dispatch_delete(model),
        Key::Named(NamedKey::Space) => dispatch_char(model, ' '),
        Key::Character(s) => {
            let mut result = None;
            for ch in s.chars() {
                result = dispatch_char(model, ch).or(result);
            }
            result
        }
        _ => None,
    }
}

fn dispatch_char(model: &mut AppModel, ch: char) -> Option<Cmd> {
    if ch.is_control() {
        return None;
    }
    match model.ui.focus {
        FocusTarget::Chat => update(model, Msg::Chat(ChatMsg::InsertChar(ch))),
        FocusTarget::Agent => update(model, Msg::Agent(AgentMsg::InsertChar(ch))),
    }
}

fn dispatch_delete(model: &mut AppModel) -> Option<Cmd> {
    match model.ui.focus {
        FocusTarget::Chat => update(model, Msg::Chat(ChatMsg::DeleteBackward)),
        FocusTarget::Agent => update(model, Msg::Agent(AgentMsg::DeleteBackward)),
    }
}

fn dispatch_submit(model: &mut AppModel) -> Option<Cmd> {
    match model.ui.focus {
        FocusTarget::Chat => update(model, Msg::Chat(ChatMsg::Submit)),
        FocusTarget::Agent => update(model, Msg::Agent(AgentMsg::Submit)),
    }
}
