//! Chat transcript updates
//!
//! The assistant is scripted: a submit appends the user line, marks the
//! transcript as waiting, and schedules a canned reply behind a stubbed
//! delay. A backend error would surface as a bot message in this slot and
//! never reaches the panel controller.

use crate::commands::Cmd;
use crate::messages::ChatMsg;
use crate::model::AppModel;

/// Stubbed latency before the simulated reply lands
pub const REPLY_DELAY_MS: u64 = 800;

/// Compose the canned assistant reply for a prompt
pub fn scripted_reply(prompt: &str) -> String {
    format!("I looked into \"{}\" - here is what I found.", prompt.trim())
}

pub fn update_chat(model: &mut AppModel, msg: ChatMsg) -> Option<Cmd> {
    match msg {
        ChatMsg::InsertChar(ch) => {
            if model.chat.is_waiting {
                return None;
            }
            model.chat.input.push(ch);
            model.ui.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        ChatMsg::DeleteBackward => {
            if model.chat.input.pop().is_some() {
                model.ui.reset_cursor_blink();
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        ChatMsg::Submit => {
            let prompt = model.chat.input.trim().to_string();
            if prompt.is_empty() || model.chat.is_waiting {
                return None;
            }
            model.chat.push_user(prompt.clone());
            model.chat.input.clear();
            model.chat.is_waiting = true;
            Some(Cmd::SimulateReply { prompt })
        }

        ChatMsg::ReplyReady(text) => {
            model.chat.is_waiting = false;
            model.chat.push_bot(text);
            Some(Cmd::Redraw)
        }
    }
}
