//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod agent;
mod app;
mod chat;
mod panel;
mod ui;

pub use agent::{update_agent, AGENT_TASK_DELAY_MS};
pub use app::update_app;
pub use chat::{scripted_reply, update_chat, REPLY_DELAY_MS};
pub use panel::update_panel;
pub use ui::update_ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Panel(m) => update_panel(model, m),
        Msg::Chat(m) => update_chat(model, m),
        Msg::Agent(m) => update_agent(model, m),
        Msg::Ui(m) => update_ui(model, m),
        Msg::App(m) => update_app(model, m),
    }
}
