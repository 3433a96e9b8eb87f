//! Agent task form updates
//!
//! Submitting a task simulates a two-second run; completion records a result
//! line. Re-submitting while a run is live is a no-op.

use crate::commands::Cmd;
use crate::messages::AgentMsg;
use crate::model::{AgentStatus, AppModel};

/// Stubbed duration of the simulated task run
pub const AGENT_TASK_DELAY_MS: u64 = 2000;

pub fn update_agent(model: &mut AppModel, msg: AgentMsg) -> Option<Cmd> {
    match msg {
        AgentMsg::InsertChar(ch) => {
            if model.agent.is_running() {
                return None;
            }
            model.agent.task.push(ch);
            model.ui.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        AgentMsg::DeleteBackward => {
            if model.agent.is_running() {
                return None;
            }
            if model.agent.task.pop().is_some() {
                model.ui.reset_cursor_blink();
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        AgentMsg::Submit => {
            let task = model.agent.task.trim().to_string();
            if task.is_empty() || model.agent.is_running() {
                return None;
            }
            model.agent.status = AgentStatus::Running;
            model.agent.result = None;
            tracing::debug!(task = %task, "agent task started");
            Some(Cmd::RunAgentTask { task })
        }

        AgentMsg::TaskCompleted { task } => {
            model.agent.status = AgentStatus::Done;
            model.agent.result = Some(format!("Task completed: \"{}\"", task));
            Some(Cmd::Redraw)
        }
    }
}
