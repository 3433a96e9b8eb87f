//! Agent task form state for the expandable side panel
//!
//! A stubbed task-submission form: submitting schedules a simulated run and
//! completion records a result line. Like the chat transcript, this is
//! collaborator state with no influence on panel geometry.

/// Lifecycle of the simulated task run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentStatus {
    #[default]
    Idle,
    Running,
    Done,
}

/// State for the agent task panel
#[derive(Debug, Clone, PartialEq)]
pub struct AgentState {
    /// Current task input line
    pub task: String,
    pub status: AgentStatus,
    /// Result of the last completed run
    pub result: Option<String>,
}

impl AgentState {
    pub fn new() -> Self {
        Self {
            task: "example.com company news".to_string(),
            status: AgentStatus::Idle,
            result: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == AgentStatus::Running
    }
}

impl Default for AgentState {
    fn default() -> Self {
        Self::new()
    }
}
