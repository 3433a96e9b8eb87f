//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The runtime executes them on worker threads and feeds results back as
//! messages through a channel.

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the window
    Redraw,
    /// Schedule a simulated assistant reply for the given prompt
    ///
    /// Delivered back as `ChatMsg::ReplyReady` after a stubbed delay.
    SimulateReply { prompt: String },
    /// Schedule a simulated agent task run
    ///
    /// Delivered back as `AgentMsg::TaskCompleted` after a stubbed delay.
    RunAgentTask { task: String },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Simulated work redraws when its completion message lands,
            // but the submit itself changes visible state (waiting marker)
            Cmd::SimulateReply { .. } => true,
            Cmd::RunAgentTask { .. } => true,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}

impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
