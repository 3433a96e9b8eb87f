//! Chat transcript state for the assistant sub-panel
//!
//! This is display-collaborator state: a scripted transcript with a single
//! input line. It never touches the panel's position or expansion state.

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

/// State for the chat transcript and its input field
#[derive(Debug, Clone, PartialEq)]
pub struct ChatState {
    /// Transcript in arrival order
    pub messages: Vec<ChatMessage>,
    /// Current input line
    pub input: String,
    /// Whether a simulated reply is pending; submits are ignored while set
    pub is_waiting: bool,
}

impl ChatState {
    /// Create a transcript seeded with the assistant's greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                sender: Sender::Bot,
                text: "Hi! I'm your assistant. How can I help?".to_string(),
            }],
            input: String::new(),
            is_waiting: false,
        }
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.into(),
        });
    }

    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: text.into(),
        });
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
