//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. Pointer coordinates
//! are viewport pixels; the runtime translates winit events into these
//! platform-free messages.

/// Pointer button, already abstracted from the windowing backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Panel controller messages (drag session, docking, expansion)
#[derive(Debug, Clone)]
pub enum PanelMsg {
    /// Pointer button went down somewhere in the window
    PointerPressed {
        x: f32,
        y: f32,
        button: PointerButton,
    },
    /// Pointer moved; only meaningful while a drag session is live
    PointerMoved { x: f32, y: f32 },
    /// Primary pointer button released
    PointerReleased { x: f32, y: f32 },
}

/// Chat transcript messages
#[derive(Debug, Clone)]
pub enum ChatMsg {
    /// Insert a character into the chat input
    InsertChar(char),
    /// Delete the character before the input cursor (Backspace)
    DeleteBackward,
    /// Submit the current input line (Enter)
    Submit,
    /// Simulated assistant reply arrived (async result)
    ReplyReady(String),
}

/// Agent task form messages
#[derive(Debug, Clone)]
pub enum AgentMsg {
    /// Insert a character into the task input
    InsertChar(char),
    /// Delete the character before the input cursor (Backspace)
    DeleteBackward,
    /// Submit the current task (Enter or button click)
    Submit,
    /// Simulated task run finished (async result)
    TaskCompleted { task: String },
}

/// UI messages (cursor blink)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Toggle text cursor blink state
    BlinkCursor,
}

/// Application-level messages (window events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Panel controller messages (drag, dock, expand)
    Panel(PanelMsg),
    /// Chat transcript messages
    Chat(ChatMsg),
    /// Agent task form messages
    Agent(AgentMsg),
    /// UI messages (animation)
    Ui(UiMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a pointer-pressed message
    pub fn pointer_pressed(x: f32, y: f32, button: PointerButton) -> Self {
        Msg::Panel(PanelMsg::PointerPressed { x, y, button })
    }

    /// Create a pointer-moved message
    pub fn pointer_moved(x: f32, y: f32) -> Self {
        Msg::Panel(PanelMsg::PointerMoved { x, y })
    }

    /// Create a pointer-released message
    pub fn pointer_released(x: f32, y: f32) -> Self {
        Msg::Panel(PanelMsg::PointerReleased { x, y })
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}
