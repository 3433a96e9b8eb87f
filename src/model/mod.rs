//! Application model - the complete state of the widget
//!
//! This module contains all the state types following the Elm Architecture
//! pattern. The panel controller owns position and expansion; chat and agent
//! are collaborator states rendered inside the slots the panel allocates.

pub mod agent;
pub mod chat;
pub mod panel;
pub mod ui;

pub use agent::{AgentState, AgentStatus};
pub use chat::{ChatMessage, ChatState, Sender};
pub use panel::{
    DragOutcome, DragState, Expansion, PanelGeometry, PanelState, Position, ViewportBounds,
};
pub use ui::{FocusTarget, UiState};

use crate::config::WidgetConfig;
use crate::theme::{load_theme, Theme};

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// Floating panel controller state (position, drag session, expansion)
    pub panel: PanelState,
    /// Chat transcript and input
    pub chat: ChatState,
    /// Agent task form
    pub agent: AgentState,
    /// Input focus and cursor blink
    pub ui: UiState,
    /// Theme for colors
    pub theme: Theme,
    /// Persisted widget configuration
    pub config: WidgetConfig,
    /// Window client-area dimensions
    pub window_size: (u32, u32),
}

impl AppModel {
    /// Create a new application model with the given window size
    ///
    /// Loads configuration and theme from disk, then docks the panel to the
    /// bottom-right of the initial viewport.
    pub fn new(window_width: u32, window_height: u32) -> Self {
        WidgetConfig::ensure_config_dirs();
        let config = WidgetConfig::load();
        let theme = load_theme(&config.theme);

        let viewport = ViewportBounds::new(window_width as f32, window_height as f32);
        let panel = PanelState::new(config.panel, viewport);

        Self {
            panel,
            chat: ChatState::new(),
            agent: AgentState::new(),
            ui: UiState::new(),
            theme,
            config,
            window_size: (window_width, window_height),
        }
    }

    /// Current viewport bounds, re-derived from the stored window size
    ///
    /// Callers read this at the moment of use (drag end, expansion toggle)
    /// rather than caching the result.
    pub fn viewport(&self) -> ViewportBounds {
        ViewportBounds::new(self.window_size.0 as f32, self.window_size.1 as f32)
    }

    /// Record a window resize
    ///
    /// The panel position is deliberately left alone; the next drag release
    /// or expansion toggle reads the new bounds.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }
}
