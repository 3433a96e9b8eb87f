//! Companion - a floating desktop assistant widget
//!
//! This crate provides the core types and logic for a single floating,
//! draggable, dockable, and expandable assistant panel, implementing the
//! Elm Architecture pattern. Platform integration (winit) and rendering
//! (softbuffer) live in the binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod layout;
pub mod messages;
pub mod model;
pub mod theme;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::WidgetConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::Theme;
