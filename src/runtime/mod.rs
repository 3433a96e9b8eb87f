//! Runtime module - winit/platform integration
//!
//! This module contains platform-specific code for running the widget:
//! - `app` - ApplicationHandler, window management, command execution
//! - `input` - Keyboard event to message mapping

pub mod app;
pub mod input;

pub use app::App;
