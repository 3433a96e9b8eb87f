//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use companion::commands::Cmd;
use companion::config::WidgetConfig;
use companion::layout;
use companion::messages::{Msg, PointerButton};
use companion::model::{AppModel, PanelGeometry, PanelState, Position, ViewportBounds};
use companion::model::{AgentState, ChatState, UiState};
use companion::theme::Theme;
use companion::update::update;

/// Create a test model with the default geometry, docked into the given
/// viewport the way a fresh launch would be. Built in memory, never touching
/// the on-disk config.
pub fn test_model(width: u32, height: u32) -> AppModel {
    let panel = PanelState::new(
        PanelGeometry::default(),
        ViewportBounds::new(width as f32, height as f32),
    );
    AppModel {
        panel,
        chat: ChatState::new(),
        agent: AgentState::new(),
        ui: UiState::new(),
        theme: Theme::default(),
        config: WidgetConfig::default(),
        window_size: (width, height),
    }
}

/// Create a test model with the panel placed at an explicit position
pub fn test_model_with_panel_at(x: f32, y: f32, width: u32, height: u32) -> AppModel {
    let mut model = test_model(width, height);
    model.panel.position = Position::new(x, y);
    model
}

/// Center of the grab region at the panel's current position
pub fn grab_point(model: &AppModel) -> (f32, f32) {
    let slot = layout::model_slot(&model.panel);
    (slot.x + slot.width / 2.0, slot.y + slot.height / 2.0)
}

/// Press the primary button at the given position
pub fn press(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    update(model, Msg::pointer_pressed(x, y, PointerButton::Primary))
}

/// Press a specific button at the given position
pub fn press_button(model: &mut AppModel, x: f32, y: f32, button: PointerButton) -> Option<Cmd> {
    update(model, Msg::pointer_pressed(x, y, button))
}

/// Move the pointer to the given position
pub fn move_to(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    update(model, Msg::pointer_moved(x, y))
}

/// Release the primary button at the given position
pub fn release(model: &mut AppModel, x: f32, y: f32) -> Option<Cmd> {
    update(model, Msg::pointer_released(x, y))
}

/// Full gesture: grab the panel, drag it so its top-left lands at (x, y),
/// and release
pub fn drag_panel_to(model: &mut AppModel, x: f32, y: f32) {
    let (gx, gy) = grab_point(model);
    let offset_x = gx - model.panel.position.x;
    let offset_y = gy - model.panel.position.y;
    press(model, gx, gy);
    move_to(model, x + offset_x, y + offset_y);
    release(model, x + offset_x, y + offset_y);
}

/// Full gesture: press and release on the grab region without any motion
pub fn click_panel(model: &mut AppModel) {
    let (gx, gy) = grab_point(model);
    press(model, gx, gy);
    release(model, gx, gy);
}
