//! Panel controller updates - drag sessions, docking, expansion
//!
//! Pointer events arrive here as platform-free messages. A pointer-down on
//! the model placeholder (the grab region) starts a drag session; motion
//! streams live position updates; release either docks the panel or, when no
//! motion arrived, toggles the agent panel. Pointer-downs elsewhere route
//! input focus to the field under the cursor.

use crate::commands::Cmd;
use crate::layout;
use crate::messages::{AgentMsg, PanelMsg, PointerButton};
use crate::model::{AppModel, DragOutcome, Position};

use super::update_agent;

pub fn update_panel(model: &mut AppModel, msg: PanelMsg) -> Option<Cmd> {
    match msg {
        PanelMsg::PointerPressed { x, y, button } => {
            // Only the primary button interacts with the panel
            if button != PointerButton::Primary {
                return None;
            }

            if layout::model_slot(&model.panel).contains(x, y) {
                model.panel.begin_drag(Position::new(x, y));
                return Some(Cmd::Redraw);
            }

            if layout::chat_input_rect(&model.panel).contains(x, y) {
                model.ui.focus_chat();
                return Some(Cmd::Redraw);
            }

            if let Some(submit) = layout::agent_submit_rect(&model.panel) {
                if submit.contains(x, y) {
                    return update_agent(model, AgentMsg::Submit);
                }
            }

            if let Some(input) = layout::agent_input_rect(&model.panel) {
                if input.contains(x, y) {
                    model.ui.focus_agent();
                    return Some(Cmd::Redraw);
                }
            }

            None
        }

        PanelMsg::PointerMoved { x, y } => {
            // Motion outside a live session carries no meaning here
            if !model.panel.is_dragging() {
                return None;
            }
            model.panel.drag_to(Position::new(x, y));
            Some(Cmd::Redraw)
        }

        PanelMsg::PointerReleased { .. } => {
            // Bounds are read now, not at pointer-down - the window may have
            // resized mid-drag
            let viewport = model.viewport();
            match model.panel.end_drag(viewport) {
                DragOutcome::Ignored => None,
                DragOutcome::Docked => {
                    tracing::debug!(
                        x = model.panel.position.x,
                        y = model.panel.position.y,
                        "drag settled"
                    );
                    Some(Cmd::Redraw)
                }
                DragOutcome::Clicked => {
                    tracing::debug!(expansion = ?model.panel.expansion, "expansion toggled");
                    Some(Cmd::Redraw)
                }
            }
        }
    }
}
