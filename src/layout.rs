//! Slot layout for the widget's content regions
//!
//! The panel controller hands each collaborator a rectangle of known size;
//! this module is the single source of those rectangles, shared by update
//! hit-testing and the renderer so clicks and pixels always agree.
//!
//! Layout inside the base panel: the model placeholder (the grab region)
//! takes the top two-fifths of the padded interior, the chat sub-panel the
//! rest. When expanded left, the agent panel occupies the left edge of the
//! widget and the base panel shifts right by the agent panel's width.

use crate::model::{Expansion, PanelState};

/// Interior padding of the base and agent panels
pub const SLOT_PADDING: f32 = 16.0;
/// Vertical gap between the model placeholder and the chat sub-panel
pub const SLOT_GAP: f32 = 16.0;
/// Height of a single-line text input field
pub const INPUT_HEIGHT: f32 = 36.0;
/// Width of the agent panel's submit button
pub const BUTTON_WIDTH: f32 = 88.0;
/// Fraction of the base panel interior given to the model placeholder
const MODEL_SLOT_FRACTION: f32 = 0.4;

/// An axis-aligned rectangle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Shrink by the same margin on every side
    pub fn inset(&self, margin: f32) -> Rect {
        Rect::new(
            self.x + margin,
            self.y + margin,
            self.width - 2.0 * margin,
            self.height - 2.0 * margin,
        )
    }
}

/// Full widget bounds at the panel's current position and width
pub fn widget_rect(panel: &PanelState) -> Rect {
    Rect::new(
        panel.position.x,
        panel.position.y,
        panel.current_width(),
        panel.geometry.height,
    )
}

/// The always-visible base panel (model placeholder + chat)
///
/// When expanded left the agent panel sits at the widget's left edge and the
/// base panel moves over by its width; otherwise the base panel is flush
/// with the widget's own top-left.
pub fn base_rect(panel: &PanelState) -> Rect {
    let x = match panel.expansion {
        Expansion::ExpandedLeft => panel.position.x + panel.geometry.agent_panel_width,
        _ => panel.position.x,
    };
    Rect::new(x, panel.position.y, panel.geometry.base_width, panel.geometry.height)
}

/// The agent panel slot, present only while expanded
pub fn agent_rect(panel: &PanelState) -> Option<Rect> {
    let x = match panel.expansion {
        Expansion::Collapsed => return None,
        Expansion::ExpandedLeft => panel.position.x,
        Expansion::ExpandedRight => panel.position.x + panel.geometry.base_width,
    };
    Some(Rect::new(
        x,
        panel.position.y,
        panel.geometry.agent_panel_width,
        panel.geometry.height,
    ))
}

/// The model placeholder slot - the anchor region drag and click gestures
/// attach to
pub fn model_slot(panel: &PanelState) -> Rect {
    let interior = base_rect(panel).inset(SLOT_PADDING);
    Rect::new(
        interior.x,
        interior.y,
        interior.width,
        (interior.height - SLOT_GAP) * MODEL_SLOT_FRACTION,
    )
}

/// The chat sub-panel slot, below the model placeholder
pub fn chat_slot(panel: &PanelState) -> Rect {
    let interior = base_rect(panel).inset(SLOT_PADDING);
    let model_height = (interior.height - SLOT_GAP) * MODEL_SLOT_FRACTION;
    Rect::new(
        interior.x,
        interior.y + model_height + SLOT_GAP,
        interior.width,
        interior.height - model_height - SLOT_GAP,
    )
}

/// The chat input field, along the bottom of the chat slot
pub fn chat_input_rect(panel: &PanelState) -> Rect {
    let chat = chat_slot(panel);
    Rect::new(
        chat.x,
        chat.y + chat.height - INPUT_HEIGHT,
        chat.width,
        INPUT_HEIGHT,
    )
}

/// The agent panel's task input field
pub fn agent_input_rect(panel: &PanelState) -> Option<Rect> {
    let interior = agent_rect(panel)?.inset(SLOT_PADDING);
    Some(Rect::new(
        interior.x,
        interior.y + 64.0,
        interior.width - BUTTON_WIDTH - 8.0,
        INPUT_HEIGHT,
    ))
}

/// The agent panel's submit button, to the right of its input field
pub fn agent_submit_rect(panel: &PanelState) -> Option<Rect> {
    let interior = agent_rect(panel)?.inset(SLOT_PADDING);
    Some(Rect::new(
        interior.x + interior.width - BUTTON_WIDTH,
        interior.y + 64.0,
        BUTTON_WIDTH,
        INPUT_HEIGHT,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DragState, PanelGeometry, PanelState, Position};

    fn panel(expansion: Expansion) -> PanelState {
        PanelState {
            geometry: PanelGeometry::default(),
            position: Position::new(200.0, 100.0),
            drag: DragState::Idle,
            expansion,
        }
    }

    #[test]
    fn test_base_rect_follows_expansion_direction() {
        assert_eq!(base_rect(&panel(Expansion::Collapsed)).x, 200.0);
        assert_eq!(base_rect(&panel(Expansion::ExpandedRight)).x, 200.0);
        assert_eq!(base_rect(&panel(Expansion::ExpandedLeft)).x, 600.0);
    }

    #[test]
    fn test_agent_rect_sides() {
        assert!(agent_rect(&panel(Expansion::Collapsed)).is_none());

        let right = agent_rect(&panel(Expansion::ExpandedRight)).unwrap();
        assert_eq!(right.x, 550.0);
        assert_eq!(right.width, 400.0);

        let left = agent_rect(&panel(Expansion::ExpandedLeft)).unwrap();
        assert_eq!(left.x, 200.0);
    }

    #[test]
    fn test_slots_tile_the_base_interior() {
        let p = panel(Expansion::Collapsed);
        let interior = base_rect(&p).inset(SLOT_PADDING);
        let model = model_slot(&p);
        let chat = chat_slot(&p);

        assert_eq!(model.y, interior.y);
        assert_eq!(chat.y, model.y + model.height + SLOT_GAP);
        assert!((chat.y + chat.height - (interior.y + interior.height)).abs() < 0.01);
    }

    #[test]
    fn test_chat_input_sits_inside_chat_slot() {
        let p = panel(Expansion::Collapsed);
        let chat = chat_slot(&p);
        let input = chat_input_rect(&p);
        assert!(chat.contains(input.x, input.y));
        assert_eq!(input.y + input.height, chat.y + chat.height);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(10.0, 10.0));
        assert!(!r.contains(30.0, 10.0));
        assert!(!r.contains(10.0, 30.0));
    }
}
