//! Floating panel geometry and interaction state
//!
//! This module owns the panel's on-screen position and the three pieces of
//! interaction state built on top of it:
//!
//! - a drag session (`DragState`) that converts pointer motion into live
//!   position updates and discriminates drags from plain clicks,
//! - a docking resolver that snaps/clamps the released position against the
//!   viewport edges,
//! - an expansion state machine that toggles the agent panel and picks a
//!   growth direction from the space available at that instant.

use serde::{Deserialize, Serialize};

/// Fixed panel dimensions and docking thresholds
///
/// These are configuration constants, not session state. They are read by
/// every geometry decision but never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelGeometry {
    /// Width of the base panel (model placeholder + chat)
    #[serde(default = "default_base_width")]
    pub base_width: f32,
    /// Width of the expandable agent panel
    #[serde(default = "default_agent_panel_width")]
    pub agent_panel_width: f32,
    /// Fixed overall panel height
    #[serde(default = "default_height")]
    pub height: f32,
    /// Margin kept from any viewport edge when docked or clamped
    #[serde(default = "default_dock_offset")]
    pub dock_offset: f32,
    /// Distance from a side edge within which a release snaps to that edge
    #[serde(default = "default_dock_zone_width")]
    pub dock_zone_width: f32,
}

fn default_base_width() -> f32 {
    350.0
}

fn default_agent_panel_width() -> f32 {
    400.0
}

fn default_height() -> f32 {
    600.0
}

fn default_dock_offset() -> f32 {
    16.0
}

fn default_dock_zone_width() -> f32 {
    150.0
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            base_width: default_base_width(),
            agent_panel_width: default_agent_panel_width(),
            height: default_height(),
            dock_offset: default_dock_offset(),
            dock_zone_width: default_dock_zone_width(),
        }
    }
}

/// A point in viewport pixel coordinates, top-left anchored
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Current window client-area dimensions
///
/// Derived from the window at the moment of use (drag end, expansion toggle),
/// never cached in panel state - the window may have resized in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportBounds {
    pub width: f32,
    pub height: f32,
}

impl ViewportBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Drag session state
///
/// `Dragging` exists only while the primary button is held after a
/// pointer-down on the grab region. `moved` stays false until the first
/// motion event, which is what separates a drag from a plain click.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Cursor position minus the panel's top-left, captured at drag start
        grab_offset: Position,
        /// Whether any motion event has arrived in this session
        moved: bool,
    },
}

/// Expansion state of the agent panel
///
/// The direction is part of the state because collapsing must reverse the
/// position shift that an `ExpandedLeft` transition applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expansion {
    #[default]
    Collapsed,
    ExpandedLeft,
    ExpandedRight,
}

impl Expansion {
    pub fn is_expanded(&self) -> bool {
        !matches!(self, Expansion::Collapsed)
    }
}

/// How a pointer-release was classified
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// No session was active
    Ignored,
    /// At least one motion event arrived; the position was settled by the
    /// docking resolver
    Docked,
    /// Zero motion events between down and up; the expansion toggle fired
    /// and the position was left untouched by the resolver
    Clicked,
}

/// Complete state of the floating panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub geometry: PanelGeometry,
    /// Top-left corner of the widget in viewport pixels
    pub position: Position,
    pub drag: DragState,
    pub expansion: Expansion,
}

impl PanelState {
    /// Create a panel docked to the bottom-right of the given viewport
    pub fn new(geometry: PanelGeometry, viewport: ViewportBounds) -> Self {
        let x = viewport.width - geometry.base_width - geometry.dock_offset;
        let y = (viewport.height - geometry.height - geometry.dock_offset)
            .max(geometry.dock_offset);
        Self {
            geometry,
            position: Position::new(x, y),
            drag: DragState::Idle,
            expansion: Expansion::Collapsed,
        }
    }

    /// Total widget width including the agent panel when expanded
    pub fn current_width(&self) -> f32 {
        if self.expansion.is_expanded() {
            self.geometry.base_width + self.geometry.agent_panel_width
        } else {
            self.geometry.base_width
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Start a drag session at the given pointer position
    ///
    /// A pointer-down while a session is already live is ignored - only one
    /// pointer stream is tracked. Button filtering happens in the update
    /// layer before this is called.
    pub fn begin_drag(&mut self, pointer: Position) {
        if self.is_dragging() {
            return;
        }
        self.drag = DragState::Dragging {
            grab_offset: Position::new(
                pointer.x - self.position.x,
                pointer.y - self.position.y,
            ),
            moved: false,
        };
    }

    /// Feed a pointer motion event into the live session
    ///
    /// The position follows the cursor exactly; no clamping happens during
    /// the drag, so the panel may transiently leave the viewport. Motion
    /// without a live session is a no-op.
    pub fn drag_to(&mut self, pointer: Position) {
        if let DragState::Dragging {
            grab_offset,
            ref mut moved,
        } = self.drag
        {
            *moved = true;
            self.position = Position::new(
                pointer.x - grab_offset.x,
                pointer.y - grab_offset.y,
            );
        }
    }

    /// End the drag session and classify it
    ///
    /// A session with motion hands the last live position to the docking
    /// resolver; a session without motion is a click and fires the expansion
    /// toggle instead, leaving the position alone. A release without a
    /// session does nothing.
    pub fn end_drag(&mut self, viewport: ViewportBounds) -> DragOutcome {
        match std::mem::take(&mut self.drag) {
            DragState::Idle => DragOutcome::Ignored,
            DragState::Dragging { moved: true, .. } => {
                self.position = self.settled(self.position, viewport);
                DragOutcome::Docked
            }
            DragState::Dragging { moved: false, .. } => {
                self.toggle_expansion(viewport);
                DragOutcome::Clicked
            }
        }
    }

    /// Docking resolver: compute the settled position for a release
    ///
    /// X snaps to a side only when released inside a dock zone; interior
    /// positions float freely. Y is always clamped so the panel is never cut
    /// off top or bottom. When the viewport is shorter than the panel plus
    /// margins the upper bound drops below the lower one; min-then-max keeps
    /// the top margin in that case.
    pub fn settled(&self, position: Position, viewport: ViewportBounds) -> Position {
        let g = &self.geometry;
        let width = self.current_width();

        let x = if position.x < g.dock_zone_width {
            g.dock_offset
        } else if position.x + width > viewport.width - g.dock_zone_width {
            viewport.width - width - g.dock_offset
        } else {
            position.x
        };

        let max_y = viewport.height - g.height - g.dock_offset;
        let y = position.y.min(max_y).max(g.dock_offset);

        Position::new(x, y)
    }

    /// Toggle the agent panel, choosing a growth direction on expand
    ///
    /// Expanding prefers the right; it grows left only when the right side
    /// lacks room and the left side has it, shifting the position so the
    /// base panel's right edge stays visually put. Collapsing reverses that
    /// shift. The direction is decided fresh on every expand from the
    /// current position and viewport - it is not remembered across cycles.
    ///
    /// The shifted position is intentionally not re-docked; it can sit
    /// outside the snapped range until the next drag release.
    pub fn toggle_expansion(&mut self, viewport: ViewportBounds) {
        let g = self.geometry;
        match self.expansion {
            Expansion::Collapsed => {
                let space_right = viewport.width - (self.position.x + g.base_width);
                let space_left = self.position.x;
                let needed = g.agent_panel_width + g.dock_offset;

                if space_right < needed && space_left > needed {
                    self.expansion = Expansion::ExpandedLeft;
                    self.position.x -= g.agent_panel_width;
                } else {
                    self.expansion = Expansion::ExpandedRight;
                }
            }
            Expansion::ExpandedLeft => {
                self.position.x += g.agent_panel_width;
                self.expansion = Expansion::Collapsed;
            }
            Expansion::ExpandedRight => {
                self.expansion = Expansion::Collapsed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel_at(x: f32, y: f32) -> PanelState {
        PanelState {
            geometry: PanelGeometry::default(),
            position: Position::new(x, y),
            drag: DragState::Idle,
            expansion: Expansion::Collapsed,
        }
    }

    #[test]
    fn test_initial_position_docks_bottom_right() {
        let panel = PanelState::new(
            PanelGeometry::default(),
            ViewportBounds::new(1280.0, 800.0),
        );
        assert_eq!(panel.position, Position::new(1280.0 - 350.0 - 16.0, 800.0 - 600.0 - 16.0));
        assert_eq!(panel.expansion, Expansion::Collapsed);
    }

    #[test]
    fn test_initial_position_short_viewport_keeps_top_margin() {
        let panel = PanelState::new(
            PanelGeometry::default(),
            ViewportBounds::new(1280.0, 500.0),
        );
        assert_eq!(panel.position.y, 16.0);
    }

    #[test]
    fn test_current_width_tracks_expansion() {
        let mut panel = panel_at(400.0, 100.0);
        assert_eq!(panel.current_width(), 350.0);
        panel.expansion = Expansion::ExpandedRight;
        assert_eq!(panel.current_width(), 750.0);
        panel.expansion = Expansion::ExpandedLeft;
        assert_eq!(panel.current_width(), 750.0);
    }

    #[test]
    fn test_drag_position_follows_grab_offset() {
        let mut panel = panel_at(100.0, 100.0);
        // Grab 30px right, 10px down of the top-left corner
        panel.begin_drag(Position::new(130.0, 110.0));
        panel.drag_to(Position::new(430.0, 260.0));
        assert_eq!(panel.position, Position::new(400.0, 250.0));
    }

    #[test]
    fn test_drag_is_unclamped_while_live() {
        let mut panel = panel_at(100.0, 100.0);
        panel.begin_drag(Position::new(100.0, 100.0));
        panel.drag_to(Position::new(-500.0, -500.0));
        assert_eq!(panel.position, Position::new(-500.0, -500.0));
    }

    #[test]
    fn test_second_pointer_down_keeps_first_session() {
        let mut panel = panel_at(100.0, 100.0);
        panel.begin_drag(Position::new(120.0, 120.0));
        panel.begin_drag(Position::new(300.0, 300.0));
        panel.drag_to(Position::new(130.0, 130.0));
        // Offset from the first down (20, 20) still applies
        assert_eq!(panel.position, Position::new(110.0, 110.0));
    }

    #[test]
    fn test_motion_without_session_is_ignored() {
        let mut panel = panel_at(100.0, 100.0);
        panel.drag_to(Position::new(500.0, 500.0));
        assert_eq!(panel.position, Position::new(100.0, 100.0));
    }

    #[test]
    fn test_release_without_session_is_ignored() {
        let mut panel = panel_at(100.0, 100.0);
        let outcome = panel.end_drag(ViewportBounds::new(1280.0, 800.0));
        assert_eq!(outcome, DragOutcome::Ignored);
        assert_eq!(panel.expansion, Expansion::Collapsed);
    }

    #[test]
    fn test_settled_snaps_left_edge() {
        let panel = panel_at(0.0, 0.0);
        let settled = panel.settled(Position::new(10.0, 100.0), ViewportBounds::new(1280.0, 800.0));
        assert_eq!(settled.x, 16.0);
    }

    #[test]
    fn test_settled_snaps_right_edge() {
        let panel = panel_at(0.0, 0.0);
        // 1000 + 350 > 1280 - 150, so snap flush right
        let settled =
            panel.settled(Position::new(1000.0, 100.0), ViewportBounds::new(1280.0, 800.0));
        assert_eq!(settled.x, 1280.0 - 350.0 - 16.0);
    }

    #[test]
    fn test_settled_leaves_interior_x_alone() {
        let panel = panel_at(0.0, 0.0);
        let settled =
            panel.settled(Position::new(500.0, 100.0), ViewportBounds::new(1280.0, 800.0));
        assert_eq!(settled.x, 500.0);
    }

    #[test]
    fn test_settled_right_snap_uses_expanded_width() {
        let mut panel = panel_at(0.0, 0.0);
        panel.expansion = Expansion::ExpandedRight;
        let settled =
            panel.settled(Position::new(1000.0, 100.0), ViewportBounds::new(1280.0, 800.0));
        assert_eq!(settled.x, 1280.0 - 750.0 - 16.0);
    }

    #[test]
    fn test_settled_clamps_y_both_ends() {
        let panel = panel_at(0.0, 0.0);
        let viewport = ViewportBounds::new(1280.0, 800.0);
        let top = panel.settled(Position::new(500.0, -50.0), viewport);
        assert_eq!(top.y, 16.0);
        let bottom = panel.settled(Position::new(500.0, 10_000.0), viewport);
        assert_eq!(bottom.y, 800.0 - 600.0 - 16.0);
    }

    #[test]
    fn test_settled_degenerate_viewport_prefers_top() {
        // Viewport shorter than panel + margins: clamp range inverts, the
        // top margin wins
        let panel = panel_at(0.0, 0.0);
        let settled =
            panel.settled(Position::new(500.0, 300.0), ViewportBounds::new(1280.0, 400.0));
        assert_eq!(settled.y, 16.0);
    }

    #[test]
    fn test_settled_is_idempotent() {
        let panel = panel_at(0.0, 0.0);
        let viewport = ViewportBounds::new(1280.0, 800.0);
        for &(x, y) in &[(10.0, -50.0), (500.0, 100.0), (1200.0, 900.0)] {
            let once = panel.settled(Position::new(x, y), viewport);
            let twice = panel.settled(once, viewport);
            assert_eq!(once, twice, "settled position must be a fixed point");
        }
    }

    #[test]
    fn test_expand_right_by_default() {
        let mut panel = panel_at(100.0, 100.0);
        panel.toggle_expansion(ViewportBounds::new(1920.0, 800.0));
        assert_eq!(panel.expansion, Expansion::ExpandedRight);
        assert_eq!(panel.position.x, 100.0);
    }

    #[test]
    fn test_expand_left_shifts_position() {
        // spaceOnRight = 1920 - (1600 + 350) = -30 < 416
        // spaceOnLeft = 1600 > 416
        let mut panel = panel_at(1600.0, 100.0);
        panel.toggle_expansion(ViewportBounds::new(1920.0, 800.0));
        assert_eq!(panel.expansion, Expansion::ExpandedLeft);
        assert_eq!(panel.position.x, 1200.0);
    }

    #[test]
    fn test_expand_right_when_neither_side_fits() {
        // Narrow viewport: no room on either side, fall back to right growth
        let mut panel = panel_at(50.0, 100.0);
        panel.toggle_expansion(ViewportBounds::new(500.0, 800.0));
        assert_eq!(panel.expansion, Expansion::ExpandedRight);
        assert_eq!(panel.position.x, 50.0);
    }

    #[test]
    fn test_collapse_reverses_left_shift_only() {
        let viewport = ViewportBounds::new(1920.0, 800.0);

        let mut panel = panel_at(1600.0, 100.0);
        panel.toggle_expansion(viewport);
        panel.toggle_expansion(viewport);
        assert_eq!(panel.expansion, Expansion::Collapsed);
        assert_eq!(panel.position.x, 1600.0);

        let mut panel = panel_at(100.0, 100.0);
        panel.toggle_expansion(viewport);
        panel.toggle_expansion(viewport);
        assert_eq!(panel.position.x, 100.0);
    }

    #[test]
    fn test_expansion_shift_is_not_redocked() {
        // After a left expand the x may land inside the dock zone without
        // being snapped; only the next drag release re-docks
        let mut panel = panel_at(450.0, 100.0);
        panel.toggle_expansion(ViewportBounds::new(900.0, 800.0));
        assert_eq!(panel.expansion, Expansion::ExpandedLeft);
        assert_eq!(panel.position.x, 50.0);
    }
}
