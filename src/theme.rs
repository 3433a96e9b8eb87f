//! Color themes for the widget
//!
//! Colors are 0xAARRGGBB as consumed by the softbuffer surface. Two themes
//! are built in; an unknown id in the config falls back to the default with
//! a warning.

/// Color set for the widget and its slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Window background behind the panel
    pub background: u32,
    /// Decorative background shape tint
    pub background_shape: u32,
    /// Panel body fill
    pub panel_bg: u32,
    /// Panel border
    pub panel_border: u32,
    /// Model placeholder border and hint text
    pub accent: u32,
    /// Primary text
    pub text: u32,
    /// Secondary text (hints, placeholders)
    pub text_dim: u32,
    /// User chat bubble fill
    pub user_bubble: u32,
    /// Bot chat bubble fill
    pub bot_bubble: u32,
    /// Input field fill
    pub input_bg: u32,
    /// Submit button fill
    pub button_bg: u32,
    /// Success status text (completed agent task)
    pub success: u32,
    /// Pending status indicator
    pub pending: u32,
}

impl Default for Theme {
    fn default() -> Self {
        midnight()
    }
}

/// Dark theme, the default
fn midnight() -> Theme {
    Theme {
        background: 0xFF0F172A,
        background_shape: 0xFF16213D,
        panel_bg: 0xFF1E293B,
        panel_border: 0xFF64C8FF,
        accent: 0xFF22D3EE,
        text: 0xFFF1F5F9,
        text_dim: 0xFF94A3B8,
        user_bubble: 0xFF0891B2,
        bot_bubble: 0xFF334155,
        input_bg: 0xFF0F172A,
        button_bg: 0xFF475569,
        success: 0xFF4ADE80,
        pending: 0xFFF87171,
    }
}

/// Light theme
fn daylight() -> Theme {
    Theme {
        background: 0xFFE2E8F0,
        background_shape: 0xFFD4DCE8,
        panel_bg: 0xFFF8FAFC,
        panel_border: 0xFF0E7490,
        accent: 0xFF0891B2,
        text: 0xFF0F172A,
        text_dim: 0xFF64748B,
        user_bubble: 0xFF06B6D4,
        bot_bubble: 0xFFCBD5E1,
        input_bg: 0xFFFFFFFF,
        button_bg: 0xFF94A3B8,
        success: 0xFF15803D,
        pending: 0xFFDC2626,
    }
}

/// Resolve a theme id from the config
pub fn load_theme(id: &str) -> Theme {
    match id {
        "midnight" => midnight(),
        "daylight" => daylight(),
        other => {
            tracing::warn!("Unknown theme '{}', using default", other);
            Theme::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        assert_eq!(load_theme("does-not-exist"), Theme::default());
        assert_ne!(load_theme("daylight"), Theme::default());
    }
}
