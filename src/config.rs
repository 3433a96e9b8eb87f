//! Widget configuration persistence
//!
//! Stores user preferences in `~/.config/companion-widget/config.yaml`

use serde::{Deserialize, Serialize};

use crate::model::PanelGeometry;

/// Widget configuration that persists across sessions
///
/// Panel geometry is configuration, not session state: it is read once at
/// startup and never mutated while the widget runs. The panel's position is
/// deliberately not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Selected theme id (e.g., "midnight", "daylight")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Panel dimensions and docking thresholds
    #[serde(default)]
    pub panel: PanelGeometry,
}

fn default_theme() -> String {
    "midnight".to_string()
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            panel: PanelGeometry::default(),
        }
    }
}

impl WidgetConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            // Write a template on first run so the defaults are discoverable
            let config = Self::default();
            if let Err(e) = config.save() {
                tracing::warn!("Could not write default config: {}", e);
            }
            return config;
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Ensure the config directory tree exists (best-effort)
    pub fn ensure_config_dirs() {
        if let Err(e) = crate::config_paths::ensure_config_dir() {
            tracing::warn!("Could not create config directory: {}", e);
        }
    }
}
