use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "commit_settings.json";

/// Bounds applied to the preview font size; persisted values outside the
/// range are repaired on load rather than rejected.
pub const FONT_SIZE_MIN: u32 = 8;
pub const FONT_SIZE_MAX: u32 = 72;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Font size of the preview pane in pixels.
    #[serde(default = "default_preview_font_size")]
    pub preview_font_size: u32,
    /// When enabled every successful preview recompute overwrites the
    /// draft snapshot, and the snapshot is restored at startup.
    #[serde(default)]
    pub auto_save: bool,
    /// When enabled the logger is initialised at debug level.
    /// Defaults to `false` when the field is missing in the settings file.
    #[serde(default)]
    pub debug_logging: bool,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
}

fn default_preview_font_size() -> u32 {
    16
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    5.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preview_font_size: default_preview_font_size(),
            auto_save: false,
            debug_logging: false,
            enable_toasts: true,
            toast_duration: default_toast_duration(),
        }
    }
}

impl Settings {
    /// Read the persisted snapshot at `path`. An absent or unparseable file
    /// yields the defaults; a parse failure is logged, never propagated.
    pub fn load(path: &str) -> Self {
        let content = std::fs::read_to_string(path).unwrap_or_default();
        if content.is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<Settings>(&content) {
            Ok(settings) => settings.normalized(),
            Err(e) => {
                tracing::warn!("malformed settings in {path}: {e}; using defaults");
                Self::default()
            }
        }
    }

    /// Overwrite the persisted snapshot at `path` wholesale.
    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn normalized(mut self) -> Self {
        self.preview_font_size = self.preview_font_size.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.preview_font_size, 16);
        assert!(!settings.auto_save);
        assert!(settings.enable_toasts);
    }
}
