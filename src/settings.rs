//! Field geometry and rendering settings
//!
//! Fixed for a play's lifetime. Loaded from LocalStorage on the web, defaults
//! elsewhere.

use serde::{Deserialize, Serialize};

use crate::error::PlayError;

/// Field dimensions in field units (yards), before scaling to pixels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldGeometry {
    /// Pixels per field unit
    pub scale_factor: f32,
    /// Border around the field, in pixels
    pub margin: f32,
    pub field_width: f32,
    pub endzone_depth: f32,
    pub playing_field_length: f32,
    /// Distance of the brick marks from each endzone line
    pub brick_depth: f32,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            scale_factor: 5.0,
            margin: 2.5,
            field_width: 40.0,
            endzone_depth: 25.0,
            playing_field_length: 70.0,
            brick_depth: 20.0,
        }
    }
}

impl FieldGeometry {
    /// Goal line to goal line, endzones included
    pub fn field_length(&self) -> f32 {
        2.0 * self.endzone_depth + self.playing_field_length
    }

    /// Convert a field coordinate to pixels
    #[inline]
    pub fn px(&self, v: f32) -> f32 {
        self.scale_factor * v
    }

    /// Pixel size of the whole canvas, margins included
    pub fn canvas_size(&self) -> (f32, f32) {
        (
            self.px(self.field_width) + 2.0 * self.margin,
            self.px(self.field_length()) + 2.0 * self.margin,
        )
    }
}

/// CSS colour names used when drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub grass: String,
    pub lines: String,
    pub trail: String,
    pub player_fill: String,
    pub player_outline: String,
    pub defence_fill: String,
    pub disc: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grass: "green".into(),
            lines: "white".into(),
            trail: "white".into(),
            player_fill: "red".into(),
            player_outline: "black".into(),
            defence_fill: "blue".into(),
            disc: "white".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub field: FieldGeometry,
    pub palette: Palette,
    /// Trail lines behind offensive players
    pub show_lines: bool,
    /// Draw the defence as well as the offence
    pub show_defence: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            field: FieldGeometry::default(),
            palette: Palette::default(),
            show_lines: true,
            show_defence: false,
        }
    }
}

impl Settings {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "playmaker_settings";

    pub fn from_json(json: &str) -> Result<Self, PlayError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PlayError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let field = FieldGeometry::default();
        assert_eq!(field.field_length(), 120.0);
        assert_eq!(field.canvas_size(), (205.0, 605.0));
        assert_eq!(field.px(2.0), 10.0);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings =
            Settings::from_json(r#"{"show_lines": false, "field": {"scale_factor": 4.0}}"#)
                .unwrap();
        assert!(!settings.show_lines);
        assert_eq!(settings.field.scale_factor, 4.0);
        assert_eq!(settings.field.field_width, 40.0);
        assert_eq!(settings.palette, Palette::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = Settings::default();
        settings.show_defence = true;
        settings.palette.player_fill = "orange".into();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_bad_json_is_config_error() {
        assert!(matches!(
            Settings::from_json("{not json"),
            Err(PlayError::Config(_))
        ));
    }
}
