//! Render palette
//!
//! Optionally overridden by a `theme.json` next to the binary; any missing or
//! unparsable file falls back to the built-in palette. This is the only file
//! the game reads besides the chosen photo - no game state is persisted.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub type Color = [u8; 3];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub grid_line: Color,
    pub given_digit: Color,
    pub player_digit: Color,
    pub selection: Color,
    pub selection_alpha: u8,
    pub hover_guide: Color,
    pub hover_guide_alpha: u8,
    pub same_value: Color,
    pub same_value_alpha: u8,
    pub overlay: Color,
    pub overlay_alpha: u8,
    pub margin_fill: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            grid_line: [0, 0, 0],
            given_digit: [50, 50, 50],
            player_digit: [0, 0, 255],
            selection: [255, 255, 0],
            selection_alpha: 100,
            hover_guide: [180, 200, 255], // light blue
            hover_guide_alpha: 100,
            same_value: [255, 200, 100], // soft orange
            same_value_alpha: 150,
            // Not fully opaque: a faint silhouette of the photo shows through
            // covered cells.
            overlay: [255, 255, 255],
            overlay_alpha: 240,
            margin_fill: [255, 255, 255],
        }
    }
}

impl Theme {
    /// Load a palette from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let json = fs::read_to_string(path).map_err(|e| e.to_string())?;
        serde_json::from_str(&json).map_err(|e| e.to_string())
    }
}
