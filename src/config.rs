use std::fs;
use std::path::Path;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::ConfigResult;
use crate::style::Style;
use crate::tools::ToolKind;

/// Environment variable holding the path of a JSON config file
pub const CONFIG_ENV_VAR: &str = "SKETCH_CONFIG";

/// Startup settings for the editor.
///
/// Missing fields fall back to their defaults, so a config file only needs
/// the values it wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    pub initial_tool: ToolKind,
    pub stroke_color: Color32,
    pub fill_color: Color32,
    pub stroke_width: f32,
    pub background_color: Color32,
    /// Initial window inner size
    pub canvas_size: [f32; 2],
}

impl Default for SketchConfig {
    fn default() -> Self {
        let style = Style::default();
        Self {
            initial_tool: ToolKind::default(),
            stroke_color: style.stroke,
            fill_color: style.fill,
            stroke_width: style.width,
            background_color: Color32::WHITE,
            canvas_size: [800.0, 600.0],
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load the file named by `SKETCH_CONFIG`, or use defaults.
    ///
    /// A broken config file is logged and replaced by the defaults.
    pub fn from_env() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV_VAR) else {
            return Self::default();
        };

        match Self::load(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", Path::new(&path).display());
                config
            }
            Err(err) => {
                log::warn!("Ignoring config {}: {}", Path::new(&path).display(), err);
                Self::default()
            }
        }
    }

    pub fn style(&self) -> Style {
        Style::new(self.stroke_color, self.fill_color, self.stroke_width)
    }
}
