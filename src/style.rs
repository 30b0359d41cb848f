use egui::Color32;
use serde::{Deserialize, Serialize};

/// Colors and outline width applied to a newly committed shape or stroke.
///
/// Every committed action keeps its own copy, so changing the session style
/// never repaints what is already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    /// Outline color of shapes, color of lines and pencil segments
    pub stroke: Color32,
    /// Interior color of rectangles and ovals
    pub fill: Color32,
    /// Outline / line width in points
    pub width: f32,
}

impl Style {
    pub const DEFAULT_WIDTH: f32 = 1.0;

    pub fn new(stroke: Color32, fill: Color32, width: f32) -> Self {
        Self { stroke, fill, width }
    }

    pub fn egui_stroke(&self) -> egui::Stroke {
        egui::Stroke::new(self.width, self.stroke)
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::new(Color32::BLUE, Color32::BLUE, Self::DEFAULT_WIDTH)
    }
}
