use egui::{Color32, Pos2};

use crate::style::Style;
use crate::surface::{Handle, RenderSurface};

// Immutable stroke, owned by the history once the pointer is released
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    style: Style,
    segments: Vec<Handle>,
}

// Stroke being drawn while the pencil is down
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeBuilder {
    style: Style,
    segments: Vec<Handle>,
    last_point: Option<Pos2>,
}

impl Stroke {
    pub fn color(&self) -> Color32 {
        self.style.stroke
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Segment handles in the order they were drawn
    pub fn segments(&self) -> &[Handle] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Remove every segment from the surface. An empty stroke erases nothing.
    pub fn erase(self, surface: &mut impl RenderSurface) {
        for handle in self.segments {
            surface.erase(handle);
        }
    }
}

impl StrokeBuilder {
    // Start a stroke with no previous point: the first sample only anchors it
    pub(crate) fn new(style: Style) -> Self {
        Self {
            style,
            segments: Vec::new(),
            last_point: None,
        }
    }

    /// Start a stroke anchored at `origin`, so the first sample already
    /// produces a segment.
    pub fn starting_at(style: Style, origin: Pos2) -> Self {
        Self {
            last_point: Some(origin),
            ..Self::new(style)
        }
    }

    // Connect the previous sample to `pos` and remember `pos` for the next one
    pub fn extend_to(&mut self, pos: Pos2, surface: &mut impl RenderSurface) {
        if let Some(last) = self.last_point {
            let handle = surface.draw_segment(last, pos, &self.style);
            self.segments.push(handle);
        }
        self.last_point = Some(pos);
    }

    pub fn last_point(&self) -> Option<Pos2> {
        self.last_point
    }

    pub fn segments(&self) -> &[Handle] {
        &self.segments
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    // Freeze into a committed stroke
    pub fn finish(self) -> Stroke {
        Stroke {
            style: self.style,
            segments: self.segments,
        }
    }
}
