//! The boundary between the drawing core and whatever actually paints.
//!
//! The core never paints on its own. It asks a [`RenderSurface`] to draw a
//! shape or a pencil segment, keeps the [`Handle`] it gets back, and later
//! hands that handle back to [`RenderSurface::erase`] when the action owning
//! it is undone.

mod canvas;
mod recording;

use egui::Pos2;

use crate::style::Style;
use crate::tools::ShapeKind;

pub use canvas::{CanvasItem, CanvasSurface};
pub use recording::{RecordingSurface, SurfaceCall};

/// Opaque reference to something painted on a surface.
///
/// Issued by the surface; the drawing core stores it and passes it back,
/// nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Handle(u64);

impl Handle {
    /// Wrap a surface-specific identifier. Only surfaces should call this.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Something that can paint primitives and remove them again.
pub trait RenderSurface {
    /// Paint a rectangle, oval or line spanning `from` to `to`.
    ///
    /// The corners come in drag order and may be in any orientation.
    fn draw_shape(&mut self, kind: ShapeKind, from: Pos2, to: Pos2, style: &Style) -> Handle;

    /// Paint one straight pencil segment.
    fn draw_segment(&mut self, from: Pos2, to: Pos2, style: &Style) -> Handle;

    /// Remove a painted object. Unknown or already erased handles are ignored.
    fn erase(&mut self, handle: Handle);
}
