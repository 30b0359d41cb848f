use egui::Pos2;

use crate::style::Style;
use crate::surface::{Handle, RenderSurface};
use crate::tools::ShapeKind;

/// A committed rectangle, oval or straight line.
///
/// A `Primitive` only exists once it has been painted: [`Primitive::draw`]
/// is the sole constructor and it stores the surface handle right away.
/// Nothing about it changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    kind: ShapeKind,
    from: Pos2,
    to: Pos2,
    style: Style,
    handle: Handle,
}

impl Primitive {
    /// Paint the shape spanning `from` to `to` and keep the resulting handle.
    ///
    /// Corners are kept exactly as given; zero-size shapes are allowed.
    pub fn draw(
        kind: ShapeKind,
        from: Pos2,
        to: Pos2,
        style: Style,
        surface: &mut impl RenderSurface,
    ) -> Self {
        let handle = surface.draw_shape(kind, from, to, &style);
        log::debug!("Drew {} {:?} -> {:?} as {:?}", kind, from, to, handle);
        Self {
            kind,
            from,
            to,
            style,
            handle,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn from(&self) -> Pos2 {
        self.from
    }

    pub fn to(&self) -> Pos2 {
        self.to
    }

    /// `(x1, y1, x2, y2)` in drag order
    pub fn coords(&self) -> (f32, f32, f32, f32) {
        (self.from.x, self.from.y, self.to.x, self.to.y)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn handle(&self) -> Handle {
        self.handle
    }

    /// The single handle, as a slice
    pub fn handles(&self) -> &[Handle] {
        std::slice::from_ref(&self.handle)
    }

    /// Remove the shape from the surface
    pub fn erase(self, surface: &mut impl RenderSurface) {
        surface.erase(self.handle);
    }
}
