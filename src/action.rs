use crate::primitive::Primitive;
use crate::stroke::Stroke;
use crate::surface::{Handle, RenderSurface};

/// A committed, undoable unit of drawing
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A single rectangle, oval or line
    Primitive(Primitive),
    /// A finished pencil stroke
    Stroke(Stroke),
}

impl Action {
    /// Every surface handle this action owns
    pub fn handles(&self) -> &[Handle] {
        match self {
            Action::Primitive(primitive) => primitive.handles(),
            Action::Stroke(stroke) => stroke.segments(),
        }
    }

    /// Short name for history listings
    pub fn label(&self) -> &'static str {
        match self {
            Action::Primitive(primitive) => primitive.kind().name(),
            Action::Stroke(_) => "Pencil",
        }
    }

    /// Erase everything this action painted. The action is gone afterwards.
    pub fn undo(self, surface: &mut impl RenderSurface) {
        match self {
            Action::Primitive(primitive) => primitive.erase(surface),
            Action::Stroke(stroke) => stroke.erase(surface),
        }
    }
}

impl From<Primitive> for Action {
    fn from(primitive: Primitive) -> Self {
        Action::Primitive(primitive)
    }
}

impl From<Stroke> for Action {
    fn from(stroke: Stroke) -> Self {
        Action::Stroke(stroke)
    }
}
