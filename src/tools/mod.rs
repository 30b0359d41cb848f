use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownTool;

/// The fixed set of shapes a [`crate::Primitive`] can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Oval,
    Line,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Oval => "Oval",
            Self::Line => "Line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tool selected in the toolbar. Shape tools commit on release, the pencil
/// draws while the pointer moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ToolKind {
    #[default]
    Rectangle,
    Oval,
    Line,
    Pencil,
}

impl ToolKind {
    /// All tools, in toolbar order
    pub const ALL: [ToolKind; 4] = [Self::Rectangle, Self::Oval, Self::Line, Self::Pencil];

    /// The shape this tool commits, or `None` for the pencil
    pub fn shape(self) -> Option<ShapeKind> {
        match self {
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Oval => Some(ShapeKind::Oval),
            Self::Line => Some(ShapeKind::Line),
            Self::Pencil => None,
        }
    }

    pub fn is_pencil(self) -> bool {
        matches!(self, Self::Pencil)
    }

    pub fn name(self) -> &'static str {
        match self.shape() {
            Some(shape) => shape.name(),
            None => "Pencil",
        }
    }

    /// Glyph shown on the toolbar button
    pub fn icon(self) -> &'static str {
        match self {
            Self::Rectangle => "⬜",
            Self::Oval => "⭕",
            Self::Line => "╱",
            Self::Pencil => "✏",
        }
    }
}

impl From<ShapeKind> for ToolKind {
    fn from(shape: ShapeKind) -> Self {
        match shape {
            ShapeKind::Rectangle => Self::Rectangle,
            ShapeKind::Oval => Self::Oval,
            ShapeKind::Line => Self::Line,
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|tool| tool.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| UnknownTool(s.to_owned()))
    }
}

impl TryFrom<String> for ToolKind {
    type Error = UnknownTool;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<ToolKind> for String {
    fn from(tool: ToolKind) -> Self {
        tool.name().to_owned()
    }
}
