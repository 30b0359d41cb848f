#![warn(clippy::all, rust_2018_idioms)]

pub mod action;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod history;
pub mod input;
pub mod panels;
pub mod primitive;
pub mod session;
pub mod stroke;
pub mod style;
pub mod surface;
pub mod tools;

pub use action::Action;
pub use app::{Preferences, SketchApp};
pub use config::SketchConfig;
pub use error::{ConfigError, ConfigResult, UnknownTool};
pub use history::ActionHistory;
pub use input::{PointerEvent, PointerInput};
pub use primitive::Primitive;
pub use session::{DragState, DrawingSession};
pub use stroke::{Stroke, StrokeBuilder};
pub use style::Style;
pub use surface::{CanvasSurface, Handle, RecordingSurface, RenderSurface, SurfaceCall};
pub use tools::{ShapeKind, ToolKind};
