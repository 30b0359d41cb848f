//! The drawing state machine.
//!
//! ```text
//!              pointer_down               pointer_up
//!   ┌──────┐ ───────────────► ┌──────────┐ ──────────► ┌──────┐
//!   │ Idle │                  │ Dragging │  (commit)   │ Idle │
//!   └──────┘                  └────┬─────┘             └──────┘
//!                                  │ pointer_move
//!                                  └──── pencil: draw a segment
//! ```
//!
//! Shape drags commit one [`Primitive`] on release. Pencil drags paint
//! segments while the pointer moves and commit the finished [`Stroke`](crate::Stroke)
//! on release. Every commit lands in the session's [`ActionHistory`].

use egui::{Color32, Pos2};

use crate::action::Action;
use crate::history::ActionHistory;
use crate::input::PointerEvent;
use crate::primitive::Primitive;
use crate::stroke::StrokeBuilder;
use crate::style::Style;
use crate::surface::RenderSurface;
use crate::tools::{ShapeKind, ToolKind};

/// What the session is doing between pointer events
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Shape drag: nothing is painted until release
    Shape { kind: ShapeKind, origin: Pos2 },
    /// Pencil drag: the stroke grows with every move
    Pencil { origin: Pos2, stroke: StrokeBuilder },
}

impl DragState {
    pub fn name(&self) -> &'static str {
        match self {
            DragState::Idle => "Idle",
            DragState::Shape { .. } => "Dragging shape",
            DragState::Pencil { .. } => "Drawing",
        }
    }
}

#[derive(Debug, Default)]
pub struct DrawingSession {
    active_tool: ToolKind,
    style: Style,
    drag: DragState,
    history: ActionHistory,
}

impl DrawingSession {
    pub fn new(tool: ToolKind, style: Style) -> Self {
        Self {
            active_tool: tool,
            style,
            drag: DragState::Idle,
            history: ActionHistory::new(),
        }
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    /// Select the tool for the next drag. A drag already in progress keeps
    /// the tool it started with.
    pub fn set_tool(&mut self, tool: ToolKind) {
        if tool != self.active_tool {
            log::info!("Tool changed: {} -> {}", self.active_tool, tool);
            self.active_tool = tool;
        }
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn stroke_color(&self) -> Color32 {
        self.style.stroke
    }

    pub fn fill_color(&self) -> Color32 {
        self.style.fill
    }

    pub fn set_stroke_color(&mut self, color: Color32) {
        self.style.stroke = color;
    }

    pub fn set_fill_color(&mut self, color: Color32) {
        self.style.fill = color;
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.width = width;
    }

    pub fn drag_state(&self) -> &DragState {
        &self.drag
    }

    pub fn is_dragging(&self) -> bool {
        !matches!(self.drag, DragState::Idle)
    }

    pub fn drag_origin(&self) -> Option<Pos2> {
        match &self.drag {
            DragState::Idle => None,
            DragState::Shape { origin, .. } | DragState::Pencil { origin, .. } => Some(*origin),
        }
    }

    /// The stroke being drawn, present only during a pencil drag
    pub fn in_progress_stroke(&self) -> Option<&StrokeBuilder> {
        match &self.drag {
            DragState::Pencil { stroke, .. } => Some(stroke),
            _ => None,
        }
    }

    pub fn history(&self) -> &ActionHistory {
        &self.history
    }

    pub fn handle_pointer(&mut self, event: PointerEvent, surface: &mut impl RenderSurface) {
        match event {
            PointerEvent::Down(pos) => self.pointer_down(pos),
            PointerEvent::Move(pos) => self.pointer_move(pos, surface),
            PointerEvent::Up(pos) => self.pointer_up(pos, surface),
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.is_dragging() {
            log::warn!("Pointer down at {:?} during an active drag ignored", pos);
            return;
        }

        self.drag = match self.active_tool.shape() {
            Some(kind) => DragState::Shape { kind, origin: pos },
            None => DragState::Pencil {
                origin: pos,
                stroke: StrokeBuilder::starting_at(self.style, pos),
            },
        };
        log::debug!("{} started at {:?}", self.active_tool, pos);
    }

    /// Extend the pencil stroke. Other drags (and idle) ignore motion.
    pub fn pointer_move(&mut self, pos: Pos2, surface: &mut impl RenderSurface) {
        if let DragState::Pencil { stroke, .. } = &mut self.drag {
            stroke.extend_to(pos, surface);
        }
    }

    /// Finish the drag and commit whatever it produced, including zero-size
    /// shapes and strokes without segments.
    pub fn pointer_up(&mut self, pos: Pos2, surface: &mut impl RenderSurface) {
        let action = match std::mem::take(&mut self.drag) {
            DragState::Idle => {
                log::debug!("Pointer up at {:?} without a drag ignored", pos);
                return;
            }
            DragState::Shape { kind, origin } => {
                Action::Primitive(Primitive::draw(kind, origin, pos, self.style, surface))
            }
            DragState::Pencil { stroke, .. } => Action::Stroke(stroke.finish()),
        };
        self.history.push(action);
    }

    /// Undo the most recent committed action. An in-progress drag is left alone.
    pub fn undo(&mut self, surface: &mut impl RenderSurface) -> bool {
        self.history.undo_last(surface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::RecordingSurface;
    use egui::pos2;

    #[test]
    fn test_set_tool_mid_drag_keeps_running_drag() {
        let mut session = DrawingSession::new(ToolKind::Oval, Style::default());
        let mut surface = RecordingSurface::new();

        session.pointer_down(pos2(0.0, 0.0));
        session.set_tool(ToolKind::Pencil);
        assert!(session.in_progress_stroke().is_none());

        session.pointer_up(pos2(4.0, 4.0), &mut surface);
        match session.history().last() {
            Some(Action::Primitive(primitive)) => assert_eq!(primitive.kind(), ShapeKind::Oval),
            other => panic!("expected an oval, got {:?}", other),
        }
        assert_eq!(session.active_tool(), ToolKind::Pencil);
    }

    #[test]
    fn test_drag_origin_lifecycle() {
        let mut session = DrawingSession::new(ToolKind::Pencil, Style::default());
        let mut surface = RecordingSurface::new();
        assert_eq!(session.drag_origin(), None);

        session.pointer_down(pos2(7.0, 8.0));
        assert_eq!(session.drag_origin(), Some(pos2(7.0, 8.0)));
        assert!(session.in_progress_stroke().is_some());
        assert_eq!(session.drag_state().name(), "Drawing");

        session.pointer_up(pos2(7.0, 8.0), &mut surface);
        assert_eq!(session.drag_origin(), None);
        assert!(session.in_progress_stroke().is_none());
        assert_eq!(*session.drag_state(), DragState::Idle);
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut session = DrawingSession::new(ToolKind::Line, Style::default());
        let mut surface = RecordingSurface::new();

        session.pointer_down(pos2(1.0, 1.0));
        session.pointer_down(pos2(9.0, 9.0));
        session.pointer_up(pos2(5.0, 5.0), &mut surface);

        match session.history().last() {
            Some(Action::Primitive(line)) => assert_eq!(line.coords(), (1.0, 1.0, 5.0, 5.0)),
            other => panic!("expected a line, got {:?}", other),
        }
    }

    #[test]
    fn test_stray_events_while_idle_do_nothing() {
        let mut session = DrawingSession::default();
        let mut surface = RecordingSurface::new();

        session.pointer_move(pos2(3.0, 3.0), &mut surface);
        session.pointer_up(pos2(3.0, 3.0), &mut surface);
        assert!(session.history().is_empty());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_shape_drag_ignores_motion() {
        let mut session = DrawingSession::new(ToolKind::Rectangle, Style::default());
        let mut surface = RecordingSurface::new();

        session.pointer_down(pos2(0.0, 0.0));
        session.pointer_move(pos2(5.0, 5.0), &mut surface);
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_undo_leaves_pencil_drag_in_progress() {
        let mut session = DrawingSession::new(ToolKind::Rectangle, Style::default());
        let mut surface = RecordingSurface::new();
        session.pointer_down(pos2(0.0, 0.0));
        session.pointer_up(pos2(2.0, 2.0), &mut surface);

        session.set_tool(ToolKind::Pencil);
        session.pointer_down(pos2(0.0, 0.0));
        session.pointer_move(pos2(1.0, 1.0), &mut surface);

        assert!(session.undo(&mut surface));
        assert!(session.history().is_empty());
        let stroke = session.in_progress_stroke().expect("pencil drag still running");
        assert_eq!(stroke.segments().len(), 1);
        assert!(surface.is_live(stroke.segments()[0]));
    }
}
