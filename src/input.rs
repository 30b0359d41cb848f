use egui::{Pos2, Rect, Response};

/// Normalized pointer event in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button pressed inside the canvas
    Down(Pos2),
    /// Pointer moved while the button is held
    Move(Pos2),
    /// Primary button released
    Up(Pos2),
}

impl PointerEvent {
    pub fn pos(&self) -> Pos2 {
        match self {
            PointerEvent::Down(pos) | PointerEvent::Move(pos) | PointerEvent::Up(pos) => *pos,
        }
    }
}

/// Primary-button state for one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub pressed: bool,
    pub released: bool,
    pub pos: Option<Pos2>,
    /// The canvas widget is the topmost thing under the pointer
    pub on_canvas: bool,
}

impl PointerSample {
    /// Sample the pointer as seen by the canvas widget `response`.
    ///
    /// Popups, windows and other layers above the canvas make `on_canvas`
    /// false, so presses on them never reach the drawing session.
    pub fn from_response(response: &Response) -> Self {
        let on_canvas = response.hovered() || response.is_pointer_button_down_on();
        response.ctx.input(|input| Self {
            pressed: input.pointer.primary_pressed(),
            released: input.pointer.primary_released(),
            pos: input.pointer.interact_pos(),
            on_canvas,
        })
    }
}

/// Turns raw egui pointer state into [`PointerEvent`]s for the canvas.
///
/// A drag only starts when the button goes down on the canvas itself; once
/// started it keeps reporting moves (even outside the canvas) until the
/// button is released.
#[derive(Debug, Default)]
pub struct PointerInput {
    last_pos: Option<Pos2>,
    dragging: bool,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Read this frame's pointer state for the canvas widget `response`
    pub fn process(&mut self, response: &Response) -> Vec<PointerEvent> {
        self.step(PointerSample::from_response(response), response.rect)
    }

    pub fn step(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let local = |pos: Pos2| (pos - canvas_rect.min).to_pos2();

        if !self.dragging && sample.pressed && sample.on_canvas {
            if let Some(pos) = sample.pos.filter(|pos| canvas_rect.contains(*pos)) {
                events.push(PointerEvent::Down(local(pos)));
                self.dragging = true;
                self.last_pos = Some(pos);
            }
        }

        if !self.dragging {
            return events;
        }

        let pos = sample.pos.or(self.last_pos);
        if let Some(pos) = pos {
            if Some(pos) != self.last_pos {
                events.push(PointerEvent::Move(local(pos)));
                self.last_pos = Some(pos);
            }
        }

        if sample.released {
            if let Some(pos) = pos {
                events.push(PointerEvent::Up(local(pos)));
            }
            self.dragging = false;
            self.last_pos = None;
        }

        events
    }
}
