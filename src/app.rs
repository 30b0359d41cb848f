use egui::{Color32, Key, KeyboardShortcut, Modifiers, Response};
use serde::{Deserialize, Serialize};

use crate::config::SketchConfig;
use crate::input::PointerInput;
use crate::panels::{central_panel, tools_panel};
use crate::session::DrawingSession;
use crate::style::Style;
use crate::surface::CanvasSurface;
use crate::tools::ToolKind;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

/// Tool and color choices remembered between runs. Drawings are not saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub tool: ToolKind,
    pub style: Style,
    pub background: Color32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self::from(&SketchConfig::default())
    }
}

impl From<&SketchConfig> for Preferences {
    fn from(config: &SketchConfig) -> Self {
        Self {
            tool: config.initial_tool,
            style: config.style(),
            background: config.background_color,
        }
    }
}

pub struct SketchApp {
    session: DrawingSession,
    canvas: CanvasSurface,
    input: PointerInput,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self::with_preferences(Preferences::default())
    }
}

impl SketchApp {
    /// Called once before the first frame.
    ///
    /// Preferences saved by a previous run take precedence over `config`.
    pub fn new(cc: &eframe::CreationContext<'_>, config: SketchConfig) -> Self {
        let preferences = cc
            .storage
            .and_then(|storage| eframe::get_value::<Preferences>(storage, eframe::APP_KEY))
            .unwrap_or_else(|| Preferences::from(&config));
        Self::with_preferences(preferences)
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        Self {
            session: DrawingSession::new(preferences.tool, preferences.style),
            canvas: CanvasSurface::new(preferences.background),
            input: PointerInput::new(),
        }
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            tool: self.session.active_tool(),
            style: *self.session.style(),
            background: self.canvas.background(),
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut DrawingSession {
        &mut self.session
    }

    pub fn canvas(&self) -> &CanvasSurface {
        &self.canvas
    }

    pub fn set_background(&mut self, color: Color32) {
        self.canvas.set_background(color);
    }

    pub fn undo(&mut self) -> bool {
        self.session.undo(&mut self.canvas)
    }

    /// Feed this frame's pointer activity on the canvas widget into the session
    pub fn handle_canvas_input(&mut self, response: &Response) {
        for event in self.input.process(response) {
            self.session.handle_pointer(event, &mut self.canvas);
        }
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|input| input.consume_shortcut(&UNDO_SHORTCUT)) {
            self.undo();
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_preferences_round_trip_through_app() {
        let preferences = Preferences {
            tool: ToolKind::Line,
            style: Style::new(Color32::RED, Color32::YELLOW, 4.0),
            background: Color32::BLACK,
        };
        let app = SketchApp::with_preferences(preferences.clone());
        assert_eq!(app.preferences(), preferences);
    }

    #[test]
    fn test_undo_erases_from_canvas() {
        let mut app = SketchApp::default();
        app.session.pointer_down(pos2(10.0, 10.0));
        app.session.pointer_up(pos2(50.0, 40.0), &mut app.canvas);
        assert_eq!(app.canvas().len(), 1);

        assert!(app.undo());
        assert!(app.canvas().is_empty());
        assert!(!app.undo());
    }
}
