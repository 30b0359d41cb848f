use crate::action::Action;
use crate::surface::RenderSurface;

/// Stack of committed actions for undo.
///
/// Actions are appended while drawing and popped one at a time by undo.
/// There is no redo: an undone action is dropped.
#[derive(Debug, Default)]
pub struct ActionHistory {
    actions: Vec<Action>,
}

impl ActionHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        log::debug!("History push: {} ({} handles)", action.label(), action.handles().len());
        self.actions.push(action);
    }

    /// Undo the most recent action.
    ///
    /// Returns `false` and does nothing when the history is empty.
    pub fn undo_last(&mut self, surface: &mut impl RenderSurface) -> bool {
        match self.actions.pop() {
            Some(action) => {
                log::info!("Undo {}", action.label());
                action.undo(surface);
                true
            }
            None => {
                log::debug!("Undo requested with empty history");
                false
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn last(&self) -> Option<&Action> {
        self.actions.last()
    }

    /// Committed actions, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitive::Primitive;
    use crate::stroke::StrokeBuilder;
    use crate::style::Style;
    use crate::surface::RecordingSurface;
    use crate::tools::ShapeKind;
    use egui::pos2;

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut history = ActionHistory::new();
        let mut surface = RecordingSurface::new();

        assert!(!history.undo_last(&mut surface));
        assert!(history.is_empty());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn test_undo_pops_only_the_last_action() {
        let mut history = ActionHistory::new();
        let mut surface = RecordingSurface::new();
        let style = Style::default();

        let first = Primitive::draw(ShapeKind::Oval, pos2(0.0, 0.0), pos2(9.0, 9.0), style, &mut surface);
        let second = Primitive::draw(ShapeKind::Line, pos2(1.0, 1.0), pos2(2.0, 2.0), style, &mut surface);
        let (first_handle, second_handle) = (first.handle(), second.handle());
        history.push(first.into());
        history.push(second.into());

        assert!(history.undo_last(&mut surface));
        assert_eq!(history.len(), 1);
        assert_eq!(surface.erased(), vec![second_handle]);
        assert!(surface.is_live(first_handle));
        assert_eq!(history.last().map(Action::label), Some("Oval"));
    }

    #[test]
    fn test_empty_stroke_still_consumes_an_undo() {
        let mut history = ActionHistory::new();
        let mut surface = RecordingSurface::new();
        let rect = Primitive::draw(
            ShapeKind::Rectangle,
            pos2(0.0, 0.0),
            pos2(5.0, 5.0),
            Style::default(),
            &mut surface,
        );
        let rect_handle = rect.handle();
        history.push(rect.into());
        history.push(StrokeBuilder::new(Style::default()).finish().into());

        assert!(history.undo_last(&mut surface));
        assert_eq!(history.len(), 1);
        assert!(surface.erased().is_empty());
        assert!(surface.is_live(rect_handle));
    }
}
