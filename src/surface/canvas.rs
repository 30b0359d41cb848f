use std::collections::BTreeMap;

use egui::{Color32, Painter, Pos2, Rect, Shape};

use super::{Handle, RenderSurface};
use crate::style::Style;
use crate::tools::ShapeKind;

/// A painted object retained by [`CanvasSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasItem {
    Shape {
        kind: ShapeKind,
        from: Pos2,
        to: Pos2,
        style: Style,
    },
    Segment {
        from: Pos2,
        to: Pos2,
        style: Style,
    },
}

impl CanvasItem {
    /// Paint this item with canvas-local coordinates shifted by `origin`.
    fn paint(&self, painter: &Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        match self {
            CanvasItem::Shape { kind, from, to, style } => {
                let (from, to) = (*from + offset, *to + offset);
                match kind {
                    ShapeKind::Rectangle => {
                        painter.rect(Rect::from_two_pos(from, to), 0.0, style.fill, style.egui_stroke());
                    }
                    ShapeKind::Oval => {
                        let rect = Rect::from_two_pos(from, to);
                        let radius = rect.size() / 2.0;
                        painter.add(Shape::ellipse_filled(rect.center(), radius, style.fill));
                        painter.add(Shape::ellipse_stroke(rect.center(), radius, style.egui_stroke()));
                    }
                    ShapeKind::Line => {
                        painter.line_segment([from, to], style.egui_stroke());
                    }
                }
            }
            CanvasItem::Segment { from, to, style } => {
                painter.line_segment([*from + offset, *to + offset], style.egui_stroke());
            }
        }
    }
}

/// Retained-mode egui canvas.
///
/// Items are kept until erased and repainted every frame in the order they
/// were drawn. Handles come from a per-canvas counter, so they grow with
/// draw order and are never reused.
#[derive(Debug)]
pub struct CanvasSurface {
    items: BTreeMap<Handle, CanvasItem>,
    next_id: u64,
    background: Color32,
}

impl Default for CanvasSurface {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl CanvasSurface {
    pub fn new(background: Color32) -> Self {
        Self {
            items: BTreeMap::new(),
            next_id: 1,
            background,
        }
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    pub fn set_background(&mut self, color: Color32) {
        self.background = color;
    }

    /// Number of live items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, handle: Handle) -> Option<&CanvasItem> {
        self.items.get(&handle)
    }

    /// Live items in draw order
    pub fn items(&self) -> impl Iterator<Item = (Handle, &CanvasItem)> {
        self.items.iter().map(|(handle, item)| (*handle, item))
    }

    /// Fill `rect` with the background and paint every live item inside it.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, self.background);
        let painter = painter.with_clip_rect(rect);
        for item in self.items.values() {
            item.paint(&painter, rect.min);
        }
    }

    fn insert(&mut self, item: CanvasItem) -> Handle {
        let handle = Handle::from_raw(self.next_id);
        self.next_id += 1;
        self.items.insert(handle, item);
        handle
    }
}

impl RenderSurface for CanvasSurface {
    fn draw_shape(&mut self, kind: ShapeKind, from: Pos2, to: Pos2, style: &Style) -> Handle {
        self.insert(CanvasItem::Shape {
            kind,
            from,
            to,
            style: *style,
        })
    }

    fn draw_segment(&mut self, from: Pos2, to: Pos2, style: &Style) -> Handle {
        self.insert(CanvasItem::Segment {
            from,
            to,
            style: *style,
        })
    }

    fn erase(&mut self, handle: Handle) {
        if self.items.remove(&handle).is_none() {
            log::debug!("Erase of unknown canvas item {:?} ignored", handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_handles_follow_draw_order() {
        let mut canvas = CanvasSurface::default();
        let style = Style::default();
        let a = canvas.draw_shape(ShapeKind::Oval, pos2(0.0, 0.0), pos2(4.0, 4.0), &style);
        let b = canvas.draw_segment(pos2(1.0, 1.0), pos2(2.0, 2.0), &style);
        assert!(a < b);

        let order: Vec<Handle> = canvas.items().map(|(handle, _)| handle).collect();
        assert_eq!(order, vec![a, b]);
        assert_eq!(
            canvas.get(b),
            Some(&CanvasItem::Segment {
                from: pos2(1.0, 1.0),
                to: pos2(2.0, 2.0),
                style,
            })
        );
    }

    #[test]
    fn test_erase_is_idempotent() {
        let mut canvas = CanvasSurface::default();
        let handle = canvas.draw_segment(pos2(0.0, 0.0), pos2(1.0, 0.0), &Style::default());
        assert_eq!(canvas.len(), 1);

        canvas.erase(handle);
        canvas.erase(handle);
        canvas.erase(Handle::from_raw(999));
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_handles_are_not_reused() {
        let mut canvas = CanvasSurface::default();
        let style = Style::default();
        let first = canvas.draw_segment(pos2(0.0, 0.0), pos2(1.0, 0.0), &style);
        canvas.erase(first);
        let second = canvas.draw_segment(pos2(0.0, 0.0), pos2(1.0, 0.0), &style);
        assert_ne!(first, second);
    }

    #[test]
    fn test_paint_degenerate_shapes() {
        let mut canvas = CanvasSurface::new(Color32::LIGHT_GRAY);
        let style = Style::default();
        let p = pos2(10.0, 10.0);
        for kind in [ShapeKind::Rectangle, ShapeKind::Oval, ShapeKind::Line] {
            canvas.draw_shape(kind, p, p, &style);
        }
        canvas.draw_shape(ShapeKind::Rectangle, pos2(50.0, 40.0), pos2(10.0, 10.0), &style);

        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);
        canvas.paint(&painter, rect);
        assert_eq!(canvas.len(), 4);
    }
}
