use eframe_sketch::panels::{central_panel, tools_panel};
use eframe_sketch::{Action, ShapeKind, SketchApp};
use egui::{pos2, vec2, Event, Modifiers, PointerButton, Pos2, RawInput, Rect};

const PRESS_POS: Pos2 = pos2(350.0, 250.0);

fn frame_input(events: Vec<Event>) -> RawInput {
    RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, vec2(800.0, 600.0))),
        events,
        ..Default::default()
    }
}

fn primary(pressed: bool) -> Event {
    Event::PointerButton {
        pos: PRESS_POS,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    }
}

// Runs hover, press, release at PRESS_POS, optionally with a foreground
// area covering that point the way an open color picker does
fn click_canvas(app: &mut SketchApp, with_overlay: bool) {
    let ctx = egui::Context::default();
    let frames = [
        vec![Event::PointerMoved(PRESS_POS)],
        vec![Event::PointerMoved(PRESS_POS)],
        vec![primary(true)],
        vec![primary(false)],
    ];

    for events in frames {
        let _ = ctx.run(frame_input(events), |ctx| {
            tools_panel(app, ctx);
            if with_overlay {
                egui::Area::new(egui::Id::new("color_popup"))
                    .order(egui::Order::Foreground)
                    .fixed_pos(pos2(150.0, 100.0))
                    .show(ctx, |ui| {
                        ui.add_sized([300.0, 300.0], egui::Button::new("popup"));
                    });
            }
            central_panel(app, ctx);
        });
    }
}

#[test]
fn test_click_on_canvas_commits_shape() {
    let mut app = SketchApp::default();
    click_canvas(&mut app, false);

    assert_eq!(app.session().history().len(), 1);
    match app.session().history().last() {
        Some(Action::Primitive(primitive)) => assert_eq!(primitive.kind(), ShapeKind::Rectangle),
        other => panic!("expected a rectangle, got {:?}", other),
    }
    assert_eq!(app.canvas().len(), 1);
}

#[test]
fn test_click_on_overlay_does_not_draw_underneath() {
    let mut app = SketchApp::default();
    click_canvas(&mut app, true);

    assert!(app.session().history().is_empty());
    assert!(app.canvas().is_empty());
    assert!(!app.session().is_dragging());
}
