use egui::color_picker::{color_edit_button_srgba, Alpha};

use crate::components::ToolButton;
use crate::tools::ToolKind;
use crate::SketchApp;

pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(180.0)
        .show(ctx, |ui| {
            ui.heading("Mode");
            let active_tool = app.session().active_tool();
            ui.horizontal(|ui| {
                for tool in ToolKind::ALL {
                    if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool);
                        app.session_mut().set_tool(tool);
                    }
                }
            });
            ui.label(format!("{} ({})", active_tool, app.session().drag_state().name()));
            ui.separator();

            ui.heading("Style");
            let mut style = *app.session().style();
            egui::Grid::new("style_grid").num_columns(2).show(ui, |ui| {
                ui.label("Color:");
                if color_edit_button_srgba(ui, &mut style.stroke, Alpha::Opaque).changed() {
                    app.session_mut().set_stroke_color(style.stroke);
                }
                ui.end_row();

                ui.label("Fill:");
                if color_edit_button_srgba(ui, &mut style.fill, Alpha::OnlyBlend).changed() {
                    app.session_mut().set_fill_color(style.fill);
                }
                ui.end_row();

                ui.label("Width:");
                if ui.add(egui::Slider::new(&mut style.width, 1.0..=20.0)).changed() {
                    app.session_mut().set_stroke_width(style.width);
                }
                ui.end_row();

                ui.label("Background:");
                let mut background = app.canvas().background();
                if color_edit_button_srgba(ui, &mut background, Alpha::Opaque).changed() {
                    app.set_background(background);
                }
                ui.end_row();
            });
            ui.separator();

            let history = app.session().history();
            let can_undo = history.can_undo();
            let last = history.last().map(|action| action.label());
            let count = history.len();

            if ui
                .add_enabled(can_undo, egui::Button::new("Undo"))
                .on_hover_text("Ctrl+Z")
                .clicked()
            {
                app.undo();
            }
            ui.label(format!("Actions: {}", count));
            if let Some(label) = last {
                ui.label(format!("Last: {}", label));
            }
        });
}
