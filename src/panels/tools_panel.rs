use egui::Slider;

use crate::PaintApp;
use crate::tool::{Tool, ToolKind};

pub fn tools_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_name = app.active_tool().name();
            for &name in ToolKind::all_names() {
                if ui.selectable_label(active_name == name, name).clicked() {
                    app.set_active_tool_by_name(name);
                }
            }

            ui.separator();
            ui.heading("Style");

            let style = app.style_mut();
            ui.horizontal(|ui| {
                ui.label("Color:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut style.color,
                    egui::color_picker::Alpha::Opaque,
                );
            });
            ui.horizontal(|ui| {
                ui.label("Width:");
                ui.add(Slider::new(&mut style.width, 1.0..=50.0));
            });
            ui.horizontal(|ui| {
                ui.label("Opacity:");
                ui.add(Slider::new(&mut style.opacity, 0..=255));
            });
            ui.checkbox(&mut style.filled, "Filled");

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    app.save_snapshot();
                }
                if ui.button("Open").clicked() {
                    app.load_snapshot();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                let can_undo = app.history().can_undo();
                let can_redo = app.history().can_redo();

                if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                    app.undo();
                }
                if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                    app.redo();
                }
            });

            // Most recent actions first.
            let recent: Vec<&'static str> = app
                .history()
                .undo_stack()
                .iter()
                .rev()
                .take(8)
                .map(|cmd| cmd.label())
                .collect();
            if !recent.is_empty() {
                ui.separator();
                ui.label("History");
                for label in recent {
                    ui.weak(label);
                }
            }

            if let Some(status) = app.status() {
                ui.separator();
                ui.colored_label(egui::Color32::LIGHT_RED, status);
            }
        });
}
