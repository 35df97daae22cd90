use egui::Slider;
use uuid::Uuid;

use crate::PaintApp;
use crate::command::Command;
use crate::layer::Layer;

struct LayerRow {
    id: Uuid,
    name: String,
    visible: bool,
    opacity: u8,
    element_count: usize,
}

pub fn layers_panel(app: &mut PaintApp, ctx: &egui::Context) {
    // Snapshot the rows up front so the UI pass does not hold a borrow
    // of the document while queueing commands.
    let rows: Vec<LayerRow> = app
        .document()
        .layers()
        .iter()
        .map(|layer| LayerRow {
            id: layer.id,
            name: layer.name.clone(),
            visible: layer.visible,
            opacity: layer.opacity,
            element_count: layer.elements().len(),
        })
        .collect();
    let active_id = app.document().active_layer_id();
    let can_remove = rows.len() > 1;

    let mut pending: Vec<Command> = Vec::new();

    egui::SidePanel::right("layers_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            ui.heading("Layers");

            ui.horizontal(|ui| {
                if ui.button("Add").clicked() {
                    pending.push(Command::AddLayer {
                        layer: Layer::new(&format!("Layer {}", rows.len() + 1)),
                    });
                }
                if let Some(active) = active_id {
                    if ui
                        .add_enabled(can_remove, egui::Button::new("Remove"))
                        .clicked()
                    {
                        if let Some(index) = app.document().layer_index(active) {
                            if let Ok(layer) = app.document().layer(active) {
                                pending.push(Command::RemoveLayer {
                                    index,
                                    layer: layer.clone(),
                                });
                            }
                        }
                    }
                    if ui.button("Duplicate").clicked() {
                        if let (Some(index), Ok(layer)) = (
                            app.document().layer_index(active),
                            app.document().layer(active),
                        ) {
                            pending.push(Command::InsertLayer {
                                index: index + 1,
                                layer: layer.duplicate(),
                            });
                        }
                    }
                }
            });

            ui.separator();

            // Topmost layer first, matching the visual stacking order.
            for row in rows.iter().rev() {
                let is_active = active_id == Some(row.id);
                ui.horizontal(|ui| {
                    let mut visible = row.visible;
                    if ui.checkbox(&mut visible, "").changed() {
                        pending.push(Command::SetLayerVisibility {
                            layer_id: row.id,
                            visible,
                        });
                    }
                    let label = format!("{} ({})", row.name, row.element_count);
                    if ui.selectable_label(is_active, label).clicked() {
                        pending.push(Command::SetActiveLayer { layer_id: row.id });
                    }
                });
                let mut opacity = row.opacity;
                if ui
                    .add(Slider::new(&mut opacity, 0..=255).text("opacity"))
                    .changed()
                {
                    pending.push(Command::SetLayerOpacity {
                        layer_id: row.id,
                        opacity,
                        previous: row.opacity,
                    });
                }
            }
        });

    for command in pending {
        app.execute(command);
    }
}
