use crate::PaintApp;

/// The canvas: allocates a painter over the remaining space, feeds
/// pointer input to the active tool and renders the document.
pub fn central_panel(app: &mut PaintApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let canvas = response.rect;

        app.set_canvas_rect(canvas);
        app.handle_canvas_input(ctx);
        app.render_canvas(&painter, canvas);
    });
}
