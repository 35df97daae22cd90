use egui::{Color32, Painter, Rect};

use crate::document::Document;
use crate::tool::{Tool, ToolKind};

/// Renders the document and the active tool's in-progress preview into
/// the canvas painter.
#[derive(Debug)]
pub struct Renderer {
    background: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::WHITE,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Draws one frame: background, then layers bottom to top, then the
    /// tool preview on top of everything.
    pub fn render(&self, doc: &Document, tool: &ToolKind, painter: &Painter, canvas: Rect) {
        painter.rect_filled(canvas, 0.0, self.background);
        doc.draw(painter);
        tool.preview(painter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Pos2;

    #[test]
    fn render_empty_document() {
        let renderer = Renderer::new();
        let doc = Document::new();
        let tool = ToolKind::default();

        let ctx = egui::Context::default();
        let layer_id = egui::LayerId::background();
        let canvas = Rect::from_min_size(Pos2::ZERO, egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, layer_id, canvas);

        renderer.render(&doc, &tool, &painter, canvas);
    }
}
