use egui::{Painter, Pos2, Rect, Stroke as EguiStroke};
use serde::{Deserialize, Serialize};

use super::Tool;
use crate::element::{ElementKind, Style, factory};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct PendingRect {
    anchor: Pos2,
    rect: Rect,
    style: Style,
}

/// Draws rectangles between two opposite corners. The rect is kept
/// normalized, so dragging in any of the four quadrant directions gives
/// `left/top = min(..)` and `right/bottom = max(..)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RectTool {
    pending: Option<PendingRect>,
}

impl RectTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// The normalized in-progress rectangle, if a gesture is underway.
    pub fn current_rect(&self) -> Option<Rect> {
        self.pending.map(|p| p.rect)
    }
}

impl Tool for RectTool {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn on_pointer_down(&mut self, pos: Pos2, style: Style) {
        self.pending = Some(PendingRect {
            anchor: pos,
            rect: Rect::from_two_pos(pos, pos),
            style,
        });
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        if let Some(pending) = &mut self.pending {
            pending.rect = Rect::from_two_pos(pending.anchor, pos);
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<ElementKind> {
        let mut pending = self.pending.take()?;
        pending.rect = Rect::from_two_pos(pending.anchor, pos);
        if pending.rect.width() == 0.0 || pending.rect.height() == 0.0 {
            return None;
        }
        Some(factory::create_rect(pending.rect, pending.style))
    }

    fn preview(&self, painter: &Painter) {
        let Some(pending) = &self.pending else {
            return;
        };
        if pending.style.filled {
            painter.rect_filled(pending.rect, 0.0, pending.style.color);
        } else {
            painter.rect_stroke(
                pending.rect,
                0.0,
                EguiStroke::new(pending.style.width, pending.style.color),
            );
        }
    }

    fn is_drawing(&self) -> bool {
        self.pending.is_some()
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
