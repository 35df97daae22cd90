use egui::{Painter, Pos2, Shape, Stroke as EguiStroke};
use serde::{Deserialize, Serialize};

use super::Tool;
use crate::element::{ElementKind, Style, factory};
use crate::geometry::Path;

/// Minimum cumulative pointer movement, in pixels, before a new curve
/// segment is committed. Keeps fast scribbles from producing over-dense
/// paths.
pub const FREEHAND_MIN_DISTANCE: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct PendingStroke {
    path: Path,
    /// Last raw point accepted into the path; the control point of the
    /// next smoothing segment.
    anchor: Pos2,
    style: Style,
}

/// Draws quad-smoothed freehand strokes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FreehandTool {
    pending: Option<PendingStroke>,
}

impl FreehandTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for FreehandTool {
    fn name(&self) -> &'static str {
        "Freehand"
    }

    fn on_pointer_down(&mut self, pos: Pos2, style: Style) {
        let mut path = Path::new();
        path.move_to(pos);
        self.pending = Some(PendingStroke {
            path,
            anchor: pos,
            style,
        });
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        let Some(pending) = &mut self.pending else {
            return;
        };
        if pos.distance(pending.anchor) < FREEHAND_MIN_DISTANCE {
            return;
        }
        // Smooth through the midpoint, with the previous raw point as
        // the control.
        let mid = Pos2::new(
            (pending.anchor.x + pos.x) / 2.0,
            (pending.anchor.y + pos.y) / 2.0,
        );
        pending.path.quad_to(pending.anchor, mid);
        pending.anchor = pos;
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<ElementKind> {
        let mut pending = self.pending.take()?;
        // Carry the stroke through to the release point.
        if pending.path.last_point() != Some(pos) && pos != pending.anchor {
            pending.path.line_to(pos);
        }
        // A tap with zero net movement leaves just the initial MoveTo;
        // it commits nothing.
        if pending.path.len() <= 1 {
            return None;
        }
        Some(factory::create_freehand(pending.path, pending.style))
    }

    fn preview(&self, painter: &Painter) {
        let Some(pending) = &self.pending else {
            return;
        };
        let points = pending.path.flatten();
        if points.len() >= 2 {
            painter.add(Shape::line(
                points,
                EguiStroke::new(pending.style.width, pending.style.color),
            ));
        } else {
            painter.circle_filled(pending.anchor, pending.style.width / 2.0, pending.style.color);
        }
    }

    fn is_drawing(&self) -> bool {
        self.pending.is_some()
    }

    fn cancel(&mut self) {
        self.pending = None;
    }
}
