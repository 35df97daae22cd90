use egui::{Painter, Pos2, Stroke as EguiStroke};
use serde::{Deserialize, Serialize};

use super::Tool;
use crate::element::{ElementKind, Style, factory};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct PendingCircle {
    center: Pos2,
    radius: f32,
    style: Style,
}

/// Draws circles from the center outward: the gesture start point is the
/// center, and the radius tracks the distance to the pointer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CircleTool {
    pending: Option<PendingCircle>,
}

impl CircleTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Radius of the in-progress circle, if a gesture is underway.
    pub fn current_radius(&self) -> Option<f32> {
        self.pending.map(|p| p.radius)
    }
}

impl Tool for CircleTool {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn on_pointer_down(&mut self, pos: Pos2, style: Style) {
        self.pending = Some(PendingCircle {
            center: pos,
            radius: 0.0,
            style,
        });
    }

    fn on_pointer_move(&mut self, pos: Pos2) {
        if let Some(pending) = &mut self.pending {
            pending.radius = pending.center.distance(pos);
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2) -> Option<ElementKind> {
        let mut pending = self.pending.take()?;
        pending.radius = pending.center.distance(pos);
        if pending.radius <= 0.0 {
            return None;
        }
        Some(factory::create_circle(
            pending.center,
            pending.radius,
            pending.style,
        ))
    }

    fn preview(&self, painter: &Painter) {
        let Some(pending) = &self.pending else {
            return;
        };
        if pending.style.filled {
            painter.circle_filled(pending.center, pending.radius, pending.style.color);
        } else {
            painter.circle_stroke(
                pending.center,
                pending.radius,
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
