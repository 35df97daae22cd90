use egui::{Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};
use serde::{Deserialize, Serialize};

use super::Element;
use super::common::{self, Style};
use crate::geometry;

/// An axis-aligned rectangle, stored normalized (min is the top-left
/// corner regardless of which way it was dragged out).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectShape {
    id: usize,
    rect: Rect,
    style: Style,
    offset: Vec2,
    rotation: f32,
}

impl RectShape {
    pub fn new(rect: Rect, style: Style) -> Self {
        Self {
            id: common::next_element_id(),
            // from_two_pos normalizes min/max for any drag direction.
            rect: Rect::from_two_pos(rect.min, rect.max),
            style,
            offset: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The four corners with the current transform applied.
    fn transformed_corners(&self) -> [Pos2; 4] {
        let pivot = self.rect.center();
        let corners = [
            self.rect.left_top(),
            self.rect.right_top(),
            self.rect.right_bottom(),
            self.rect.left_bottom(),
        ];
        corners.map(|c| geometry::rotate_about(c, pivot, self.rotation) + self.offset)
    }
}

impl Element for RectShape {
    fn id(&self) -> usize {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "rect"
    }

    fn bounds(&self) -> Rect {
        geometry::point_bounds(&self.transformed_corners(), self.style.width / 2.0)
    }

    fn draw(&self, painter: &Painter, layer_opacity: u8) {
        let color = self.style.effective_color(layer_opacity);
        let stroke = EguiStroke::new(self.style.width, color);

        if self.rotation == 0.0 {
            let rect = self.rect.translate(self.offset);
            if self.style.filled {
                painter.rect_filled(rect, 0.0, color);
            } else {
                painter.rect_stroke(rect, 0.0, stroke);
            }
        } else {
            let corners = self.transformed_corners().to_vec();
            if self.style.filled {
                painter.add(Shape::convex_polygon(corners, color, EguiStroke::NONE));
            } else {
                painter.add(Shape::closed_line(corners, stroke));
            }
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let local = geometry::rotate_about(pos - self.offset, self.rect.center(), -self.rotation);
        let tolerance = self.style.width / 2.0 + common::HIT_TEST_SLOP;
        if self.style.filled {
            self.rect.expand(tolerance).contains(local)
        } else {
            // On the border: inside the expanded rect but not inside the
            // shrunk one.
            self.rect.expand(tolerance).contains(local)
                && !self.rect.shrink(tolerance).contains(local)
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
    }

    fn duplicate(&self) -> Self {
        *self
    }
}
