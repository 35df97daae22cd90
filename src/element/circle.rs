use egui::{Painter, Pos2, Rect, Stroke as EguiStroke, Vec2};
use serde::{Deserialize, Serialize};

use super::Element;
use super::common::{self, Style};

/// A circle defined by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    id: usize,
    center: Pos2,
    radius: f32,
    style: Style,
    offset: Vec2,
    rotation: f32,
}

impl Circle {
    pub fn new(center: Pos2, radius: f32, style: Style) -> Self {
        Self {
            id: common::next_element_id(),
            center,
            radius,
            style,
            offset: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Drawn center: a circle rotating about its own bounds center stays
    /// put, so only the translation offset moves it.
    fn drawn_center(&self) -> Pos2 {
        self.center + self.offset
    }
}

impl Element for Circle {
    fn id(&self) -> usize {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "circle"
    }

    fn bounds(&self) -> Rect {
        let half = self.radius + self.style.width / 2.0;
        Rect::from_center_size(self.drawn_center(), Vec2::splat(2.0 * half))
    }

    fn draw(&self, painter: &Painter, layer_opacity: u8) {
        let color = self.style.effective_color(layer_opacity);
        if self.style.filled {
            painter.circle_filled(self.drawn_center(), self.radius, color);
        } else {
            painter.circle_stroke(
                self.drawn_center(),
                self.radius,
                EguiStroke::new(self.style.width, color),
            );
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        let distance = pos.distance(self.drawn_center());
        if self.style.filled {
            distance <= self.radius + self.style.width / 2.0
        } else {
            (distance - self.radius).abs() <= self.style.width / 2.0 + common::HIT_TEST_SLOP
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    fn rotate(&mut self, angle: f32) {
        // Kept so rotation survives round-trips even though it has no
        // visible effect on a circle.
        self.rotation += angle;
    }

    fn duplicate(&self) -> Self {
        *self
    }
}
