use egui::{Painter, Pos2, Rect, Shape, Stroke as EguiStroke, Vec2};
use serde::{Deserialize, Serialize};

use super::Element;
use super::common::{self, Style};
use crate::geometry::{self, Path};

/// A freehand stroke backed by a quad-smoothed [`Path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    id: usize,
    path: Path,
    style: Style,
    offset: Vec2,
    rotation: f32,
}

impl Freehand {
    pub fn new(path: Path, style: Style) -> Self {
        Self {
            id: common::next_element_id(),
            path,
            style,
            offset: Vec2::ZERO,
            rotation: 0.0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Center of the untransformed geometry, the pivot for rotation.
    fn pivot(&self) -> Pos2 {
        geometry::point_bounds(&self.path.flatten(), 0.0).center()
    }

    /// Flattened points with the current transform applied. The stored
    /// path itself is never touched.
    fn transformed_points(&self) -> Vec<Pos2> {
        let pivot = self.pivot();
        self.path
            .flatten()
            .into_iter()
            .map(|p| geometry::rotate_about(p, pivot, self.rotation) + self.offset)
            .collect()
    }
}

impl Element for Freehand {
    fn id(&self) -> usize {
        self.id
    }

    fn kind_name(&self) -> &'static str {
        "freehand"
    }

    fn bounds(&self) -> Rect {
        if self.path.is_empty() {
            return Rect::NOTHING;
        }
        geometry::point_bounds(&self.transformed_points(), self.style.width / 2.0)
    }

    fn draw(&self, painter: &Painter, layer_opacity: u8) {
        let points = self.transformed_points();
        let color = self.style.effective_color(layer_opacity);
        match points.len() {
            0 => {}
            1 => {
                // A dot: a single anchor with no segments.
                painter.circle_filled(points[0], self.style.width / 2.0, color);
            }
            _ => {
                painter.add(Shape::line(points, EguiStroke::new(self.style.width, color)));
            }
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        // Undo the transform on the query point instead of transforming
        // every path point.
        let local = geometry::rotate_about(pos - self.offset, self.pivot(), -self.rotation);

        let points = self.path.flatten();
        let tolerance = self.style.width / 2.0 + common::HIT_TEST_SLOP;
        match points.len() {
            0 => false,
            1 => points[0].distance(local) <= tolerance,
            _ => points
                .windows(2)
                .any(|pair| geometry::distance_to_segment(local, pair[0], pair[1]) <= tolerance),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        self.offset += delta;
    }

    fn rotate(&mut self, angle: f32) {
        self.rotation += angle;
    }

    fn duplicate(&self) -> Self {
        // Clone allocates a fresh path buffer; see the Path docs.
        self.clone()
    }
}
