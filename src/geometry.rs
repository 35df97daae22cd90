use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// How many line segments a quadratic curve is subdivided into when flattened.
const QUAD_FLATTEN_STEPS: usize = 8;

/// A single segment of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo(Pos2),
    LineTo(Pos2),
    QuadTo { ctrl: Pos2, end: Pos2 },
}

/// An owned buffer of path segments.
///
/// This is the backing store for freehand geometry. Cloning a `Path`
/// allocates a fresh buffer, so a clone can be mutated without the
/// original ever observing the change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, pos: Pos2) {
        self.segments.push(PathSegment::MoveTo(pos));
    }

    pub fn line_to(&mut self, pos: Pos2) {
        self.segments.push(PathSegment::LineTo(pos));
    }

    pub fn quad_to(&mut self, ctrl: Pos2, end: Pos2) {
        self.segments.push(PathSegment::QuadTo { ctrl, end });
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// The end point of the last segment, if any.
    pub fn last_point(&self) -> Option<Pos2> {
        self.segments.last().map(|segment| match segment {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => *p,
            PathSegment::QuadTo { end, .. } => *end,
        })
    }

    /// Flattens the path into a polyline, subdividing quadratic segments.
    pub fn flatten(&self) -> Vec<Pos2> {
        let mut points = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match *segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => points.push(p),
                PathSegment::QuadTo { ctrl, end } => {
                    let start = points.last().copied().unwrap_or(end);
                    for i in 1..=QUAD_FLATTEN_STEPS {
                        let t = i as f32 / QUAD_FLATTEN_STEPS as f32;
                        points.push(quad_point(start, ctrl, end, t));
                    }
                }
            }
        }
        points
    }
}

/// Evaluates a quadratic bezier at `t`.
fn quad_point(start: Pos2, ctrl: Pos2, end: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    Pos2::new(
        u * u * start.x + 2.0 * u * t * ctrl.x + t * t * end.x,
        u * u * start.y + 2.0 * u * t * ctrl.y + t * t * end.y,
    )
}

/// Axis-aligned bounding box of a set of points, expanded by `padding`.
/// Returns [`Rect::NOTHING`] for an empty set.
pub fn point_bounds(points: &[Pos2], padding: f32) -> Rect {
    if points.is_empty() {
        return Rect::NOTHING;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    )
}

/// Distance from a point to a line segment.
pub fn distance_to_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Rotates `point` around `pivot` by `angle` radians.
///
/// Screen space has y pointing down, so a positive angle turns clockwise
/// on screen.
pub fn rotate_about(point: Pos2, pivot: Pos2, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    let offset = point - pivot;
    pivot + Vec2::new(
        offset.x * cos - offset.y * sin,
        offset.x * sin + offset.y * cos,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_owns_its_segments() {
        let mut original = Path::new();
        original.move_to(Pos2::new(0.0, 0.0));
        original.line_to(Pos2::new(10.0, 10.0));

        let mut copy = original.clone();
        copy.line_to(Pos2::new(20.0, 0.0));
        copy.quad_to(Pos2::new(30.0, 0.0), Pos2::new(40.0, 10.0));

        assert_eq!(original.len(), 2);
        assert_eq!(copy.len(), 4);
        assert_eq!(original.last_point(), Some(Pos2::new(10.0, 10.0)));
    }

    #[test]
    fn flatten_subdivides_quads() {
        let mut path = Path::new();
        path.move_to(Pos2::new(0.0, 0.0));
        path.quad_to(Pos2::new(5.0, 10.0), Pos2::new(10.0, 0.0));

        let points = path.flatten();
        assert_eq!(points.len(), 1 + QUAD_FLATTEN_STEPS);
        // Endpoints are exact.
        assert_eq!(points[0], Pos2::new(0.0, 0.0));
        assert_eq!(*points.last().unwrap(), Pos2::new(10.0, 0.0));
        // The curve bends towards the control point.
        assert!(points[QUAD_FLATTEN_STEPS / 2].y > 0.0);
    }

    #[test]
    fn segment_distance_degenerate_segment() {
        let p = Pos2::new(3.0, 4.0);
        let a = Pos2::new(0.0, 0.0);
        assert_eq!(distance_to_segment(p, a, a), 5.0);
    }

    #[test]
    fn rotate_quarter_turn() {
        let rotated = rotate_about(
            Pos2::new(10.0, 0.0),
            Pos2::new(0.0, 0.0),
            std::f32::consts::FRAC_PI_2,
        );
        assert!((rotated.x - 0.0).abs() < 1e-4);
        assert!((rotated.y - 10.0).abs() < 1e-4);
    }
}
