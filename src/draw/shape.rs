//! Polyline shape definition, geometry and hit testing.

use super::color::Color;
use std::fmt;

/// Opaque handle for a shape living on a [`Surface`](super::Surface).
///
/// Ids are allocated by the surface and never reused, so commands can keep
/// referring to a shape after it has been removed and re-added.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub u64);

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A 2D coordinate in canvas space.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned bounds of a shape, expanded to cover the stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Returns a copy grown evenly in all directions by `amount`.
    pub fn inflate(self, amount: f64) -> Self {
        Self {
            min_x: self.min_x - amount,
            min_y: self.min_y - amount,
            max_x: self.max_x + amount,
            max_y: self.max_y + amount,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.min_x..=self.max_x).contains(&point.x) && (self.min_y..=self.max_y).contains(&point.y)
    }
}

/// An open polyline: ordered points with a stroke color and width.
///
/// While a polyline is being built (the *transient* phase) its last point is
/// the provisional point that follows the pointer; the methods documented as
/// transient-only maintain that layout. Committed polylines hold real points
/// only.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// Vertices in drawing order
    points: Vec<Point>,
    /// Stroke color
    pub color: Color,
    /// Stroke width in pixels
    pub width: f64,
}

impl Polyline {
    pub fn new(points: Vec<Point>, color: Color, width: f64) -> Self {
        Self {
            points,
            color,
            width,
        }
    }

    /// Starts a transient polyline: one real point duplicated as the provisional point.
    pub fn starting_at(point: Point, color: Color, width: f64) -> Self {
        Self::new(vec![point, point], color, width)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Moves the provisional point to `point` (transient only).
    pub fn track_pointer(&mut self, point: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = point;
        }
    }

    /// Pins the provisional point at `point` as a real vertex and starts a new
    /// provisional point at the same position (transient only).
    pub fn commit_provisional(&mut self, point: Point) {
        self.track_pointer(point);
        self.points.push(point);
    }

    /// Drops the provisional point, leaving only real vertices.
    pub fn strip_provisional(&mut self) -> Option<Point> {
        self.points.pop()
    }

    /// Removes the last real vertex while keeping the provisional point
    /// (transient only). Returns the removed vertex.
    pub fn remove_last_real(&mut self) -> Option<Point> {
        if self.points.len() < 2 {
            return None;
        }
        let index = self.points.len() - 2;
        Some(self.points.remove(index))
    }

    /// Returns the axis-aligned bounding box, expanded to cover stroke width.
    ///
    /// Returns `None` for a polyline without points.
    pub fn bounding_box(&self) -> Option<Bounds> {
        bounding_box_for_points(&self.points, self.width)
    }

    /// Shortest distance from `point` to any segment of the polyline.
    pub fn distance_to(&self, point: Point) -> Option<f64> {
        match self.points.as_slice() {
            [] => None,
            [only] => Some(only.distance_to(point)),
            points => points
                .windows(2)
                .map(|segment| distance_to_segment(point, segment[0], segment[1]))
                .reduce(f64::min),
        }
    }

    /// Returns true when `point` lies on the stroke, allowing `tolerance`
    /// extra pixels beyond half the stroke width.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        let reach = self.width / 2.0 + tolerance;
        let Some(bounds) = self.bounding_box() else {
            return false;
        };
        if !bounds.inflate(tolerance).contains(point) {
            return false;
        }
        self.distance_to(point).is_some_and(|d| d <= reach)
    }
}

fn stroke_padding(width: f64) -> f64 {
    (width / 2.0).max(0.5)
}

pub(crate) fn bounding_box_for_points(points: &[Point], width: f64) -> Option<Bounds> {
    let (first, rest) = points.split_first()?;
    let mut bounds = Bounds {
        min_x: first.x,
        min_y: first.y,
        max_x: first.x,
        max_y: first.y,
    };

    for point in rest {
        bounds.min_x = bounds.min_x.min(point.x);
        bounds.max_x = bounds.max_x.max(point.x);
        bounds.min_y = bounds.min_y.min(point.y);
        bounds.max_y = bounds.max_y.max(point.y);
    }

    Some(bounds.inflate(stroke_padding(width)))
}

fn distance_to_segment(point: Point, start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return point.distance_to(start);
    }

    let t = (((point.x - start.x) * dx + (point.y - start.y) * dy) / length_sq).clamp(0.0, 1.0);
    point.distance_to(Point::new(start.x + t * dx, start.y + t * dy))
}
