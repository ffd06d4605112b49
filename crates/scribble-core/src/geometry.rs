//! Distance and point-in-shape tests.

use crate::shapes::{Shape, ShapeKind};
use kurbo::Point;

/// Slack allowed by the segment proximity test, in surface units.
pub const HIT_TOLERANCE: f64 = 1.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).hypot()
}

/// Triangle-inequality slack of `c` against the segment `a`→`b`.
///
/// Zero when `c` lies on the segment, increasingly negative as `c` moves away.
pub fn segment_slack(a: Point, b: Point, c: Point) -> f64 {
    distance(a, b) - (distance(a, c) + distance(b, c))
}

/// Check whether `point` counts as "on" the shape.
///
/// Rectangles are hit anywhere inside their normalized box, edges included.
/// Lines, circles and ellipses are hit near the segment between the two
/// corners. For circles and ellipses that segment is the bounding-box
/// diagonal, not the drawn curve.
pub fn is_within_shape<D>(point: Point, shape: &Shape<D>) -> bool {
    match shape.kind() {
        ShapeKind::Rectangle => within_box(point, shape.start(), shape.end()),
        ShapeKind::Line | ShapeKind::Circle | ShapeKind::Ellipse => {
            near_segment(point, shape.start(), shape.end())
        }
    }
}

/// Find the first shape in store order that `point` hits.
///
/// Earlier shapes win over later ones when they overlap.
pub fn find_shape_at<D>(point: Point, shapes: &[Shape<D>]) -> Option<&Shape<D>> {
    shapes.iter().find(|shape| is_within_shape(point, shape))
}

fn within_box(point: Point, a: Point, b: Point) -> bool {
    let (min_x, max_x) = (a.x.min(b.x), a.x.max(b.x));
    let (min_y, max_y) = (a.y.min(b.y), a.y.max(b.y));
    point.x >= min_x && point.x <= max_x && point.y >= min_y && point.y <= max_y
}

fn near_segment(point: Point, a: Point, b: Point) -> bool {
    segment_slack(a, b, point).abs() < HIT_TOLERANCE
}
