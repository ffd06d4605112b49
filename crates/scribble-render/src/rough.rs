//! Hand-drawn stroke generation.

use kurbo::{BezPath, Circle, Ellipse, Line, PathEl, Point, Rect, Shape as KurboShape};
use scribble_core::ShapeKind;
use serde::{Deserialize, Serialize};

/// Flattening tolerance used when converting primitives to paths.
const PATH_TOLERANCE: f64 = 0.1;

/// Options for the hand-drawn look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoughOptions {
    /// 0 = clean strokes, 1 = slight wobble, 2+ = very sketchy.
    pub roughness: f64,
    /// How far straight segments bow away from their chord.
    pub bowing: f64,
    /// Largest random displacement of an endpoint, before roughness scaling.
    pub max_randomness_offset: f64,
    pub stroke_width: f64,
    /// Base seed. Identical inputs always yield identical strokes.
    pub seed: u32,
    /// Draw every shape twice with different jitter.
    pub multi_stroke: bool,
}

impl Default for RoughOptions {
    fn default() -> Self {
        Self {
            roughness: 1.0,
            bowing: 1.0,
            max_randomness_offset: 2.0,
            stroke_width: 1.0,
            seed: 1,
            multi_stroke: true,
        }
    }
}

/// Render descriptor for one shape: the jittered strokes to paint.
#[derive(Debug, Clone, PartialEq)]
pub struct RoughDrawable {
    pub kind: ShapeKind,
    pub strokes: Vec<BezPath>,
    pub stroke_width: f64,
}

impl RoughDrawable {
    /// SVG path data for each stroke.
    pub fn svg_paths(&self) -> impl Iterator<Item = String> + '_ {
        self.strokes.iter().map(BezPath::to_svg)
    }
}

/// Builds [`RoughDrawable`]s from shape corners.
#[derive(Debug, Clone, Default)]
pub struct RoughGenerator {
    options: RoughOptions,
}

impl RoughGenerator {
    pub fn new(options: RoughOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RoughOptions {
        &self.options
    }

    /// Clean outline for a shape before any jitter is applied.
    ///
    /// Circles and ellipses are centred on the anchor corner. A circle's
    /// diameter is half the horizontal extent; an ellipse's width and height
    /// are half the horizontal and vertical extents.
    pub fn base_path(kind: ShapeKind, start: Point, end: Point) -> BezPath {
        match kind {
            ShapeKind::Line => Line::new(start, end).to_path(PATH_TOLERANCE),
            ShapeKind::Rectangle => {
                Rect::new(start.x, start.y, end.x, end.y).to_path(PATH_TOLERANCE)
            }
            ShapeKind::Circle => {
                let diameter = (end.x - start.x).abs() / 2.0;
                Circle::new(start, diameter / 2.0).to_path(PATH_TOLERANCE)
            }
            ShapeKind::Ellipse => {
                let width = (end.x - start.x).abs() / 2.0;
                let height = (end.y - start.y).abs() / 2.0;
                Ellipse::new(start, (width / 2.0, height / 2.0), 0.0).to_path(PATH_TOLERANCE)
            }
        }
    }

    /// Build the strokes for a shape.
    pub fn drawable(&self, kind: ShapeKind, start: Point, end: Point) -> RoughDrawable {
        let base = Self::base_path(kind, start, end);
        let seed = self.seed_for(kind);
        let stroke_count = if self.options.multi_stroke { 2 } else { 1 };
        let strokes = (0..stroke_count)
            .map(|index| apply_hand_drawn_effect(&base, &self.options, seed, index))
            .collect();

        RoughDrawable {
            kind,
            strokes,
            stroke_width: self.options.stroke_width,
        }
    }

    fn seed_for(&self, kind: ShapeKind) -> u32 {
        let salt: u32 = match kind {
            ShapeKind::Line => 1,
            ShapeKind::Rectangle => 2,
            ShapeKind::Circle => 3,
            ShapeKind::Ellipse => 4,
        };
        self.options.seed.wrapping_add(salt.wrapping_mul(0x9E37_79B9))
    }
}

/// Deterministic wobble source for one stroke.
///
/// Identical `(seed, stroke)` pairs always produce the same offsets.
struct Jitter {
    state: u32,
}

impl Jitter {
    fn for_stroke(seed: u32, stroke: u32) -> Self {
        // Large prime so the strokes of one shape get unrelated sequences.
        let state = seed.wrapping_add(stroke.wrapping_mul(99991));
        Self { state: state.max(1) }
    }

    /// Signed value in `[-amount, amount]`.
    fn offset(&mut self, amount: f64) -> f64 {
        // xorshift32
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        let unit = self.state as f64 / u32::MAX as f64;
        (unit * 2.0 - 1.0) * amount
    }

    fn point(&mut self, p: Point, amount: f64) -> Point {
        let dx = self.offset(amount);
        let dy = self.offset(amount);
        Point::new(p.x + dx, p.y + dy)
    }
}

/// Apply the hand-drawn effect to a path.
///
/// Straight segments get randomly offset endpoints (so corners overshoot) and
/// a bow at their midpoint; curve control points get a smaller wobble. Each
/// `stroke_index` draws from a different random sequence.
fn apply_hand_drawn_effect(
    path: &BezPath,
    options: &RoughOptions,
    seed: u32,
    stroke_index: u32,
) -> BezPath {
    let roughness = options.roughness;
    if roughness <= 0.0 {
        return path.clone();
    }

    let max_offset = roughness * options.max_randomness_offset;
    let bowing = options.bowing;

    let mut jitter = Jitter::for_stroke(seed, stroke_index);

    let mut result = BezPath::new();
    let mut last_point = Point::ZERO;

    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => {
                result.move_to(jitter.point(p, max_offset));
                last_point = p;
            }
            PathEl::LineTo(p) => {
                let chord = p - last_point;
                let len = chord.hypot();

                let bow = jitter.offset(bowing * roughness * len / 200.0);
                let perp = if len > 0.001 {
                    kurbo::Vec2::new(-chord.y / len, chord.x / len)
                } else {
                    kurbo::Vec2::ZERO
                };
                let control = last_point.midpoint(p) + perp * bow;

                result.quad_to(control, jitter.point(p, max_offset));
                last_point = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let c1 = jitter.point(p1, max_offset * 0.7);
                result.quad_to(c1, jitter.point(p2, max_offset));
                last_point = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let c1 = jitter.point(p1, max_offset * 0.5);
                let c2 = jitter.point(p2, max_offset * 0.5);
                result.curve_to(c1, c2, jitter.point(p3, max_offset));
                last_point = p3;
            }
            PathEl::ClosePath => result.close_path(),
        }
    }

    result
}
