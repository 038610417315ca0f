use crate::config::Rounding;
use crate::types::{LineSegment, Point};
use std::f64::consts::PI;

/// Orientation correction: slicing starts at +y, which is the bottom of the
/// screen, so every endpoint is turned half a revolution.
const FLIP_DEG: f64 = 180.0;

#[inline]
fn snap(v: f64, rounding: Rounding) -> f64 {
    match rounding {
        // ties to even, so x.5 pixels don't all drift the same way
        Rounding::Pixel => v.round_ties_even(),
        Rounding::Exact => v,
    }
}

// Slice a circle of `radius` into `axis_count` equal angles and return one
// origin-relative endpoint per axis, first axis pointing at the top.
pub fn unit_endpoints(axis_count: usize, radius: f64, rounding: Rounding) -> Vec<Point> {
    if axis_count == 0 {
        return vec![];
    }
    let slice = 2.0 * PI / axis_count as f64;
    (0..axis_count)
        .map(|i| {
            let angle = slice * i as f64;
            Point {
                x: snap(radius * angle.sin(), rounding),
                y: snap(radius * angle.cos(), rounding),
            }
            .rotate(FLIP_DEG)
        })
        .collect()
}

#[inline]
pub fn to_physical(points: &[Point], origin: Point) -> Vec<Point> {
    points.iter().map(|&p| p + origin).collect()
}

/// Close a polygon: segment `i` joins point `i` to point `(i + 1) % n`.
pub fn build_path(points: &[Point]) -> Vec<LineSegment> {
    let n = points.len();
    (0..n)
        .map(|i| LineSegment::new(points[i], points[(i + 1) % n]))
        .collect()
}

pub fn build_spokes(origin: Point, tips: &[Point]) -> Vec<LineSegment> {
    tips.iter().map(|&b| LineSegment::new(origin, b)).collect()
}

/// Replace anything above `max` with `max`.
pub fn clamp_values(values: &mut [f64], max: f64) {
    for v in values.iter_mut() {
        if *v > max {
            *v = max;
        }
    }
}

pub fn value_fractions(values: &[f64], max: f64) -> Vec<f64> {
    values.iter().map(|v| v / max).collect()
}

// Scale each un-translated endpoint by its fraction, then translate.
pub fn data_points(endpoints: &[Point], fractions: &[f64], origin: Point) -> Vec<Point> {
    endpoints
        .iter()
        .zip(fractions)
        .map(|(&e, &f)| e.scale(f) + origin)
        .collect()
}
