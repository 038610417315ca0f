use crate::config::RadarConfig;
use crate::layout::RadarLayout;
use crate::types::{LineSegment, Point};

// Check that the error between a and b is close enough
pub fn approx(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

pub fn approx_point(a: Point, b: Point, eps: f64) -> bool {
    approx(a.x, b.x, eps) && approx(a.y, b.y, eps)
}

pub fn assert_closed(path: &[LineSegment]) {
    assert!(!path.is_empty(), "empty path");
    for w in path.windows(2) {
        assert_eq!(w[0].b, w[1].a, "path is not continuous");
    }
    assert_eq!(path[path.len() - 1].b, path[0].a, "path is not closed");
}

pub fn make_layout(values: Vec<f64>, patch: impl FnOnce(&mut RadarConfig)) -> RadarLayout {
    let mut cfg = RadarConfig::default();
    patch(&mut cfg);
    RadarLayout::new(cfg, values).expect("valid test layout")
}
