use tracing::debug;

use crate::config::{LineSet, RadarConfig, Rounding};
use crate::error::{ConfigurationError, Result};
use crate::geometry::{
    build_path, build_spokes, clamp_values, data_points, to_physical, unit_endpoints,
    value_fractions,
};
use crate::types::{LineSegment, Point};

/// Geometry that only depends on size, axis count and ring selectors.
#[derive(Debug, Clone)]
struct FixedGeometry {
    unit_endpoints: Vec<Point>,
    max_coordinates: Vec<Point>,
    chart_polygon: Vec<LineSegment>,
    spokes: Vec<LineSegment>,
    web_polygons: Vec<(u8, Vec<LineSegment>)>,
}

impl FixedGeometry {
    fn build(cfg: &RadarConfig, axis_count: usize) -> Self {
        let origin = cfg.size * 0.5;
        let origin_point = Point::new(origin, origin);

        let unit_endpoints = unit_endpoints(axis_count, origin, cfg.rounding);
        let max_coordinates = to_physical(&unit_endpoints, origin_point);
        let chart_polygon = build_path(&max_coordinates);
        let spokes = build_spokes(origin_point, &max_coordinates);

        let web_polygons = cfg
            .ring_selectors
            .iter()
            .map(|&k| {
                let radius = origin * (f64::from(k) * 0.1);
                let ring = unit_endpoints_physical(axis_count, radius, cfg.rounding, origin_point);
                (k, build_path(&ring))
            })
            .collect();

        Self {
            unit_endpoints,
            max_coordinates,
            chart_polygon,
            spokes,
            web_polygons,
        }
    }
}

fn unit_endpoints_physical(
    axis_count: usize,
    radius: f64,
    rounding: Rounding,
    origin: Point,
) -> Vec<Point> {
    to_physical(&unit_endpoints(axis_count, radius, rounding), origin)
}

/// Geometry rebuilt on every value update.
#[derive(Debug, Clone)]
struct DataGeometry {
    values: Vec<f64>,
    fractions: Vec<f64>,
    data_points: Vec<Point>,
    data_polygon: Vec<LineSegment>,
    data_origin_seeds: Vec<Point>,
}

impl DataGeometry {
    fn build(cfg: &RadarConfig, fixed: &FixedGeometry, values: Vec<f64>) -> Self {
        let origin_point = Point::new(cfg.size * 0.5, cfg.size * 0.5);
        let fractions = value_fractions(&values, cfg.max_value);
        let data_points = data_points(&fixed.unit_endpoints, &fractions, origin_point);
        let data_polygon = build_path(&data_points);
        let data_origin_seeds = vec![origin_point; data_polygon.len()];
        Self {
            values,
            fractions,
            data_points,
            data_polygon,
            data_origin_seeds,
        }
    }
}

/// Layout engine for a radar chart.
///
/// Owns configuration and values and exposes every line group as plain
/// point data. Fixed geometry (outline, rings, spokes) survives value
/// updates unless the number of axes changes.
#[derive(Debug, Clone)]
pub struct RadarLayout {
    cfg: RadarConfig,
    fixed: FixedGeometry,
    data: DataGeometry,
}

impl RadarLayout {
    pub fn new(cfg: RadarConfig, values: Vec<f64>) -> Result<Self> {
        cfg.validate()?;
        let values = prepare_values(&cfg, values)?;
        let fixed = FixedGeometry::build(&cfg, values.len());
        let data = DataGeometry::build(&cfg, &fixed, values);
        debug!(
            axes = data.values.len(),
            rings = fixed.web_polygons.len(),
            size = cfg.size,
            "built radar layout"
        );
        Ok(Self { cfg, fixed, data })
    }

    /// Replace the values and re-derive the data polygon.
    ///
    /// A change in value count rebuilds the fixed geometry too. Nothing is
    /// published unless every step succeeds.
    pub fn set_values(&mut self, values: Vec<f64>) -> Result<()> {
        let values = prepare_values(&self.cfg, values)?;
        if values.len() != self.axis_count() {
            debug!(
                from = self.axis_count(),
                to = values.len(),
                "axis count changed, rebuilding fixed geometry"
            );
            let fixed = FixedGeometry::build(&self.cfg, values.len());
            let data = DataGeometry::build(&self.cfg, &fixed, values);
            self.fixed = fixed;
            self.data = data;
        } else {
            self.data = DataGeometry::build(&self.cfg, &self.fixed, values);
        }
        Ok(())
    }

    pub fn config(&self) -> &RadarConfig {
        &self.cfg
    }

    pub fn size(&self) -> f64 {
        self.cfg.size
    }

    /// Half the size: the radius of the outer polygon.
    pub fn origin(&self) -> f64 {
        self.cfg.size * 0.5
    }

    pub fn origin_point(&self) -> Point {
        Point::new(self.origin(), self.origin())
    }

    pub fn axis_count(&self) -> usize {
        self.data.values.len()
    }

    pub fn values(&self) -> &[f64] {
        &self.data.values
    }

    pub fn max_value(&self) -> f64 {
        self.cfg.max_value
    }

    pub fn labels(&self) -> Option<&[String]> {
        self.cfg.labels.as_deref()
    }

    pub fn lines(&self) -> LineSet {
        self.cfg.lines
    }

    /// Origin-relative axis tips at full radius.
    pub fn unit_endpoints(&self) -> &[Point] {
        &self.fixed.unit_endpoints
    }

    /// Axis tips in chart coordinates.
    pub fn max_coordinates(&self) -> &[Point] {
        &self.fixed.max_coordinates
    }

    pub fn chart_polygon(&self) -> &[LineSegment] {
        &self.fixed.chart_polygon
    }

    /// Rings in selector order, each tagged with its selector.
    pub fn web_polygons(&self) -> &[(u8, Vec<LineSegment>)] {
        &self.fixed.web_polygons
    }

    pub fn web_polygon(&self, selector: u8) -> Option<&[LineSegment]> {
        self.fixed
            .web_polygons
            .iter()
            .find(|(k, _)| *k == selector)
            .map(|(_, ring)| ring.as_slice())
    }

    pub fn spokes(&self) -> &[LineSegment] {
        &self.fixed.spokes
    }

    pub fn fractions(&self) -> &[f64] {
        &self.data.fractions
    }

    pub fn data_points(&self) -> &[Point] {
        &self.data.data_points
    }

    pub fn data_polygon(&self) -> &[LineSegment] {
        &self.data.data_polygon
    }

    /// One origin point per data edge, for growing the polygon out of the
    /// center.
    pub fn data_origin_seeds(&self) -> &[Point] {
        &self.data.data_origin_seeds
    }
}

fn prepare_values(cfg: &RadarConfig, mut values: Vec<f64>) -> Result<Vec<f64>> {
    if values.is_empty() {
        return Err(ConfigurationError::NoValues);
    }
    if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(ConfigurationError::NonFiniteValue { index, value });
    }
    if cfg.clamp_to_max {
        clamp_values(&mut values, cfg.max_value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{approx_point, assert_closed, make_layout};

    #[test]
    fn axis_count_drives_every_fixed_group() {
        for n in 1..=9 {
            let layout = make_layout(vec![1.0; n], |_| {});
            assert_eq!(layout.axis_count(), n);
            assert_eq!(layout.unit_endpoints().len(), n);
            assert_eq!(layout.chart_polygon().len(), n);
            assert_eq!(layout.spokes().len(), n);
            assert_eq!(layout.data_polygon().len(), n);
            assert_eq!(layout.data_origin_seeds().len(), n);
        }
    }

    #[test]
    fn all_polygons_are_closed() {
        let layout = make_layout(vec![3.0, 7.0, 1.0, 9.0, 4.0], |cfg| {
            cfg.max_value = 10.0;
            cfg.ring_selectors = vec![2, 5, 8];
        });
        assert_closed(layout.chart_polygon());
        assert_closed(layout.data_polygon());
        for (_, ring) in layout.web_polygons() {
            assert_closed(ring);
        }
    }

    #[test]
    fn ring_selectors_validated_at_construction() {
        let build = |rings: Vec<u8>| {
            let cfg = RadarConfig {
                ring_selectors: rings,
                ..RadarConfig::default()
            };
            RadarLayout::new(cfg, vec![1.0, 2.0, 3.0])
        };
        assert_eq!(
            build(vec![0]).unwrap_err(),
            ConfigurationError::RingOutOfRange(0)
        );
        assert_eq!(
            build(vec![10]).unwrap_err(),
            ConfigurationError::RingOutOfRange(10)
        );
        assert_eq!(
            build(vec![3, 3]).unwrap_err(),
            ConfigurationError::DuplicateRing(3)
        );

        let layout = build(vec![1, 2, 9]).unwrap();
        assert_eq!(layout.web_polygons().len(), 3);
        let selectors: Vec<u8> = layout.web_polygons().iter().map(|(k, _)| *k).collect();
        assert_eq!(selectors, vec![1, 2, 9]);
    }

    #[test]
    fn label_validation() {
        let cfg = RadarConfig {
            labels: Some(vec![]),
            ..RadarConfig::default()
        };
        assert_eq!(
            RadarLayout::new(cfg, vec![1.0]).unwrap_err(),
            ConfigurationError::EmptyLabels
        );

        let layout = RadarLayout::new(RadarConfig::default(), vec![1.0]).unwrap();
        assert!(layout.labels().is_none());

        let cfg = RadarConfig {
            labels: Some(vec!["a".into(), "b".into()]),
            ..RadarConfig::default()
        };
        let layout = RadarLayout::new(cfg, vec![1.0, 2.0]).unwrap();
        assert_eq!(layout.labels().unwrap(), ["a", "b"]);
    }

    #[test]
    fn clamp_to_max_caps_values() {
        let layout = make_layout(vec![15.0, 5.0], |cfg| {
            cfg.max_value = 10.0;
            cfg.clamp_to_max = true;
        });
        assert_eq!(layout.values(), [10.0, 5.0]);
    }

    #[test]
    fn without_clamp_values_may_exceed_max() {
        let layout = make_layout(vec![15.0, 5.0], |cfg| cfg.max_value = 10.0);
        assert_eq!(layout.values(), [15.0, 5.0]);
        assert_eq!(layout.fractions(), [1.5, 0.5]);
    }

    #[test]
    fn clamp_reapplied_on_update() {
        let mut layout = make_layout(vec![1.0, 2.0], |cfg| {
            cfg.max_value = 10.0;
            cfg.clamp_to_max = true;
        });
        layout.set_values(vec![30.0, 9.0]).unwrap();
        assert_eq!(layout.values(), [10.0, 9.0]);
    }

    #[test]
    fn data_polygon_follows_updates() {
        let mut layout = make_layout(vec![0.0; 4], |cfg| {
            cfg.size = 200.0;
            cfg.max_value = 10.0;
        });
        let o = layout.origin_point();
        for s in layout.data_polygon() {
            assert_eq!(s.a, o);
            assert_eq!(s.b, o);
        }

        let chart_before = layout.chart_polygon().to_vec();
        layout.set_values(vec![10.0; 4]).unwrap();
        for (d, c) in layout.data_polygon().iter().zip(layout.chart_polygon()) {
            assert!(approx_point(d.a, c.a, 1e-9));
            assert!(approx_point(d.b, c.b, 1e-9));
        }
        // fixed geometry untouched by a same-length update
        assert_eq!(layout.chart_polygon(), chart_before.as_slice());
    }

    #[test]
    fn alternating_values_alternate_between_tip_and_origin() {
        let layout = make_layout(vec![10.0, 0.0, 10.0, 0.0], |cfg| {
            cfg.size = 100.0;
            cfg.max_value = 10.0;
        });
        let o = layout.origin_point();
        let tips = layout.max_coordinates();
        let pts = layout.data_points();
        assert!(approx_point(pts[0], tips[0], 1e-9));
        assert!(approx_point(pts[1], o, 1e-9));
        assert!(approx_point(pts[2], tips[2], 1e-9));
        assert!(approx_point(pts[3], o, 1e-9));

        assert!(approx_point(tips[0], Point::new(50.0, 0.0), 1e-9));
        assert!(approx_point(tips[2], Point::new(50.0, 100.0), 1e-9));
    }

    #[test]
    fn spokes_run_from_origin_to_tips() {
        let layout = make_layout(vec![1.0; 6], |_| {});
        let o = layout.origin_point();
        for (s, tip) in layout.spokes().iter().zip(layout.max_coordinates()) {
            assert_eq!(s.a, o);
            assert_eq!(s.b, *tip);
        }
    }

    #[test]
    fn web_rings_scale_with_selector() {
        let layout = make_layout(vec![1.0; 4], |cfg| {
            cfg.size = 200.0;
            cfg.ring_selectors = vec![5];
        });
        let ring = layout.web_polygon(5).unwrap();
        // top vertex of the 50% ring sits halfway between origin and top edge
        assert!(approx_point(ring[0].a, Point::new(100.0, 50.0), 1e-9));
        assert!(layout.web_polygon(4).is_none());
    }

    #[test]
    fn seeds_are_origin_per_edge() {
        let layout = make_layout(vec![2.0, 4.0, 6.0], |_| {});
        let o = layout.origin_point();
        assert_eq!(layout.data_origin_seeds(), [o, o, o]);
    }

    #[test]
    fn axis_count_change_rebuilds_fixed_geometry() {
        let mut layout = make_layout(vec![1.0; 3], |cfg| cfg.ring_selectors = vec![3, 6]);
        layout.set_values(vec![1.0; 5]).unwrap();
        assert_eq!(layout.axis_count(), 5);
        assert_eq!(layout.chart_polygon().len(), 5);
        assert_eq!(layout.spokes().len(), 5);
        for (_, ring) in layout.web_polygons() {
            assert_eq!(ring.len(), 5);
        }
        assert_closed(layout.chart_polygon());
    }

    #[test]
    fn failed_update_leaves_layout_unchanged() {
        let mut layout = make_layout(vec![1.0, 2.0, 3.0], |_| {});
        let before = layout.data_polygon().to_vec();

        assert_eq!(
            layout.set_values(vec![]).unwrap_err(),
            ConfigurationError::NoValues
        );
        assert!(matches!(
            layout.set_values(vec![1.0, f64::NAN]).unwrap_err(),
            ConfigurationError::NonFiniteValue { index: 1, .. }
        ));
        assert_eq!(layout.values(), [1.0, 2.0, 3.0]);
        assert_eq!(layout.data_polygon(), before.as_slice());
    }

    #[test]
    fn empty_values_rejected_at_construction() {
        assert_eq!(
            RadarLayout::new(RadarConfig::default(), vec![]).unwrap_err(),
            ConfigurationError::NoValues
        );
    }

    #[test]
    fn zero_max_is_rejected_even_with_clamping() {
        let cfg = RadarConfig {
            max_value: 0.0,
            clamp_to_max: true,
            ..RadarConfig::default()
        };
        assert_eq!(
            RadarLayout::new(cfg, vec![1.0]).unwrap_err(),
            ConfigurationError::InvalidMaxValue(0.0)
        );
    }

    #[test]
    fn negative_values_point_through_the_origin() {
        let layout = make_layout(vec![-5.0, 0.0, 0.0, 0.0], |cfg| {
            cfg.size = 100.0;
            cfg.max_value = 10.0;
        });
        // axis 0 points up; half a negative radius lands below center
        assert!(approx_point(layout.data_points()[0], Point::new(50.0, 75.0), 1e-9));
        assert!(layout.data_points().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }

    #[test]
    fn exact_rounding_keeps_tips_on_circle() {
        let layout = make_layout(vec![1.0; 7], |cfg| {
            cfg.size = 101.0;
            cfg.rounding = Rounding::Exact;
        });
        let o = layout.origin_point();
        for tip in layout.max_coordinates() {
            let d = *tip - o;
            assert!((d.x.hypot(d.y) - 50.5).abs() < 1e-9);
        }
    }
}
