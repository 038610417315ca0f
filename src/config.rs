use std::collections::HashSet;

use crate::error::{ConfigurationError, Result};

pub const MIN_RING: u8 = 1;
pub const MAX_RING: u8 = 9;

/// How axis endpoints are snapped before the orientation correction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Rounding {
    /// Round to whole pixels.
    #[default]
    Pixel,
    /// Keep full floating point precision.
    Exact,
}

/// Which line groups a renderer should draw. The engine computes all of
/// them regardless.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSet {
    pub chart: bool,
    pub data: bool,
    pub spokes: bool,
}

impl Default for LineSet {
    fn default() -> Self {
        Self {
            chart: true,
            data: true,
            spokes: true,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Margin {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}
impl Margin {
    pub fn uniform(px: u32) -> Self {
        Self {
            top: px,
            bottom: px,
            left: px,
            right: px,
        }
    }
}

/// Settings for the SVG output, outside the chart geometry.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Room around the chart square for labels.
    pub margin: Margin,
    /// Distance from an axis tip to its label anchor.
    pub label_offset: f64,
    pub css_path: Option<String>,
}
impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            margin: Margin::uniform(40),
            label_offset: 12.0,
            css_path: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RadarConfig {
    /// Width and height of the square chart area in pixels.
    pub size: f64,
    /// Value drawn at 100% of the radius.
    pub max_value: f64,
    pub labels: Option<Vec<String>>,
    /// Inner web rings in tenths of the radius, 1..=9.
    pub ring_selectors: Vec<u8>,
    /// Replace values above `max_value` with `max_value`.
    pub clamp_to_max: bool,
    pub rounding: Rounding,
    pub lines: LineSet,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            size: 200.0,
            max_value: 100.0,
            labels: None,
            ring_selectors: Vec::new(),
            clamp_to_max: false,
            rounding: Rounding::Pixel,
            lines: LineSet::default(),
        }
    }
}

impl RadarConfig {
    /// Checks everything that does not depend on the values.
    pub fn validate(&self) -> Result<()> {
        if let Some(labels) = &self.labels {
            if labels.is_empty() {
                return Err(ConfigurationError::EmptyLabels);
            }
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ConfigurationError::InvalidSize(self.size));
        }
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(ConfigurationError::InvalidMaxValue(self.max_value));
        }
        validate_rings(&self.ring_selectors)
    }
}

pub fn validate_rings(rings: &[u8]) -> Result<()> {
    for &r in rings {
        if !(MIN_RING..=MAX_RING).contains(&r) {
            return Err(ConfigurationError::RingOutOfRange(r));
        }
    }
    let mut seen = HashSet::new();
    for &r in rings {
        if !seen.insert(r) {
            return Err(ConfigurationError::DuplicateRing(r));
        }
    }
    Ok(())
}
