//! Radar (spider) chart layout.
//!
//! [`RadarLayout`] turns a list of values into plain line and point data:
//! the outer polygon, optional web rings, spokes and the data polygon.
//! [`RadarChart`] is an SVG consumer of that data.

pub mod chart;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod layout;
pub mod types;

#[cfg(test)]
mod test_utils;

pub use chart::RadarChart;
pub use config::{LineSet, Margin, RadarConfig, RenderConfig, Rounding};
pub use error::ConfigurationError;
pub use layout::RadarLayout;
pub use types::{LineSegment, Point};
