use svg::node::element::{Group, Polygon, Text as TextEl};

use crate::context::ChartContext;
use crate::types::{LineSegment, Point, polygon_points};

pub trait Layer {
    /// Produce an SVG group for this layer.
    fn render(&self, context: &ChartContext<'_>) -> Group;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
}

/// SVG `points` attribute: "x,y x,y ...".
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn polygon(class: &str, path: &[LineSegment]) -> Polygon {
    Polygon::new()
        .set("class", class)
        .set("points", points_attr(&polygon_points(path)))
}

pub mod labels;
pub mod outline;
pub mod series;
pub mod spokes;
pub mod web;

pub use labels::LabelsLayer;
pub use outline::OutlineLayer;
pub use series::SeriesLayer;
pub use spokes::SpokesLayer;
pub use web::WebLayer;
