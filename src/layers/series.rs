use svg::node::element::{Circle, Group};

use crate::context::ChartContext;
use crate::layers::{Layer, group_with_class, polygon};

/// The plotted values: a filled polygon plus a marker on each vertex.
pub struct SeriesLayer {
    marker_radius: f64,
}
impl SeriesLayer {
    pub fn new() -> Self {
        Self { marker_radius: 2.5 }
    }
}

impl Layer for SeriesLayer {
    fn render(&self, context: &ChartContext<'_>) -> Group {
        let mut g = group_with_class("series");
        if !context.layout.lines().data {
            return g;
        }
        g = g.add(polygon("data", context.layout.data_polygon()));
        for p in context.layout.data_points() {
            g = g.add(
                Circle::new()
                    .set("class", "marker")
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", self.marker_radius),
            );
        }
        g
    }
}
