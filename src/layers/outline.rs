use svg::node::element::Group;

use crate::context::ChartContext;
use crate::layers::{Layer, group_with_class, polygon};

/// The outer chart polygon, drawn behind everything else.
pub struct OutlineLayer;
impl OutlineLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for OutlineLayer {
    fn render(&self, context: &ChartContext<'_>) -> Group {
        let mut g = group_with_class("outline");
        if context.layout.lines().chart {
            g = g.add(polygon("chart", context.layout.chart_polygon()));
        }
        g
    }
}
