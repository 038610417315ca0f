use svg::node::element::Group;

use crate::context::ChartContext;
use crate::layers::{Layer, group_with_class, polygon};

pub struct WebLayer;
impl WebLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for WebLayer {
    fn render(&self, context: &ChartContext<'_>) -> Group {
        let mut g = group_with_class("webs");
        for (k, ring) in context.layout.web_polygons() {
            let p = polygon("web", ring)
                .set("fill", "none")
                .set("data-ring", u32::from(*k));
            g = g.add(p);
        }
        g
    }
}
