use svg::node::element::{Group, Line};

use crate::context::ChartContext;
use crate::layers::{Layer, group_with_class};

pub struct SpokesLayer;
impl SpokesLayer {
    pub fn new() -> Self {
        Self
    }
}

impl Layer for SpokesLayer {
    fn render(&self, context: &ChartContext<'_>) -> Group {
        let mut g = group_with_class("spokes");
        if !context.layout.lines().spokes {
            return g;
        }
        for s in context.layout.spokes() {
            g = g.add(
                Line::new()
                    .set("x1", s.a.x)
                    .set("y1", s.a.y)
                    .set("x2", s.b.x)
                    .set("y2", s.b.y)
                    .set("class", "spoke"),
            );
        }
        g
    }
}
