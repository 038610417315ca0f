use svg::node::element::Group;

use crate::context::ChartContext;
use crate::layers::{Layer, group_with_class, text};
use crate::types::Point;

/// One label per axis, pushed just outside the axis tip.
pub struct LabelsLayer {
    // |dx| below this (px) counts as a vertical axis
    center_tolerance: f64,
    // nudge so text sits on its baseline visually centered
    baseline_shift: f64,
}
impl LabelsLayer {
    pub fn new() -> Self {
        Self {
            center_tolerance: 1.0,
            baseline_shift: 4.0,
        }
    }

    fn anchor_for(&self, direction: Point) -> &'static str {
        if direction.x.abs() <= self.center_tolerance {
            "middle"
        } else if direction.x > 0.0 {
            "start"
        } else {
            "end"
        }
    }
}

/// Point `offset` px beyond `tip`, along the axis from `origin`.
pub fn label_anchor(origin: Point, tip: Point, offset: f64) -> Point {
    let d = tip - origin;
    let len = d.x.hypot(d.y);
    if len == 0.0 {
        return tip;
    }
    tip + d.scale(offset / len)
}

impl Layer for LabelsLayer {
    fn render(&self, context: &ChartContext<'_>) -> Group {
        let mut g = group_with_class("labels");
        let Some(labels) = context.layout.labels() else {
            return g;
        };
        let origin = context.layout.origin_point();

        // extra labels (or extra axes) are simply left out
        for (label, tip) in labels.iter().zip(context.layout.max_coordinates()) {
            let p = label_anchor(origin, *tip, context.cfg.label_offset);
            let anchor = self.anchor_for(*tip - origin);
            g = g.add(text("label", p.x, p.y + self.baseline_shift, anchor, label));
        }
        g
    }
}
