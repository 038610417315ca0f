use std::fs;

use svg::Document;
use svg::node::element::{Group, Style};
use tracing::warn;

use crate::config::RenderConfig;
use crate::context::ChartContext;
use crate::layers::{Layer, LabelsLayer, OutlineLayer, SeriesLayer, SpokesLayer, WebLayer};
use crate::layout::RadarLayout;

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/radar.css"));

/// SVG rendering of a [`RadarLayout`].
pub struct RadarChart<'a> {
    pub context: ChartContext<'a>,
}

impl<'a> RadarChart<'a> {
    pub fn new(layout: &'a RadarLayout, cfg: RenderConfig) -> Self {
        Self {
            context: ChartContext::new(layout, cfg),
        }
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.context.cfg.css_path {
            match fs::read_to_string(path) {
                Ok(text) => return text,
                Err(e) => warn!("could not read css {path}: {e}, using embedded style"),
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    pub fn draw_document(&self) -> Document {
        // Layer stack, back to front
        let layers: Vec<Box<dyn Layer>> = vec![
            Box::new(OutlineLayer::new()),
            Box::new(WebLayer::new()),
            Box::new(SpokesLayer::new()),
            Box::new(SeriesLayer::new()),
            Box::new(LabelsLayer::new()),
        ];

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", self.context.page_width())
            .set("height", self.context.page_height())
            .set("class", "radar");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        let mut chart = Group::new().set("transform", self.context.chart_transform());
        for layer in layers {
            chart = chart.add(layer.render(&self.context));
        }
        doc.add(chart)
    }

    pub fn to_file(&self, path: &str) -> std::io::Result<()> {
        let doc = self.draw_document();
        svg::save(path, &doc)
    }
}
