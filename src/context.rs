use crate::config::RenderConfig;
use crate::layout::RadarLayout;

/// Everything a layer needs to draw: the computed geometry and where the
/// chart square sits on the page.
pub struct ChartContext<'a> {
    pub layout: &'a RadarLayout,
    pub cfg: RenderConfig,
}

impl<'a> ChartContext<'a> {
    pub fn new(layout: &'a RadarLayout, cfg: RenderConfig) -> Self {
        Self { layout, cfg }
    }

    pub fn page_width(&self) -> f64 {
        self.layout.size() + f64::from(self.cfg.margin.left + self.cfg.margin.right)
    }

    pub fn page_height(&self) -> f64 {
        self.layout.size() + f64::from(self.cfg.margin.top + self.cfg.margin.bottom)
    }

    /// Translation that places chart coordinates inside the margin.
    pub fn chart_transform(&self) -> String {
        format!(
            "translate({} {})",
            self.cfg.margin.left, self.cfg.margin.top
        )
    }
}
