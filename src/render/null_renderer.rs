use crate::error::ChartResult;
use crate::render::{PlotFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_point_count: usize,
    pub last_tick_count: usize,
    pub last_legend_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &PlotFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_point_count = frame.points.len();
        self.last_tick_count = frame.ticks.len();
        self.last_legend_count = frame.legend.len();
        Ok(())
    }
}
