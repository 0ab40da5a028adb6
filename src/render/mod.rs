mod frame;
mod null_renderer;
mod primitives;
mod scatter;

pub use frame::PlotFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisSide, Color, LegendEntry, PointPrimitive, TextHAlign, TextPrimitive, TickPrimitive,
};
pub use scatter::{AXIS_TICK_LABEL_PADDING_PX, build_plot_frame};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `PlotFrame` so
/// drawing code remains isolated from chart domain and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &PlotFrame) -> ChartResult<()>;
}
