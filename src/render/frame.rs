use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::{LegendEntry, PointPrimitive, TextPrimitive, TickPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// A frame is rebuilt from scratch on every pass and replaces whatever was
/// drawn before; there is no incremental diffing, so rendering the same
/// inputs twice yields byte-identical frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotFrame {
    pub width: f64,
    pub height: f64,
    pub points: Vec<PointPrimitive>,
    pub ticks: Vec<TickPrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub legend: Vec<LegendEntry>,
}

impl PlotFrame {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            points: Vec::new(),
            ticks: Vec::new(),
            texts: Vec::new(),
            legend: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_point(mut self, point: PointPrimitive) -> Self {
        self.points.push(point);
        self
    }

    #[must_use]
    pub fn with_tick(mut self, tick: TickPrimitive) -> Self {
        self.ticks.push(tick);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_legend_entry(mut self, entry: LegendEntry) -> Self {
        self.legend.push(entry);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }

        for point in &self.points {
            point.validate()?;
        }
        for tick in &self.ticks {
            tick.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for entry in &self.legend {
            entry.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
            && self.ticks.is_empty()
            && self.texts.is_empty()
            && self.legend.is_empty()
    }

    /// Serializes the frame for snapshot tests and host-side inspection.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|err| ChartError::InvalidData(format!("frame serialization failed: {err}")))
    }
}
