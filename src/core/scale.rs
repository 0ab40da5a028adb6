use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear mapping from a data-domain interval to a pixel-range interval.
///
/// Unlike an axis bound to a viewport edge, the range is explicit: the x
/// scale targets the inner plot width, the y scale an inverted plot height
/// and the radius scale a fixed pixel band, all from the same type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(
        domain_start: f64,
        domain_end: f64,
        range_start: f64,
        range_end: f64,
    ) -> ChartResult<Self> {
        if !domain_start.is_finite()
            || !domain_end.is_finite()
            || !range_start.is_finite()
            || !range_end.is_finite()
        {
            return Err(ChartError::InvalidData(
                "scale domain and range must be finite".to_owned(),
            ));
        }

        if domain_start == domain_end {
            return Err(ChartError::DegenerateScale {
                value: domain_start,
            });
        }

        if range_start == range_end {
            return Err(ChartError::InvalidData(
                "scale range must span more than one pixel value".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel position.
    pub fn project(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        // Domain endpoints map to range endpoints exactly, independent of
        // rounding in the interpolation below.
        if value == self.domain_start {
            return Ok(self.range_start);
        }
        if value == self.domain_end {
            return Ok(self.range_end);
        }

        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        Ok(self.range_start + normalized * (self.range_end - self.range_start))
    }

    /// Maps a pixel position back to its domain value.
    pub fn invert(self, pixel: f64) -> ChartResult<f64> {
        if !pixel.is_finite() {
            return Err(ChartError::InvalidData("pixel must be finite".to_owned()));
        }

        let normalized = (pixel - self.range_start) / (self.range_end - self.range_start);
        Ok(self.domain_start + normalized * (self.domain_end - self.domain_start))
    }
}
