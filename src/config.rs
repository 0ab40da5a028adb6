use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Viewport widths below this switch the chart into small-screen layout.
pub const SMALL_SCREEN_THRESHOLD_PX: f64 = 700.0;

pub const DEFAULT_WIDTH_PX: f64 = 1400.0;
pub const DEFAULT_HEIGHT_PX: f64 = 450.0;

/// Point colors in region-category order: Europe and Africa, Asia and
/// Pacific, America.
pub const DEFAULT_PALETTE: [Color; 3] = [
    Color::from_rgba8(0xff, 0xda, 0x24, 0xe3),
    Color::from_rgba8(0x13, 0x99, 0xfc, 0xff),
    Color::from_rgba8(0xc8, 0x99, 0xf3, 0xff),
];

/// Chart geometry and styling shared by every render pass.
///
/// This type is serializable so host applications can persist/load chart
/// setup without inventing their own ad-hoc format. Layout recomputation
/// never mutates an existing instance: `responsive` returns a fresh snapshot
/// which the caller publishes through the store, so subscribers can never
/// observe a half-updated config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub is_small_screen: bool,
    #[serde(default = "default_palette")]
    pub palette: [Color; 3],
}

fn default_title() -> String {
    "Population Growth vs Density Correlation".to_owned()
}

fn default_palette() -> [Color; 3] {
    DEFAULT_PALETTE
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH_PX,
            height: DEFAULT_HEIGHT_PX,
            top: 20.0,
            right: 50.0,
            bottom: 80.0,
            left: 60.0,
            title: default_title(),
            is_small_screen: false,
            palette: DEFAULT_PALETTE,
        }
    }
}

impl ChartConfig {
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

        for (name, margin) in [
            ("top", self.top),
            ("right", self.right),
            ("bottom", self.bottom),
            ("left", self.left),
        ] {
            if !margin.is_finite() || margin < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "margin `{name}` must be finite and >= 0"
                )));
            }
        }

        if self.plot_width() <= 0.0 {
            return Err(ChartError::InvalidData(
                "horizontal margins leave no plot width".to_owned(),
            ));
        }

        for color in &self.palette {
            color.validate()?;
        }

        Ok(())
    }

    /// Layout policy for a sampled viewport width.
    ///
    /// Below the small-screen threshold the chart collapses to the viewport
    /// width; otherwise it pins the default 1400x450 geometry. Margins and
    /// styling carry over unchanged.
    pub fn responsive(&self, viewport_width: f64) -> ChartResult<Self> {
        if !viewport_width.is_finite() || viewport_width <= 0.0 {
            return Err(ChartError::InvalidViewport {
                width: viewport_width,
                height: self.height,
            });
        }

        let mut next = self.clone();
        if viewport_width < SMALL_SCREEN_THRESHOLD_PX {
            next.width = viewport_width;
            next.is_small_screen = true;
        } else {
            next.width = DEFAULT_WIDTH_PX;
            next.height = DEFAULT_HEIGHT_PX;
            next.is_small_screen = false;
        }
        next.validate()?;
        Ok(next)
    }

    /// Inner drawing width with both horizontal margins subtracted.
    #[must_use]
    pub fn plot_width(&self) -> f64 {
        self.width - self.left - self.right
    }

    #[must_use]
    pub fn plot_height(&self) -> f64 {
        self.height
    }

    /// Outer surface height including vertical margins.
    #[must_use]
    pub fn outer_height(&self) -> f64 {
        self.height + self.top + self.bottom
    }
}
