use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds a color from 8-bit channels, e.g. palette entries written as
    /// `#rrggbbaa` hex in the host stylesheet.
    #[must_use]
    pub const fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::rgba(
            red as f64 / 255.0,
            green as f64 / 255.0,
            blue as f64 / 255.0,
            alpha as f64 / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one scatter marker in pixel space.
///
/// `source_index` points back into the row slice the frame was built from so
/// hover hit-testing can recover the underlying record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointPrimitive {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
    pub opacity: f64,
    pub source_index: usize,
}

impl PointPrimitive {
    #[must_use]
    pub const fn new(x: f64, y: f64, radius: f64, color: Color, source_index: usize) -> Self {
        Self {
            x,
            y,
            radius,
            color,
            opacity: 1.0,
            source_index,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "point coordinates must be finite".to_owned(),
            ));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and > 0".to_owned(),
            ));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(ChartError::InvalidData(
                "point opacity must be finite and in [0, 1]".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Which plot edge an axis tick belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisSide {
    Bottom,
    Left,
}

/// Draw command for one axis tick: a zero-length mark plus its label,
/// offset from the axis line by `label_padding_px`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickPrimitive {
    pub side: AxisSide,
    /// Pixel position along the axis (x for bottom, y for left).
    pub offset: f64,
    pub label: String,
    pub label_padding_px: f64,
}

impl TickPrimitive {
    #[must_use]
    pub fn new(side: AxisSide, offset: f64, label: impl Into<String>, label_padding_px: f64) -> Self {
        Self {
            side,
            offset,
            label: label.into(),
            label_padding_px,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.offset.is_finite() {
            return Err(ChartError::InvalidData(
                "tick offset must be finite".to_owned(),
            ));
        }
        if self.label.is_empty() {
            return Err(ChartError::InvalidData(
                "tick label must not be empty".to_owned(),
            ));
        }
        if !self.label_padding_px.is_finite() || self.label_padding_px < 0.0 {
            return Err(ChartError::InvalidData(
                "tick label padding must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    /// Clockwise rotation in degrees around (x, y); the growth-rate axis
    /// title uses -90.
    pub rotation_deg: f64,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            rotation_deg: 0.0,
            h_align,
        }
    }

    #[must_use]
    pub fn rotated(mut self, rotation_deg: f64) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() || !self.rotation_deg.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One legend swatch and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color, x: f64, y: f64, font_size_px: f64) -> Self {
        Self {
            label: label.into(),
            color,
            x,
            y,
            font_size_px,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.label.is_empty() {
            return Err(ChartError::InvalidData(
                "legend label must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "legend coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "legend font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
