use smallvec::SmallVec;

use crate::config::ChartConfig;
use crate::core::scale::LinearScale;
use crate::core::types::CountryRecord;
use crate::error::{ChartError, ChartResult};

/// Pixel radius bounds for point sizing.
pub const RADIUS_RANGE_PX: (f64, f64) = (3.0, 20.0);

/// Padding added on both sides of the growth-rate domain so extreme points
/// stay clear of the plot frame.
pub const GROWTH_DOMAIN_PADDING: f64 = 2.0;

/// Density-axis ticks sit on multiples of this step.
pub const X_TICK_STEP: f64 = 200.0;

const Y_TICK_TARGET_COUNT: usize = 8;

/// The three independent scales derived from one year's rows, rebuilt from
/// scratch whenever the active year or the config changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleSet {
    pub x: LinearScale,
    pub y: LinearScale,
    pub radius: LinearScale,
}

impl ScaleSet {
    /// Derives x (density to plot width), y (growth rate to inverted plot
    /// height) and radius (population to pixel band) scales.
    ///
    /// Fails with `EmptyDataset` when `rows` is empty and with
    /// `DegenerateScale` when any domain collapses to a single value.
    pub fn from_rows(rows: &[CountryRecord], config: &ChartConfig) -> ChartResult<Self> {
        config.validate()?;

        if rows.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let mut max_density = f64::NEG_INFINITY;
        let mut min_growth = f64::INFINITY;
        let mut max_growth = f64::NEG_INFINITY;
        let mut min_population = f64::INFINITY;
        let mut max_population = f64::NEG_INFINITY;

        for row in rows {
            if !row.population_density.is_finite()
                || !row.population_growth_rate.is_finite()
                || !row.population.is_finite()
            {
                return Err(ChartError::InvalidData(format!(
                    "row for `{}` has non-finite numeric fields",
                    row.country
                )));
            }
            max_density = max_density.max(row.population_density);
            min_growth = min_growth.min(row.population_growth_rate);
            max_growth = max_growth.max(row.population_growth_rate);
            min_population = min_population.min(row.population);
            max_population = max_population.max(row.population);
        }

        let x = LinearScale::new(0.0, max_density, 0.0, config.plot_width())?;
        let y = LinearScale::new(
            min_growth - GROWTH_DOMAIN_PADDING,
            max_growth + GROWTH_DOMAIN_PADDING,
            config.plot_height(),
            0.0,
        )?;
        let radius = LinearScale::new(
            min_population,
            max_population,
            RADIUS_RANGE_PX.0,
            RADIUS_RANGE_PX.1,
        )?;

        Ok(Self { x, y, radius })
    }

    /// Density-axis tick positions: multiples of 200 from zero, strictly
    /// below the domain max.
    #[must_use]
    pub fn x_ticks(&self) -> SmallVec<[f64; 8]> {
        let (_, domain_max) = self.x.domain();
        let mut ticks = SmallVec::new();
        let mut tick = 0.0;
        while tick < domain_max {
            ticks.push(tick);
            tick += X_TICK_STEP;
        }
        ticks
    }

    /// Growth-axis tick positions on a round step covering the padded domain.
    #[must_use]
    pub fn y_ticks(&self) -> SmallVec<[f64; 16]> {
        let (domain_min, domain_max) = self.y.domain();
        let step = nice_step(domain_max - domain_min, Y_TICK_TARGET_COUNT);

        let mut ticks = SmallVec::new();
        let mut tick = (domain_min / step).ceil() * step;
        while tick <= domain_max {
            ticks.push(tick);
            tick += step;
        }
        ticks
    }
}

/// Rounds `span / target_count` up to the nearest 1/2/5 decade multiple.
fn nice_step(span: f64, target_count: usize) -> f64 {
    let raw = span / target_count as f64;
    let magnitude = 10f64.powf(raw.abs().log10().floor());
    let residual = raw / magnitude;
    let factor = if residual >= 5.0 {
        10.0
    } else if residual >= 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}
