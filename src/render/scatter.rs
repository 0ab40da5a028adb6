use tracing::debug;

use crate::config::ChartConfig;
use crate::core::{CountryRecord, ScaleSet};
use crate::error::ChartResult;
use crate::render::{
    AxisSide, LegendEntry, PlotFrame, PointPrimitive, TextHAlign, TextPrimitive, TickPrimitive,
};

/// Gap between an axis line and its tick labels.
pub const AXIS_TICK_LABEL_PADDING_PX: f64 = 10.0;

const AXIS_TITLE_FONT_PX: f64 = 14.0;

const LEGEND_PITCH_PX: f64 = 150.0;
const LEGEND_PITCH_SMALL_PX: f64 = 90.0;
const LEGEND_FONT_PX: f64 = 13.0;
const LEGEND_FONT_SMALL_PX: f64 = 10.0;

/// Builds the full declarative scene for one year's rows.
///
/// Pure with respect to its inputs: identical (rows, scales, config) always
/// produce the identical frame, and nothing is retained between passes.
pub fn build_plot_frame(
    rows: &[CountryRecord],
    scales: &ScaleSet,
    config: &ChartConfig,
) -> ChartResult<PlotFrame> {
    config.validate()?;

    let mut frame = PlotFrame::new(config.width, config.outer_height());
    frame.points = project_points(rows, scales, config)?;

    for tick in scales.x_ticks() {
        frame.ticks.push(TickPrimitive::new(
            AxisSide::Bottom,
            scales.x.project(tick)?,
            format_tick(tick),
            AXIS_TICK_LABEL_PADDING_PX,
        ));
    }
    for tick in scales.y_ticks() {
        frame.ticks.push(TickPrimitive::new(
            AxisSide::Left,
            scales.y.project(tick)?,
            format_tick(tick),
            AXIS_TICK_LABEL_PADDING_PX,
        ));
    }

    if !config.title.is_empty() {
        frame.texts.push(TextPrimitive::new(
            config.title.clone(),
            config.plot_width() / 2.0,
            -config.top / 2.0,
            AXIS_TITLE_FONT_PX,
            TextHAlign::Center,
        ));
    }
    frame.texts.push(TextPrimitive::new(
        "Population Density",
        config.plot_width() / 2.0,
        config.plot_height() + config.top + 20.0,
        AXIS_TITLE_FONT_PX,
        TextHAlign::Center,
    ));
    frame.texts.push(
        TextPrimitive::new(
            "Population Growth(%)",
            -config.left + 18.0,
            config.plot_height() / 2.0,
            AXIS_TITLE_FONT_PX,
            TextHAlign::Center,
        )
        .rotated(-90.0),
    );

    frame.legend = build_legend(config);

    debug!(
        point_count = frame.points.len(),
        tick_count = frame.ticks.len(),
        small_screen = config.is_small_screen,
        "built plot frame"
    );
    Ok(frame)
}

#[cfg(not(feature = "parallel-projection"))]
fn project_points(
    rows: &[CountryRecord],
    scales: &ScaleSet,
    config: &ChartConfig,
) -> ChartResult<Vec<PointPrimitive>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| project_point(index, row, scales, config))
        .collect()
}

#[cfg(feature = "parallel-projection")]
fn project_points(
    rows: &[CountryRecord],
    scales: &ScaleSet,
    config: &ChartConfig,
) -> ChartResult<Vec<PointPrimitive>> {
    use rayon::prelude::*;

    rows.par_iter()
        .enumerate()
        .map(|(index, row)| project_point(index, row, scales, config))
        .collect()
}

fn project_point(
    index: usize,
    row: &CountryRecord,
    scales: &ScaleSet,
    config: &ChartConfig,
) -> ChartResult<PointPrimitive> {
    Ok(PointPrimitive::new(
        scales.x.project(row.population_density)?,
        scales.y.project(row.population_growth_rate)?,
        scales.radius.project(row.population)?,
        config.palette[row.region_category().palette_index()],
        index,
    ))
}

fn build_legend(config: &ChartConfig) -> Vec<LegendEntry> {
    let (pitch, font_size) = if config.is_small_screen {
        (LEGEND_PITCH_SMALL_PX, LEGEND_FONT_SMALL_PX)
    } else {
        (LEGEND_PITCH_PX, LEGEND_FONT_PX)
    };
    let baseline = config.plot_height() + config.bottom / 2.0;

    crate::core::RegionCategory::ALL
        .iter()
        .enumerate()
        .map(|(index, category)| {
            LegendEntry::new(
                category.label(),
                config.palette[category.palette_index()],
                index as f64 * pitch,
                baseline,
                font_size,
            )
        })
        .collect()
}

/// Renders a tick value without trailing zeros ("200", "2.5").
fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let text = format!("{value:.2}");
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    }
}
