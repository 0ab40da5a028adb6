use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::CountryRecord;
use crate::format::format_population;
use crate::render::PlotFrame;

/// Marker opacity requested while its tooltip is open.
pub const HOVER_OPACITY: f64 = 0.9;
pub const BASE_OPACITY: f64 = 1.0;

/// Tooltip content for one hovered point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipPayload {
    pub country: String,
    pub region: String,
    pub population: String,
    pub density: f64,
    pub growth_rate: f64,
}

impl TooltipPayload {
    #[must_use]
    pub fn from_record(record: &CountryRecord) -> Self {
        Self {
            country: record.country.clone(),
            region: record.region.clone(),
            population: format_population(record.population),
            density: record.population_density,
            growth_rate: record.population_growth_rate,
        }
    }
}

/// Side-effect requests produced by one hover transition: which marker to
/// restyle, the opacity to apply and the tooltip to show (None hides it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoverEffect {
    pub point_index: Option<usize>,
    pub opacity: f64,
    pub tooltip: Option<TooltipPayload>,
}

/// Tracks which marker the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    hovered: Option<usize>,
}

impl HoverState {
    #[must_use]
    pub fn hovered(self) -> Option<usize> {
        self.hovered
    }

    /// Pointer entered the marker for `rows[point_index]`.
    ///
    /// Returns `None` when the index does not resolve to a row.
    pub fn pointer_enter(
        &mut self,
        rows: &[CountryRecord],
        point_index: usize,
    ) -> Option<HoverEffect> {
        let record = rows.get(point_index)?;
        self.hovered = Some(point_index);
        trace!(point_index, country = %record.country, "pointer enter");
        Some(HoverEffect {
            point_index: Some(point_index),
            opacity: HOVER_OPACITY,
            tooltip: Some(TooltipPayload::from_record(record)),
        })
    }

    /// Pointer left the hovered marker: restore opacity, hide the tooltip.
    pub fn pointer_leave(&mut self) -> HoverEffect {
        let left = self.hovered.take();
        trace!(?left, "pointer leave");
        HoverEffect {
            point_index: left,
            opacity: BASE_OPACITY,
            tooltip: None,
        }
    }
}

/// Nearest marker containing the pointer, by center distance.
///
/// Returns the point's source row index, or `None` when the pointer is
/// outside every marker.
#[must_use]
pub fn hit_test(frame: &PlotFrame, pointer_x: f64, pointer_y: f64) -> Option<usize> {
    frame
        .points
        .iter()
        .filter_map(|point| {
            let distance = (point.x - pointer_x).hypot(point.y - pointer_y);
            (distance <= point.radius).then_some((OrderedFloat(distance), point.source_index))
        })
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, index)| index)
}
