use tracing::{debug, trace};

use crate::config::ChartConfig;
use crate::core::{CountryRecord, ScaleSet, group_by_year};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverEffect, HoverState, hit_test};
use crate::render::{PlotFrame, build_plot_frame};
use crate::store::{PlotStore, RenderGate};

/// Single-threaded orchestrator tying the store, the year selector and the
/// render pipeline together.
///
/// Event entry points mirror the host surface: data-load completion
/// (`load_rows`), viewport resize (`on_resize`), year selection
/// (`select_year`) and pointer hover (`pointer_enter` / `pointer_leave`).
/// Each runs to completion before the next starts; rapid resizes are
/// last-write-wins on the published config.
#[derive(Default)]
pub struct PlotController {
    store: PlotStore,
    gate: RenderGate,
    selected_year: Option<i32>,
    hover: HoverState,
}

impl PlotController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn store(&self) -> &PlotStore {
        &self.store
    }

    #[must_use]
    pub fn store_mut(&mut self) -> &mut PlotStore {
        &mut self.store
    }

    #[must_use]
    pub fn gate(&self) -> RenderGate {
        self.gate
    }

    /// Data-load completion: groups rows by year and publishes the dataset.
    ///
    /// When no year is selected yet, the first year encountered in the data
    /// becomes the selection, matching the year-selector default.
    pub fn load_rows(&mut self, rows: Vec<CountryRecord>) {
        let groups = group_by_year(rows);
        if self.selected_year.is_none() {
            if let Some((&year, _)) = groups.first() {
                debug!(year, "defaulting selection to first year");
                self.selected_year = Some(year);
                self.gate = self.gate.on_year();
            }
        }
        self.store.publish_dataset(groups);
    }

    /// Viewport sample: recomputes the layout and publishes a fresh config
    /// snapshot. Called once on startup and again on each resize event.
    pub fn on_resize(&mut self, viewport_width: f64) -> ChartResult<()> {
        let base = self
            .store
            .latest_config()
            .cloned()
            .unwrap_or_default();
        let next = base.responsive(viewport_width)?;
        self.gate = self.gate.on_config();
        self.store.publish_config(next);
        Ok(())
    }

    /// Switches the active year; it must be one of the dataset's years.
    pub fn select_year(&mut self, year: i32) -> ChartResult<()> {
        let known = self
            .store
            .latest_dataset()
            .is_some_and(|groups| groups.contains_key(&year));
        if !known {
            return Err(ChartError::InvalidData(format!(
                "year {year} is not present in the dataset"
            )));
        }

        trace!(year, "year selected");
        self.selected_year = Some(year);
        self.gate = self.gate.on_year();
        Ok(())
    }

    /// Distinct years in dataset order, for populating the year selector.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        self.store
            .latest_dataset()
            .map(|groups| groups.keys().copied().collect())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn selected_year(&self) -> Option<i32> {
        self.selected_year
    }

    /// Total world population for the selected year, in people.
    ///
    /// Row populations are stored in thousands, hence the factor of 1000.
    pub fn world_population(&self) -> ChartResult<f64> {
        let rows = self.selected_rows()?;
        Ok(rows.iter().map(|row| row.population).sum::<f64>() * 1000.0)
    }

    /// Runs the full scale-and-render pipeline for the current selection.
    ///
    /// Returns `Ok(None)` while the gate is not yet `Ready`, i.e. before
    /// both a year and a config have arrived; scale and render failures
    /// abort the pass and surface to the caller.
    pub fn current_frame(&self) -> ChartResult<Option<PlotFrame>> {
        if !self.gate.is_ready() {
            return Ok(None);
        }

        let rows = self.selected_rows()?;
        let config = self
            .store
            .latest_config()
            .ok_or_else(|| ChartError::InvalidData("config channel is empty".to_owned()))?;

        let scales = ScaleSet::from_rows(rows, config)?;
        build_plot_frame(rows, &scales, config).map(Some)
    }

    /// Pointer entered the marker drawn for `frame.points[..]` with the
    /// given source index. Returns the tooltip/opacity side effects, or
    /// `None` when the index resolves to nothing.
    pub fn pointer_enter(&mut self, point_index: usize) -> ChartResult<Option<HoverEffect>> {
        let mut hover = self.hover;
        let effect = hover.pointer_enter(self.selected_rows()?, point_index);
        self.hover = hover;
        Ok(effect)
    }

    pub fn pointer_leave(&mut self) -> HoverEffect {
        self.hover.pointer_leave()
    }

    /// Resolves pointer pixel coordinates against a frame's markers.
    #[must_use]
    pub fn hit_test(&self, frame: &PlotFrame, pointer_x: f64, pointer_y: f64) -> Option<usize> {
        hit_test(frame, pointer_x, pointer_y)
    }

    fn selected_rows(&self) -> ChartResult<&[CountryRecord]> {
        let Some(year) = self.selected_year else {
            return Err(ChartError::EmptyDataset);
        };
        self.store
            .latest_dataset()
            .and_then(|groups| groups.get(&year))
            .map(Vec::as_slice)
            .filter(|rows| !rows.is_empty())
            .ok_or(ChartError::EmptyDataset)
    }
}
