//! scatterplot-rs: population scatter-plot engine.
//!
//! Transforms raw population rows into per-year groups, derives the three
//! linear scales for the active year (density, growth rate, radius) and
//! emits declarative render frames that stay consistent under viewport
//! resize and year switching.

pub mod api;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod ingest;
pub mod interaction;
pub mod render;
pub mod store;
pub mod telemetry;

pub use api::PlotController;
pub use config::ChartConfig;
pub use error::{ChartError, ChartResult};
