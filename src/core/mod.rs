pub mod grouping;
pub mod scale;
pub mod scale_set;
pub mod types;

pub use grouping::{YearGroups, group_by_year};
pub use scale::LinearScale;
pub use scale_set::{GROWTH_DOMAIN_PADDING, RADIUS_RANGE_PX, ScaleSet, X_TICK_STEP};
pub use types::{CountryRecord, RegionCategory};
