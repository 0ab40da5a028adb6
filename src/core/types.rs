use serde::{Deserialize, Serialize};

/// One country sample for one year.
///
/// `population` is kept in thousands, matching the dataset column
/// `Population (000s)`; callers that need absolute people counts multiply
/// by 1000 (see `api::PlotController::world_population`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub country: String,
    pub region: String,
    pub year: i32,
    pub population: f64,
    pub population_density: f64,
    pub population_growth_rate: f64,
}

impl CountryRecord {
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        region: impl Into<String>,
        year: i32,
        population: f64,
        population_density: f64,
        population_growth_rate: f64,
    ) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            year,
            population,
            population_density,
            population_growth_rate,
        }
    }

    #[must_use]
    pub fn region_category(&self) -> RegionCategory {
        RegionCategory::from_label(&self.region)
    }
}

/// Categorical color bucket for a region label.
///
/// Any label outside the two named groups falls into `America`, including
/// empty strings and unknown regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegionCategory {
    EuropeAndAfrica,
    AsiaAndPacific,
    America,
}

impl RegionCategory {
    /// Legend iteration order, matching palette order.
    pub const ALL: [Self; 3] = [Self::EuropeAndAfrica, Self::AsiaAndPacific, Self::America];

    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Europe and Africa" => Self::EuropeAndAfrica,
            "Asia and Pacific" => Self::AsiaAndPacific,
            _ => Self::America,
        }
    }

    /// Index into `ChartConfig::palette`.
    #[must_use]
    pub fn palette_index(self) -> usize {
        match self {
            Self::EuropeAndAfrica => 0,
            Self::AsiaAndPacific => 1,
            Self::America => 2,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::EuropeAndAfrica => "Europe and Africa",
            Self::AsiaAndPacific => "Asia and Pacific",
            Self::America => "America",
        }
    }
}
