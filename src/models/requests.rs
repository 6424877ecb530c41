use serde::{Deserialize, Serialize};
use validator::Validate;

use super::domain::Requirement;

/// Request to find matching listings
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lon: f64,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "minBudget")]
    pub min_budget: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "maxBudget")]
    pub max_budget: Option<f64>,
    #[serde(default, alias = "minBedrooms")]
    pub min_bedrooms: Option<u32>,
    #[serde(default, alias = "maxBedrooms")]
    pub max_bedrooms: Option<u32>,
    #[serde(default, alias = "minBathrooms")]
    pub min_bathrooms: Option<u32>,
    #[serde(default, alias = "maxBathrooms")]
    pub max_bathrooms: Option<u32>,
    /// Number of catalog listings to examine
    #[validate(range(max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(default)]
    pub threshold: Option<f64>,
}

impl FindMatchesRequest {
    /// Build the scoring requirement, swapping any inverted min/max pair
    ///
    /// The scorer itself never reorders bounds; this is the only place a
    /// `min > max` request gets corrected.
    pub fn to_requirement(&self) -> Requirement {
        let (min_budget, max_budget) = ordered(self.min_budget, self.max_budget);
        let (min_bedrooms, max_bedrooms) = ordered(self.min_bedrooms, self.max_bedrooms);
        let (min_bathrooms, max_bathrooms) = ordered(self.min_bathrooms, self.max_bathrooms);

        Requirement {
            lat: Some(self.lat),
            lon: Some(self.lon),
            min_budget,
            max_budget,
            min_bedrooms,
            max_bedrooms,
            min_bathrooms,
            max_bathrooms,
        }
    }
}

fn ordered<T: PartialOrd>(min: Option<T>, max: Option<T>) -> (Option<T>, Option<T>) {
    match (min, max) {
        (Some(lo), Some(hi)) if lo > hi => (Some(hi), Some(lo)),
        pair => pair,
    }
}
