//! Realty Match - property matching service
//!
//! This library scores property listings against a buyer's requirement on
//! distance, budget, bedrooms and bathrooms, and ranks the listings that
//! clear a minimum match percentage.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{Matcher, distance::haversine_miles};
pub use models::{Requirement, Listing, MatchResult, MatchConfig, MatchWeights, MatchThresholds, FindMatchesRequest, FindMatchesResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let matcher = Matcher::default();
        assert_eq!(matcher.config().weights, MatchWeights::default());
        assert!(haversine_miles(0.0, 0.0, 0.0, 1.0) > 69.0);
    }
}
