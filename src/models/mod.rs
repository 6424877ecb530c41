// Model exports
pub mod domain;
pub mod lenient;
pub mod requests;
pub mod responses;

pub use domain::{Requirement, Listing, MatchBreakdown, MatchResult, MatchWeights, MatchThresholds, MatchConfig};
pub use requests::FindMatchesRequest;
pub use responses::{FindMatchesResponse, ListingsResponse, HealthResponse, ErrorResponse};
