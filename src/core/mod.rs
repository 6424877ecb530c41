// Core algorithm exports
pub mod bands;
pub mod distance;
pub mod matcher;
pub mod scoring;

pub use bands::{banded_score, BandPolicy, Bounds, ScoreError};
pub use distance::haversine_miles;
pub use matcher::{Matcher, DEFAULT_LIMIT};
pub use scoring::calculate_match_score;
