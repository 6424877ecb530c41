use serde::{Deserialize, Serialize};
use crate::models::domain::{Listing, MatchResult};

/// Response for find matches endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub request_id: String,
    pub matches: Vec<MatchResult>,
    pub total_results: usize,
    /// How many catalog listings were scored before the cap stopped the scan
    pub examined: usize,
}

/// Catalog listing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
    pub total: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub listings: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
