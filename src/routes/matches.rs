use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{matcher::examined_count, Matcher};
use crate::error::ApiError;
use crate::models::{FindMatchesRequest, FindMatchesResponse, HealthResponse, ListingsResponse};
use crate::services::ListingCatalog;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: ListingCatalog,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/listings", web::get().to(list_listings))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        listings: state.catalog.len(),
    })
}

/// List the whole catalog
async fn list_listings(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(ListingsResponse {
        listings: state.catalog.listings().to_vec(),
        total: state.catalog.len(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "lat": 18.3721392,
///   "lon": 121.5111211,
///   "min_budget": 8000,
///   "max_budget": 10000,
///   "min_bedrooms": 2,
///   "max_bedrooms": 3,
///   "min_bathrooms": 1,
///   "max_bathrooms": 2,
///   "limit": 10,
///   "threshold": 40
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: field_errors={:?}", errors);
        return Err(ApiError::Validation(errors));
    }

    let request_id = uuid::Uuid::new_v4().to_string();

    // Zero or missing falls back to the configured default
    let limit = req
        .limit
        .filter(|limit| *limit > 0)
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;
    let threshold = req
        .threshold
        .unwrap_or(state.matcher.config().thresholds.min_match_percentage);

    let requirement = req.to_requirement();

    tracing::info!(
        "Finding matches [{}] at ({}, {}), limit: {}, threshold: {}",
        request_id,
        req.lat,
        req.lon,
        limit,
        threshold
    );

    let catalog = state.catalog.listings();
    let matches = state
        .matcher
        .find_matches_above(&requirement, catalog, Some(limit), threshold);

    let response = FindMatchesResponse {
        request_id,
        total_results: matches.len(),
        examined: examined_count(catalog.len(), Some(limit)),
        matches,
    };

    tracing::info!(
        "Returning {} matches [{}] (examined {} of {} listings)",
        response.total_results,
        response.request_id,
        response.examined,
        catalog.len()
    );

    Ok(HttpResponse::Ok().json(response))
}
