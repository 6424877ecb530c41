use crate::models::{Requirement, Listing, MatchBreakdown, MatchWeights, MatchThresholds, MatchConfig};
use crate::core::{
    bands::{banded_score, BandPolicy, Bounds, ScoreError},
    distance::haversine_miles,
};

/// Calculate the per-dimension scores and weighted composite for a listing
///
/// Scoring formula:
/// overall = (
///     distance_score * 0.3 +      # Within 2mi = 100, fades out by 10mi
///     budget_score * 0.3 +        # Within 10% of budget = 100, fades out by 25%
///     bedroom_score * 0.2 +       # Within range = 100, fades out by ±2
///     bathroom_score * 0.2        # Within range = 100, fades out by ±2
/// )
pub fn calculate_match_score(
    requirement: &Requirement,
    listing: &Listing,
    config: &MatchConfig,
) -> MatchBreakdown {
    let thresholds = &config.thresholds;

    let distance_score = calculate_distance_score(requirement, listing, thresholds);
    let budget_score = calculate_budget_score(requirement, listing, thresholds);
    let bedroom_score = calculate_bedroom_score(requirement, listing, thresholds);
    let bathroom_score = calculate_bathroom_score(requirement, listing, thresholds);

    let overall = weighted_score(
        [distance_score, budget_score, bedroom_score, bathroom_score],
        &config.weights,
    );

    MatchBreakdown {
        overall_score: round2(overall),
        distance_score: round2(distance_score),
        budget_score: round2(budget_score),
        bedroom_score: round2(bedroom_score),
        bathroom_score: round2(bathroom_score),
    }
}

/// Combine dimension scores (distance, budget, bedrooms, bathrooms)
#[inline]
pub fn weighted_score(scores: [f64; 4], weights: &MatchWeights) -> f64 {
    let [distance, budget, bedrooms, bathrooms] = scores;
    distance * weights.distance
        + budget * weights.budget
        + bedrooms * weights.bedrooms
        + bathrooms * weights.bathrooms
}

/// Distance score (0-100) from the requirement's center point
pub fn calculate_distance_score(
    requirement: &Requirement,
    listing: &Listing,
    thresholds: &MatchThresholds,
) -> f64 {
    or_zero(distance_score(requirement, listing, thresholds))
}

/// Budget score (0-100); band widths scale with the average budget
pub fn calculate_budget_score(
    requirement: &Requirement,
    listing: &Listing,
    thresholds: &MatchThresholds,
) -> f64 {
    or_zero(budget_score(requirement, listing, thresholds))
}

/// Bedroom count score (0-100)
pub fn calculate_bedroom_score(
    requirement: &Requirement,
    listing: &Listing,
    thresholds: &MatchThresholds,
) -> f64 {
    or_zero(room_score(
        "bedrooms",
        requirement.min_bedrooms,
        requirement.max_bedrooms,
        listing.bedrooms,
        thresholds,
    ))
}

/// Bathroom count score (0-100)
pub fn calculate_bathroom_score(
    requirement: &Requirement,
    listing: &Listing,
    thresholds: &MatchThresholds,
) -> f64 {
    or_zero(room_score(
        "bathrooms",
        requirement.min_bathrooms,
        requirement.max_bathrooms,
        listing.bathrooms,
        thresholds,
    ))
}

fn distance_score(
    requirement: &Requirement,
    listing: &Listing,
    thresholds: &MatchThresholds,
) -> Result<f64, ScoreError> {
    let (Some(lat1), Some(lon1)) = (requirement.lat, requirement.lon) else {
        return Err(ScoreError::MalformedValue("requirement location"));
    };
    let (Some(lat2), Some(lon2)) = (listing.lat, listing.lon) else {
        return Err(ScoreError::MalformedValue("listing location"));
    };

    let miles = haversine_miles(lat1, lon1, lat2, lon2);

    Ok(banded_score(
        miles,
        Bounds::point(0.0),
        BandPolicy {
            perfect: thresholds.distance_perfect,
            acceptable: thresholds.distance_max,
            floor: thresholds.min_match_percentage,
        },
    ))
}

fn budget_score(
    requirement: &Requirement,
    listing: &Listing,
    thresholds: &MatchThresholds,
) -> Result<f64, ScoreError> {
    let bounds = Bounds::resolve("budget", requirement.min_budget, requirement.max_budget)?;
    let price = listing.price.ok_or(ScoreError::MalformedValue("price"))?;

    let average = bounds.midpoint();

    Ok(banded_score(
        price,
        bounds,
        BandPolicy {
            perfect: average * thresholds.budget_perfect / 100.0,
            acceptable: average * thresholds.budget_max / 100.0,
            floor: thresholds.min_match_percentage,
        },
    ))
}

fn room_score(
    dimension: &'static str,
    min: Option<u32>,
    max: Option<u32>,
    rooms: Option<u32>,
    thresholds: &MatchThresholds,
) -> Result<f64, ScoreError> {
    let bounds = Bounds::resolve(dimension, min, max)?;
    let rooms = rooms.ok_or(ScoreError::MalformedValue(dimension))?;

    Ok(banded_score(
        rooms as f64,
        bounds,
        BandPolicy {
            perfect: thresholds.rooms_perfect as f64,
            acceptable: thresholds.rooms_max as f64,
            floor: thresholds.min_match_percentage,
        },
    ))
}

#[inline]
fn or_zero(result: Result<f64, ScoreError>) -> f64 {
    result.unwrap_or_else(|reason| {
        tracing::trace!("Dimension scored 0: {}", reason);
        0.0
    })
}

/// Round to 2 decimal places, half away from zero
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
