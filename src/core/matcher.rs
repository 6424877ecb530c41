use crate::models::{Requirement, Listing, MatchResult, MatchConfig};
use crate::core::scoring::calculate_match_score;

/// Default number of catalog listings examined per query
pub const DEFAULT_LIMIT: usize = 10;

/// Main matching orchestrator - scores a catalog against a requirement
///
/// # Pipeline
/// 1. Walk the catalog in order, stopping after `limit` listings
/// 2. Score each listing (distance, budget, bedrooms, bathrooms)
/// 3. Keep listings at or above the threshold
/// 4. Rank by overall score
///
/// The configuration is fixed at construction, so one `Matcher` can be
/// shared by any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self {
            config: MatchConfig::default(),
        }
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Find matches using the configured minimum match percentage
    pub fn find_matches(
        &self,
        requirement: &Requirement,
        catalog: &[Listing],
        limit: Option<usize>,
    ) -> Vec<MatchResult> {
        self.find_matches_above(
            requirement,
            catalog,
            limit,
            self.config.thresholds.min_match_percentage,
        )
    }

    /// Find listings scoring at least `threshold`
    ///
    /// # Arguments
    /// * `requirement` - The buyer's search requirement
    /// * `catalog` - Candidate listings, in the order they should be examined
    /// * `limit` - Maximum number of listings to *examine*; `None` or `Some(0)`
    ///   scans the whole catalog. Qualifying listings past the cap are never
    ///   seen.
    /// * `threshold` - Minimum overall score to keep a listing
    ///
    /// # Returns
    /// Matches sorted by overall score, highest first. Equal scores keep
    /// catalog order.
    pub fn find_matches_above(
        &self,
        requirement: &Requirement,
        catalog: &[Listing],
        limit: Option<usize>,
        threshold: f64,
    ) -> Vec<MatchResult> {
        let examined = examined_count(catalog.len(), limit);

        let mut matches: Vec<MatchResult> = catalog[..examined]
            .iter()
            .filter_map(|listing| {
                let breakdown = calculate_match_score(requirement, listing, &self.config);

                if breakdown.overall_score >= threshold {
                    Some(MatchResult::new(listing.clone(), breakdown))
                } else {
                    None
                }
            })
            .collect();

        // Stable sort, so ties stay in catalog order
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        tracing::debug!(
            "Scored {} of {} listings, {} at or above {}",
            examined,
            catalog.len(),
            matches.len(),
            threshold
        );

        matches
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// Number of listings a scan with `limit` will score
pub fn examined_count(catalog_len: usize, limit: Option<usize>) -> usize {
    match limit {
        Some(cap) if cap > 0 => cap.min(catalog_len),
        _ => catalog_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_listing(id: u64, lat: f64, price: f64, bedrooms: u32) -> Listing {
        let mut listing = Listing {
            lat: Some(lat),
            lon: Some(121.5111211),
            price: Some(price),
            bedrooms: Some(bedrooms),
            bathrooms: Some(2),
            ..Listing::default()
        };
        listing.extra.insert("id".to_string(), json!(id));
        listing
    }

    fn create_requirement() -> Requirement {
        Requirement {
            lat: Some(18.3721392),
            lon: Some(121.5111211),
            min_budget: Some(8000.0),
            max_budget: Some(10000.0),
            min_bedrooms: Some(2),
            max_bedrooms: Some(3),
            min_bathrooms: Some(1),
            max_bathrooms: Some(2),
        }
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::with_default_config();
        let catalog = vec![
            create_listing(1, 18.3721392, 9000.0, 2), // Perfect
            create_listing(2, 19.5, 9000.0, 2),       // Far away, still 70
            create_listing(3, 19.5, 50000.0, 9),      // Far and wrong: 20
        ];

        let matches = matcher.find_matches(&create_requirement(), &catalog, None);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].listing.id(), Some(&json!(1)));
        assert_eq!(matches[0].match_score, 100.0);
        assert_eq!(matches[1].match_score, 70.0);
    }

    #[test]
    fn test_matches_sorted_by_score() {
        let matcher = Matcher::with_default_config();
        let catalog = vec![
            create_listing(1, 18.3721392, 11500.0, 4),
            create_listing(2, 18.3721392, 9000.0, 2),
            create_listing(3, 18.3721392, 9000.0, 4),
        ];

        let matches = matcher.find_matches(&create_requirement(), &catalog, None);

        assert_eq!(matches.len(), 3);
        assert_eq!(matches[0].listing.id(), Some(&json!(2)));
        for pair in matches.windows(2) {
            assert!(pair[0].match_score >= pair[1].match_score);
        }
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let matcher = Matcher::with_default_config();
        let catalog: Vec<Listing> = (0..5)
            .map(|i| create_listing(i, 18.3721392, 9000.0, 2))
            .collect();

        let matches = matcher.find_matches(&create_requirement(), &catalog, None);

        let ids: Vec<_> = matches.iter().map(|m| m.listing.id().cloned()).collect();
        let expected: Vec<_> = (0..5u64).map(|i| Some(json!(i))).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_limit_caps_examined_listings() {
        let matcher = Matcher::with_default_config();
        let mut catalog: Vec<Listing> = (0..3)
            .map(|i| create_listing(i, 19.5, 50000.0, 9))
            .collect();
        // A perfect listing after the cap is never examined
        catalog.push(create_listing(99, 18.3721392, 9000.0, 2));

        let capped = matcher.find_matches(&create_requirement(), &catalog, Some(3));
        assert!(capped.is_empty());

        let full = matcher.find_matches(&create_requirement(), &catalog, Some(0));
        assert_eq!(full.len(), 1);
        assert_eq!(full[0].listing.id(), Some(&json!(99)));
    }

    #[test]
    fn test_custom_threshold() {
        let matcher = Matcher::with_default_config();
        let catalog = vec![
            create_listing(1, 18.3721392, 9000.0, 2),
            create_listing(2, 19.5, 9000.0, 2),
        ];

        let matches = matcher.find_matches_above(&create_requirement(), &catalog, None, 80.0);

        assert_eq!(matches.len(), 1);
        assert!(matches.iter().all(|m| m.match_score >= 80.0));
    }

    #[test]
    fn test_examined_count() {
        assert_eq!(examined_count(20, Some(10)), 10);
        assert_eq!(examined_count(5, Some(10)), 5);
        assert_eq!(examined_count(5, Some(0)), 5);
        assert_eq!(examined_count(5, None), 5);
    }
}
