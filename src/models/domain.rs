use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::lenient;

/// Buyer search requirement
///
/// Every field is optional. Numeric fields accept JSON numbers or numeric
/// strings; anything else is treated as absent so that a single bad field
/// only zeroes its own dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_budget: Option<f64>,
    #[serde(default, deserialize_with = "lenient::f64_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_budget: Option<f64>,
    #[serde(default, deserialize_with = "lenient::u32_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient::u32_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bedrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient::u32_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bathrooms: Option<u32>,
    #[serde(default, deserialize_with = "lenient::u32_opt")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bathrooms: Option<u32>,
}

/// Property listing offered by the catalog
///
/// `extra` holds every field exactly as it arrived (ids, addresses and the
/// raw `price`/`bedrooms`/... values). The typed fields are the readings the
/// scorer uses; they only reach the serialized form when `extra` has no raw
/// value under the same key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Listing {
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub price: Option<f64>,
    pub bedrooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub extra: Map<String, Value>,
}

impl Listing {
    /// Helper to read the pass-through `id` field, if any
    pub fn id(&self) -> Option<&Value> {
        self.extra.get("id")
    }
}

impl From<Map<String, Value>> for Listing {
    fn from(extra: Map<String, Value>) -> Self {
        let f64_field = |key: &str| extra.get(key).and_then(lenient::as_f64);
        let u32_field = |key: &str| extra.get(key).and_then(lenient::as_u32);

        Self {
            lat: f64_field("lat"),
            lon: f64_field("lon"),
            price: f64_field("price"),
            bedrooms: u32_field("bedrooms"),
            bathrooms: u32_field("bathrooms"),
            extra,
        }
    }
}

impl From<Listing> for Map<String, Value> {
    fn from(listing: Listing) -> Self {
        let mut map = listing.extra;

        let typed = [
            ("lat", listing.lat.map(Value::from)),
            ("lon", listing.lon.map(Value::from)),
            ("price", listing.price.map(Value::from)),
            ("bedrooms", listing.bedrooms.map(Value::from)),
            ("bathrooms", listing.bathrooms.map(Value::from)),
        ];
        for (key, value) in typed {
            if let Some(value) = value {
                map.entry(key).or_insert(value);
            }
        }

        map
    }
}

/// Per-dimension scores and the weighted composite, rounded to 2 decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub overall_score: f64,
    pub distance_score: f64,
    pub budget_score: f64,
    pub bedroom_score: f64,
    pub bathroom_score: f64,
}

/// A listing merged with its match scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(flatten)]
    pub listing: Listing,
    #[serde(rename = "match")]
    pub match_score: f64,
    pub distance_score: f64,
    pub budget_score: f64,
    pub bedroom_score: f64,
    pub bathroom_score: f64,
}

impl MatchResult {
    pub fn new(listing: Listing, breakdown: MatchBreakdown) -> Self {
        Self {
            listing,
            match_score: breakdown.overall_score,
            distance_score: breakdown.distance_score,
            budget_score: breakdown.budget_score,
            bedroom_score: breakdown.bedroom_score,
            bathroom_score: breakdown.bathroom_score,
        }
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchWeights {
    pub distance: f64,
    pub budget: f64,
    pub bedrooms: f64,
    pub bathrooms: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            distance: 0.3,
            budget: 0.3,
            bedrooms: 0.2,
            bathrooms: 0.2,
        }
    }
}

/// Perfect/acceptable band widths and score floor
///
/// Distance widths are in miles, budget widths are percentages of the
/// average budget, room widths are whole rooms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchThresholds {
    pub min_match_percentage: f64,
    pub distance_perfect: f64,
    pub distance_max: f64,
    pub budget_perfect: f64,
    pub budget_max: f64,
    pub rooms_perfect: u32,
    pub rooms_max: u32,
}

impl Default for MatchThresholds {
    fn default() -> Self {
        Self {
            min_match_percentage: 40.0,
            distance_perfect: 2.0,
            distance_max: 10.0,
            budget_perfect: 10.0,
            budget_max: 25.0,
            rooms_perfect: 0,
            rooms_max: 2,
        }
    }
}

/// Immutable scoring configuration shared by every matching call
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MatchConfig {
    pub weights: MatchWeights,
    pub thresholds: MatchThresholds,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_requirement_accepts_numeric_strings() {
        let requirement: Requirement = serde_json::from_value(json!({
            "lat": 18.3721392,
            "lon": 121.5111211,
            "minBudget": "8000",
            "maxBudget": "10000",
            "minBedrooms": "2",
            "maxBedrooms": 3,
        }))
        .unwrap();

        assert_eq!(requirement.min_budget, Some(8000.0));
        assert_eq!(requirement.max_budget, Some(10000.0));
        assert_eq!(requirement.min_bedrooms, Some(2));
        assert_eq!(requirement.max_bedrooms, Some(3));
        assert_eq!(requirement.min_bathrooms, None);
    }

    #[test]
    fn test_malformed_fields_become_absent() {
        let requirement: Requirement = serde_json::from_value(json!({
            "lat": "invalid",
            "lon": "invalid",
            "minBudget": "invalid",
            "maxBedrooms": -1,
        }))
        .unwrap();

        assert_eq!(requirement, Requirement::default());
    }

    #[test]
    fn test_listing_keeps_extra_fields() {
        let listing: Listing = serde_json::from_value(json!({
            "id": 7,
            "address": "12 Harbor Rd",
            "lat": 18.4,
            "lon": 121.5,
            "price": "9500",
            "bedrooms": "3",
            "bathrooms": 1,
        }))
        .unwrap();

        assert_eq!(listing.id(), Some(&json!(7)));
        assert_eq!(listing.price, Some(9500.0));
        assert_eq!(listing.extra.get("address"), Some(&json!("12 Harbor Rd")));

        let back = serde_json::to_value(&listing).unwrap();
        assert_eq!(back["address"], json!("12 Harbor Rd"));
        assert_eq!(back["bedrooms"], json!("3"));
        assert_eq!(back["lat"], json!(18.4));
    }

    #[test]
    fn test_listing_serializes_raw_values_unchanged() {
        let raw = json!({
            "id": 1,
            "price": "call for price",
            "bedrooms": "2",
            "bathrooms": 2,
            "lat": 18.3721392,
            "lon": 121.5111211,
        });
        let listing: Listing = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(listing.price, None);
        assert_eq!(listing.bedrooms, Some(2));
        assert_eq!(serde_json::to_value(&listing).unwrap(), raw);

        let result = MatchResult::new(
            listing,
            MatchBreakdown {
                overall_score: 70.0,
                distance_score: 100.0,
                budget_score: 0.0,
                bedroom_score: 100.0,
                bathroom_score: 100.0,
            },
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["price"], json!("call for price"));
        assert_eq!(value["bedrooms"], json!("2"));
        assert_eq!(value["match"], json!(70.0));
    }

    #[test]
    fn test_constructed_listing_serializes_typed_fields() {
        let listing = Listing {
            price: Some(9000.0),
            bedrooms: Some(2),
            ..Listing::default()
        };

        let value = serde_json::to_value(&listing).unwrap();
        assert_eq!(value, json!({ "price": 9000.0, "bedrooms": 2 }));
    }

    #[test]
    fn test_match_result_serializes_flat() {
        let listing = Listing {
            price: Some(9000.0),
            extra: Map::from_iter([("id".to_string(), json!(1))]),
            ..Listing::default()
        };
        let breakdown = MatchBreakdown {
            overall_score: 88.5,
            distance_score: 100.0,
            budget_score: 70.0,
            bedroom_score: 100.0,
            bathroom_score: 85.0,
        };

        let value = serde_json::to_value(MatchResult::new(listing, breakdown)).unwrap();

        assert_eq!(value["id"], json!(1));
        assert_eq!(value["match"], json!(88.5));
        assert_eq!(value["budget_score"], json!(70.0));
        assert!(value.get("lat").is_none());
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let w = MatchWeights::default();
        let sum = w.distance + w.budget + w.bedrooms + w.bathrooms;
        assert!((sum - 1.0).abs() < 1e-9);
    }
}
