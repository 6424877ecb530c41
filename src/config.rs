use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::DEFAULT_LIMIT;
use crate::models::{MatchConfig, MatchThresholds, MatchWeights};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { path: default_catalog_path() }
    }
}

fn default_catalog_path() -> String { "data/listings.json".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Listings examined per request when the request names no limit
    #[serde(default = "default_limit")]
    pub default_limit: u16,
    #[serde(default = "default_max_limit")]
    pub max_limit: u16,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_limit() -> u16 { DEFAULT_LIMIT as u16 }
fn default_max_limit() -> u16 { 100 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

impl ScoringSettings {
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig {
            weights: self.weights.clone().into(),
            thresholds: self.thresholds.clone().into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_bedrooms_weight")]
    pub bedrooms: f64,
    #[serde(default = "default_bathrooms_weight")]
    pub bathrooms: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            distance: default_distance_weight(),
            budget: default_budget_weight(),
            bedrooms: default_bedrooms_weight(),
            bathrooms: default_bathrooms_weight(),
        }
    }
}

impl From<WeightsConfig> for MatchWeights {
    fn from(value: WeightsConfig) -> Self {
        Self {
            distance: value.distance,
            budget: value.budget,
            bedrooms: value.bedrooms,
            bathrooms: value.bathrooms,
        }
    }
}

fn default_distance_weight() -> f64 { 0.3 }
fn default_budget_weight() -> f64 { 0.3 }
fn default_bedrooms_weight() -> f64 { 0.2 }
fn default_bathrooms_weight() -> f64 { 0.2 }

#[derive(Debug, Clone, Deserialize)]
pub struct ThresholdsConfig {
    #[serde(default = "default_min_match")]
    pub min_match_percentage: f64,
    #[serde(default = "default_distance_perfect")]
    pub distance_perfect: f64,
    #[serde(default = "default_distance_max")]
    pub distance_max: f64,
    #[serde(default = "default_budget_perfect")]
    pub budget_perfect: f64,
    #[serde(default = "default_budget_max")]
    pub budget_max: f64,
    #[serde(default)]
    pub rooms_perfect: u32,
    #[serde(default = "default_rooms_max")]
    pub rooms_max: u32,
}

impl Default for ThresholdsConfig {
    fn default() -> Self {
        Self {
            min_match_percentage: default_min_match(),
            distance_perfect: default_distance_perfect(),
            distance_max: default_distance_max(),
            budget_perfect: default_budget_perfect(),
            budget_max: default_budget_max(),
            rooms_perfect: 0,
            rooms_max: default_rooms_max(),
        }
    }
}

impl From<ThresholdsConfig> for MatchThresholds {
    fn from(value: ThresholdsConfig) -> Self {
        Self {
            min_match_percentage: value.min_match_percentage,
            distance_perfect: value.distance_perfect,
            distance_max: value.distance_max,
            budget_perfect: value.budget_perfect,
            budget_max: value.budget_max,
            rooms_perfect: value.rooms_perfect,
            rooms_max: value.rooms_max,
        }
    }
}

fn default_min_match() -> f64 { 40.0 }
fn default_distance_perfect() -> f64 { 2.0 }
fn default_distance_max() -> f64 { 10.0 }
fn default_budget_perfect() -> f64 { 10.0 }
fn default_budget_max() -> f64 { 25.0 }
fn default_rooms_max() -> u32 { 2 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// `full`, `compact` or `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with REALTY__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., REALTY__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?;

        settings.try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("REALTY")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
