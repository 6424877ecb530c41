use crate::config::LoggingSettings;
use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Errors that can occur while installing the tracing subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': {source}")]
    EnvFilter { value: String, source: ParseError },

    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

/// Build the log filter; `RUST_LOG` wins over the configured level
pub fn env_filter(settings: &LoggingSettings) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level).map_err(|source| TelemetryError::EnvFilter {
            value: settings.level.clone(),
            source,
        }),
    }
}

/// Install the global fmt subscriber
pub fn init(settings: &LoggingSettings) -> Result<(), TelemetryError> {
    let filter = env_filter(settings)?;

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    let result = match settings.format.as_str() {
        "pretty" => subscriber.pretty().try_init(),
        "compact" => subscriber.compact().try_init(),
        _ => subscriber.try_init(),
    };

    result.map_err(TelemetryError::Subscriber)
}
