//! Tracing subscriber setup for hosts embedding the assistant.
//!
//! The level comes from `RUST_LOG`, falling back to `info`.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry};

use crate::error::{AppError, AppResult};

/// Output format of the installed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan JSON records, one per line
    Json,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init(format: LogFormat) -> AppResult<()> {
    match format {
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_target(true)
            .try_init()
            .map_err(|e| AppError::Config(format!("Failed to install subscriber: {}", e))),
        LogFormat::Json => {
            let subscriber = Registry::default()
                .with(env_filter())
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    env!("CARGO_PKG_NAME").to_string(),
                    std::io::stdout,
                ));
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| AppError::Config(format!("Failed to install subscriber: {}", e)))
        }
    }
}
