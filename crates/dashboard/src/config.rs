//! Dashboard configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `RETAIL_API_BASE_URL` - Base URL of the mock REST API
//!   (default: `https://jsonplaceholder.typicode.com`)
//! - `RETAIL_CATALOG_LIMIT` - How many photo records to seed the catalog
//!   from (default: 50, must be >= 1)
//! - `RETAIL_SESSION_FILE` - Path of the persisted session record
//!   (default: `.retail-admin/session.json`)
//! - `RETAIL_SEED` - Fixes the catalog-synthesis RNG for reproducible
//!   demo data (default: unseeded)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
const DEFAULT_CATALOG_LIMIT: u32 = 50;
const DEFAULT_SESSION_FILE: &str = ".retail-admin/session.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(&'static str, String),
}

/// Dashboard application configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Base URL of the mock REST API.
    pub api_base_url: Url,
    /// Number of photo records to seed the catalog from.
    pub catalog_limit: u32,
    /// Path of the persisted session record.
    pub session_file: PathBuf,
    /// Optional fixed seed for catalog synthesis.
    pub catalog_seed: Option<u64>,
}

impl DashboardConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] when a set variable fails to
    /// parse (malformed URL, non-numeric limit or seed, limit of zero).
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = match optional_env("RETAIL_API_BASE_URL") {
            Some(raw) => Url::parse(&raw)
                .map_err(|e| ConfigError::InvalidEnvVar("RETAIL_API_BASE_URL", e.to_string()))?,
            None => Url::parse(DEFAULT_API_BASE_URL)
                .map_err(|e| ConfigError::InvalidEnvVar("RETAIL_API_BASE_URL", e.to_string()))?,
        };

        let catalog_limit = match optional_env("RETAIL_CATALOG_LIMIT") {
            Some(raw) => raw
                .parse::<u32>()
                .map_err(|e| ConfigError::InvalidEnvVar("RETAIL_CATALOG_LIMIT", e.to_string()))?,
            None => DEFAULT_CATALOG_LIMIT,
        };
        if catalog_limit == 0 {
            return Err(ConfigError::InvalidEnvVar(
                "RETAIL_CATALOG_LIMIT",
                "must be at least 1".to_owned(),
            ));
        }

        let session_file = optional_env("RETAIL_SESSION_FILE")
            .map_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        let catalog_seed = optional_env("RETAIL_SEED")
            .map(|raw| {
                raw.parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvVar("RETAIL_SEED", e.to_string()))
            })
            .transpose()?;

        Ok(Self {
            api_base_url,
            catalog_limit,
            session_file,
            catalog_seed,
        })
    }
}

/// Read an environment variable, treating unset and empty as absent.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}
