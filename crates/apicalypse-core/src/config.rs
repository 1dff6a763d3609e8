//! Configuration types and loading
//!
//! Client-side settings read from the environment. The query core never
//! consults these; they inform consumers such as the command line tool.

use serde::{Deserialize, Serialize};

/// API access tier, which determines the server-side limit ceiling
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApiTier {
    #[default]
    Free,
    Pro,
    Partner,
}

impl ApiTier {
    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "free" => Some(Self::Free),
            "pro" => Some(Self::Pro),
            "partner" => Some(Self::Partner),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Pro => "pro",
            Self::Partner => "partner",
        }
    }

    /// Largest `limit` the server accepts on this tier
    pub fn max_limit(&self) -> u64 {
        match self {
            Self::Free => 50,
            Self::Pro => 500,
            Self::Partner => 5000,
        }
    }
}

/// Main client configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Access tier of the API key in use
    #[serde(default)]
    pub tier: ApiTier,

    /// Limit applied when a query does not set one
    pub default_limit: Option<u64>,
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(tier) = lookup("APICALYPSE_TIER") {
            config.tier = ApiTier::from_str(&tier).ok_or_else(|| ConfigError::InvalidValue {
                key: "APICALYPSE_TIER".to_string(),
                message: format!("unknown tier '{}'", tier),
            })?;
        }

        if let Some(limit) = lookup("APICALYPSE_DEFAULT_LIMIT") {
            let limit = limit.parse().map_err(|e| ConfigError::InvalidValue {
                key: "APICALYPSE_DEFAULT_LIMIT".to_string(),
                message: format!("{}", e),
            })?;
            config.default_limit = Some(limit);
        }

        Ok(config)
    }

    /// Whether `limit` is above what the configured tier allows
    pub fn exceeds_tier(&self, limit: u64) -> bool {
        limit > self.tier.max_limit()
    }
}
