use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub cache: CacheSettings,
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
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: Option<u32>,
    pub min_connections: Option<u32>,
    pub acquire_timeout_secs: Option<u64>,
    pub idle_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheSettings {
    pub ttl_secs: Option<u64>,
    pub max_entries: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    /// Active postings scored per recommendation request
    #[serde(default = "default_candidate_pool")]
    pub candidate_pool: usize,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
    #[serde(default = "default_skill_demand_top")]
    pub skill_demand_top: usize,
    #[serde(default = "default_regional_top")]
    pub regional_top: usize,
    /// Drop postings whose application deadline has passed
    #[serde(default)]
    pub skip_expired: bool,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            candidate_pool: default_candidate_pool(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            skill_demand_top: default_skill_demand_top(),
            regional_top: default_regional_top(),
            skip_expired: false,
        }
    }
}

impl MatchingSettings {
    /// Requested limit, defaulted and capped
    pub fn clamp_limit(&self, requested: Option<u16>) -> usize {
        requested
            .map(usize::from)
            .unwrap_or(self.default_limit)
            .min(self.max_limit)
    }
}

fn default_candidate_pool() -> usize { 50 }
fn default_limit() -> usize { 10 }
fn default_max_limit() -> usize { 50 }
fn default_skill_demand_top() -> usize { 20 }
fn default_regional_top() -> usize { 15 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_skills_weight")]
    pub skills: f64,
    #[serde(default = "default_education_weight")]
    pub education: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_interests_weight")]
    pub interests: f64,
    #[serde(default = "default_history_weight")]
    pub history: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            skills: default_skills_weight(),
            education: default_education_weight(),
            location: default_location_weight(),
            interests: default_interests_weight(),
            history: default_history_weight(),
        }
    }
}

impl From<&WeightsConfig> for ScoringWeights {
    fn from(config: &WeightsConfig) -> Self {
        Self {
            skills: config.skills,
            education: config.education,
            location: config.location,
            interests: config.interests,
            history: config.history,
        }
    }
}

fn default_skills_weight() -> f64 { 0.40 }
fn default_education_weight() -> f64 { 0.20 }
fn default_location_weight() -> f64 { 0.15 }
fn default_interests_weight() -> f64 { 0.15 }
fn default_history_weight() -> f64 { 0.10 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
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
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with JOBNIX_)
    /// 5. DATABASE_URL, if set
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., JOBNIX__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("JOBNIX")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        with_database_url(builder, std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }

}

/// The web application's conventional DATABASE_URL wins over file settings
fn with_database_url(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    database_url: Option<String>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    match database_url {
        Some(url) => builder.set_override("database.url", url),
        None => Ok(builder),
    }
}
