use serde::{Deserialize, Serialize};
use std::net::IpAddr;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub scorer: ScorerConfig,
    #[serde(default)]
    pub decision: DecisionConfig,
    #[serde(default)]
    pub feed: Option<FeedConfig>,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> IpAddr {
    IpAddr::from([0, 0, 0, 0])
}

fn default_port() -> u16 {
    8080
}

/// Which scoring strategy classifies posts for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerStrategy {
    /// Sign of a continuous polarity value.
    Polarity,
    /// Fixed thresholds over a compound score in [-1, 1].
    #[default]
    Compound,
}

impl ScorerStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerStrategy::Polarity => "polarity",
            ScorerStrategy::Compound => "compound",
        }
    }
}

/// Scorer configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScorerConfig {
    #[serde(default)]
    pub strategy: ScorerStrategy,
    #[serde(default)]
    pub compound_thresholds: CompoundThresholds,
}

/// Cut-offs for the compound strategy.
///
/// `c >= positive` is positive, `c <= negative` is negative, anything strictly
/// between is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct CompoundThresholds {
    #[serde(default = "default_positive_threshold")]
    pub positive: f64,
    #[serde(default = "default_negative_threshold")]
    pub negative: f64,
}

impl Default for CompoundThresholds {
    fn default() -> Self {
        Self {
            positive: default_positive_threshold(),
            negative: default_negative_threshold(),
        }
    }
}

fn default_positive_threshold() -> f64 {
    0.05
}

fn default_negative_threshold() -> f64 {
    -0.05
}

/// Decision engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct DecisionConfig {
    /// Ratio a category must reach to be the dominant mood.
    #[serde(default = "default_dominance_threshold")]
    pub dominance_threshold: f64,
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            dominance_threshold: default_dominance_threshold(),
        }
    }
}

fn default_dominance_threshold() -> f64 {
    0.5
}

/// Feed service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeedConfig {
    /// Feed API base URL (e.g., "https://feed.example.com/api")
    pub base_url: String,
    /// Bearer token used for both fetching and publishing
    #[serde(default)]
    pub access_token: String,
    /// Account whose recent posts are analyzed
    #[serde(default)]
    pub user_id: String,
    /// Number of posts requested per run (default: 25)
    #[serde(default = "default_count")]
    pub count: u32,
    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

fn default_count() -> u32 {
    25
}

fn default_timeout() -> u32 {
    30
}

/// Sanitized config for API responses (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub scorer: ScorerConfig,
    pub decision: DecisionConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<SanitizedFeedConfig>,
    pub server: ServerConfig,
}

/// Sanitized feed config (access token hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedFeedConfig {
    pub base_url: String,
    pub access_token_configured: bool,
    pub user_id: String,
    pub count: u32,
    pub timeout_secs: u32,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            scorer: config.scorer.clone(),
            decision: config.decision,
            feed: config.feed.as_ref().map(|f| SanitizedFeedConfig {
                base_url: f.base_url.clone(),
                access_token_configured: !f.access_token.is_empty(),
                user_id: f.user_id.clone(),
                count: f.count,
                timeout_secs: f.timeout_secs,
            }),
            server: config.server.clone(),
        }
    }
}
