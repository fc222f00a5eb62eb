use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Compound thresholds sit on the right side of zero and inside [-1, 1]
/// - Dominance threshold is in (0, 1]
/// - Feed section, when present, has a base URL and a non-zero count
/// - Server port is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let thresholds = &config.scorer.compound_thresholds;
    if !(thresholds.positive > 0.0 && thresholds.positive <= 1.0) {
        return Err(ConfigError::ValidationError(format!(
            "scorer.compound_thresholds.positive must be in (0, 1], got {}",
            thresholds.positive
        )));
    }
    if !(thresholds.negative >= -1.0 && thresholds.negative < 0.0) {
        return Err(ConfigError::ValidationError(format!(
            "scorer.compound_thresholds.negative must be in [-1, 0), got {}",
            thresholds.negative
        )));
    }

    let dominance = config.decision.dominance_threshold;
    if !(dominance > 0.0 && dominance <= 1.0) {
        return Err(ConfigError::ValidationError(format!(
            "decision.dominance_threshold must be in (0, 1], got {}",
            dominance
        )));
    }

    if let Some(feed) = &config.feed {
        if feed.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "feed.base_url cannot be empty".to_string(),
            ));
        }
        if feed.count == 0 {
            return Err(ConfigError::ValidationError(
                "feed.count cannot be 0".to_string(),
            ));
        }
    }

    // Server validation
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    Ok(())
}
