//! Configuration for the trigger matcher

use serde::{Deserialize, Deserializer};
use tracing::warn;

/// Trigger matcher configuration
#[derive(Debug, Deserialize, Clone)]
pub struct MatcherConfig {
    /// Minimum number of distinct query tokens that must appear in a
    /// document's description before it becomes a candidate. Always >= 1:
    /// a zero threshold would turn every query into an all-documents match.
    #[serde(
        default = "default_min_token_overlap",
        deserialize_with = "threshold_at_least_one"
    )]
    pub min_token_overlap: usize,
}

fn default_min_token_overlap() -> usize {
    1
}

/// Clamp configured thresholds below 1 instead of silently matching everything
fn threshold_at_least_one<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let value = usize::deserialize(deserializer)?;
    if value < 1 {
        warn!("min_token_overlap = {} is below the minimum; clamping to 1", value);
        return Ok(1);
    }
    Ok(value)
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_token_overlap: default_min_token_overlap(),
        }
    }
}
