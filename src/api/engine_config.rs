use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_MIN_PARSED_SAMPLES, DEFAULT_SAMPLE_SIZE, IntervalSample};
use crate::error::{AxisSpacingError, AxisSpacingResult};

use super::consistency_pruner::DEFAULT_PRUNE_TOLERANCE_RATIO;
use super::default_spacing::DEFAULT_NATIVE_LABEL_LIMIT;
use super::tick_policy::TickPolicyOptions;

/// Engine bootstrap configuration.
///
/// Serializable so hosts can keep it next to their chart settings; every
/// field falls back to the built-in default when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpacingConfig {
    /// Leading labels inspected by the interval classifier.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Parsed sample dates required before a bucket is assigned.
    #[serde(default = "default_min_parsed_samples")]
    pub min_parsed_samples: usize,
    #[serde(default = "default_prune_tolerance_ratio")]
    pub prune_tolerance_ratio: f64,
    /// Label count up to which the positional fallback emits `{}`.
    #[serde(default = "default_native_label_limit")]
    pub native_label_limit: usize,
}

impl Default for AxisSpacingConfig {
    fn default() -> Self {
        Self {
            sample_size: default_sample_size(),
            min_parsed_samples: default_min_parsed_samples(),
            prune_tolerance_ratio: default_prune_tolerance_ratio(),
            native_label_limit: default_native_label_limit(),
        }
    }
}

impl AxisSpacingConfig {
    pub fn from_json_str(input: &str) -> AxisSpacingResult<Self> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()
    }

    pub fn validate(self) -> AxisSpacingResult<Self> {
        if self.min_parsed_samples < 2 {
            return Err(AxisSpacingError::InvalidConfig(
                "min_parsed_samples must be >= 2".to_owned(),
            ));
        }
        if self.sample_size < self.min_parsed_samples {
            return Err(AxisSpacingError::InvalidConfig(format!(
                "sample_size ({}) must be >= min_parsed_samples ({})",
                self.sample_size, self.min_parsed_samples
            )));
        }
        if !self.prune_tolerance_ratio.is_finite() || self.prune_tolerance_ratio <= 0.0 {
            return Err(AxisSpacingError::InvalidConfig(
                "prune_tolerance_ratio must be finite and > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    #[must_use]
    pub(super) fn interval_sample(self) -> IntervalSample {
        IntervalSample {
            size: self.sample_size,
            min_parsed: self.min_parsed_samples,
        }
    }

    #[must_use]
    pub(super) fn policy_options(self) -> TickPolicyOptions {
        TickPolicyOptions {
            prune_tolerance_ratio: self.prune_tolerance_ratio,
            native_label_limit: self.native_label_limit,
        }
    }
}

fn default_sample_size() -> usize {
    DEFAULT_SAMPLE_SIZE
}

fn default_min_parsed_samples() -> usize {
    DEFAULT_MIN_PARSED_SAMPLES
}

fn default_prune_tolerance_ratio() -> f64 {
    DEFAULT_PRUNE_TOLERANCE_RATIO
}

fn default_native_label_limit() -> usize {
    DEFAULT_NATIVE_LABEL_LIMIT
}
