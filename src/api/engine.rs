#[cfg(feature = "parallel-batch")]
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{IntervalBucket, classify_interval, parse_label_positions};
use crate::error::AxisSpacingResult;

use super::default_spacing::default_axis_config;
use super::tick_policy::{TickPolicy, select_axis_ticks};
use super::{AxisConfig, AxisSpacingConfig};

/// Result of one classify → dispatch → prune → build pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisSpacing {
    /// Classified bucket; `None` when the sample was not temporal enough.
    pub interval: Option<IntervalBucket>,
    /// Policy that actually produced `axis`.
    pub policy: TickPolicy,
    pub axis: AxisConfig,
    /// Whether the trailing tick was dropped by consistency pruning.
    pub pruned: bool,
}

/// Stateless x-axis spacing engine.
///
/// Holds only validated configuration, so one instance can serve any number
/// of independent label sequences, including concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisSpacingEngine {
    config: AxisSpacingConfig,
}

impl AxisSpacingEngine {
    pub fn new(config: AxisSpacingConfig) -> AxisSpacingResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> AxisSpacingConfig {
        self.config
    }

    /// Computes the axis configuration for one ordered label sequence.
    ///
    /// Never fails: an internal fault during tick selection degrades to the
    /// positional fallback.
    #[must_use]
    pub fn compute<S: AsRef<str>>(&self, labels: &[S]) -> AxisSpacing {
        let interval = classify_interval(labels, self.config.interval_sample());
        let policy = TickPolicy::for_bucket(interval);
        debug!(
            label_count = labels.len(),
            interval = interval.map(IntervalBucket::as_str),
            %policy,
            "classified x-axis labels"
        );

        let dates = match policy {
            TickPolicy::Default => Vec::new(),
            _ => parse_label_positions(labels),
        };
        let options = self.config.policy_options();

        match select_axis_ticks(policy, &dates, labels, options) {
            Ok(outcome) => AxisSpacing {
                interval,
                policy: outcome.policy,
                axis: outcome.axis,
                pruned: outcome.pruned,
            },
            Err(err) => {
                warn!(
                    error = %err,
                    %policy,
                    "tick selection failed; using positional fallback"
                );
                AxisSpacing {
                    interval,
                    policy: TickPolicy::Default,
                    axis: default_axis_config(labels, options.native_label_limit),
                    pruned: false,
                }
            }
        }
    }

    /// Computes independent label sequences, preserving input order.
    #[must_use]
    pub fn compute_many<S: AsRef<str> + Sync>(&self, sequences: &[Vec<S>]) -> Vec<AxisSpacing> {
        #[cfg(feature = "parallel-batch")]
        {
            sequences
                .par_iter()
                .map(|labels| self.compute(labels))
                .collect()
        }

        #[cfg(not(feature = "parallel-batch"))]
        {
            sequences.iter().map(|labels| self.compute(labels)).collect()
        }
    }
}

/// Computes the axis configuration with the default engine configuration.
#[must_use]
pub fn compute_axis_spacing<S: AsRef<str>>(labels: &[S]) -> AxisSpacing {
    AxisSpacingEngine::default().compute(labels)
}
