use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{IntervalBucket, ParsedDate};
use crate::error::AxisSpacingResult;

use super::axis_config_builder::build_date_axis_config;
use super::consistency_pruner::prune_inconsistent_tail;
use super::default_spacing::default_axis_config;
use super::tick_policy_selectors::{
    select_daily, select_hourly, select_monthly, select_quarterly, select_weekly, select_yearly,
};
use super::{AxisConfig, TickSet};

/// Tick selection strategy applied over the full label sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TickPolicy {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
    /// Positional sampling of raw labels.
    Default,
}

impl TickPolicy {
    #[must_use]
    pub fn for_bucket(bucket: Option<IntervalBucket>) -> Self {
        match bucket {
            Some(IntervalBucket::Hour) => Self::Hourly,
            Some(IntervalBucket::Day) => Self::Daily,
            Some(IntervalBucket::Week) => Self::Weekly,
            Some(IntervalBucket::Month) => Self::Monthly,
            Some(IntervalBucket::Quarter) => Self::Quarterly,
            Some(IntervalBucket::Year) => Self::Yearly,
            Some(IntervalBucket::Other) | None => Self::Default,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for TickPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs shared by every policy run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickPolicyOptions {
    pub prune_tolerance_ratio: f64,
    pub native_label_limit: usize,
}

/// Result of one policy run.
///
/// `policy` is the policy that produced `axis`; quarterly and yearly runs
/// report `Default` when they had too few dates and fell back.
#[derive(Debug, Clone, PartialEq)]
pub struct PolicyOutcome {
    pub policy: TickPolicy,
    pub axis: AxisConfig,
    pub pruned: bool,
}

impl PolicyOutcome {
    fn fallback<S: AsRef<str>>(labels: &[S], options: TickPolicyOptions) -> Self {
        Self {
            policy: TickPolicy::Default,
            axis: default_axis_config(labels, options.native_label_limit),
            pruned: false,
        }
    }
}

/// Runs `policy` over the index-aligned `dates` and raw `labels`.
///
/// Every date-driven policy goes through the same trailing-tick pruning before
/// the axis configuration is built.
pub fn select_axis_ticks<S: AsRef<str>>(
    policy: TickPolicy,
    dates: &[Option<ParsedDate>],
    labels: &[S],
    options: TickPolicyOptions,
) -> AxisSpacingResult<PolicyOutcome> {
    let (major, minor) = match policy {
        TickPolicy::Hourly => (select_hourly(dates)?, None),
        TickPolicy::Daily => (select_daily(dates)?, None),
        TickPolicy::Weekly => (select_weekly(dates)?, None),
        TickPolicy::Monthly => (select_monthly(dates)?, None),
        TickPolicy::Quarterly => match select_quarterly(dates)? {
            Some(selection) => (selection.major, Some(selection.minor)),
            None => return Ok(PolicyOutcome::fallback(labels, options)),
        },
        TickPolicy::Yearly => match select_yearly(dates)? {
            Some(ticks) => (ticks, None),
            None => return Ok(PolicyOutcome::fallback(labels, options)),
        },
        TickPolicy::Default => return Ok(PolicyOutcome::fallback(labels, options)),
    };

    Ok(finish_date_policy(policy, major, minor, options))
}

fn finish_date_policy(
    policy: TickPolicy,
    mut major: TickSet,
    minor: Option<Vec<usize>>,
    options: TickPolicyOptions,
) -> PolicyOutcome {
    let selected = major.len();
    let pruned = prune_inconsistent_tail(&mut major, options.prune_tolerance_ratio);
    trace!(%policy, selected, pruned, "date policy ticks selected");

    PolicyOutcome {
        policy,
        axis: build_date_axis_config(major, minor),
        pruned,
    }
}
