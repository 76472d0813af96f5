use std::fmt;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::date_parser::{ParsedDate, is_header_label, parse_label};

/// Number of leading labels inspected by the classifier.
pub const DEFAULT_SAMPLE_SIZE: usize = 10;
/// Minimum number of parsed sample dates required to classify.
pub const DEFAULT_MIN_PARSED_SAMPLES: usize = 3;

/// Coarse temporal granularity inferred from label spacing.
///
/// Sequences that cannot be classified at all are represented by `None` at the
/// call sites (`Option<IntervalBucket>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalBucket {
    Hour,
    Day,
    Week,
    Month,
    Quarter,
    Year,
    /// Parseable dates whose mean gap falls between the quarter and year bands.
    Other,
}

impl IntervalBucket {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour => "hour",
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for IntervalBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling bounds used by [`classify_interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalSample {
    pub size: usize,
    pub min_parsed: usize,
}

impl Default for IntervalSample {
    fn default() -> Self {
        Self {
            size: DEFAULT_SAMPLE_SIZE,
            min_parsed: DEFAULT_MIN_PARSED_SAMPLES,
        }
    }
}

/// Classifies the label sequence from its leading sample.
///
/// Header placeholders are skipped, unparseable labels are ignored, and the
/// mean gap between consecutive parsed dates picks the bucket. Returns `None`
/// when fewer than `sample.min_parsed` dates parse.
#[must_use]
pub fn classify_interval<S: AsRef<str>>(
    labels: &[S],
    sample: IntervalSample,
) -> Option<IntervalBucket> {
    let dates: SmallVec<[ParsedDate; DEFAULT_SAMPLE_SIZE]> = labels
        .iter()
        .take(sample.size)
        .map(|label| label.as_ref())
        .filter(|label| !is_header_label(label))
        .filter_map(parse_label)
        .collect();

    if dates.len() < sample.min_parsed.max(2) {
        return None;
    }
    mean_gap(&dates).map(bucket_for_mean_gap)
}

/// Arithmetic mean of the gaps between consecutive dates, in input order.
///
/// Gaps are signed; out-of-order samples pull the mean down.
#[must_use]
pub fn mean_gap(dates: &[ParsedDate]) -> Option<TimeDelta> {
    let gap_count = i32::try_from(dates.len().checked_sub(1)?).ok()?;
    if gap_count == 0 {
        return None;
    }
    let mut total = TimeDelta::zero();
    for pair in dates.windows(2) {
        total = total.checked_add(&pair[1].signed_duration_since(pair[0]))?;
    }
    Some(total / gap_count)
}

/// Maps a mean gap to its bucket; the first matching band wins.
#[must_use]
pub fn bucket_for_mean_gap(mean: TimeDelta) -> IntervalBucket {
    if mean <= TimeDelta::hours(2) {
        IntervalBucket::Hour
    } else if mean <= TimeDelta::days(2) {
        IntervalBucket::Day
    } else if mean <= TimeDelta::weeks(2) {
        IntervalBucket::Week
    } else if mean <= TimeDelta::days(45) {
        IntervalBucket::Month
    } else if mean <= TimeDelta::days(120) {
        IntervalBucket::Quarter
    } else if mean >= TimeDelta::days(300) {
        IntervalBucket::Year
    } else {
        IntervalBucket::Other
    }
}
