use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Calendar timestamp recovered from an axis label.
pub type ParsedDate = NaiveDateTime;

/// Labels treated as column headers rather than data points.
pub const HEADER_LABELS: [&str; 3] = ["date", "time", "period"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DatePatternKind {
    Date,
    DateTime,
    /// Bare clock time, anchored to 1900-01-01.
    TimeOfDay,
    /// Year and month only, anchored to the first of the month.
    YearMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DatePattern {
    format: &'static str,
    kind: DatePatternKind,
}

const fn pattern(format: &'static str, kind: DatePatternKind) -> DatePattern {
    DatePattern { format, kind }
}

// Priority order matters: US slash dates win over EU slash dates when both
// readings are valid.
const DATE_PATTERNS: [DatePattern; 15] = [
    pattern("%Y-%m-%d", DatePatternKind::Date),
    pattern("%m/%d/%Y", DatePatternKind::Date),
    pattern("%d/%m/%Y", DatePatternKind::Date),
    pattern("%Y-%m-%d %H:%M:%S", DatePatternKind::DateTime),
    pattern("%m/%d/%Y %H:%M", DatePatternKind::DateTime),
    pattern("%Y-%m-%d %H:%M", DatePatternKind::DateTime),
    pattern("%H:%M", DatePatternKind::TimeOfDay),
    pattern("%Y-%m", DatePatternKind::YearMonth),
    pattern("%d-%b-%y", DatePatternKind::Date),
    pattern("%d-%b-%Y", DatePatternKind::Date),
    pattern("%Y/%m/%d", DatePatternKind::Date),
    pattern("%b %d, %Y", DatePatternKind::Date),
    pattern("%B %d, %Y", DatePatternKind::Date),
    pattern("%d %b %Y", DatePatternKind::Date),
    pattern("%d %B %Y", DatePatternKind::Date),
];

/// Returns the supported label formats in the order they are tried.
pub fn label_date_formats() -> impl Iterator<Item = &'static str> {
    DATE_PATTERNS.iter().map(|pattern| pattern.format)
}

/// Returns `true` for header-like placeholders (`date`, `time`, `period`, blank).
#[must_use]
pub fn is_header_label(label: &str) -> bool {
    let trimmed = label.trim();
    trimmed.is_empty()
        || HEADER_LABELS
            .iter()
            .any(|header| trimmed.eq_ignore_ascii_case(header))
}

/// Parses a single label with the first matching format.
///
/// Returns `None` when no format matches; never fails.
#[must_use]
pub fn parse_label(label: &str) -> Option<ParsedDate> {
    let text = label.trim();
    if text.is_empty() {
        return None;
    }
    DATE_PATTERNS
        .iter()
        .find_map(|pattern| parse_with_pattern(text, *pattern))
}

/// Parses every label, keeping one slot per input position.
///
/// Header placeholders and unparseable labels hold `None`, so index `i` of the
/// result always refers to label `i`.
#[must_use]
pub fn parse_label_positions<S: AsRef<str>>(labels: &[S]) -> Vec<Option<ParsedDate>> {
    labels
        .iter()
        .map(|label| {
            let label = label.as_ref();
            if is_header_label(label) {
                None
            } else {
                parse_label(label)
            }
        })
        .collect()
}

fn parse_with_pattern(text: &str, pattern: DatePattern) -> Option<ParsedDate> {
    if !numeric_field_widths_match(text, pattern.format) {
        return None;
    }
    match pattern.kind {
        DatePatternKind::Date => NaiveDate::parse_from_str(text, pattern.format)
            .ok()
            .and_then(start_of_day),
        DatePatternKind::DateTime => NaiveDateTime::parse_from_str(text, pattern.format).ok(),
        DatePatternKind::TimeOfDay => {
            let time = NaiveTime::parse_from_str(text, pattern.format).ok()?;
            Some(NaiveDate::from_ymd_opt(1900, 1, 1)?.and_time(time))
        }
        DatePatternKind::YearMonth => {
            let mut parsed = Parsed::new();
            parse(&mut parsed, text, StrftimeItems::new(pattern.format)).ok()?;
            parsed.set_day(1).ok()?;
            parsed.to_naive_date().ok().and_then(start_of_day)
        }
    }
}

/// Checks digit runs against the numeric fields of `format`, in order.
///
/// chrono reads `%Y` from any number of digits and `%y` from one or two; a
/// label year must be written with exactly four (`%Y`) or two (`%y`) digits,
/// so bins such as `0-1` or `1/2/34` are not dates. Every pattern separates
/// its numeric fields with non-digits, so runs and fields pair up one to one.
fn numeric_field_widths_match(text: &str, format: &str) -> bool {
    let mut runs = text
        .split(|c: char| !c.is_ascii_digit())
        .filter(|run| !run.is_empty());
    let mut specifiers = format.chars();

    while let Some(c) = specifiers.next() {
        if c != '%' {
            continue;
        }
        let required_width = match specifiers.next() {
            Some('Y') => Some(4),
            Some('y') => Some(2),
            Some('m' | 'd' | 'H' | 'M' | 'S') => None,
            _ => continue,
        };
        let Some(run) = runs.next() else {
            return false;
        };
        if required_width.is_some_and(|width| run.len() != width) {
            return false;
        }
    }
    runs.next().is_none()
}

fn start_of_day(date: NaiveDate) -> Option<ParsedDate> {
    date.and_hms_opt(0, 0, 0)
}
