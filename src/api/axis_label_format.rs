use chrono::{Datelike, Timelike};

use crate::core::ParsedDate;

/// Display names indexed by `month - 1`.
///
/// "March" and "Sept" are intentional; rendered axes use these exact spellings.
pub const MONTH_DISPLAY_NAMES: [&str; 12] = [
    "Jan", "Feb", "March", "April", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

#[must_use]
pub fn month_display_name(month: u32) -> &'static str {
    usize::try_from(month)
        .ok()
        .and_then(|month| month.checked_sub(1))
        .and_then(|index| MONTH_DISPLAY_NAMES.get(index))
        .copied()
        .unwrap_or("")
}

/// `HH:MM`
#[must_use]
pub fn format_hour_tick(date: ParsedDate) -> String {
    format!("{:02}:{:02}", date.hour(), date.minute())
}

/// Abbreviated weekday plus `MM/DD`, e.g. `Mon 01/08`.
#[must_use]
pub fn format_day_tick(date: ParsedDate) -> String {
    date.format("%a %m/%d").to_string()
}

/// `DD Month YYYY` with the full English month name.
#[must_use]
pub fn format_week_tick(date: ParsedDate) -> String {
    date.format("%d %B %Y").to_string()
}

/// Month display name plus year, shared by the monthly and quarterly policies.
#[must_use]
pub fn format_month_tick(date: ParsedDate) -> String {
    format!("{} {}", month_display_name(date.month()), date.year())
}

#[must_use]
pub fn format_year_tick(date: ParsedDate) -> String {
    date.year().to_string()
}
