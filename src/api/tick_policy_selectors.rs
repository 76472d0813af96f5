use chrono::{Datelike, Timelike, Weekday};
use indexmap::IndexMap;

use crate::core::ParsedDate;
use crate::error::AxisSpacingResult;

use super::TickSet;
use super::axis_label_format::{
    format_day_tick, format_hour_tick, format_month_tick, format_week_tick, format_year_tick,
};

const LABELLED_HOURS: [u32; 4] = [0, 6, 12, 18];
const LABELLED_MONTHS: [u32; 4] = [3, 6, 9, 12];
const WEEKLY_FIRST_POSITION: usize = 3;
const WEEKLY_STRIDE: usize = 4;

/// Major ticks plus the unlabeled minor positions of the quarterly policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterlySelection {
    pub major: TickSet,
    pub minor: Vec<usize>,
}

fn dated_positions(
    dates: &[Option<ParsedDate>],
) -> impl Iterator<Item = (usize, ParsedDate)> + '_ {
    dates
        .iter()
        .enumerate()
        .filter_map(|(position, date)| date.map(|date| (position, date)))
}

fn collect_ticks(
    dates: &[Option<ParsedDate>],
    keep: impl Fn(usize, ParsedDate) -> bool,
    text: impl Fn(ParsedDate) -> String,
) -> AxisSpacingResult<TickSet> {
    let mut ticks = TickSet::new();
    for (position, date) in dated_positions(dates) {
        if keep(position, date) {
            ticks.push(position, text(date))?;
        }
    }
    Ok(ticks)
}

/// Positions at 00:00, 06:00, 12:00 and 18:00 hours.
pub fn select_hourly(dates: &[Option<ParsedDate>]) -> AxisSpacingResult<TickSet> {
    collect_ticks(
        dates,
        |_, date| LABELLED_HOURS.contains(&date.hour()),
        format_hour_tick,
    )
}

/// Mondays only.
pub fn select_daily(dates: &[Option<ParsedDate>]) -> AxisSpacingResult<TickSet> {
    collect_ticks(
        dates,
        |_, date| date.weekday() == Weekday::Mon,
        format_day_tick,
    )
}

/// Every fourth position starting with the fourth one.
///
/// Assumes the labels are already roughly weekly; the dates themselves only
/// decide whether a position is eligible.
pub fn select_weekly(dates: &[Option<ParsedDate>]) -> AxisSpacingResult<TickSet> {
    collect_ticks(
        dates,
        |position, _| {
            position >= WEEKLY_FIRST_POSITION
                && (position - WEEKLY_FIRST_POSITION) % WEEKLY_STRIDE == 0
        },
        format_week_tick,
    )
}

/// Quarter-end months: March, June, September and December.
pub fn select_monthly(dates: &[Option<ParsedDate>]) -> AxisSpacingResult<TickSet> {
    collect_ticks(
        dates,
        |_, date| LABELLED_MONTHS.contains(&date.month()),
        format_month_tick,
    )
}

/// One tick per calendar year at its latest month, plus minor ticks at every
/// dated position.
///
/// Returns `Ok(None)` when fewer than two positions carry a date. When the
/// final year's pick is not that year's latest date (a later day in the same
/// month exists), the final tick is dropped.
pub fn select_quarterly(
    dates: &[Option<ParsedDate>],
) -> AxisSpacingResult<Option<QuarterlySelection>> {
    let dated: Vec<(usize, ParsedDate)> = dated_positions(dates).collect();
    if dated.len() < 2 {
        return Ok(None);
    }

    let mut by_year: IndexMap<i32, Vec<(usize, ParsedDate)>> = IndexMap::new();
    for &(position, date) in &dated {
        by_year.entry(date.year()).or_default().push((position, date));
    }
    by_year.sort_keys();

    let mut major = TickSet::new();
    let mut last_pick = None;
    for entries in by_year.values() {
        // First entry wins among equal months.
        let Some((position, date)) = entries.iter().copied().reduce(|best, candidate| {
            if candidate.1.month() > best.1.month() {
                candidate
            } else {
                best
            }
        }) else {
            continue;
        };
        major.push(position, format_month_tick(date))?;
        last_pick = Some(date);
    }

    if major.len() > 1 {
        if let Some(picked) = last_pick {
            let year_latest = dated
                .iter()
                .map(|&(_, date)| date)
                .filter(|date| date.year() == picked.year())
                .max();
            if year_latest.is_some_and(|latest| latest != picked) {
                major.pop();
            }
        }
    }

    Ok(Some(QuarterlySelection {
        major,
        minor: dated.iter().map(|&(position, _)| position).collect(),
    }))
}

/// Year stride for a span of `max_year - min_year` years.
#[must_use]
pub fn year_tick_spacing(year_span: i32) -> i32 {
    match year_span {
        ..=5 => 1,
        6..=20 => 2,
        21..=50 => 5,
        51..=100 => 10,
        _ => 20,
    }
}

/// Years aligned to a stride chosen from the overall year span.
///
/// Returns `Ok(None)` when fewer than two positions carry a date.
pub fn select_yearly(dates: &[Option<ParsedDate>]) -> AxisSpacingResult<Option<TickSet>> {
    let mut years = dated_positions(dates).map(|(_, date)| date.year());
    let Some(first_year) = years.next() else {
        return Ok(None);
    };
    let mut dated_count = 1_usize;
    let (min_year, max_year) = years.fold((first_year, first_year), |(min, max), year| {
        dated_count += 1;
        (min.min(year), max.max(year))
    });
    if dated_count < 2 {
        return Ok(None);
    }

    let spacing = year_tick_spacing(max_year - min_year);
    collect_ticks(
        dates,
        |_, date| (date.year() - min_year) % spacing == 0,
        format_year_tick,
    )
    .map(Some)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        select_daily, select_hourly, select_monthly, select_quarterly, select_weekly,
        select_yearly, year_tick_spacing,
    };
    use crate::core::ParsedDate;

    fn at(year: i32, month: u32, day: u32, hour: u32) -> Option<ParsedDate> {
        NaiveDate::from_ymd_opt(year, month, day).and_then(|date| date.and_hms_opt(hour, 0, 0))
    }

    fn positions(ticks: &crate::api::TickSet) -> Vec<usize> {
        ticks.positions().collect()
    }

    #[test]
    fn hourly_picks_six_hour_marks() {
        let dates: Vec<_> = (0..24).map(|hour| at(2024, 5, 1, hour)).collect();
        let ticks = select_hourly(&dates).expect("select");
        assert_eq!(positions(&ticks), vec![0, 6, 12, 18]);
        assert_eq!(ticks.ticks()[2].text, "12:00");
    }

    #[test]
    fn daily_picks_mondays_and_skips_gaps() {
        // 2024-01-01 is a Monday.
        let mut dates: Vec<_> = (1..=15).map(|day| at(2024, 1, day, 0)).collect();
        dates[7] = None;
        let ticks = select_daily(&dates).expect("select");
        assert_eq!(positions(&ticks), vec![0, 14]);
        assert_eq!(ticks.ticks()[1].text, "Mon 01/15");
    }

    #[test]
    fn weekly_starts_at_fourth_position_and_needs_a_date() {
        let mut dates: Vec<_> = (0..12)
            .map(|week| {
                NaiveDate::from_ymd_opt(2024, 1, 1)
                    .and_then(|date| date.checked_add_days(chrono::Days::new(week * 7)))
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .collect();
        dates[7] = None;
        let ticks = select_weekly(&dates).expect("select");
        assert_eq!(positions(&ticks), vec![3, 11]);
    }

    #[test]
    fn monthly_selects_quarter_end_months_across_two_years() {
        let dates: Vec<_> = (0..24)
            .map(|index| at(2023 + index / 12, (index % 12) as u32 + 1, 1, 0))
            .collect();
        let ticks = select_monthly(&dates).expect("select");
        assert_eq!(positions(&ticks), vec![2, 5, 8, 11, 14, 17, 20, 23]);
        assert_eq!(ticks.ticks()[3].text, "Dec 2023");
        assert_eq!(ticks.ticks()[0].text, "March 2023");
    }

    #[test]
    fn quarterly_picks_latest_month_per_year_with_minor_ticks() {
        let dates: Vec<_> = (0..24)
            .map(|index| at(2022 + index / 12, (index % 12) as u32 + 1, 1, 0))
            .collect();
        let selection = select_quarterly(&dates)
            .expect("select")
            .expect("enough dates");
        assert_eq!(positions(&selection.major), vec![11, 23]);
        assert_eq!(selection.major.ticks()[1].text, "Dec 2023");
        assert_eq!(selection.minor, (0..24).collect::<Vec<_>>());
    }

    #[test]
    fn quarterly_drops_final_pick_that_is_not_the_years_latest_date() {
        let dates = vec![
            at(2022, 12, 1, 0),
            at(2023, 12, 1, 0),
            at(2024, 6, 1, 0),
            at(2024, 6, 20, 0),
        ];
        let selection = select_quarterly(&dates)
            .expect("select")
            .expect("enough dates");
        assert_eq!(positions(&selection.major), vec![0, 1]);
        assert_eq!(selection.minor, vec![0, 1, 2, 3]);
    }

    #[test]
    fn quarterly_requires_two_dates() {
        assert!(
            select_quarterly(&[None, at(2024, 3, 1, 0)])
                .expect("select")
                .is_none()
        );
    }

    #[test]
    fn quarterly_rejects_years_out_of_position_order() {
        let dates = vec![at(2024, 3, 1, 0), at(2023, 3, 1, 0)];
        assert!(select_quarterly(&dates).is_err());
    }

    #[test]
    fn year_spacing_table() {
        assert_eq!(year_tick_spacing(3), 1);
        assert_eq!(year_tick_spacing(5), 1);
        assert_eq!(year_tick_spacing(20), 2);
        assert_eq!(year_tick_spacing(30), 5);
        assert_eq!(year_tick_spacing(100), 10);
        assert_eq!(year_tick_spacing(2024 - 1776), 20);
    }

    #[test]
    fn yearly_aligns_to_first_year() {
        let dates: Vec<_> = (2000..=2012).map(|year| at(year, 1, 1, 0)).collect();
        let ticks = select_yearly(&dates).expect("select").expect("enough dates");
        assert_eq!(positions(&ticks), vec![0, 2, 4, 6, 8, 10, 12]);
        assert_eq!(ticks.ticks()[1].text, "2002");
    }

    #[test]
    fn yearly_requires_two_dates() {
        assert!(select_yearly(&[at(2020, 1, 1, 0)]).expect("select").is_none());
    }
}
