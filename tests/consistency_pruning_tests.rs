use chart_axis_spacing::api::TickPolicy;
use chart_axis_spacing::compute_axis_spacing;
use chart_axis_spacing::core::IntervalBucket;
use chrono::{Days, NaiveDate};

fn daily_run(start: NaiveDate, count: u64) -> Vec<String> {
    (0..count)
        .map(|offset| {
            start
                .checked_add_days(Days::new(offset))
                .expect("in range")
                .format("%m/%d/%Y")
                .to_string()
        })
        .collect()
}

fn monday_jan_1() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

#[test]
fn regular_monday_rhythm_prunes_nothing() {
    let labels = daily_run(monday_jan_1(), 29);
    let spacing = compute_axis_spacing(&labels);

    assert_eq!(spacing.policy, TickPolicy::Daily);
    assert!(!spacing.pruned);
    assert_eq!(spacing.axis.tickvals(), &[0, 7, 14, 21, 28]);
}

#[test]
fn final_monday_after_missing_days_is_dropped() {
    // Daily data that skips Jan 25 - Feb 4, so the last Monday lands three
    // positions after the previous one instead of seven.
    let mut labels = daily_run(monday_jan_1(), 24);
    labels.push("02/05/2024".to_owned());

    let spacing = compute_axis_spacing(&labels);

    assert_eq!(spacing.interval, Some(IntervalBucket::Day));
    assert!(spacing.pruned);
    assert_eq!(spacing.axis.tickvals(), &[0, 7, 14, 21]);
    assert_eq!(spacing.axis.ticktext().len(), 4);
    assert_eq!(spacing.axis.ticktext()[3], "Mon 01/22");
}

#[test]
fn two_ticks_are_never_pruned() {
    let labels = daily_run(monday_jan_1(), 10);
    let spacing = compute_axis_spacing(&labels);

    assert!(!spacing.pruned);
    assert_eq!(spacing.axis.tickvals(), &[0, 7]);
}

#[test]
fn rhythm_comes_from_earlier_deltas_only() {
    let mut labels = daily_run(monday_jan_1(), 8);
    labels.push("01/15/2024".to_owned());

    let spacing = compute_axis_spacing(&labels);

    assert!(spacing.pruned);
    assert_eq!(spacing.axis.tickvals(), &[0, 7]);
}

#[test]
fn trailing_hour_mark_after_gap_is_dropped() {
    let mut labels: Vec<String> = (0..19)
        .map(|hour| format!("2024-05-01 {hour:02}:00"))
        .collect();
    labels.push("2024-05-01 20:00".to_owned());
    labels.push("2024-05-02 00:00".to_owned());

    let spacing = compute_axis_spacing(&labels);

    assert_eq!(spacing.policy, TickPolicy::Hourly);
    assert!(spacing.pruned);
    assert_eq!(spacing.axis.tickvals(), &[0, 6, 12, 18]);
}
