mod axis_config;
mod axis_config_builder;
mod axis_label_format;
mod consistency_pruner;
mod default_spacing;
mod engine;
mod engine_config;
mod json_contract;
mod tick_policy;
mod tick_policy_selectors;
mod tick_set;

pub use axis_config::{
    AxisConfig, AxisLineStyle, MinorAxisConfig, TickArray, TickMode, TickPlacement,
};
pub use axis_config_builder::{
    DATE_TICK_ANGLE, ROTATED_TICK_ANGLE, build_date_axis_config, build_rotated_axis_config,
};
pub use axis_label_format::{
    MONTH_DISPLAY_NAMES, format_day_tick, format_hour_tick, format_month_tick, format_week_tick,
    format_year_tick, month_display_name,
};
pub use consistency_pruner::{DEFAULT_PRUNE_TOLERANCE_RATIO, prune_inconsistent_tail};
pub use default_spacing::{DEFAULT_NATIVE_LABEL_LIMIT, default_axis_config};
pub use engine::{AxisSpacing, AxisSpacingEngine, compute_axis_spacing};
pub use engine_config::AxisSpacingConfig;
pub use json_contract::{AutoSpacingRequest, AutoSpacingResponse, DEFAULT_CHART_TYPE};
pub use tick_policy::{PolicyOutcome, TickPolicy, TickPolicyOptions, select_axis_ticks};
pub use tick_policy_selectors::{
    QuarterlySelection, select_daily, select_hourly, select_monthly, select_quarterly,
    select_weekly, select_yearly, year_tick_spacing,
};
pub use tick_set::{Tick, TickSet};
