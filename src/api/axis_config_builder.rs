use super::{
    AxisConfig, AxisLineStyle, MinorAxisConfig, TickArray, TickMode, TickPlacement, TickSet,
};

pub const DATE_TICK_ANGLE: i32 = 0;
pub const ROTATED_TICK_ANGLE: i32 = 45;

const AXIS_COLOR: &str = "black";
const MAJOR_TICK_LEN: u32 = 8;
const MAJOR_TICK_WIDTH: u32 = 2;
const AXIS_LINE_WIDTH: u32 = 1;
const MINOR_TICK_LEN: u32 = 5;
const MINOR_TICK_WIDTH: u32 = 1;

/// Builds the styled configuration used by all date-driven policies.
///
/// `minor_positions` is only supplied by the quarterly policy.
#[must_use]
pub fn build_date_axis_config(ticks: TickSet, minor_positions: Option<Vec<usize>>) -> AxisConfig {
    let (tickvals, ticktext) = ticks.into_parts();
    AxisConfig {
        ticks: Some(TickArray {
            tickmode: TickMode::Array,
            tickvals,
            ticktext,
            tickangle: DATE_TICK_ANGLE,
        }),
        style: Some(date_axis_line_style()),
        minor: minor_positions.map(minor_axis_config),
    }
}

/// Builds the unstyled, rotated configuration of the positional fallback.
#[must_use]
pub fn build_rotated_axis_config(tickvals: Vec<usize>, ticktext: Vec<String>) -> AxisConfig {
    AxisConfig {
        ticks: Some(TickArray {
            tickmode: TickMode::Array,
            tickvals,
            ticktext,
            tickangle: ROTATED_TICK_ANGLE,
        }),
        style: None,
        minor: None,
    }
}

fn date_axis_line_style() -> AxisLineStyle {
    AxisLineStyle {
        showticklabels: true,
        showgrid: false,
        ticks: TickPlacement::Outside,
        ticklen: MAJOR_TICK_LEN,
        tickwidth: MAJOR_TICK_WIDTH,
        tickcolor: AXIS_COLOR.to_owned(),
        showline: true,
        linecolor: AXIS_COLOR.to_owned(),
        linewidth: AXIS_LINE_WIDTH,
    }
}

fn minor_axis_config(tickvals: Vec<usize>) -> MinorAxisConfig {
    MinorAxisConfig {
        tickmode: TickMode::Array,
        tickvals,
        showgrid: false,
        ticks: TickPlacement::Outside,
        ticklen: MINOR_TICK_LEN,
        tickwidth: MINOR_TICK_WIDTH,
        tickcolor: AXIS_COLOR.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{build_date_axis_config, build_rotated_axis_config};
    use crate::api::{AxisConfig, TickSet};

    #[test]
    fn empty_config_serializes_as_empty_object() {
        let value = serde_json::to_value(AxisConfig::empty()).expect("serialize");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn date_config_carries_fixed_style_block() {
        let mut ticks = TickSet::new();
        ticks.push(3, "22 January 2024").expect("tick");
        let value = serde_json::to_value(build_date_axis_config(ticks, None)).expect("serialize");

        assert_eq!(
            value,
            json!({
                "tickmode": "array",
                "tickvals": [3],
                "ticktext": ["22 January 2024"],
                "tickangle": 0,
                "showticklabels": true,
                "showgrid": false,
                "ticks": "outside",
                "ticklen": 8,
                "tickwidth": 2,
                "tickcolor": "black",
                "showline": true,
                "linecolor": "black",
                "linewidth": 1
            })
        );
    }

    #[test]
    fn minor_block_uses_lighter_style() {
        let config = build_date_axis_config(TickSet::new(), Some(vec![0, 1, 2]));
        let value = serde_json::to_value(config).expect("serialize");
        assert_eq!(
            value["minor"],
            json!({
                "tickmode": "array",
                "tickvals": [0, 1, 2],
                "showgrid": false,
                "ticks": "outside",
                "ticklen": 5,
                "tickwidth": 1,
                "tickcolor": "black"
            })
        );
    }

    #[test]
    fn rotated_config_has_no_style_block() {
        let config = build_rotated_axis_config(vec![0, 2], vec!["a".to_owned(), "c".to_owned()]);
        let value = serde_json::to_value(config).expect("serialize");
        assert_eq!(
            value,
            json!({
                "tickmode": "array",
                "tickvals": [0, 2],
                "ticktext": ["a", "c"],
                "tickangle": 45
            })
        );
    }
}
