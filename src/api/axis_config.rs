use serde::{Deserialize, Serialize};

/// Renderer tick placement mode. Only explicit arrays are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickMode {
    #[default]
    Array,
}

/// Side of the axis line the tick marks are drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TickPlacement {
    #[default]
    Outside,
}

/// Explicit tick positions and their index-aligned texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickArray {
    pub tickmode: TickMode,
    pub tickvals: Vec<usize>,
    pub ticktext: Vec<String>,
    pub tickangle: i32,
}

/// Shared tick and axis-line style used by every date-driven policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLineStyle {
    pub showticklabels: bool,
    pub showgrid: bool,
    pub ticks: TickPlacement,
    pub ticklen: u32,
    pub tickwidth: u32,
    pub tickcolor: String,
    pub showline: bool,
    pub linecolor: String,
    pub linewidth: u32,
}

/// Secondary unlabeled tick marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinorAxisConfig {
    pub tickmode: TickMode,
    pub tickvals: Vec<usize>,
    pub showgrid: bool,
    pub ticks: TickPlacement,
    pub ticklen: u32,
    pub tickwidth: u32,
    pub tickcolor: String,
}

/// Renderer-facing x-axis configuration.
///
/// Absent parts are omitted when serialized, so the empty configuration is
/// written as `{}` and tells the renderer to keep its native labelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AxisConfig {
    #[serde(flatten)]
    pub ticks: Option<TickArray>,
    #[serde(flatten)]
    pub style: Option<AxisLineStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minor: Option<MinorAxisConfig>,
}

impl AxisConfig {
    /// Configuration that leaves labelling to the renderer.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_none() && self.style.is_none() && self.minor.is_none()
    }

    #[must_use]
    pub fn tickvals(&self) -> &[usize] {
        self.ticks
            .as_ref()
            .map_or(&[], |ticks| ticks.tickvals.as_slice())
    }

    #[must_use]
    pub fn ticktext(&self) -> &[String] {
        self.ticks
            .as_ref()
            .map_or(&[], |ticks| ticks.ticktext.as_slice())
    }

    #[must_use]
    pub fn tickangle(&self) -> Option<i32> {
        self.ticks.as_ref().map(|ticks| ticks.tickangle)
    }
}
