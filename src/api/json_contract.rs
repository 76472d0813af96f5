use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::debug;

use crate::core::IntervalBucket;
use crate::error::{AxisSpacingError, AxisSpacingResult};

use super::{AxisConfig, AxisSpacingEngine};

pub const DEFAULT_CHART_TYPE: &str = "vertical_bar";
const MISSING_LABELS_MESSAGE: &str = "No X-axis labels provided";

/// Auto-spacing request as posted by chart front ends.
///
/// Label values may be any JSON scalar; they are converted to text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoSpacingRequest {
    #[serde(default, alias = "labels")]
    pub x_labels: Vec<Value>,
    /// Accepted for parity with the chart formatter; tick selection ignores it.
    #[serde(default = "default_chart_type", alias = "chartTypeHint")]
    pub chart_type: String,
}

impl AutoSpacingRequest {
    #[must_use]
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        Self {
            x_labels: labels
                .iter()
                .map(|label| Value::String(label.as_ref().to_owned()))
                .collect(),
            chart_type: default_chart_type(),
        }
    }

    pub fn from_json_str(input: &str) -> AxisSpacingResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            AxisSpacingError::InvalidRequest(format!("failed to parse auto-spacing request: {e}"))
        })
    }

    /// Label texts in input order; `null` becomes an empty placeholder.
    #[must_use]
    pub fn label_texts(&self) -> Vec<String> {
        self.x_labels.iter().map(label_text).collect()
    }
}

/// Auto-spacing response.
///
/// Successful bodies always carry `interval_type` (`null` when the labels were
/// not classified); failure bodies carry only `success` and `error`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AutoSpacingResponse {
    pub success: bool,
    #[serde(default)]
    pub xaxis_config: Option<AxisConfig>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub interval_type: Option<IntervalBucket>,
}

impl Serialize for AutoSpacingResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AutoSpacingResponse", 4)?;
        state.serialize_field("success", &self.success)?;
        match &self.xaxis_config {
            Some(config) => state.serialize_field("xaxis_config", config)?,
            None => state.skip_field("xaxis_config")?,
        }
        match &self.error {
            Some(message) => state.serialize_field("error", message)?,
            None => state.skip_field("error")?,
        }
        if self.success {
            state.serialize_field("interval_type", &self.interval_type)?;
        } else {
            state.skip_field("interval_type")?;
        }
        state.end()
    }
}

impl AutoSpacingResponse {
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            xaxis_config: None,
            error: Some(message.into()),
            interval_type: None,
        }
    }

    pub fn to_json_pretty(&self) -> AxisSpacingResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl AxisSpacingEngine {
    /// Handles a decoded request; only malformed requests report failure.
    #[must_use]
    pub fn handle_request(&self, request: &AutoSpacingRequest) -> AutoSpacingResponse {
        if request.x_labels.is_empty() {
            return AutoSpacingResponse::failure(MISSING_LABELS_MESSAGE);
        }

        let labels = request.label_texts();
        debug!(
            label_count = labels.len(),
            chart_type = %request.chart_type,
            "auto-spacing request"
        );
        let spacing = self.compute(&labels);
        AutoSpacingResponse {
            success: true,
            xaxis_config: Some(spacing.axis),
            error: None,
            interval_type: spacing.interval,
        }
    }

    /// Handles a raw JSON request body and always returns a response body.
    #[must_use]
    pub fn handle_auto_spacing_json(&self, input: &str) -> String {
        let response = match AutoSpacingRequest::from_json_str(input) {
            Ok(request) => self.handle_request(&request),
            Err(err) => AutoSpacingResponse::failure(err.to_string()),
        };
        serde_json::to_string(&response).unwrap_or_else(|_| {
            r#"{"success":false,"error":"failed to serialize auto-spacing response"}"#.to_owned()
        })
    }
}

fn default_chart_type() -> String {
    DEFAULT_CHART_TYPE.to_owned()
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
