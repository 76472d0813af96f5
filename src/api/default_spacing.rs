use super::AxisConfig;
use super::axis_config_builder::build_rotated_axis_config;

/// Label count up to which the renderer's native labelling is kept.
pub const DEFAULT_NATIVE_LABEL_LIMIT: usize = 20;
/// Approximate number of labels shown by the positional fallback.
const POSITIONAL_TARGET_TICKS: usize = 10;

/// Positional fallback for non-temporal or unclassifiable labels.
///
/// Up to `native_label_limit` labels yield the empty configuration. Longer
/// sequences show every `max(1, len / 10)`-th raw label, rotated 45°.
#[must_use]
pub fn default_axis_config<S: AsRef<str>>(labels: &[S], native_label_limit: usize) -> AxisConfig {
    if labels.len() <= native_label_limit {
        return AxisConfig::empty();
    }

    let step = (labels.len() / POSITIONAL_TARGET_TICKS).max(1);
    let (tickvals, ticktext): (Vec<usize>, Vec<String>) = labels
        .iter()
        .enumerate()
        .step_by(step)
        .map(|(position, label)| (position, label.as_ref().to_owned()))
        .unzip();
    build_rotated_axis_config(tickvals, ticktext)
}
