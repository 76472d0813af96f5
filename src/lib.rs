//! chart-axis-spacing: interval-aware x-axis tick selection.
//!
//! Given the ordered x-axis labels of a chart, the engine infers whether the
//! labels are dates and at which granularity, picks the ticks worth showing,
//! and emits a renderer-ready axis configuration. Non-temporal labels fall
//! back to positional sampling.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{AxisConfig, AxisSpacing, AxisSpacingConfig, AxisSpacingEngine, compute_axis_spacing};
pub use error::{AxisSpacingError, AxisSpacingResult};
