use tracing::trace;

use super::TickSet;

/// Relative deviation above which the trailing tick is dropped.
pub const DEFAULT_PRUNE_TOLERANCE_RATIO: f64 = 0.5;

/// Drops the final tick when its spacing breaks the rhythm of earlier ticks.
///
/// Needs at least three ticks. The last position delta is compared with the
/// mean of all preceding deltas; a deviation larger than
/// `tolerance_ratio * mean` removes the last tick. Runs once, never
/// recursively. Returns `true` when a tick was removed.
pub fn prune_inconsistent_tail(ticks: &mut TickSet, tolerance_ratio: f64) -> bool {
    if ticks.len() < 3 {
        return false;
    }

    let deltas: Vec<f64> = ticks
        .ticks()
        .windows(2)
        .map(|pair| (pair[1].position - pair[0].position) as f64)
        .collect();
    let Some((&last_delta, leading)) = deltas.split_last() else {
        return false;
    };
    let mean = leading.iter().sum::<f64>() / leading.len() as f64;

    if (last_delta - mean).abs() > tolerance_ratio * mean {
        let dropped = ticks.pop();
        trace!(
            last_delta,
            mean_delta = mean,
            dropped_position = dropped.as_ref().map(|tick| tick.position),
            "pruned trailing tick"
        );
        return true;
    }
    false
}
