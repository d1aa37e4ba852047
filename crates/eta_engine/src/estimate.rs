use crate::{EtaError, ProgressEstimate, TaskSnapshot};

const NANOS_PER_MILLI: f64 = 1e6;

/// Project a snapshot forward to `now_millis`.
///
/// The rate comes from the task's own running-time accounting, while the
/// projection uses wall-clock time elapsed since the task started. The two
/// clocks are not reconciled.
pub fn estimate(snapshot: &TaskSnapshot, now_millis: i64) -> Result<ProgressEstimate, EtaError> {
    if snapshot.total == 0
        || snapshot.processed_at_snapshot == 0
        || snapshot.running_time_nanos == 0
    {
        return Err(EtaError::InsufficientData);
    }

    let running_millis = snapshot.running_time_nanos as f64 / NANOS_PER_MILLI;
    let rate = snapshot.processed_at_snapshot as f64 / running_millis;
    let elapsed_millis = now_millis.saturating_sub(snapshot.start_time_millis) as f64;
    let estimated_processed_now = rate * elapsed_millis;
    let estimated_remaining_millis = (snapshot.total as f64 - estimated_processed_now) / rate;

    Ok(ProgressEstimate {
        rate_units_per_millis: rate,
        estimated_processed_now,
        estimated_remaining_millis,
        evaluated_at_millis: now_millis,
    })
}
