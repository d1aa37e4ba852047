use std::fmt::{Display, Write};

use chrono::TimeZone;

use crate::{ProgressEstimate, TaskSnapshot};

/// Appended to the final render of a session that reached its total.
pub const COMPLETION_MARKER: &str = "Task should be complete by now.";

/// Layout of the absolute end instant.
pub const END_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// `Estimated remaining time: 1d 2h 3m 4s`, dropping leading zero units.
///
/// Sub-millisecond float noise is rounded away before flooring to seconds.
pub fn format_remaining(remaining_millis: f64) -> String {
    let mut out = String::from("Estimated remaining time: ");
    if remaining_millis.is_nan() || remaining_millis <= 0.0 {
        out.push_str("0s");
        return out;
    }

    let total_seconds = remaining_millis.round() as u64 / 1000;
    let days = total_seconds / SECONDS_PER_DAY;
    let hours = (total_seconds % SECONDS_PER_DAY) / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
    let seconds = total_seconds % SECONDS_PER_MINUTE;

    if days > 0 {
        let _ = write!(out, "{days}d ");
    }
    if hours > 0 || days > 0 {
        let _ = write!(out, "{hours}h ");
    }
    if minutes > 0 || hours > 0 || days > 0 {
        let _ = write!(out, "{minutes}m ");
    }
    let _ = write!(out, "{seconds}s");
    out
}

/// `Estimated end time: ...` rendered in `tz`.
pub fn format_end_time<Tz>(tz: &Tz, now_millis: i64, remaining_millis: f64) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let remaining = if remaining_millis > 0.0 {
        remaining_millis.round() as i64
    } else {
        0
    };
    let end_millis = now_millis.saturating_add(remaining);
    match tz.timestamp_millis_opt(end_millis).single() {
        Some(end) => format!("Estimated end time: {}", end.format(END_TIME_FORMAT)),
        None => "Estimated end time: unknown".to_string(),
    }
}

/// Reported counters next to the extrapolated ones.
pub fn format_progress(snapshot: &TaskSnapshot, estimate: &ProgressEstimate) -> String {
    let total = snapshot.total;
    // Floored so the count never claims the total before `is_complete` does.
    let estimated = estimate
        .estimated_processed_now
        .clamp(0.0, total as f64)
        .floor();
    format!(
        "Actual: {}/{} ({:.2}%) | Estimated: {:.0}/{} ({:.2}%)",
        snapshot.processed_at_snapshot,
        total,
        percent(snapshot.processed_at_snapshot as f64, total),
        estimated,
        total,
        estimate.percent_of(total).max(0.0),
    )
}

/// Short badge text, e.g. `42% node-1:5521`.
pub fn format_title(estimate: &ProgressEstimate, total: u64, task_id: &str) -> String {
    let pct = estimate.percent_of(total).max(0.0).floor() as u64;
    format!("{pct}% {task_id}")
}

fn percent(value: f64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (value / total as f64 * 100.0).min(100.0)
}
