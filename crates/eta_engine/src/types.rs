/// Progress counters read from one status document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskSnapshot {
    pub total: u64,
    /// created + updated + deleted + version_conflicts.
    pub processed_at_snapshot: u64,
    pub start_time_millis: i64,
    pub running_time_nanos: u64,
    pub task_id: String,
}

/// One evaluation of a snapshot at a given wall-clock instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressEstimate {
    pub rate_units_per_millis: f64,
    pub estimated_processed_now: f64,
    /// Negative once the extrapolation has passed `total`.
    pub estimated_remaining_millis: f64,
    pub evaluated_at_millis: i64,
}

impl ProgressEstimate {
    /// Inclusive: reaching `total` exactly counts as complete.
    pub fn is_complete(&self, total: u64) -> bool {
        self.estimated_processed_now >= total as f64
    }

    /// Estimated completion in percent, capped at 100.
    pub fn percent_of(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        (self.estimated_processed_now / total as f64 * 100.0).min(100.0)
    }
}
