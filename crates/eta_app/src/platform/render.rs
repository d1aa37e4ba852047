use std::fmt::Display;

use chrono::TimeZone;
use eta_core::AppViewModel;
use eta_engine::{
    format_end_time, format_progress, format_remaining, format_title, COMPLETION_MARKER,
};

/// Text for one tick, ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub remaining: String,
    pub end_time: String,
    pub progress: String,
    pub title: String,
    pub completed: bool,
}

impl Frame {
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = vec![
            self.remaining.as_str(),
            self.end_time.as_str(),
            self.progress.as_str(),
        ];
        if self.completed {
            lines.push(COMPLETION_MARKER);
        }
        lines
    }
}

/// Builds a frame from the latest estimate; `None` before the first tick.
pub fn render<Tz>(view: &AppViewModel, tz: &Tz) -> Option<Frame>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let snapshot = view.snapshot.as_ref()?;
    let estimate = view.estimate.as_ref()?;
    Some(Frame {
        remaining: format_remaining(estimate.estimated_remaining_millis),
        end_time: format_end_time(
            tz,
            estimate.evaluated_at_millis,
            estimate.estimated_remaining_millis,
        ),
        progress: format_progress(snapshot, estimate),
        title: format_title(estimate, snapshot.total, &snapshot.task_id),
        completed: view.completed,
    })
}
