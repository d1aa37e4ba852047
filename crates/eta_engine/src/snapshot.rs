use eta_logging::eta_debug;
use serde::Deserialize;
use serde_json::Value;

use crate::{normalize, EtaError, TaskSnapshot};

#[derive(Debug, Deserialize)]
struct TaskDocument {
    status: StatusCounters,
    start_time_in_millis: i64,
    running_time_in_nanos: u64,
    id: TaskIdField,
    #[serde(default)]
    node: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusCounters {
    total: u64,
    #[serde(default)]
    created: u64,
    #[serde(default)]
    updated: u64,
    #[serde(default)]
    deleted: u64,
    #[serde(default)]
    version_conflicts: u64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TaskIdField {
    Text(String),
    Number(u64),
}

impl TaskIdField {
    fn render(self, node: Option<String>) -> String {
        let id = match self {
            TaskIdField::Text(text) => text,
            TaskIdField::Number(number) => number.to_string(),
        };
        match node {
            Some(node) if !node.is_empty() && !id.contains(':') => format!("{node}:{id}"),
            _ => id,
        }
    }
}

/// Normalize raw user text, then parse it.
pub fn parse_input(raw: &str) -> Result<TaskSnapshot, EtaError> {
    parse(&normalize(raw))
}

/// Extract a [`TaskSnapshot`] from a task status document.
///
/// A document whose top-level `completed` flag is set is rejected before any
/// task field is looked at. `total == 0` is accepted here; the estimator
/// rejects it on every evaluation.
pub fn parse(normalized: &str) -> Result<TaskSnapshot, EtaError> {
    let mut document: Value = serde_json::from_str(normalized).map_err(EtaError::malformed)?;

    if document
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        return Err(EtaError::AlreadyCompleted);
    }

    let task = document
        .get_mut("task")
        .map(Value::take)
        .ok_or_else(|| EtaError::malformed("missing field `task`"))?;
    let task: TaskDocument = serde_json::from_value(task).map_err(EtaError::malformed)?;

    let status = &task.status;
    let processed_at_snapshot = [status.updated, status.deleted, status.version_conflicts]
        .into_iter()
        .try_fold(status.created, u64::checked_add)
        .ok_or_else(|| EtaError::malformed("processed counters overflow"))?;

    let snapshot = TaskSnapshot {
        total: status.total,
        processed_at_snapshot,
        start_time_millis: task.start_time_in_millis,
        running_time_nanos: task.running_time_in_nanos,
        task_id: task.id.render(task.node),
    };
    eta_debug!(
        "parsed snapshot task_id={} total={} processed={} running_ns={}",
        snapshot.task_id,
        snapshot.total,
        snapshot.processed_at_snapshot,
        snapshot.running_time_nanos
    );
    Ok(snapshot)
}
