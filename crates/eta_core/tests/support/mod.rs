#![allow(dead_code)]

use std::sync::Once;

pub const START: i64 = 1_700_000_000_000;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(eta_logging::initialize_for_tests);
}

/// A running task's status document; `running_ms` of accounted work.
pub fn status_json(total: u64, created: u64, running_ms: u64) -> String {
    format!(
        r#"{{
  "completed": false,
  "task": {{
    "node": "n1",
    "id": 42,
    "status": {{ "total": {total}, "created": {created} }},
    "start_time_in_millis": {START},
    "running_time_in_nanos": {running_ns}
  }}
}}"#,
        running_ns = running_ms * 1_000_000
    )
}
