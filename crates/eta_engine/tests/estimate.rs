use eta_engine::{estimate, format_remaining, EtaError, TaskSnapshot};
use proptest::prelude::*;

const NOW: i64 = 1_700_000_060_000;

fn snapshot(
    total: u64,
    processed: u64,
    start_time_millis: i64,
    running_time_nanos: u64,
) -> TaskSnapshot {
    TaskSnapshot {
        total,
        processed_at_snapshot: processed,
        start_time_millis,
        running_time_nanos,
        task_id: "node:1".to_string(),
    }
}

fn approx(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} +/- {tolerance}, got {actual}"
    );
}

#[test]
fn one_minute_for_a_tenth_leaves_nine_minutes() {
    let snap = snapshot(1000, 100, NOW - 60_000, 60_000_000_000);
    let est = estimate(&snap, NOW).unwrap();

    approx(est.rate_units_per_millis, 100.0 / 60_000.0, 1e-12);
    approx(est.estimated_processed_now, 100.0, 1e-6);
    approx(est.estimated_remaining_millis, 540_000.0, 1e-3);
    assert_eq!(est.evaluated_at_millis, NOW);
    assert!(!est.is_complete(snap.total));
    assert_eq!(
        format_remaining(est.estimated_remaining_millis),
        "Estimated remaining time: 9m 0s"
    );
}

#[test]
fn evaluating_at_start_time_gives_total_over_rate() {
    let snap = snapshot(5000, 250, NOW, 10_000_000_000);
    let est = estimate(&snap, NOW).unwrap();

    let rate = 250.0 / (10_000_000_000_f64 / 1e6);
    assert_eq!(est.estimated_processed_now, 0.0);
    assert_eq!(est.estimated_remaining_millis, 5000.0 / rate);
    assert!(est.estimated_remaining_millis.is_finite());
}

#[test]
fn rate_uses_running_time_not_wall_clock() {
    // Task started 100s ago on the wall clock but only accounts 50s of work.
    let snap = snapshot(1000, 100, NOW - 100_000, 50_000_000_000);
    let est = estimate(&snap, NOW).unwrap();

    approx(est.rate_units_per_millis, 100.0 / 50_000.0, 1e-12);
    approx(est.estimated_processed_now, 200.0, 1e-6);
}

#[test]
fn remaining_turns_negative_after_total_is_passed() {
    let snap = snapshot(100, 50, NOW - 120_000, 30_000_000_000);
    let est = estimate(&snap, NOW).unwrap();

    assert!(est.estimated_remaining_millis < 0.0);
    assert!(est.is_complete(snap.total));
    assert_eq!(est.percent_of(snap.total), 100.0);
    assert_eq!(
        format_remaining(est.estimated_remaining_millis),
        "Estimated remaining time: 0s"
    );
}

#[test]
fn completion_is_inclusive_of_exact_total() {
    // rate = 1 unit/ms, so exactly 500ms after start the estimate hits 500.
    let snap = snapshot(500, 10, NOW - 500, 10_000_000);
    let est = estimate(&snap, NOW).unwrap();

    assert_eq!(est.estimated_processed_now, 500.0);
    assert_eq!(est.estimated_remaining_millis, 0.0);
    assert!(est.is_complete(snap.total));
}

#[test]
fn missing_progress_is_insufficient_data() {
    assert_eq!(
        estimate(&snapshot(0, 0, NOW, 1_000_000), NOW),
        Err(EtaError::InsufficientData)
    );
    assert_eq!(
        estimate(&snapshot(10, 0, NOW, 1_000_000), NOW),
        Err(EtaError::InsufficientData)
    );
    assert_eq!(
        estimate(&snapshot(10, 5, NOW, 0), NOW),
        Err(EtaError::InsufficientData)
    );
}

fn arb_snapshot() -> impl Strategy<Value = TaskSnapshot> {
    (1u64..1_000_000_000, 1u64..1_000_000_000, 1_000_000u64..1_000_000_000_000)
        .prop_map(|(total, processed, running)| snapshot(total, processed.min(total), NOW, running))
}

proptest! {
    /// Same inputs, same bits.
    #[test]
    fn estimate_is_deterministic(snap in arb_snapshot(), offset in -1_000_000i64..1_000_000_000) {
        let first = estimate(&snap, NOW + offset).unwrap();
        let second = estimate(&snap, NOW + offset).unwrap();
        prop_assert_eq!(
            first.estimated_processed_now.to_bits(),
            second.estimated_processed_now.to_bits()
        );
        prop_assert_eq!(
            first.estimated_remaining_millis.to_bits(),
            second.estimated_remaining_millis.to_bits()
        );
        prop_assert_eq!(
            first.rate_units_per_millis.to_bits(),
            second.rate_units_per_millis.to_bits()
        );
    }

    /// Later evaluations project strictly more progress and strictly less time left.
    #[test]
    fn later_now_means_more_done_and_less_left(
        snap in arb_snapshot(),
        offset in 0i64..1_000_000_000,
        step in 1_000i64..1_000_000,
    ) {
        let earlier = estimate(&snap, NOW + offset).unwrap();
        let later = estimate(&snap, NOW + offset + step).unwrap();
        prop_assert!(later.estimated_processed_now > earlier.estimated_processed_now);
        prop_assert!(later.estimated_remaining_millis < earlier.estimated_remaining_millis);
    }

    /// At the start instant nothing is projected yet and the remaining time is finite.
    #[test]
    fn start_instant_remaining_is_finite(snap in arb_snapshot()) {
        let est = estimate(&snap, snap.start_time_millis).unwrap();
        prop_assert_eq!(est.estimated_processed_now, 0.0);
        prop_assert!(est.estimated_remaining_millis.is_finite());
        prop_assert_eq!(
            est.estimated_remaining_millis,
            snap.total as f64 / est.rate_units_per_millis
        );
    }
}
