/// Source of wall-clock time for ticks.
pub trait Clock {
    /// Current instant in epoch milliseconds.
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
pub use test_clock::StepClock;

#[cfg(test)]
mod test_clock {
    use std::cell::Cell;

    use super::Clock;

    /// Returns `start`, then advances by `step` on every read.
    pub struct StepClock {
        next: Cell<i64>,
        step: i64,
    }

    impl StepClock {
        pub fn new(start: i64, step: i64) -> Self {
            Self {
                next: Cell::new(start),
                step,
            }
        }
    }

    impl Clock for StepClock {
        fn now_millis(&self) -> i64 {
            let now = self.next.get();
            self.next.set(now + self.step);
            now
        }
    }
}
