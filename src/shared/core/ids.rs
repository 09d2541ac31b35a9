// Identifier generation for licenses and users.
//
// Purpose
// - Hand out string ids derived from the current time in milliseconds.
//
// Responsibilities
// - Never issue the same id twice from one generator, even within a single millisecond.

use chrono::Utc;
use std::sync::atomic::{AtomicI64, Ordering};

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Millisecond timestamps, bumped past the last issued value when the clock has not moved.
#[derive(Debug, Default)]
pub struct MillisIdGenerator {
    last: AtomicI64,
}

impl MillisIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_after(&self, now: i64) -> i64 {
        let mut previous = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(previous.saturating_add(1));
            match self.last.compare_exchange_weak(
                previous,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(actual) => previous = actual,
            }
        }
    }
}

impl IdGenerator for MillisIdGenerator {
    fn next_id(&self) -> String {
        self.next_after(Utc::now().timestamp_millis()).to_string()
    }
}
