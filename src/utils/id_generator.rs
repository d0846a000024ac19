use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Source of unique identifiers for ledger entries and other records.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// `{prefix}_{unix millis}_{counter}`; unique for the lifetime of the process.
#[derive(Debug)]
pub struct TimestampIdGenerator {
    prefix: &'static str,
    counter: AtomicU64,
}

impl TimestampIdGenerator {
    pub const fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            counter: AtomicU64::new(1),
        }
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn next_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{}_{}_{n}", self.prefix, Utc::now().timestamp_millis())
    }
}
