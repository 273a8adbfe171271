//! # Id Generator
//!
//! Opaque identifiers for parsed ingredients and steps. The format is not
//! load-bearing; the only guarantee is uniqueness within one generator.

use chrono::Utc;
use rand::{distributions::Alphanumeric, Rng};

/// Length of the random suffix appended to timestamp ids
pub const ID_SUFFIX_LEN: usize = 6;

/// Source of unique identifiers
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Timestamp plus random suffix, e.g. `18b3c2f4a10-x8Kq2Z`
///
/// The millisecond component is forced to increase strictly between calls, so
/// two ids from the same generator never share a prefix even when they are
/// produced within the same millisecond.
#[derive(Debug, Default)]
pub struct TimestampIds {
    last_millis: i64,
}

impl TimestampIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for TimestampIds {
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        let millis = now.max(self.last_millis + 1);
        self.last_millis = millis;

        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(ID_SUFFIX_LEN)
            .map(char::from)
            .collect();

        format!("{millis:x}-{suffix}")
    }
}

/// Deterministic `<prefix>-<n>` ids, starting at 1
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 1,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("id")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{}-{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}
