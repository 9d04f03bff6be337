//! Incident id generation.
//!
//! Ids follow the wire format `INC-` plus six digits seeded from the
//! creation time's trailing epoch-millisecond digits, made
//! collision-proof within the process: two creations in the same
//! millisecond would otherwise truncate to the same suffix, so the
//! generator tracks the last issued counter value and bumps past it
//! before truncating.

use std::sync::atomic::{AtomicI64, Ordering};

/// Number of digit values in the id suffix space.
const SUFFIX_SPACE: i64 = 1_000_000;

/// Process-wide generator of unique `INC-######` identifiers.
pub struct IdGenerator {
    last: AtomicI64,
}

impl IdGenerator {
    /// Creates a generator that has issued no ids yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(-1),
        }
    }

    /// Returns the next unique id for a record created at `timestamp_ms`.
    ///
    /// The underlying counter is the creation timestamp, advanced past
    /// the previously issued value whenever the clock hasn't moved (or
    /// moved backwards). The id suffix is the counter's last six digits,
    /// so any two ids issued less than ~16 minutes apart are distinct.
    pub fn next_id(&self, timestamp_ms: i64) -> String {
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let value = if timestamp_ms > prev {
                timestamp_ms
            } else {
                prev + 1
            };
            match self
                .last
                .compare_exchange(prev, value, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => return format!("INC-{:06}", value.rem_euclid(SUFFIX_SPACE)),
                Err(observed) => prev = observed,
            }
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_id_shape(id: &str) {
        let suffix = id.strip_prefix("INC-").expect("missing INC- prefix");
        assert_eq!(suffix.len(), 6, "suffix of {id} is not six digits");
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn id_matches_wire_pattern() {
        let ids = IdGenerator::new();
        assert_id_shape(&ids.next_id(1_716_000_123_456));
    }

    #[test]
    fn suffix_comes_from_trailing_timestamp_digits() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(1_716_000_123_456), "INC-123456");
    }

    #[test]
    fn same_millisecond_burst_stays_unique() {
        let ids = IdGenerator::new();
        let timestamp = 1_716_000_123_456;

        let issued: Vec<String> = (0..1000).map(|_| ids.next_id(timestamp)).collect();

        let mut unique: Vec<&String> = issued.iter().collect();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), issued.len());
        for id in &issued {
            assert_id_shape(id);
        }
    }

    #[test]
    fn clock_moving_backwards_still_advances() {
        let ids = IdGenerator::new();
        let first = ids.next_id(1_716_000_123_456);
        let second = ids.next_id(1_716_000_000_000);
        assert_ne!(first, second);
        assert_eq!(second, "INC-123457");
    }
}
