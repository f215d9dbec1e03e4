//! Identifier strategies for newly recorded transactions.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::time::{Clock, SystemClock};
use crate::domain::TransactionId;

/// Produces a fresh identifier on every call. Never fails.
pub trait IdGenerator: fmt::Debug {
    fn next_id(&mut self) -> TransactionId;
}

/// Monotonic counter rendered as `txn-<n>`.
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TransactionId {
        let id = TransactionId::new(format!("txn-{}", self.next));
        self.next += 1;
        id
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TransactionId {
        TransactionId::new(Uuid::new_v4().to_string())
    }
}

/// Millisecond timestamps, bumped forward when two calls share a tick.
#[derive(Debug, Clone)]
pub struct TimestampIdGenerator<C: Clock = SystemClock> {
    clock: C,
    last: i64,
}

impl<C: Clock> TimestampIdGenerator<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last: i64::MIN,
        }
    }
}

impl TimestampIdGenerator<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimestampIdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock + fmt::Debug> IdGenerator for TimestampIdGenerator<C> {
    fn next_id(&mut self) -> TransactionId {
        let millis = self.clock.now().timestamp_millis();
        self.last = if millis > self.last {
            millis
        } else {
            self.last + 1
        };
        TransactionId::new(self.last.to_string())
    }
}

/// Configurable choice of [`IdGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    #[default]
    Sequential,
    Uuid,
    Timestamp,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn IdGenerator> {
        match self {
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::new()),
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
            IdStrategy::Timestamp => Box::new(TimestampIdGenerator::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use super::*;
    use crate::core::time::FixedClock;

    #[test]
    fn sequential_ids_increase() {
        let mut ids = SequentialIdGenerator::new();
        assert_eq!(ids.next_id().as_str(), "txn-1");
        assert_eq!(ids.next_id().as_str(), "txn-2");
    }

    #[test]
    fn timestamp_ids_do_not_collide_within_one_tick() {
        let clock = FixedClock::on(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let mut ids = TimestampIdGenerator::with_clock(clock);
        let generated: HashSet<_> = (0..50).map(|_| ids.next_id()).collect();
        assert_eq!(generated.len(), 50);
    }

    #[test]
    fn uuid_ids_are_unique() {
        let mut ids = IdStrategy::Uuid.generator();
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
