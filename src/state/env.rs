//! Environment seams: id generation and wall-clock time
//!
//! The session never reaches for randomness or the system clock directly;
//! it asks these traits, so tests can substitute deterministic sources.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of unique, never-reused identifiers
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    /// Produce the next identifier
    fn next_id(&mut self) -> String;
}

/// Source of the current time
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
