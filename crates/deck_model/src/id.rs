//! Identity generation for slides and elements
//!
//! Existing documents carry plain integer ids taken from the wall clock,
//! which can collide when two creations land in the same millisecond. The
//! generator here keeps integer, timestamp-derived ids for compatibility but
//! advances monotonically past the last issued value, so ids are unique even
//! under rapid creation.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Unique identifier for a slide within a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(pub i64);

impl std::fmt::Display for SlideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an element within a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(pub i64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic, timestamp-seeded id generator.
///
/// Each call to [`next`](IdGenerator::next) returns the current millisecond
/// timestamp, or last-issued + 1 when the clock has not advanced. Ids issued
/// by one generator are therefore strictly increasing and pairwise distinct.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Issue the next id.
    pub fn next(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last = if now > self.last { now } else { self.last + 1 };
        self.last
    }

    /// Reserve a contiguous block of `count` ids and return the first one.
    ///
    /// Used by deck instantiation, where every slide of a template must get
    /// an id derived from a single base plus its positional offset.
    pub fn reserve(&mut self, count: i64) -> i64 {
        let base = self.next();
        self.last = base + count.max(1) - 1;
        base
    }

    /// Issue a fresh slide id.
    pub fn next_slide_id(&mut self) -> SlideId {
        SlideId(self.next())
    }

    /// Issue a fresh element id.
    pub fn next_element_id(&mut self) -> ElementId {
        ElementId(self.next())
    }
}
