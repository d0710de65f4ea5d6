//! Domain types providing compile-time safety and self-documentation
//!
//! Trace timestamps arrive in microseconds while every user-facing duration
//! is expressed in milliseconds. The `Timestamp` newtype keeps the two from
//! being mixed up.

use std::fmt;

/// Timestamp in microseconds
///
/// Represents a point on the trace's monotonic clock, exactly as recorded
/// in the `ts` field of a trace event. Kept as `f64`: captures may carry
/// sub-microsecond fractions and those must survive ordering.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Timestamp(pub f64);

impl Timestamp {
    /// Convert to milliseconds (f64)
    #[must_use]
    pub fn as_millis(self) -> f64 {
        self.0 / 1_000.0
    }

    /// Milliseconds elapsed since `earlier`.
    #[must_use]
    pub fn millis_since(self, earlier: Timestamp) -> f64 {
        (self.0 - earlier.0) / 1_000.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}ms", self.as_millis())
    }
}
