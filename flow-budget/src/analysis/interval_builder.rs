//! Reconstruction of named intervals from begin/end measure events.
//!
//! A single left-to-right fold over the ordered user timings. Each name has
//! at most one pending start; a second begin before the end replaces it.
//! Ends do not consume the pending start, so repeated ends for one begin
//! all measure from that same begin.
//!
//! An end with no begin before it still produces an interval. Its start
//! and duration are `NaN` and the scorer leaves it out of duration
//! statistics.

use crate::domain::Timestamp;
use crate::trace_data::{Phase, RawEvent};
use log::{debug, warn};
use std::collections::HashMap;

/// A reconstructed measure, times in milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedInterval {
    pub name: String,
    pub start_time_millis: f64,
    pub end_time_millis: f64,
    pub duration_millis: f64,
}

impl NamedInterval {
    fn closed(name: &str, start: Timestamp, end: Timestamp) -> Self {
        Self {
            name: name.to_string(),
            start_time_millis: start.as_millis(),
            end_time_millis: end.as_millis(),
            duration_millis: end.millis_since(start),
        }
    }

    fn orphaned(name: &str, end: Timestamp) -> Self {
        Self {
            name: name.to_string(),
            start_time_millis: f64::NAN,
            end_time_millis: end.as_millis(),
            duration_millis: f64::NAN,
        }
    }

    /// False for intervals whose begin was never seen.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.duration_millis.is_nan()
    }
}

/// Pair begin/end events into intervals. Never fails.
///
/// `events` must already be ordered (see
/// [`select_user_timings`](super::user_timing::select_user_timings)).
#[must_use]
pub fn build_intervals<'a, I>(events: I) -> Vec<NamedInterval>
where
    I: IntoIterator<Item = &'a RawEvent>,
{
    let mut pending_starts: HashMap<&'a str, Timestamp> = HashMap::new();
    let mut intervals = Vec::new();

    for event in events {
        match event.phase {
            // Marks carry no duration and are not scored.
            Phase::Mark | Phase::Instant | Phase::Other(_) => {}
            Phase::Begin => {
                pending_starts.insert(event.name.as_str(), event.timestamp);
            }
            Phase::End => {
                let interval = match pending_starts.get(event.name.as_str()) {
                    Some(&start) => NamedInterval::closed(&event.name, start, event.timestamp),
                    None => {
                        warn!("Measure \"{}\" ended at {} without a begin", event.name, event.timestamp);
                        NamedInterval::orphaned(&event.name, event.timestamp)
                    }
                };
                intervals.push(interval);
            }
        }
    }

    debug!("Reconstructed {} intervals", intervals.len());
    intervals
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(index: usize, name: &str, ph: &str, ts: f64) -> RawEvent {
        RawEvent::new(index, "blink.user_timing", name, ph, ts)
    }

    #[test]
    fn test_pairs_begin_and_end() {
        let events = vec![measure(0, "task", "b", 1_000.0), measure(1, "task", "e", 3_500.0)];
        let intervals = build_intervals(&events);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].name, "task");
        assert_eq!(intervals[0].start_time_millis, 1.0);
        assert_eq!(intervals[0].end_time_millis, 3.5);
        assert_eq!(intervals[0].duration_millis, 2.5);
        assert!(intervals[0].is_complete());
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let events = vec![
            measure(0, "task", "b", -9_000_000_000_000_000_000.0),
            measure(1, "task", "e", 9_000_000_000_000_000_000.0),
        ];
        let intervals = build_intervals(&events);

        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].duration_millis, 18_000_000_000_000_000.0);
    }

    #[test]
    fn test_phase_case_is_ignored() {
        let events = vec![measure(0, "task", "B", 0.0), measure(1, "task", "E", 2_000.0)];
        let intervals = build_intervals(&events);
        assert_eq!(intervals[0].duration_millis, 2.0);
    }

    #[test]
    fn test_last_begin_wins() {
        let events = vec![
            measure(0, "task", "b", 0.0),
            measure(1, "task", "b", 4_000.0),
            measure(2, "task", "e", 5_000.0),
        ];
        let intervals = build_intervals(&events);
        assert_eq!(intervals.len(), 1);
        assert_eq!(intervals[0].duration_millis, 1.0);
    }

    #[test]
    fn test_overlapping_names_are_independent() {
        let events = vec![
            measure(0, "outer", "b", 0.0),
            measure(1, "inner", "b", 1_000.0),
            measure(2, "inner", "e", 2_000.0),
            measure(3, "outer", "e", 10_000.0),
        ];
        let intervals = build_intervals(&events);
        assert_eq!(intervals[0].name, "inner");
        assert_eq!(intervals[0].duration_millis, 1.0);
        assert_eq!(intervals[1].name, "outer");
        assert_eq!(intervals[1].duration_millis, 10.0);
    }

    #[test]
    fn test_end_without_begin_is_orphaned() {
        let events = vec![measure(0, "task", "e", 2_000.0)];
        let intervals = build_intervals(&events);

        assert_eq!(intervals.len(), 1);
        assert!(!intervals[0].is_complete());
        assert!(intervals[0].start_time_millis.is_nan());
        assert_eq!(intervals[0].end_time_millis, 2.0);
    }

    #[test]
    fn test_end_does_not_consume_begin() {
        let events = vec![
            measure(0, "task", "b", 0.0),
            measure(1, "task", "e", 1_000.0),
            measure(2, "task", "e", 3_000.0),
        ];
        let durations: Vec<f64> =
            build_intervals(&events).iter().map(|i| i.duration_millis).collect();
        assert_eq!(durations, vec![1.0, 3.0]);
    }

    #[test]
    fn test_marks_and_other_phases_produce_nothing() {
        let events = vec![
            measure(0, "mark", "R", 0.0),
            measure(1, "instant", "I", 10.0),
            measure(2, "instant", "i", 20.0),
            measure(3, "complete", "X", 30.0),
        ];
        assert!(build_intervals(&events).is_empty());
    }

    #[test]
    fn test_begin_without_end_produces_nothing() {
        let events = vec![measure(0, "task", "b", 0.0)];
        assert!(build_intervals(&events).is_empty());
    }
}
