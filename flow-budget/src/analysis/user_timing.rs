//! User-timing event selection and ordering.
//!
//! Browsers emit `performance.mark()` / `performance.measure()` calls under
//! the `blink.user_timing` category, but the renderer also files a handful
//! of its own navigation markers there. Those carry either a well-known
//! name or a `frame` argument and are dropped here.
//!
//! The surviving events are sorted by timestamp. Equal timestamps keep
//! document order so that a begin written before its end at the same
//! microsecond is still seen first.

use crate::trace_data::RawEvent;
use log::debug;

/// Category tag carried by user-timing events.
pub const USER_TIMING_CATEGORY: &str = "blink.user_timing";

/// Renderer-internal markers that are filed under the user-timing category.
pub const EXCLUDED_NAMES: [&str; 3] =
    ["requestStart", "navigationStart", "paintNonDefaultBackgroundColor"];

/// Argument key attached to frame-scoped navigation/paint markers.
pub const FRAME_ARG: &str = "frame";

/// Returns true if the event is a user-defined mark or measure.
#[must_use]
pub fn is_user_timing(event: &RawEvent) -> bool {
    event.has_category(USER_TIMING_CATEGORY)
        && !EXCLUDED_NAMES.contains(&event.name.as_str())
        && !event.has_arg(FRAME_ARG)
}

/// Select user-timing events and order them by (timestamp, input index).
///
/// The input may be in any order; the output does not depend on it.
#[must_use]
pub fn select_user_timings(events: &[RawEvent]) -> Vec<&RawEvent> {
    let mut selected: Vec<&RawEvent> = events.iter().filter(|e| is_user_timing(e)).collect();
    selected.sort_by(|a, b| {
        a.timestamp.0.total_cmp(&b.timestamp.0).then(a.index.cmp(&b.index))
    });

    debug!("Selected {} of {} trace events as user timings", selected.len(), events.len());
    selected
}
