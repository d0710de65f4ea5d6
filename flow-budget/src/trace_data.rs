//! Trace data models
//!
//! Parses Chrome Trace Event Format documents into [`RawEvent`]s, the
//! immutable input of the scoring pipeline. Only the fields the pipeline
//! needs are kept: category tags, name, phase, timestamp and args.
//!
//! Format reference:
//! https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU/preview

use crate::domain::{Timestamp, TraceError};
use log::info;
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use std::collections::BTreeSet;
use std::path::Path;

/// Role of an event within the user-timing instrumentation model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// `R`: a `performance.mark()` recorded by the renderer
    Mark,
    /// `I` or `i`: an instant event
    Instant,
    /// `B` or `b`: start of a measure
    Begin,
    /// `E` or `e`: end of a measure
    End,
    /// Any phase the pipeline does not care about (`X`, `M`, `n`, ...)
    Other(String),
}

impl Phase {
    /// Classify a raw `ph` value. Begin/end/instant are case-insensitive,
    /// the mark phase is only ever upper-case `R`.
    #[must_use]
    pub fn from_ph(ph: &str) -> Self {
        match ph {
            "R" => Phase::Mark,
            "I" | "i" => Phase::Instant,
            "B" | "b" => Phase::Begin,
            "E" | "e" => Phase::End,
            other => Phase::Other(other.to_string()),
        }
    }
}

/// A single trace event as supplied by the capture.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// Category tags, split from the comma-separated `cat` field
    pub categories: BTreeSet<String>,
    pub name: String,
    pub phase: Phase,
    pub timestamp: Timestamp,
    pub args: Map<String, JsonValue>,
    /// Position in the original document, used as a sort tie-break
    pub index: usize,
}

impl RawEvent {
    /// Build an event from its wire-level pieces.
    pub fn new(index: usize, cat: &str, name: impl Into<String>, ph: &str, ts: f64) -> Self {
        Self {
            categories: split_categories(cat),
            name: name.into(),
            phase: Phase::from_ph(ph),
            timestamp: Timestamp(ts),
            args: Map::new(),
            index,
        }
    }

    /// Attach an argument (builder style).
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: JsonValue) -> Self {
        self.args.insert(key.into(), value);
        self
    }

    #[must_use]
    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.contains(tag)
    }

    /// True when `args` carries `key`, whatever its value (null included).
    #[must_use]
    pub fn has_arg(&self, key: &str) -> bool {
        self.args.contains_key(key)
    }
}

fn split_categories(cat: &str) -> BTreeSet<String> {
    cat.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Wire format of one event. Everything is optional: captures from older
/// browsers and hand-written fixtures routinely omit fields.
#[derive(Debug, Deserialize)]
struct ChromeTraceEvent {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    cat: Option<String>,
    #[serde(default)]
    ph: Option<String>,
    #[serde(default)]
    ts: JsonValue,
    #[serde(default)]
    args: JsonValue,
}

#[derive(Debug, Deserialize)]
struct DefaultPass {
    #[serde(rename = "traceEvents")]
    trace_events: Vec<ChromeTraceEvent>,
}

/// The top-level shapes a trace file may take.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TraceDocument {
    /// Bare array of events
    Events(Vec<ChromeTraceEvent>),
    /// `{"traceEvents": [...]}`
    Trace {
        #[serde(rename = "traceEvents")]
        trace_events: Vec<ChromeTraceEvent>,
    },
    /// Lighthouse `traces` artifact: `{"defaultPass": {"traceEvents": [...]}}`
    Artifact {
        #[serde(rename = "defaultPass")]
        default_pass: DefaultPass,
    },
}

impl TraceDocument {
    fn into_events(self) -> Vec<ChromeTraceEvent> {
        match self {
            TraceDocument::Events(events) | TraceDocument::Trace { trace_events: events } => events,
            TraceDocument::Artifact { default_pass } => default_pass.trace_events,
        }
    }
}

/// Microsecond timestamp from a JSON number, fractions kept. Anything that
/// is not a number reads as 0.
fn parse_timestamp(ts: &JsonValue) -> f64 {
    ts.as_f64().unwrap_or(0.0)
}

impl ChromeTraceEvent {
    fn into_raw_event(self, index: usize) -> RawEvent {
        let args = match self.args {
            JsonValue::Object(map) => map,
            _ => Map::new(),
        };
        RawEvent {
            categories: split_categories(self.cat.as_deref().unwrap_or_default()),
            name: self.name.unwrap_or_default(),
            phase: Phase::from_ph(self.ph.as_deref().unwrap_or_default()),
            timestamp: Timestamp(parse_timestamp(&self.ts)),
            args,
            index,
        }
    }
}

/// A finished capture: every event of the trace in document order.
#[derive(Debug, Clone, Default)]
pub struct TraceData {
    pub events: Vec<RawEvent>,
}

impl TraceData {
    /// Parse a trace file into our internal representation
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|source| TraceError::ReadFailed { path: path.to_path_buf(), source })?;
        let data = Self::from_json_str(&content)?;
        info!("Loaded {} trace events from {}", data.events.len(), path.display());
        Ok(data)
    }

    /// Parse trace JSON held in memory
    pub fn from_json_str(content: &str) -> Result<Self, TraceError> {
        let document: TraceDocument = serde_json::from_str(content)?;
        let events = document
            .into_events()
            .into_iter()
            .enumerate()
            .map(|(index, event)| event.into_raw_event(index))
            .collect();
        Ok(TraceData { events })
    }

    /// Get event count
    #[must_use]
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
