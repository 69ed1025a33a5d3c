use crate::model::Record;
use crate::store::SortReport;
use std::time::{Duration, Instant};

pub mod add;
pub mod list;
pub mod remove;
pub mod search;
pub mod sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Cost of one sort or search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics {
    pub comparisons: u64,
    pub elapsed: Duration,
}

/// A record located by a search, with its position in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Found {
    pub position: usize,
    pub record: Record,
}

/// Comparison counts of the most recent call of each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counters {
    pub array_linear: u64,
    pub array_binary: u64,
    pub list_linear: u64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Record>,
    pub listed: Vec<Record>,
    pub found: Option<Found>,
    pub metrics: Option<Metrics>,
    pub sort: Option<SortReport>,
    pub counters: Option<Counters>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, records: Vec<Record>) -> Self {
        self.affected = records;
        self
    }

    pub fn with_listed(mut self, records: Vec<Record>) -> Self {
        self.listed = records;
        self
    }

    pub fn with_found(mut self, found: Found) -> Self {
        self.found = Some(found);
        self
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn with_sort(mut self, report: SortReport) -> Self {
        self.sort = Some(report);
        self
    }

    pub fn with_counters(mut self, counters: Counters) -> Self {
        self.counters = Some(counters);
        self
    }

    pub fn comparisons(&self) -> Option<u64> {
        self.metrics.map(|m| m.comparisons)
    }
}

/// Runs `op` and measures how long it took.
pub(crate) fn timed<T>(op: impl FnOnce() -> T) -> (T, Duration) {
    let started = Instant::now();
    let value = op();
    (value, started.elapsed())
}
