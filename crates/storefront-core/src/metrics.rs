//! In-process metrics registry with Prometheus text exposition.
//!
//! Metrics are registered once at startup by name; registration hands back an
//! `Arc`-backed handle (`Counter`, `Summary`) so the hot path mutates plain
//! atomics and never touches the registry lock. The lock only guards the
//! descriptor list, which is read when `/metrics` renders a snapshot.
//!
//! Counter values are a relaxed `AtomicU64`. Summary sums are f64 seconds
//! stored as a `u64` bit pattern and updated with a CAS loop, so a concurrent
//! render always loads a whole, untorn value.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::error::{Result, StorefrontError};

#[derive(Debug, Default)]
struct CounterCell {
    value: AtomicU64,
}

/// Handle to a registered counter. Cheap to clone; all clones share the cell.
#[derive(Clone, Debug)]
pub struct Counter {
    cell: Arc<CounterCell>,
}

impl Counter {
    /// Increment by 1.
    pub fn inc(&self) {
        self.add(1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, v: u64) {
        self.cell.value.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value.
    pub fn value(&self) -> u64 {
        self.cell.value.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Default)]
struct SummaryCell {
    count: AtomicU64,
    /// f64 seconds stored as bits; updated via CAS so readers never see a
    /// half-written value.
    sum_bits: AtomicU64,
}

impl SummaryCell {
    fn observe(&self, seconds: f64) {
        self.count.fetch_add(1, Ordering::Relaxed);
        let mut cur = self.sum_bits.load(Ordering::Relaxed);
        loop {
            let next = (f64::from_bits(cur) + seconds).to_bits();
            match self
                .sum_bits
                .compare_exchange_weak(cur, next, Ordering::Relaxed, Ordering::Relaxed)
            {
                Ok(_) => break,
                Err(actual) => cur = actual,
            }
        }
    }

    fn sum(&self) -> f64 {
        f64::from_bits(self.sum_bits.load(Ordering::Relaxed))
    }
}

/// Handle to a registered summary. Cheap to clone; all clones share the cell.
#[derive(Clone, Debug)]
pub struct Summary {
    cell: Arc<SummaryCell>,
}

impl Summary {
    /// Record one observation of `seconds`.
    pub fn observe(&self, seconds: f64) {
        self.cell.observe(seconds);
    }

    /// Start a scoped wall-clock measurement. The observation is recorded
    /// when the returned guard drops, on normal return and on unwind alike.
    pub fn start_timer(&self) -> SummaryTimer {
        SummaryTimer {
            cell: Arc::clone(&self.cell),
            start: Instant::now(),
        }
    }

    /// Number of completed observations.
    pub fn count(&self) -> u64 {
        self.cell.count.load(Ordering::Relaxed)
    }

    /// Sum of observed seconds.
    pub fn sum(&self) -> f64 {
        self.cell.sum()
    }
}

/// Drop guard returned by [`Summary::start_timer`].
pub struct SummaryTimer {
    cell: Arc<SummaryCell>,
    start: Instant,
}

impl Drop for SummaryTimer {
    fn drop(&mut self) {
        self.cell.observe(self.start.elapsed().as_secs_f64());
    }
}

struct Entry {
    name: String,
    help: String,
    data: EntryData,
}

enum EntryData {
    Counter(Arc<CounterCell>),
    Summary(Arc<SummaryCell>),
    /// Constant info gauge (value 1) with fixed labels, e.g. `app_info`.
    Info(Vec<(String, String)>),
}

impl EntryData {
    fn kind(&self) -> &'static str {
        match self {
            EntryData::Counter(_) => "counter",
            EntryData::Summary(_) => "summary",
            EntryData::Info(_) => "gauge",
        }
    }
}

/// Process-wide metric registry. Cloning shares the underlying state.
#[derive(Clone, Default)]
pub struct Registry {
    entries: Arc<Mutex<Vec<Entry>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a counter. Fails if `name` is already taken.
    pub fn register_counter(&self, name: &str, help: &str) -> Result<Counter> {
        let cell = Arc::new(CounterCell::default());
        self.insert(name, help, EntryData::Counter(Arc::clone(&cell)))?;
        tracing::debug!(metric = name, "registered counter");
        Ok(Counter { cell })
    }

    /// Register a summary. Fails if `name` is already taken.
    pub fn register_summary(&self, name: &str, help: &str) -> Result<Summary> {
        let cell = Arc::new(SummaryCell::default());
        self.insert(name, help, EntryData::Summary(Arc::clone(&cell)))?;
        tracing::debug!(metric = name, "registered summary");
        Ok(Summary { cell })
    }

    /// Register a constant info metric rendered as a gauge with value 1.
    pub fn register_info(&self, name: &str, help: &str, labels: &[(&str, &str)]) -> Result<()> {
        let labels = labels
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.insert(name, help, EntryData::Info(labels))?;
        tracing::debug!(metric = name, "registered info");
        Ok(())
    }

    fn insert(&self, name: &str, help: &str, data: EntryData) -> Result<()> {
        // The critical sections below never panic, so a poisoned lock still
        // holds consistent data; recover it instead of propagating the panic.
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if entries.iter().any(|e| e.name == name) {
            return Err(StorefrontError::Config(format!(
                "metric already registered: {name}"
            )));
        }
        entries.push(Entry {
            name: name.to_string(),
            help: help.to_string(),
            data,
        });
        Ok(())
    }

    /// Render all registered metrics in Prometheus text exposition format,
    /// in registration order. Safe to call concurrently with increments and
    /// observations.
    pub fn render(&self) -> String {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut out = String::new();
        for e in entries.iter() {
            let _ = writeln!(out, "# HELP {} {}", e.name, e.help);
            let _ = writeln!(out, "# TYPE {} {}", e.name, e.data.kind());
            match &e.data {
                EntryData::Counter(cell) => {
                    let _ = writeln!(out, "{} {}", e.name, cell.value.load(Ordering::Relaxed));
                }
                EntryData::Summary(cell) => {
                    let _ = writeln!(out, "{}_count {}", e.name, cell.count.load(Ordering::Relaxed));
                    let _ = writeln!(out, "{}_sum {}", e.name, cell.sum());
                }
                EntryData::Info(labels) => {
                    let label_str = labels
                        .iter()
                        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                        .collect::<Vec<_>>()
                        .join(",");
                    let _ = writeln!(out, "{}{{{}}} 1", e.name, label_str);
                }
            }
        }
        out
    }
}

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}
