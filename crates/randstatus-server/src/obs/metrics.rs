//! Request counter registry.
//!
//! Counters with dynamic labels backed by `DashMap`. Labels are flattened into
//! sorted key vectors to keep deterministic ordering, and values are plain
//! `AtomicU64`s so concurrent handlers never lose an increment.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    /// Increment by an arbitrary value.
    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value of one series, 0 if it was never touched.
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Sum over every series whose labels include all of `filter`.
    pub fn sum_matching(&self, filter: &[(&str, &str)]) -> u64 {
        self.map
            .iter()
            .filter(|r| {
                filter
                    .iter()
                    .all(|(fk, fv)| r.key().iter().any(|(k, v)| k == fk && v == fv))
            })
            .map(|r| r.value().load(Ordering::Relaxed))
            .sum()
    }

    /// Render in Prometheus text exposition format. Series are sorted by label
    /// set so consecutive scrapes line up.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut series: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        series.sort();

        for (label_str, val) in series {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Process-wide registry, created once at startup and shared via `AppState`.
pub struct AppMetrics {
    pub http_requests: CounterVec,
    start_time_secs: u64,
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl AppMetrics {
    pub fn new() -> Self {
        let start_time_secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self {
            http_requests: CounterVec::default(),
            start_time_secs,
        }
    }

    /// Count one handled request on `endpoint`.
    pub fn record_request(&self, endpoint: &str, method: &str, status: u16) {
        let status = status.to_string();
        self.http_requests.inc(&[
            ("endpoint", endpoint),
            ("method", method),
            ("status", &status),
        ]);
    }

    pub fn start_time_secs(&self) -> u64 {
        self.start_time_secs
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests
            .render(HTTP_REQUESTS_TOTAL, "Total number of HTTP requests.", &mut out);

        let _ = writeln!(
            out,
            "# HELP process_start_time_seconds Start time of the process since unix epoch in seconds.\n# TYPE process_start_time_seconds gauge\nprocess_start_time_seconds {}",
            self.start_time_secs
        );
        out
    }
}
