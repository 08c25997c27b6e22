//! In-process metrics for the service.
//!
//! Counters and histograms carry dynamic labels stored in a `DashMap`; label
//! sets are sorted so rendering is deterministic per key. Histogram buckets
//! are fixed in microseconds to avoid floating point math. Allocation gauges
//! are plain atomics written by the allocator task.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

type LabelKey = Vec<(String, String)>;

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn render_labels(key: &LabelKey) -> String {
    key.iter()
        .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0))
            .fetch_add(1, Ordering::Relaxed);
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} counter");
        for r in self.map.iter() {
            let val = r.value().load(Ordering::Relaxed);
            let _ = writeln!(out, "{}{{{}}} {}", name, render_labels(r.key()), val);
        }
    }
}

// 100us, 500us, 1ms, 5ms, 10ms, 50ms, 100ms, 500ms, 1s
const BUCKETS_MICROS: [u64; 9] = [100, 500, 1_000, 5_000, 10_000, 50_000, 100_000, 500_000, 1_000_000];

#[derive(Default)]
struct AtomicHistogram {
    count: AtomicU64,
    sum: AtomicU64,
    buckets: [AtomicU64; 9],
}

#[derive(Default)]
pub struct HistogramVec {
    map: DashMap<LabelKey, AtomicHistogram>,
}

impl HistogramVec {
    /// Observe a duration into cumulative buckets.
    pub fn observe(&self, labels: &[(&str, &str)], duration: Duration) {
        let hist = self.map.entry(label_key(labels)).or_default();
        let micros = duration.as_micros().min(u64::MAX as u128) as u64;

        hist.count.fetch_add(1, Ordering::Relaxed);
        hist.sum.fetch_add(micros, Ordering::Relaxed);
        for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
            if micros <= le {
                hist.buckets[i].fetch_add(1, Ordering::Relaxed);
            }
        }
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {name} histogram");
        for r in self.map.iter() {
            let hist = r.value();
            let labels = render_labels(r.key());
            let prefix = if labels.is_empty() { String::new() } else { format!("{labels},") };

            for (i, &le) in BUCKETS_MICROS.iter().enumerate() {
                let n = hist.buckets[i].load(Ordering::Relaxed);
                let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"{le}\"}} {n}");
            }
            let count = hist.count.load(Ordering::Relaxed);
            let _ = writeln!(out, "{name}_bucket{{{prefix}le=\"+Inf\"}} {count}");
            let _ = writeln!(out, "{name}_sum{{{labels}}} {}", hist.sum.load(Ordering::Relaxed));
            let _ = writeln!(out, "{name}_count{{{labels}}} {count}");
        }
    }
}

#[derive(Default)]
pub struct ServiceMetrics {
    pub http_requests: CounterVec,
    pub http_duration: HistogramVec, // microseconds
    allocations: AtomicU64,
    allocated_objects: AtomicU64,
    buffer_bytes: AtomicU64,
    allocator_stopped: AtomicU64,
    request_seq: AtomicU64,
}

impl ServiceMetrics {
    /// Record one completed allocation step.
    pub fn record_allocation(&self, count: u64, buffer_bytes: u64) {
        self.allocations.fetch_add(1, Ordering::Relaxed);
        self.allocated_objects.store(count, Ordering::Relaxed);
        self.buffer_bytes.store(buffer_bytes, Ordering::Relaxed);
    }

    pub fn set_allocator_stopped(&self) {
        self.allocator_stopped.store(1, Ordering::Relaxed);
    }

    /// Next per-request id, starting at 1.
    pub fn next_request_id(&self) -> u64 {
        self.request_seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn allocations(&self) -> u64 {
        self.allocations.load(Ordering::Relaxed)
    }

    /// Render everything in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.http_requests.render("memgrow_http_requests_total", &mut out);
        self.http_duration.render("memgrow_http_request_duration_micros", &mut out);

        let plain: [(&str, &str, &AtomicU64); 4] = [
            ("memgrow_allocations_total", "counter", &self.allocations),
            ("memgrow_allocated_objects", "gauge", &self.allocated_objects),
            ("memgrow_buffer_bytes", "gauge", &self.buffer_bytes),
            ("memgrow_allocator_stopped", "gauge", &self.allocator_stopped),
        ];
        for (name, kind, v) in plain {
            let _ = writeln!(out, "# TYPE {name} {kind}\n{name} {}", v.load(Ordering::Relaxed));
        }
        out
    }
}
