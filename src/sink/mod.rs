pub mod sled_sink;

use crate::Result;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

pub use sled_sink::{SinkConfig, SledRouteSink};

/// Durable recording endpoint for completed routes.
///
/// Implementations are invoked concurrently by worker threads and must
/// serialize conflicting writes internally; callers never lock around a sink.
/// Save failures are reported to the caller, which logs and swallows them.
pub trait RouteSink: Send + Sync {
    /// Durably records a completed route for (source, destination).
    ///
    /// A later route for the same pair supersedes the stored one.
    fn save_route(&self, source: usize, destination: usize, route: &[usize]) -> Result<()>;

    /// Releases held resources. Idempotent; the executor calls it exactly
    /// once at the end of shutdown.
    fn close(&self) -> Result<()>;
}

/// Formats a route the way it is logged and persisted: `Path: 1 -> 2 -> 3`
pub fn format_route(route: &[usize]) -> String {
    let joined = route
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("Path: {joined}")
}

/// The persisted form of one completed route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Formatted route string
    pub path: String,
    /// When the route was computed
    pub recorded_at: DateTime<Utc>,
    /// When the record stops being served, if the sink has a TTL
    pub expires_at: Option<DateTime<Utc>>,
}

impl RouteRecord {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.map_or(false, |at| at <= now)
    }
}

/// In-memory sink backed by a concurrent map.
///
/// Holds the per-pair records and an insertion-ordered history, and counts
/// every accepted write so tests can assert exactly-once delivery.
#[derive(Debug, Default)]
pub struct MemoryRouteSink {
    routes: DashMap<(usize, usize), RouteRecord>,
    history: Mutex<Vec<String>>,
    writes: AtomicUsize,
    closed: AtomicBool,
}

impl MemoryRouteSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored record for a pair, if any
    pub fn route(&self, source: usize, destination: usize) -> Option<RouteRecord> {
        self.routes
            .get(&(source, destination))
            .map(|record| record.clone())
    }

    /// Returns the formatted routes in the order they were saved
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }

    /// Total number of accepted writes
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl RouteSink for MemoryRouteSink {
    fn save_route(&self, source: usize, destination: usize, route: &[usize]) -> Result<()> {
        let formatted = format_route(route);
        self.history.lock().unwrap().push(formatted.clone());
        self.routes.insert(
            (source, destination),
            RouteRecord {
                path: formatted,
                recorded_at: Utc::now(),
                expires_at: None,
            },
        );
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
