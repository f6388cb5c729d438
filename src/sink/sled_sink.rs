use crate::sink::{format_route, RouteRecord, RouteSink};
use crate::Result;
use chrono::{Duration, Utc};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

/// Configuration for the durable route sink
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Directory holding the embedded database
    pub path: PathBuf,
    /// Time-to-live for per-pair records; `None` keeps them until superseded
    pub ttl_seconds: Option<u64>,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("routes_db"),
            ttl_seconds: None,
        }
    }
}

/// Durable route sink backed by an embedded store.
///
/// Two trees: `routes` holds one JSON [`RouteRecord`] per
/// (source, destination) pair, superseded on every save; `history` is a
/// rolling list of formatted route strings keyed by a monotonic id, so
/// iteration preserves insertion order. The store serializes concurrent
/// writers internally, which lets workers call [`RouteSink::save_route`]
/// without external locking.
///
/// TTL is evaluated at read time: an embedded store has no expiry daemon, so
/// [`SledRouteSink::route`] filters expired records and
/// [`SledRouteSink::purge_expired`] deletes them.
#[derive(Debug)]
pub struct SledRouteSink {
    db: sled::Db,
    routes: sled::Tree,
    history: sled::Tree,
    ttl_seconds: Option<u64>,
    closed: AtomicBool,
}

impl SledRouteSink {
    pub fn new(config: SinkConfig) -> Result<Self> {
        let db = sled::open(&config.path)?;
        let routes = db.open_tree("routes")?;
        let history = db.open_tree("history")?;
        Ok(Self {
            db,
            routes,
            history,
            ttl_seconds: config.ttl_seconds,
            closed: AtomicBool::new(false),
        })
    }

    fn pair_key(source: usize, destination: usize) -> String {
        format!("{}:{}", source, destination)
    }

    /// Looks up the stored record for a pair, ignoring expired entries
    pub fn route(&self, source: usize, destination: usize) -> Result<Option<RouteRecord>> {
        let key = Self::pair_key(source, destination);
        match self.routes.get(key.as_bytes())? {
            Some(bytes) => {
                let record: RouteRecord = serde_json::from_slice(&bytes)?;
                Ok((!record.is_expired(Utc::now())).then_some(record))
            }
            None => Ok(None),
        }
    }

    /// Returns the formatted routes in the order they were saved
    pub fn history(&self) -> Result<Vec<String>> {
        let mut routes = Vec::new();
        for entry in self.history.iter() {
            let (_, value) = entry?;
            routes.push(String::from_utf8_lossy(&value).into_owned());
        }
        Ok(routes)
    }

    /// Deletes expired records and returns how many were removed.
    /// Records that no longer decode are treated as expired.
    pub fn purge_expired(&self) -> Result<usize> {
        let now = Utc::now();
        let mut removed = 0;
        for entry in self.routes.iter() {
            let (key, bytes) = entry?;
            let expired = serde_json::from_slice::<RouteRecord>(&bytes)
                .map(|record| record.is_expired(now))
                .unwrap_or(true);
            if expired {
                self.routes.remove(key)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

impl RouteSink for SledRouteSink {
    fn save_route(&self, source: usize, destination: usize, route: &[usize]) -> Result<()> {
        let formatted = format_route(route);
        let now = Utc::now();
        let record = RouteRecord {
            path: formatted.clone(),
            recorded_at: now,
            expires_at: self
                .ttl_seconds
                .map(|secs| now + Duration::seconds(secs as i64)),
        };
        let bytes = serde_json::to_vec(&record)?;
        self.routes
            .insert(Self::pair_key(source, destination).as_bytes(), bytes)?;
        let id = self.db.generate_id()?;
        self.history.insert(id.to_be_bytes(), formatted.as_bytes())?;
        Ok(())
    }

    fn close(&self) -> Result<()> {
        // First closer flushes; everyone after is a no-op
        if self.closed.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.db.flush()?;
        Ok(())
    }
}
