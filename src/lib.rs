//! Road Router - Concurrent Route Computation Engine
//!
//! This library computes shortest paths between pairs of vertices in a large
//! directed, weighted road network and persists each completed route for
//! later retrieval.
//!
//! The network is loaded once, then shared read-only by a fixed pool of
//! worker threads. Each route request names one of the interchangeable
//! shortest-path strategies; completed routes flow to a pluggable sink.

pub mod algorithm;
pub mod executor;
pub mod graph;
pub mod sink;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, registry::AlgorithmKind, RouteStrategy,
};
pub use executor::{ExecutorConfig, RouteCalculationExecutor};
/// Re-export main types for convenient use
pub use graph::road_network::RoadNetwork;
pub use sink::{sled_sink::SledRouteSink, MemoryRouteSink, RouteSink, SinkConfig};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("malformed edge record at line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },

    #[error("failed to read network data: {0}")]
    Io(#[from] std::io::Error),

    #[error("negative-weight cycle reachable from vertex {vertex}")]
    NegativeCycle { vertex: usize },

    #[error("executor is shut down, request {origin} -> {destination} rejected")]
    ExecutorClosed { origin: usize, destination: usize },

    #[error("shutdown drain timed out, {dropped} queued task(s) cancelled")]
    ShutdownTimeout { dropped: usize },

    #[error("route storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("route record encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
