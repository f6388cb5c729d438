use crate::algorithm::bellman_ford::BellmanFord;
use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::traits::RouteStrategy;
use crate::graph::Graph;
use crate::Result;
use num_traits::{Float, Zero};
use std::fmt;
use std::fmt::Debug;

/// The closed set of routing strategies the engine can run.
///
/// Route requests carry one of these tags; dispatch is a `match`, so wiring
/// in a third algorithm is one new variant and one new arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    /// Best-first search, for non-negative weights
    Dijkstra,
    /// Edge relaxation, handles negative weights and detects negative cycles
    BellmanFord,
}

impl AlgorithmKind {
    /// Resolves a strategy by name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`AlgorithmKind::Dijkstra`], the
    /// default strategy.
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "bellmanford" | "bellman-ford" | "bellman_ford" => AlgorithmKind::BellmanFord,
            _ => AlgorithmKind::Dijkstra,
        }
    }

    /// Returns the canonical strategy name
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::BellmanFord => "BellmanFord",
        }
    }

    /// Runs the selected strategy against the shared network
    pub fn calculate_route<W, G>(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
    ) -> Result<Vec<usize>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
    {
        match self {
            AlgorithmKind::Dijkstra => Dijkstra.calculate_route(graph, source, destination),
            AlgorithmKind::BellmanFord => BellmanFord.calculate_route(graph, source, destination),
        }
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
