use crate::graph::traits::Graph;
use num_traits::{Float, Zero};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// A directed weighted road network using adjacency lists.
///
/// Vertex identifiers are opaque integers taken from the input data; they are
/// not required to be dense. Adjacency is kept in a `BTreeMap` so that
/// whole-network iteration (`vertices`/`edges`) runs in a stable order for a
/// fixed construction sequence, which keeps equal-weight tie-breaking in the
/// relaxation strategy reproducible.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)].
    /// Every known vertex has an entry, even when it has no outgoing edges.
    outgoing_edges: BTreeMap<usize, Vec<(usize, W)>>,

    /// Number of distinct (from, to) pairs
    edge_count: usize,
}

impl<W> RoadNetwork<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty road network
    pub fn new() -> Self {
        RoadNetwork {
            outgoing_edges: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Adds a vertex to the network. Adding an existing vertex is a no-op.
    pub fn add_vertex(&mut self, vertex: usize) {
        self.outgoing_edges.entry(vertex).or_default();
    }

    /// Adds a directed edge, implicitly adding either endpoint if absent.
    ///
    /// Re-adding the same ordered pair replaces its weight rather than
    /// accumulating a parallel edge. Self-loops are permitted.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) {
        self.outgoing_edges.entry(to).or_default();
        let edges = self.outgoing_edges.entry(from).or_default();
        match edges.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => {
                edges.push((to, weight));
                self.edge_count += 1;
            }
        }
    }

    /// Returns false if any edge carries a negative weight.
    ///
    /// The best-first strategy is only correct on non-negative networks;
    /// callers that cannot vouch for their data can check here first.
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .values()
            .all(|edges| edges.iter().all(|(_, weight)| *weight >= W::zero()))
    }
}

impl<W> Graph<W> for RoadNetwork<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.outgoing_edges.contains_key(&vertex)
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges
            .get(&from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| *target == to))
    }

    fn edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges.get(&from).and_then(|edges| {
            edges
                .iter()
                .find(|(target, _)| *target == to)
                .map(|(_, weight)| *weight)
        })
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.outgoing_edges.keys().copied())
    }

    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_> {
        Box::new(self.outgoing_edges.iter().flat_map(|(from, edges)| {
            edges.iter().map(move |(to, weight)| (*from, *to, *weight))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn add_vertex_is_idempotent() {
        let mut network: RoadNetwork<OrderedFloat<f64>> = RoadNetwork::new();
        network.add_vertex(7);
        network.add_vertex(7);
        assert_eq!(network.vertex_count(), 1);
        assert!(network.has_vertex(7));
        assert!(!network.has_vertex(8));
    }

    #[test]
    fn add_edge_adds_missing_endpoints() {
        let mut network = RoadNetwork::new();
        network.add_edge(1, 2, OrderedFloat(5.0));
        assert_eq!(network.vertex_count(), 2);
        assert_eq!(network.edge_count(), 1);
        assert!(network.has_edge(1, 2));
        assert!(!network.has_edge(2, 1));
        assert_eq!(network.edge_weight(1, 2), Some(OrderedFloat(5.0)));
    }

    #[test]
    fn readding_edge_replaces_weight() {
        let mut network = RoadNetwork::new();
        network.add_edge(1, 2, OrderedFloat(5.0));
        network.add_edge(1, 2, OrderedFloat(9.0));
        assert_eq!(network.edge_count(), 1);
        assert_eq!(network.edge_weight(1, 2), Some(OrderedFloat(9.0)));
    }

    #[test]
    fn self_loops_are_permitted() {
        let mut network = RoadNetwork::new();
        network.add_edge(1, 1, OrderedFloat(3.0));
        assert!(network.has_edge(1, 1));
        assert_eq!(network.edge_weight(1, 1), Some(OrderedFloat(3.0)));
        assert_eq!(network.vertex_count(), 1);
    }

    #[test]
    fn iteration_is_ordered() {
        let mut network = RoadNetwork::new();
        network.add_edge(30, 10, OrderedFloat(1.0));
        network.add_edge(20, 10, OrderedFloat(1.0));
        network.add_edge(10, 30, OrderedFloat(1.0));

        let vertices: Vec<usize> = network.vertices().collect();
        assert_eq!(vertices, vec![10, 20, 30]);

        let edges: Vec<(usize, usize)> = network.edges().map(|(f, t, _)| (f, t)).collect();
        assert_eq!(edges, vec![(10, 30), (20, 10), (30, 10)]);
    }

    #[test]
    fn validate_non_negative_flags_negative_weights() {
        let mut network = RoadNetwork::new();
        network.add_edge(1, 2, OrderedFloat(1.0));
        assert!(network.validate_non_negative());
        network.add_edge(2, 3, OrderedFloat(-4.0));
        assert!(!network.validate_non_negative());
    }
}
