use num_traits::{Float, Zero};
use std::fmt::Debug;

/// Trait representing the read-only view of a weighted directed road network.
///
/// Construction happens through the concrete type; once a network is behind
/// this trait (typically inside an `Arc`) nothing can mutate it, so it can be
/// shared across worker threads without locking.
pub trait Graph<W>: Debug
where
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the network
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed edges in the network
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the network
    fn has_vertex(&self, vertex: usize) -> bool;

    /// Returns true if there's a directed edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, from: usize, to: usize) -> Option<W>;

    /// Returns an iterator over the outgoing edges from a vertex
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns an iterator over all vertices, in a stable order
    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_>;

    /// Returns an iterator over all edges as (from, to, weight), in a stable order
    fn edges(&self) -> Box<dyn Iterator<Item = (usize, usize, W)> + '_>;
}
