use crate::algorithm::traits::{reconstruct_path, RouteStrategy};
use crate::graph::Graph;
use crate::Result;
use num_traits::{Float, Zero};
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;

/// Best-first shortest-path strategy for non-negative edge weights.
///
/// Expands a min-priority frontier keyed by tentative distance and stops as
/// soon as the destination is settled. Callers select this variant only when
/// all weights are known non-negative; behavior on negative weights is
/// undefined.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra strategy instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> RouteStrategy<W, G> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn calculate_route(
        &self,
        graph: &G,
        source: usize,
        destination: usize,
    ) -> Result<Vec<usize>> {
        if !graph.has_vertex(source) || !graph.has_vertex(destination) {
            return Ok(Vec::new());
        }
        if source == destination {
            return Ok(vec![source]);
        }

        let mut distances: HashMap<usize, W> = HashMap::new();
        let mut predecessors: HashMap<usize, usize> = HashMap::new();
        // Ordering entries by (distance, vertex) keeps equal-weight pops deterministic
        let mut frontier = BinaryHeap::new();

        distances.insert(source, W::zero());
        frontier.push(Reverse((W::zero(), source)));

        while let Some(Reverse((dist_u, u))) = frontier.pop() {
            if u == destination {
                return Ok(reconstruct_path(&predecessors, source, destination));
            }
            // Stale entry, a shorter path to u was already settled
            if distances.get(&u).map_or(false, |d| *d < dist_u) {
                continue;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                let new_dist = dist_u + weight;
                if distances.get(&v).map_or(true, |d| new_dist < *d) {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    frontier.push(Reverse((new_dist, v)));
                }
            }
        }

        Ok(Vec::new())
    }
}
