use crate::algorithm::traits::{reconstruct_path, RouteStrategy};
use crate::graph::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// Relaxation-based shortest-path strategy for general edge weights.
///
/// Correct even with negative weights. A negative-weight cycle reachable from
/// the source makes "shortest" undefined, so it is reported as
/// [`Error::NegativeCycle`] rather than silently routing through it.
#[derive(Debug, Default)]
pub struct BellmanFord;

impl BellmanFord {
    /// Creates a new Bellman-Ford strategy instance
    pub fn new() -> Self {
        BellmanFord
    }
}

impl<W, G> RouteStrategy<W, G> for BellmanFord
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "BellmanFord"
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
        distances.insert(source, W::zero());

        // Relax every edge up to |V| - 1 times; an unchanged round means convergence
        let rounds = graph.vertex_count().saturating_sub(1);
        for _ in 0..rounds {
            let mut changed = false;
            for (u, v, weight) in graph.edges() {
                let dist_u = match distances.get(&u) {
                    Some(d) => *d,
                    None => continue,
                };
                let new_dist = dist_u + weight;
                if distances.get(&v).map_or(true, |d| new_dist < *d) {
                    distances.insert(v, new_dist);
                    predecessors.insert(v, u);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
        }

        // Any edge that still relaxes sits on a negative cycle reachable from the source
        for (u, v, weight) in graph.edges() {
            if let Some(&dist_u) = distances.get(&u) {
                let new_dist = dist_u + weight;
                if distances.get(&v).map_or(true, |d| new_dist < *d) {
                    return Err(Error::NegativeCycle { vertex: source });
                }
            }
        }

        if !distances.contains_key(&destination) {
            return Ok(Vec::new());
        }
        Ok(reconstruct_path(&predecessors, source, destination))
    }
}
