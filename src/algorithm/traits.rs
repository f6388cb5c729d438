use crate::graph::Graph;
use crate::Result;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// Trait for interchangeable point-to-point shortest-path strategies
pub trait RouteStrategy<W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Get the name of the strategy
    fn name(&self) -> &'static str;

    /// Computes a minimum-total-weight route from `source` to `destination`.
    ///
    /// The returned sequence includes both endpoints and only follows edges
    /// present in the network. An unreachable destination yields an empty
    /// sequence, which is a normal outcome, not an error. When source equals
    /// destination the route is that single vertex. For a fixed network the
    /// result is deterministic.
    fn calculate_route(&self, graph: &G, source: usize, destination: usize)
        -> Result<Vec<usize>>;
}

/// Walks a predecessor map backwards from `destination` and returns the
/// source-to-destination vertex sequence.
///
/// Both strategies only record strictly-improving predecessors, so the chain
/// cannot cycle; a broken chain means the destination was never reached.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<usize, usize>,
    source: usize,
    destination: usize,
) -> Vec<usize> {
    let mut path = vec![destination];
    let mut current = destination;
    while current != source {
        match predecessors.get(&current) {
            Some(&pred) => {
                path.push(pred);
                current = pred;
            }
            None => return Vec::new(),
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstructs_in_source_to_destination_order() {
        let predecessors = HashMap::from([(3, 2), (2, 1)]);
        assert_eq!(reconstruct_path(&predecessors, 1, 3), vec![1, 2, 3]);
    }

    #[test]
    fn broken_chain_yields_empty_path() {
        let predecessors = HashMap::from([(3, 2)]);
        assert_eq!(reconstruct_path(&predecessors, 1, 3), Vec::<usize>::new());
    }
}
