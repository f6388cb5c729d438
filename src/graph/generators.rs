use crate::graph::road_network::RoadNetwork;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a sparse random road network with `n` vertices and roughly
/// `avg_degree * n` directed edges, weighted uniformly in `1.0..max_weight`.
///
/// The generator is seeded so stress tests and benchmarks are reproducible.
pub fn random_network(n: usize, avg_degree: f64, max_weight: f64, seed: u64) -> RoadNetwork<OrderedFloat<f64>> {
    let mut network = RoadNetwork::new();
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        network.add_vertex(v);
    }

    let num_edges = (avg_degree * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..max_weight));
            network.add_edge(u, v, weight);
        }
    }

    network
}

/// Generates a line network `0 -> 1 -> ... -> n-1` with unit weights,
/// guaranteeing every vertex is reachable from vertex 0.
pub fn line_network(n: usize) -> RoadNetwork<OrderedFloat<f64>> {
    let mut network = RoadNetwork::new();
    for v in 0..n {
        network.add_vertex(v);
    }
    for v in 1..n {
        network.add_edge(v - 1, v, OrderedFloat(1.0));
    }
    network
}
