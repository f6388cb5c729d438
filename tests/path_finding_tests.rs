use ordered_float::OrderedFloat;
use rand::prelude::*;
use road_router::graph::generators::random_network;
use road_router::graph::{load_graph, Graph};
use road_router::{BellmanFord, Dijkstra, Error, RoadNetwork, RouteStrategy};
use std::io::Cursor;

type W = OrderedFloat<f64>;

fn network(edges: &[(usize, usize, f64)]) -> RoadNetwork<W> {
    let mut network = RoadNetwork::new();
    for &(from, to, weight) in edges {
        network.add_edge(from, to, OrderedFloat(weight));
    }
    network
}

fn path_weight(network: &RoadNetwork<W>, path: &[usize]) -> f64 {
    path.windows(2)
        .map(|pair| {
            network
                .edge_weight(pair[0], pair[1])
                .expect("route must only use existing edges")
                .0
        })
        .sum()
}

fn assert_valid_route(network: &RoadNetwork<W>, route: &[usize], source: usize, destination: usize) {
    assert_eq!(route[0], source, "route should start at the source");
    assert_eq!(
        route[route.len() - 1],
        destination,
        "route should end at the destination"
    );
    for pair in route.windows(2) {
        assert!(
            network.has_edge(pair[0], pair[1]),
            "route should only use existing edges"
        );
    }
}

/// Brute-force reference: enumerates every simple path with a DFS.
/// Valid for any graph without a negative cycle, where some shortest
/// path is always simple.
fn brute_force_shortest(network: &RoadNetwork<W>, source: usize, destination: usize) -> Option<f64> {
    fn dfs(
        network: &RoadNetwork<W>,
        current: usize,
        destination: usize,
        total: f64,
        visited: &mut Vec<usize>,
        best: &mut Option<f64>,
    ) {
        for (next, weight) in network.outgoing_edges(current) {
            let total = total + weight.0;
            if next == destination {
                if best.map_or(true, |b| total < b) {
                    *best = Some(total);
                }
                continue;
            }
            if visited.contains(&next) {
                continue;
            }
            visited.push(next);
            dfs(network, next, destination, total, visited, best);
            visited.pop();
        }
    }

    if !network.has_vertex(source) || !network.has_vertex(destination) {
        return None;
    }
    if source == destination {
        return Some(0.0);
    }
    let mut best = None;
    dfs(
        network,
        source,
        destination,
        0.0,
        &mut vec![source],
        &mut best,
    );
    best
}

#[test]
fn round_trip_load_and_route() {
    let network: RoadNetwork<W> =
        load_graph(Cursor::new("1\t2\t1.0\n2\t3\t2.0\n".to_string())).unwrap();

    let route = Dijkstra.calculate_route(&network, 1, 3).unwrap();
    assert_eq!(route, vec![1, 2, 3]);
    assert!((path_weight(&network, &route) - 3.0).abs() < 1e-9);
}

#[test]
fn dijkstra_prefers_cheaper_multi_hop_route() {
    let network = network(&[(1, 2, 1.0), (2, 3, 2.0), (1, 3, 4.0)]);
    let route = Dijkstra.calculate_route(&network, 1, 3).unwrap();
    assert_eq!(route, vec![1, 2, 3]);
}

#[test]
fn bellman_ford_handles_negative_weights() {
    let network = network(&[(1, 2, -1.0), (2, 3, 2.0), (1, 3, 2.0)]);
    let route = BellmanFord.calculate_route(&network, 1, 3).unwrap();
    assert_eq!(route, vec![1, 2, 3]);
    assert!((path_weight(&network, &route) - 1.0).abs() < 1e-9);
}

#[test]
fn unreachable_pair_yields_empty_route() {
    let mut isolated: RoadNetwork<W> = RoadNetwork::new();
    isolated.add_vertex(1);
    isolated.add_vertex(2);

    assert!(Dijkstra.calculate_route(&isolated, 1, 2).unwrap().is_empty());
    assert!(BellmanFord.calculate_route(&isolated, 1, 2).unwrap().is_empty());

    // Edges only run the other way
    let one_way = network(&[(2, 1, 1.0)]);
    assert!(Dijkstra.calculate_route(&one_way, 1, 2).unwrap().is_empty());
    assert!(BellmanFord.calculate_route(&one_way, 1, 2).unwrap().is_empty());
}

#[test]
fn absent_vertices_yield_empty_route() {
    let network = network(&[(1, 2, 1.0)]);
    assert!(Dijkstra.calculate_route(&network, 1, 99).unwrap().is_empty());
    assert!(Dijkstra.calculate_route(&network, 99, 1).unwrap().is_empty());
    assert!(BellmanFord.calculate_route(&network, 99, 98).unwrap().is_empty());
}

#[test]
fn source_equals_destination_yields_single_vertex() {
    let network = network(&[(1, 2, 1.0)]);
    assert_eq!(Dijkstra.calculate_route(&network, 1, 1).unwrap(), vec![1]);
    assert_eq!(BellmanFord.calculate_route(&network, 2, 2).unwrap(), vec![2]);
}

#[test]
fn self_loop_does_not_disturb_routing() {
    let network = network(&[(1, 1, 3.0), (1, 2, 1.0)]);
    assert_eq!(Dijkstra.calculate_route(&network, 1, 2).unwrap(), vec![1, 2]);
}

#[test]
fn reachable_negative_cycle_is_reported() {
    let network = network(&[(1, 2, 1.0), (2, 3, -5.0), (3, 2, 1.0), (3, 4, 1.0)]);
    let err = BellmanFord.calculate_route(&network, 1, 4).unwrap_err();
    match err {
        Error::NegativeCycle { vertex } => assert_eq!(vertex, 1),
        other => panic!("expected negative-cycle error, got: {other}"),
    }
}

#[test]
fn unreachable_negative_cycle_does_not_fail_the_request() {
    // The cycle between 10 and 11 cannot be reached from vertex 1
    let network = network(&[(1, 2, 1.0), (10, 11, -5.0), (11, 10, 1.0)]);
    let route = BellmanFord.calculate_route(&network, 1, 2).unwrap();
    assert_eq!(route, vec![1, 2]);
}

#[test]
fn strategies_match_brute_force_on_non_negative_networks() {
    for seed in 0..5 {
        let network = random_network(8, 2.5, 10.0, seed);
        for source in 0..8 {
            for destination in 0..8 {
                let expected = brute_force_shortest(&network, source, destination);
                let dijkstra = Dijkstra
                    .calculate_route(&network, source, destination)
                    .unwrap();
                let bellman = BellmanFord
                    .calculate_route(&network, source, destination)
                    .unwrap();

                match expected {
                    None => {
                        assert!(dijkstra.is_empty(), "seed {seed}: {source}->{destination}");
                        assert!(bellman.is_empty(), "seed {seed}: {source}->{destination}");
                    }
                    Some(weight) => {
                        for route in [&dijkstra, &bellman] {
                            assert_valid_route(&network, route, source, destination);
                            assert!(
                                (path_weight(&network, route) - weight).abs() < 1e-9,
                                "seed {seed}: {source}->{destination} expected weight {weight}"
                            );
                        }
                    }
                }
            }
        }
    }
}

#[test]
fn bellman_ford_matches_brute_force_with_negative_weights() {
    // Edges only run from lower to higher ids, so no cycle can form
    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut network: RoadNetwork<W> = RoadNetwork::new();
        let n = 7;
        for v in 0..n {
            network.add_vertex(v);
        }
        for from in 0..n {
            for to in (from + 1)..n {
                if rng.gen_bool(0.5) {
                    network.add_edge(from, to, OrderedFloat(rng.gen_range(-3.0..8.0)));
                }
            }
        }

        for source in 0..n {
            for destination in 0..n {
                let expected = brute_force_shortest(&network, source, destination);
                let route = BellmanFord
                    .calculate_route(&network, source, destination)
                    .unwrap();
                match expected {
                    None => assert!(route.is_empty(), "seed {seed}: {source}->{destination}"),
                    Some(weight) => {
                        assert_valid_route(&network, &route, source, destination);
                        assert!(
                            (path_weight(&network, &route) - weight).abs() < 1e-9,
                            "seed {seed}: {source}->{destination} expected weight {weight}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn repeated_runs_are_deterministic() {
    let network = random_network(30, 3.0, 10.0, 99);
    for source in 0..5 {
        for destination in 25..30 {
            let first = Dijkstra
                .calculate_route(&network, source, destination)
                .unwrap();
            let second = Dijkstra
                .calculate_route(&network, source, destination)
                .unwrap();
            assert_eq!(first, second);

            let first = BellmanFord
                .calculate_route(&network, source, destination)
                .unwrap();
            let second = BellmanFord
                .calculate_route(&network, source, destination)
                .unwrap();
            assert_eq!(first, second);
        }
    }
}
