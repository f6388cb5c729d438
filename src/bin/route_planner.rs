use ordered_float::OrderedFloat;
use road_router::graph::load_graph;
use road_router::{
    AlgorithmKind, ExecutorConfig, RoadNetwork, RouteCalculationExecutor, SinkConfig,
    SledRouteSink,
};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

const DEFAULT_DATASET: &str = "dataset/roadNet-CA.txt";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let dataset = args
        .get(1)
        .map(String::as_str)
        .unwrap_or(DEFAULT_DATASET);

    println!("Loading road network from {}...", dataset);
    let file = File::open(dataset)?;
    let network: RoadNetwork<OrderedFloat<f64>> = load_graph(BufReader::new(file))?;
    println!("Road network loaded.");
    let network = Arc::new(network);

    let mut sink_config = SinkConfig::default();
    if let Ok(path) = env::var("ROUTE_DB") {
        sink_config.path = PathBuf::from(path);
    }
    sink_config.ttl_seconds = env::var("ROUTE_TTL_SECS").ok().and_then(|v| v.parse().ok());
    let sink = Arc::new(SledRouteSink::new(sink_config)?);

    let mut executor_config = ExecutorConfig::default();
    if let Some(workers) = env::var("ROUTE_WORKERS").ok().and_then(|v| v.parse().ok()) {
        executor_config.workers = workers;
    }
    let executor = RouteCalculationExecutor::new(network, sink, executor_config)?;

    println!(
        "Enter start and end vertices separated by space, choose algorithm: \
         Dijkstra or BellmanFord ('exit' to quit)"
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") {
            break;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.len() < 3 {
            println!("Please enter start vertex, end vertex, and algorithm name.");
            continue;
        }
        let (start, end) = match (parts[0].parse(), parts[1].parse()) {
            (Ok(start), Ok(end)) => (start, end),
            _ => {
                println!("Vertices must be non-negative integers.");
                continue;
            }
        };
        let algorithm = AlgorithmKind::from_name(parts[2]);
        if let Err(e) = executor.submit(start, end, algorithm) {
            eprintln!("{e}");
        }
    }

    executor.shutdown()?;
    Ok(())
}
