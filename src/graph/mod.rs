pub mod generators;
pub mod loader;
pub mod road_network;
pub mod traits;

pub use loader::load_graph;
pub use road_network::RoadNetwork;
pub use traits::Graph;
