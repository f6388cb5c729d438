use crate::graph::road_network::RoadNetwork;
use crate::graph::traits::Graph;
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::fmt::Debug;
use std::io::BufRead;

/// How many data records between progress log lines
const PROGRESS_INTERVAL: usize = 1_000_000;

/// Loads a road network from line-oriented edge records.
///
/// Each data line is either `<from>\t<to>` (implying weight 1.0) or
/// `<from>\t<to>\t<weight>`; fields may be separated by any whitespace.
/// Blank lines and lines starting with `#` are skipped. Any other line shape,
/// or any field that fails to parse, aborts the whole load: a partially
/// loaded network would produce silently wrong routes.
///
/// The input is consumed in a single forward pass, so multi-million-line
/// datasets never need to fit in memory.
pub fn load_graph<R, W>(reader: R) -> Result<RoadNetwork<W>>
where
    R: BufRead,
    W: Float + Zero + Debug + Copy,
{
    let mut network = RoadNetwork::new();
    let mut records = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        records += 1;
        if records % PROGRESS_INTERVAL == 0 {
            log::info!("processed {} records...", records);
        }

        let malformed = || Error::MalformedRecord {
            line: index + 1,
            content: line.clone(),
        };

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let (from, to, weight) = match fields.as_slice() {
            [from, to] => (*from, *to, W::one()),
            [from, to, weight] => {
                let weight: f64 = weight.parse().map_err(|_| malformed())?;
                if !weight.is_finite() {
                    return Err(malformed());
                }
                (*from, *to, W::from(weight).ok_or_else(|| malformed())?)
            }
            _ => return Err(malformed()),
        };

        let from: usize = from.parse().map_err(|_| malformed())?;
        let to: usize = to.parse().map_err(|_| malformed())?;
        network.add_edge(from, to, weight);
    }

    log::info!(
        "loaded road network: {} vertices, {} edges from {} records",
        network.vertex_count(),
        network.edge_count(),
        records
    );
    Ok(network)
}
