use log::trace;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Result;
use crate::graph::{Clique, Graph};
use crate::search::pool::{AvailablePool, DegreeTable};
use crate::search::start_vertex::select_start_vertex;


/** counters of one greedy extension */
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtensionStats {
    /// nb candidates drawn from the pool
    pub nb_tried: usize,
    /// nb candidates kept in the clique
    pub nb_accepted: usize,
    /// nb candidates dropped because the path was no longer a clique
    pub nb_rejected: usize,
    /// true if the path was empty and a new start vertex was drawn
    pub reseeded: bool,
}


/** extends a clique path by a randomized walk over the available neighbors of its last vertex.

At each step, a neighbor of the last vertex that is still in the pool is drawn uniformly at
random and removed from the pool (even if it is not kept). It is appended to the path, and the
whole path is checked to be a clique. If not, the candidate is removed from the path and the walk
continues from the same last vertex. The walk stops when the last vertex has no available neighbor.

If the path is empty, a new start vertex is selected from the pool first. If the pool is empty
as well, the path is left empty.
*/
pub fn extend_clique<R>(
    graph:&Graph,
    degrees:&DegreeTable,
    path:&mut Clique,
    pool:&mut AvailablePool,
    rng:&mut R,
) -> Result<ExtensionStats> where R: Rng + ?Sized {
    let mut stats = ExtensionStats::default();
    if path.is_empty() {
        if pool.is_empty() { return Ok(stats); }
        let start = select_start_vertex(degrees, pool, rng)?;
        pool.remove(start);
        path.push(start);
        stats.reseeded = true;
    }
    while let Some(&last) = path.last() {
        let candidate = match pool.available_neighbors(graph, last).choose(rng) {
            None => break,
            Some(&v) => v,
        };
        pool.remove(candidate);
        path.push(candidate);
        stats.nb_tried += 1;
        if graph.is_clique(path) {
            stats.nb_accepted += 1;
        } else {
            path.pop();
            stats.nb_rejected += 1;
        }
    }
    trace!("extension: {:?} -> clique of size {}", stats, path.len());
    Ok(stats)
}
