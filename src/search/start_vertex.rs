use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{CliqueError, Result};
use crate::graph::VertexId;
use crate::search::pool::{AvailablePool, DegreeTable};


/** picks a start vertex among the available vertices of maximum degree.
Ties are collected in ascending vertex order, then one is drawn uniformly at random.
Fails with NoVerticesAvailable if the pool is empty.
*/
pub fn select_start_vertex<R>(degrees:&DegreeTable, pool:&AvailablePool, rng:&mut R) -> Result<VertexId>
where R: Rng + ?Sized {
    let max_degree = pool.iter()
        .map(|v| degrees.degree(v))
        .max()
        .ok_or(CliqueError::NoVerticesAvailable)?;
    let candidates:Vec<VertexId> = pool.iter()
        .filter(|v| degrees.degree(*v) == max_degree)
        .collect();
    candidates.choose(rng).copied().ok_or(CliqueError::NoVerticesAvailable)
}
