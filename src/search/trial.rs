use log::trace;
use rand::Rng;

use crate::error::Result;
use crate::graph::{Clique, Graph};
use crate::search::greedy_extension::extend_clique;
use crate::search::perturbation::perturb;
use crate::search::pool::{AvailablePool, DegreeTable};
use crate::search::start_vertex::select_start_vertex;


/** clique produced by one trial */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialResult {
    /// best clique of the trial
    pub clique: Clique,
    /// nb vertices consumed from the pool during the trial (start vertices included)
    pub nb_consumed: usize,
}

impl TrialResult {
    /// size of the clique
    pub fn size(&self) -> usize { self.clique.len() }
}


/** one construct / perturb / reconstruct cycle.
 1. fresh degree table and available pool
 2. start vertex of maximum degree (random tie-break), removed from the pool
 3. greedy extension -> "before"
 4. two random vertices removed from a copy of "before"
 5. greedy extension of the perturbed clique, using the same pool -> "after"
 6. the largest of "before" and "after" is returned, ties favor "before"

The perturbed clique is a subset of "before", so it never beats it.
*/
pub fn run_trial<R>(graph:&Graph, rng:&mut R) -> Result<TrialResult> where R: Rng + ?Sized {
    let degrees = DegreeTable::new(graph);
    let mut pool = AvailablePool::full(graph);
    let start = select_start_vertex(&degrees, &pool, rng)?;
    pool.remove(start);
    let mut before:Clique = vec![start];
    extend_clique(graph, &degrees, &mut before, &mut pool, rng)?;
    let mut after = before.clone();
    perturb(&mut after, rng);
    let perturbed_size = after.len();
    extend_clique(graph, &degrees, &mut after, &mut pool, rng)?;
    trace!(
        "trial: start {} constructed {} perturbed {} reconstructed {}",
        start, before.len(), perturbed_size, after.len()
    );
    let nb_consumed = graph.nb_vertices() - pool.len();
    let clique = if before.len() >= after.len() { before } else { after };
    Ok(TrialResult { clique, nb_consumed })
}
