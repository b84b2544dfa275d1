use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::dimacs::DimacsInstance;
use crate::error::Result;
use crate::graph::{Clique, Graph};
use crate::params::SearchParams;
use crate::reference::ReferenceTable;
use crate::search::trial::run_trial;


/** reason why the trials of an instance stopped */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// the best clique reached the known optimum
    OptimumReached,
    /// the maximum number of trials was performed
    TrialLimit,
    /// the time limit of the instance expired
    TimeLimit,
}


/** result of the restart search on one instance */
#[derive(Debug, Clone)]
pub struct InstanceOutcome {
    /// largest clique found
    pub best: Clique,
    /// wall-clock duration (seconds) of the trial that found the best clique
    pub best_trial_seconds: f64,
    /// nb trials performed
    pub nb_trials: usize,
    /// why the search stopped
    pub stop_reason: StopReason,
    /// total search time (seconds)
    pub search_seconds: f64,
    /// (trial index, clique size) each time the best clique improved
    pub improvements: Vec<(usize, usize)>,
}

impl InstanceOutcome {
    /// size of the best clique
    pub fn best_size(&self) -> usize { self.best.len() }
}


/** runs independent trials on a graph and keeps the largest clique.

Stops after params.max_trials trials, as soon as the best clique reaches known_optimum (if
given), or when params.time_limit is exceeded (checked before each trial except the first).
Only strictly improving trials replace the best clique and its recorded duration.
*/
pub fn solve_instance<R>(
    graph:&Graph,
    known_optimum:Option<usize>,
    params:&SearchParams,
    rng:&mut R,
) -> Result<InstanceOutcome> where R: Rng + ?Sized {
    let search_start = Instant::now();
    let mut best:Clique = Vec::new();
    let mut best_trial_seconds = 0.;
    let mut improvements = Vec::new();
    let mut stop_reason = StopReason::TrialLimit;
    let mut nb_trials = 0;
    while nb_trials < params.max_trials {
        if let Some(limit) = params.time_limit {
            if nb_trials > 0 && search_start.elapsed() >= limit {
                stop_reason = StopReason::TimeLimit;
                break;
            }
        }
        let trial_start = Instant::now();
        let res = run_trial(graph, rng)?;
        let trial_seconds = trial_start.elapsed().as_secs_f64();
        nb_trials += 1;
        if res.size() > best.len() {
            best = res.clique;
            best_trial_seconds = trial_seconds;
            improvements.push((nb_trials, best.len()));
            debug!("new best clique! ({}) at trial {}", best.len(), nb_trials);
            if let Some(opt) = known_optimum {
                if best.len() >= opt {
                    stop_reason = StopReason::OptimumReached;
                    break;
                }
            }
        }
    }
    Ok(InstanceOutcome {
        best,
        best_trial_seconds,
        nb_trials,
        stop_reason,
        search_seconds: search_start.elapsed().as_secs_f64(),
        improvements,
    })
}


/** solves every instance in turn, using the reference table for early stops.
Returns (instance name, outcome) pairs in the order of the instances.
Instances without vertices are not searched: their outcome is an empty clique after 0 trials.
*/
pub fn solve_all<R>(
    instances:&[DimacsInstance],
    reference:&ReferenceTable,
    params:&SearchParams,
    rng:&mut R,
) -> Result<Vec<(String, InstanceOutcome)>> where R: Rng + ?Sized {
    let mut res = Vec::with_capacity(instances.len());
    for inst in instances {
        let graph = inst.graph()?;
        println!("{}", inst.name);
        graph.display_statistics();
        if graph.nb_vertices() == 0 {
            warn!("{}: no vertices, skipping the search", inst.name);
            res.push((inst.name.clone(), InstanceOutcome {
                best: Vec::new(),
                best_trial_seconds: 0.,
                nb_trials: 0,
                stop_reason: StopReason::TrialLimit,
                search_seconds: 0.,
                improvements: Vec::new(),
            }));
            continue;
        }
        let known_optimum = reference.known_optimum(&inst.name);
        let outcome = solve_instance(&graph, known_optimum, params, rng)?;
        if outcome.stop_reason == StopReason::OptimumReached {
            info!("{}: optimal solution found", inst.name);
        }
        info!(
            "{}: best clique {} after {} trials ({:.3}s)",
            inst.name, outcome.best_size(), outcome.nb_trials, outcome.search_seconds
        );
        res.push((inst.name.clone(), outcome));
    }
    Ok(res)
}
