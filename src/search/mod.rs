//! Randomized restart search for the maximum clique problem.

/// available pool and degree table of a trial
pub mod pool;

/// start vertex selection (maximum degree, random tie-break)
pub mod start_vertex;

/// randomized greedy extension of a clique path
pub mod greedy_extension;

/// random removal of two clique vertices
pub mod perturbation;

/// construct / perturb / reconstruct cycle
pub mod trial;

/// multi-trial driver with best-so-far tracking and early stop
pub mod restart;
