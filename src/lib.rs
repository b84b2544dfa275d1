//! Randomized restart heuristic for the maximum clique problem (DIMACS instances)

// #![warn(clippy::all, clippy::pedantic)]
// useful additional warnings if docs are missing, or crates imported but unused, etc.
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]
#![warn(trivial_casts, trivial_numeric_casts)]
#![warn(unsafe_code)]
#![warn(unused_extern_crates)]
#![warn(variant_size_differences)]

// not sure if already by default in clippy
#![warn(clippy::similar_names)]
#![warn(clippy::shadow_unrelated)]
#![warn(clippy::shadow_same)]
#![warn(clippy::shadow_reuse)]


/// crate errors
pub mod error;

/// graph model (dense adjacency, degrees, clique checker)
pub mod graph;

/// read DIMACS instances
pub mod dimacs;

/// known optima of the instances
pub mod reference;

/// search parameters
pub mod params;

/// restart search for the maximum clique problem
pub mod search;

/// results table and statistics export
pub mod report;

/// helper and utility methods for executables
pub mod util;

pub use error::{CliqueError, Result};
pub use graph::{Clique, Graph, VertexId};
pub use params::SearchParams;
pub use reference::ReferenceTable;
pub use search::restart::{InstanceOutcome, StopReason, solve_instance, solve_all};
pub use search::trial::{TrialResult, run_trial};
