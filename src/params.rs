//! Parameter bundle of the restart search.

use std::time::Duration;

/// default number of trials per instance
pub const DEFAULT_MAX_TRIALS:usize = 7000;

/** tunables of the restart driver */
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    /// maximum number of trials per instance
    pub max_trials: usize,
    /// optional wall-clock budget per instance. The first trial always runs.
    pub time_limit: Option<Duration>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            max_trials: DEFAULT_MAX_TRIALS,
            time_limit: None,
        }
    }
}
