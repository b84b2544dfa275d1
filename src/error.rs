use thiserror::Error;

/// errors raised while reading instances, searching, or exporting results
#[derive(Error, Debug)]
pub enum CliqueError {
    /// the instance directory (or an instance file) cannot be read
    #[error("unable to read instances from {path}: {source}")]
    InstanceSource {
        /// directory or file that failed
        path: String,
        /// underlying io error
        #[source]
        source: std::io::Error,
    },

    /// an instance file does not follow the DIMACS format
    #[error("{file}:{line}: {reason}")]
    Parse {
        /// instance file name
        file: String,
        /// 1-based line number (0 if the error concerns the whole file)
        line: usize,
        /// what went wrong
        reason: String,
    },

    /// an edge refers to a vertex outside of 0..n or is a self loop
    #[error("invalid edge ({0}, {1}) in a graph with {2} vertices")]
    InvalidEdge(usize, usize, usize),

    /// a start vertex was requested while the available pool is empty
    #[error("no vertices available to start a clique")]
    NoVerticesAvailable,

    /// the results table or statistics could not be written
    #[error("unable to write results: {0}")]
    Report(String),

    /// a command line argument cannot be parsed
    #[error("invalid value for --{0}: {1}")]
    InvalidArgument(String, String),

    /// io error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// json (de)serialization error
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// crate result alias
pub type Result<T> = std::result::Result<T, CliqueError>;
