use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::ArgMatches;
use log::{info, warn};

use crate::{
    dimacs::{DimacsInstance, read_from_file, read_instances_dir},
    error::{CliqueError, Result},
    params::SearchParams,
    reference::ReferenceTable,
    report::{ResultRow, write_stats_json, write_xlsx},
};


/** where the instances come from */
#[derive(Debug, Clone, PartialEq)]
pub enum InstanceSource {
    /// every file of a directory
    Directory(PathBuf),
    /// a single instance file
    File(PathBuf),
}

/** configuration of a run, read from the command line */
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// instances to solve
    pub source: InstanceSource,
    /// search tunables
    pub params: SearchParams,
    /// seed of the random number generator
    pub seed: u64,
    /// JSON file replacing the built-in reference table
    pub reference_file: Option<PathBuf>,
    /// xlsx results table
    pub output_file: PathBuf,
    /// optional JSON statistics file
    pub perf_file: Option<PathBuf>,
}


/// parses an optional argument
fn parse_arg<T>(main_args:&ArgMatches, name:&str) -> Result<Option<T>>
where T: FromStr, T::Err: Display {
    match main_args.value_of(name) {
        None => Ok(None),
        Some(s) => s.parse::<T>()
            .map(Some)
            .map_err(|e| CliqueError::InvalidArgument(name.to_string(), format!("'{}' ({})", s, e))),
    }
}


/** reads command line input and returns the run configuration.
If no seed is given, one is derived from the system clock.
*/
pub fn read_params(main_args:&ArgMatches) -> Result<RunConfig> {
    let source = match main_args.value_of("file") {
        Some(f) => InstanceSource::File(PathBuf::from(f)),
        None => InstanceSource::Directory(PathBuf::from(
            main_args.value_of("instances").unwrap_or("./input_files")
        )),
    };
    let mut params = SearchParams::default();
    if let Some(trials) = parse_arg::<usize>(main_args, "trials")? {
        params.max_trials = trials;
    }
    if let Some(t) = parse_arg::<f64>(main_args, "time")? {
        if !t.is_finite() || t < 0. {
            return Err(CliqueError::InvalidArgument("time".to_string(), format!("{} is not a duration", t)));
        }
        params.time_limit = Some(Duration::from_secs_f64(t));
    }
    let seed = match parse_arg::<u64>(main_args, "seed")? {
        Some(s) => s,
        None => seed_from_clock(),
    };
    Ok(RunConfig {
        source,
        params,
        seed,
        reference_file: main_args.value_of("reference").map(PathBuf::from),
        output_file: PathBuf::from(main_args.value_of("output").unwrap_or("results.xlsx")),
        perf_file: main_args.value_of("perf").map(PathBuf::from),
    })
}


/// seed derived from the current time
pub fn seed_from_clock() -> u64 {
    SystemTime::now().duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}


/** reads the instances. Any failure aborts the run. */
pub fn load_instances(source:&InstanceSource) -> Result<Vec<DimacsInstance>> {
    let instances = match source {
        InstanceSource::Directory(dir) => read_instances_dir(dir)?,
        InstanceSource::File(f) => vec![read_from_file(f)?],
    };
    for inst in &instances {
        info!("{}: {} vertices, {} edges", inst.name, inst.n, inst.m);
    }
    Ok(instances)
}


/** built-in reference table, or the one given by the configuration */
pub fn load_reference(reference_file:Option<&Path>) -> Result<ReferenceTable> {
    match reference_file {
        None => Ok(ReferenceTable::dimacs_benchmarks()),
        Some(f) => {
            let res = ReferenceTable::from_file(f)?;
            info!("read {} reference optima from {}", res.len(), f.display());
            Ok(res)
        }
    }
}


/** exports the results table (xlsx) and, if requested, the statistics (JSON).
Both exports are attempted; the first error is returned.
*/
pub fn export_results(rows:&[ResultRow], output_file:&Path, perf_file:Option<&Path>) -> Result<()> {
    let xlsx_res = write_xlsx(rows, output_file);
    if let Err(e) = &xlsx_res { warn!("{}", e); }
    let json_res = match perf_file {
        None => Ok(()),
        Some(f) => write_stats_json(rows, f),
    };
    if let Err(e) = &json_res { warn!("{}", e); }
    xlsx_res.and(json_res)
}
