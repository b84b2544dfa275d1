use std::time::Instant;

use clap::{App, load_yaml};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use clique_restart::error::Result;
use clique_restart::report::{build_rows, print_summary};
use clique_restart::search::restart::solve_all;
use clique_restart::util::{read_params, load_instances, load_reference, export_results};


/** reads the instances, runs the restart search on each of them, and exports the results.
Returns an error before the search if the instances or the reference table cannot be read.
An export failure is returned after the results are printed.
*/
fn run() -> Result<()> {
    // parse arguments
    let yaml = load_yaml!("clique_restart.yml");
    let main_args = App::from_yaml(yaml).get_matches();
    let config = read_params(&main_args)?;
    println!("=========================================================");
    let instances = load_instances(&config.source)?;
    let reference = load_reference(config.reference_file.as_deref())?;
    println!("{} instances, {} known optima", instances.len(), reference.len());
    println!("trials per instance: {}", config.params.max_trials);
    if let Some(t) = config.params.time_limit {
        println!("time limit per instance: {:.3}s", t.as_secs_f64());
    }
    println!("seed: {}", config.seed);
    println!("=========================================================");

    // solve them
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let t_start = Instant::now();
    let outcomes = solve_all(&instances, &reference, &config.params, &mut rng)?;
    info!("search took {:.3} seconds", t_start.elapsed().as_secs_f64());

    // export results
    let rows = build_rows(&outcomes, &reference);
    print_summary(&rows);
    export_results(&rows, &config.output_file, config.perf_file.as_deref())?;
    println!("results saved in {}", config.output_file.display());
    Ok(())
}


pub fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
