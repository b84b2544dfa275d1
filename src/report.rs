use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{CliqueError, Result};
use crate::graph::VertexId;
use crate::reference::ReferenceTable;
use crate::search::restart::{InstanceOutcome, StopReason};


/// column titles of the results table
pub const HEADERS:[&str ; 6] = ["INSTANCE", "MAX_CLIQUE", "TIME", "CLIQUE", "OPTIMAL_SOLUTION", "SOLVED"];


/** one line of the results table */
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultRow {
    /// instance name
    pub instance: String,
    /// size of the best clique
    pub max_clique: usize,
    /// duration (seconds) of the trial that found the best clique
    pub time: f64,
    /// vertices of the best clique (1-based, as in the instance file)
    pub clique: Vec<VertexId>,
    /// known optimum, if any
    pub optimal_solution: Option<usize>,
    /// max_clique >= optimal_solution, if the optimum is known
    pub solved: Option<bool>,
    /// nb trials performed
    pub nb_trials: usize,
    /// why the search stopped
    pub stop_reason: StopReason,
}

impl ResultRow {
    /** builds the row of an instance. The solved flag is derived from the reference table. */
    pub fn new(instance:&str, outcome:&InstanceOutcome, reference:&ReferenceTable) -> Self {
        Self {
            instance: instance.to_string(),
            max_clique: outcome.best_size(),
            time: outcome.best_trial_seconds,
            clique: outcome.best.iter().map(|v| v+1).collect(),
            optimal_solution: reference.known_optimum(instance),
            solved: reference.is_solved(instance, outcome.best_size()),
            nb_trials: outcome.nb_trials,
            stop_reason: outcome.stop_reason,
        }
    }
}


/** builds the rows of the results table */
pub fn build_rows(outcomes:&[(String, InstanceOutcome)], reference:&ReferenceTable) -> Vec<ResultRow> {
    outcomes.iter().map(|(name, outcome)| ResultRow::new(name, outcome, reference)).collect()
}


/// writes a clique as "[v1 v2 ...]"
pub fn clique_to_string(clique:&[VertexId]) -> String {
    let vertices:Vec<String> = clique.iter().map(|v| v.to_string()).collect();
    format!("[{}]", vertices.join(" "))
}


/// prints the results on the standard output
pub fn print_summary(rows:&[ResultRow]) {
    for row in rows {
        println!("instance: {}", row.instance);
        println!("\tmax clique size: {}", row.max_clique);
        println!("\ttime: {:.6} seconds", row.time);
        println!("\tclique: {}", clique_to_string(&row.clique));
        match (row.optimal_solution, row.solved) {
            (Some(opt), Some(solved)) => println!("\toptimum: {} \t solved: {}", opt, solved),
            _ => println!("\toptimum: unknown"),
        }
        println!("\ttrials: {} ({:?})", row.nb_trials, row.stop_reason);
        println!();
    }
}


/** writes the results table into an xlsx workbook (one row per instance).
Unknown optima leave the OPTIMAL_SOLUTION and SOLVED cells empty.
*/
pub fn write_xlsx(rows:&[ResultRow], filename:&Path) -> Result<()> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_sheet_mut(&0)
        .ok_or_else(|| CliqueError::Report("workbook has no worksheet".to_string()))?;
    for (col, header) in HEADERS.iter().enumerate() {
        sheet.get_cell_mut((col as u32 + 1, 1u32)).set_value(*header);
    }
    for (i, row) in rows.iter().enumerate() {
        let r = i as u32 + 2;
        sheet.get_cell_mut((1u32, r)).set_value(row.instance.as_str());
        sheet.get_cell_mut((2u32, r)).set_value_number(row.max_clique as f64);
        sheet.get_cell_mut((3u32, r)).set_value_number(row.time);
        sheet.get_cell_mut((4u32, r)).set_value(clique_to_string(&row.clique));
        if let Some(opt) = row.optimal_solution {
            sheet.get_cell_mut((5u32, r)).set_value_number(opt as f64);
        }
        if let Some(solved) = row.solved {
            sheet.get_cell_mut((6u32, r)).set_value_bool(solved);
        }
    }
    umya_spreadsheet::writer::xlsx::write(&book, filename)
        .map_err(|e| CliqueError::Report(format!("{}: {:?}", filename.display(), e)))
}


/// writes the results as a JSON array (performance statistics file)
pub fn write_stats_json(rows:&[ResultRow], filename:&Path) -> Result<()> {
    fs::write(filename, serde_json::to_string_pretty(rows)?)
        .map_err(|e| CliqueError::Report(format!("{}: {}", filename.display(), e)))
}
