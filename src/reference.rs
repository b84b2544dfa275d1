use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;


/** known optimal clique sizes, indexed by instance name.
Used by the restart driver to stop early and by the reports to flag solved instances.
*/
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceTable {
    /// instance name -> optimal clique size
    optima: BTreeMap<String, usize>,
}

impl ReferenceTable {

    /** optima of the DIMACS clique benchmark instances (file names as distributed) */
    pub fn dimacs_benchmarks() -> Self {
        let known = [
            ("C125.9.clq", 34),
            ("MANN_a27.clq", 126),
            ("MANN_a9.clq", 16),
            ("brock200_1.clq", 20),
            ("brock200_2.clq", 10),
            ("brock200_3.clq", 14),
            ("brock200_4.clq", 16),
            ("brock400_1.clq", 24),
            ("brock400_2.clq", 25),
            ("brock400_3.clq", 24),
            ("brock400_4.clq", 24),
            ("gen200_p0.9_44.clq", 40),
            ("gen200_p0.9_55.clq", 48),
            ("hamming8-4.clq", 16),
            ("johnson16-2-4.clq", 8),
            ("johnson8-2-4.clq", 4),
            ("keller4.clq", 11),
            ("p_hat1000-1.clq", 10),
            ("p_hat1000-2.clq", 46),
            ("p_hat1500-1.clq", 11),
            ("p_hat300-3.clq", 34),
            ("p_hat500-3.clq", 49),
            ("san1000.clq", 10),
            ("sanr200_0.9.clq", 41),
            ("sanr400_0.7.clq", 21),
        ];
        let mut res = Self::default();
        for (name, size) in known.iter() {
            res.insert(name, *size);
        }
        res
    }

    /// reads a JSON object {"instance name": optimum, ...}
    pub fn from_json_str(s:&str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// reads a JSON reference file
    pub fn from_file(path:&Path) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// registers (or replaces) the optimum of an instance
    pub fn insert(&mut self, name:&str, size:usize) {
        self.optima.insert(name.to_string(), size);
    }

    /// known optimum of an instance, if any
    pub fn known_optimum(&self, name:&str) -> Option<usize> {
        self.optima.get(name).copied()
    }

    /** Some(size >= optimum) if the optimum of the instance is known, None otherwise */
    pub fn is_solved(&self, name:&str, size:usize) -> Option<bool> {
        self.known_optimum(name).map(|opt| size >= opt)
    }

    /// nb instances with a known optimum
    pub fn len(&self) -> usize { self.optima.len() }

    /// true if no optimum is known
    pub fn is_empty(&self) -> bool { self.optima.is_empty() }
}
