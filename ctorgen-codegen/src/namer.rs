//! Unit naming: unique output identifiers within one generation pass.

use std::collections::HashSet;

use ctorgen_model::TypeDescriptor;
use indexmap::IndexMap;

/// Assigns a unique identifier to each generated unit in a pass.
///
/// The first type with a given simple name keeps the bare name; later ones
/// get an ordinal suffix starting at 2. Create one namer per pass.
#[derive(Debug, Default)]
pub struct OutputNamer {
    /// Simple name -> last ordinal issued for it.
    seen_counts: IndexMap<String, usize>,
    issued: HashSet<String>,
}

impl OutputNamer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the identifier for the next unit generated from `ty`.
    pub fn assign_unit_name(&mut self, ty: &TypeDescriptor) -> String {
        self.assign(&ty.simple_name)
    }

    /// Issue the identifier for the next unit with the given simple name.
    pub fn assign(&mut self, simple_name: &str) -> String {
        let count = self.seen_counts.entry(simple_name.to_string()).or_insert(0);
        *count += 1;

        let mut ordinal = *count;
        let mut candidate = candidate_name(simple_name, ordinal);
        while self.issued.contains(&candidate) {
            ordinal += 1;
            candidate = candidate_name(simple_name, ordinal);
        }
        *count = ordinal;

        self.issued.insert(candidate.clone());
        candidate
    }
}

fn candidate_name(simple_name: &str, ordinal: usize) -> String {
    if ordinal == 1 {
        simple_name.to_string()
    } else {
        format!("{}{}", simple_name, ordinal)
    }
}
