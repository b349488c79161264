//! Statistics collected over an import run

use crate::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters accumulated by the orchestrator across a run.
///
/// `counts` holds one entry per enabled category, zero included, so a
/// completed run always reports a consistent shape regardless of how many
/// units matched. The remaining counters are diagnostic only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStats {
    /// Wall-clock duration of the run in seconds
    pub duration_secs: u64,
    /// Records imported per category
    pub counts: BTreeMap<Category, u64>,
    /// Units pulled from the reader
    pub units_seen: u64,
    /// Units skipped by the title filter
    pub units_ignored: u64,
    /// Units with no recognized sidebar template (the majority case)
    pub units_without_sidebar: u64,
    /// Units whose builder rejected them
    pub build_failures: u64,
}

impl ImportStats {
    /// Create stats with zeroed counters for the given categories.
    pub fn new(categories: &[Category]) -> Self {
        let counts = categories.iter().map(|c| (*c, 0)).collect();
        Self {
            counts,
            ..Default::default()
        }
    }

    /// Record a successfully imported record.
    pub fn record_import(&mut self, category: Category) {
        *self.counts.entry(category).or_insert(0) += 1;
    }

    /// Imported count for one category.
    pub fn count(&self, category: Category) -> u64 {
        self.counts.get(&category).copied().unwrap_or(0)
    }

    /// Total records imported across all categories.
    pub fn total_imported(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Generate a summary report of the run.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Import completed in {}s", self.duration_secs),
            format!(
                "Units: {} seen, {} ignored, {} without sidebar, {} build failures",
                self.units_seen, self.units_ignored, self.units_without_sidebar, self.build_failures
            ),
        ];
        for (category, count) in &self.counts {
            lines.push(format!("  {}: {}", category, count));
        }
        lines.push(format!("  Total: {}", self.total_imported()));
        lines.join("\n")
    }
}
