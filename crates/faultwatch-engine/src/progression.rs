//! Progression forecasting: "what happens next if this fault is not fixed".
//!
//! [`Predictor::forecast`] ranks a scenario's outgoing progression edges by
//! probability; [`Predictor::forecast_tree`] expands them recursively to a
//! bounded depth. Both are pure reads over the catalog, recomputed on
//! demand and never cached.
//!
//! Cycle safety: the tree expansion carries a visited set per branch,
//! cloned at each fork. Sharing one set across siblings would incorrectly
//! prune valid alternate paths (a diamond A→B→D, A→C→D must show D under
//! both B and C), so the guard is per-path, not per-traversal.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use faultwatch_core::{FaultCatalog, Severity};

/// One ranked progression possibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Catalog id of the fault this one can evolve into.
    pub target_id: String,
    pub target_name: String,
    pub target_severity: Severity,
    /// Likelihood, 0..=100.
    pub probability: f64,
    /// Estimated time before progression if not fixed.
    pub time_window: String,
    /// What accelerates this progression.
    pub trigger: String,
    /// Recommended action to prevent it.
    pub prevention: String,
}

/// A forecast entry with its own expanded progressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastNode {
    #[serde(flatten)]
    pub entry: ForecastEntry,
    /// Next-level progressions; empty at the depth bound or when the
    /// target already occurred on this path.
    pub children: Vec<ForecastNode>,
}

/// Pure progression predictor over a shared catalog.
#[derive(Debug, Clone)]
pub struct Predictor {
    catalog: Arc<FaultCatalog>,
}

impl Predictor {
    #[must_use]
    pub fn new(catalog: Arc<FaultCatalog>) -> Self {
        Self { catalog }
    }

    /// Direct progression possibilities of `id`, sorted by probability
    /// descending. The sort is stable: equal probabilities keep catalog
    /// declaration order. Unknown and terminal ids yield an empty forecast.
    #[must_use]
    #[instrument(name = "faultwatch::forecast", skip(self))]
    pub fn forecast(&self, id: &str) -> Vec<ForecastEntry> {
        let mut entries: Vec<ForecastEntry> = self
            .catalog
            .progression_edges(id)
            .iter()
            .filter_map(|edge| {
                let target = self.catalog.lookup(&edge.target)?;
                Some(ForecastEntry {
                    target_id: target.id.clone(),
                    target_name: target.name.clone(),
                    target_severity: target.severity,
                    probability: edge.probability,
                    time_window: edge.time_window.clone(),
                    trigger: edge.trigger.clone(),
                    prevention: edge.prevention.clone(),
                })
            })
            .collect();
        entries.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        debug!(edge_count = entries.len(), "forecast computed");
        entries
    }

    /// Expands the forecast of `id` into a tree of at most `max_depth`
    /// levels. A node whose target already occurred on the current path is
    /// pruned (empty children) instead of recursing, so declared cycles
    /// terminate.
    #[must_use]
    #[instrument(name = "faultwatch::forecast_tree", skip(self))]
    pub fn forecast_tree(&self, id: &str, max_depth: usize) -> Vec<ForecastNode> {
        let mut visited = HashSet::new();
        visited.insert(id.to_owned());
        self.expand(id, max_depth, &visited)
    }

    fn expand(&self, id: &str, depth: usize, visited: &HashSet<String>) -> Vec<ForecastNode> {
        if depth == 0 {
            return Vec::new();
        }
        self.forecast(id)
            .into_iter()
            .map(|entry| {
                let children = if visited.contains(&entry.target_id) {
                    Vec::new()
                } else {
                    // Clone per branch: siblings must not see each other's
                    // paths.
                    let mut branch = visited.clone();
                    branch.insert(entry.target_id.clone());
                    self.expand(&entry.target_id, depth - 1, &branch)
                };
                ForecastNode { entry, children }
            })
            .collect()
    }
}
