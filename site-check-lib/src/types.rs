//! Core data types for concurrent batch checking.
//!
//! This module defines the main data structures used throughout the library:
//! the checker configuration and the per-site report row used for
//! JSON-friendly output.

use serde::{Deserialize, Serialize};

/// The aggregated outcome of a batch check: one entry per distinct item.
///
/// Duplicate items in the input collapse to a single key. The map is built
/// by a single aggregating task and handed to the caller as an owned value
/// once every predicate invocation has completed.
pub type ResultSet = std::collections::HashMap<String, bool>;

/// Configuration options for batch checking operations.
///
/// This struct allows fine-tuning of the checking behavior. Today that is
/// the size of the worker pool; it is a struct rather than a bare number so
/// new knobs can be added without breaking the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Number of worker tasks pulling items off the shared queue.
    /// Default: 32, Range: 1-1024
    pub concurrency: usize,
}

impl Default for CheckConfig {
    /// Create a sensible default configuration.
    ///
    /// 32 workers is enough to make latency-bound predicates (network
    /// calls) run in near-constant wall time for typical batch sizes
    /// while staying conservative about resource usage.
    fn default() -> Self {
        Self { concurrency: 32 }
    }
}

impl CheckConfig {
    /// Create a new configuration with custom concurrency.
    ///
    /// Automatically clamps concurrency to 1-1024 to prevent both a
    /// stalled pool and resource exhaustion.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, 1024);
        self
    }

    /// Validate a configuration that may not have gone through the builder.
    ///
    /// The builder clamps, so only hand-constructed configs can be invalid.
    pub(crate) fn validate(&self) -> Result<(), crate::error::CheckError> {
        if self.concurrency == 0 {
            return Err(crate::error::CheckError::invalid_config(
                "concurrency must be at least 1",
            ));
        }
        Ok(())
    }
}

/// One row of a batch check report.
///
/// This is the serialization-friendly view of a `ResultSet` entry, used by
/// consumers that want JSON output rather than a map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteStatus {
    /// The item that was checked (e.g., a URL)
    pub url: String,

    /// Whether the predicate reported the item as up
    pub up: bool,
}

impl SiteStatus {
    /// Build a sorted report from a result map.
    ///
    /// Sorting makes output deterministic; the underlying map has no
    /// meaningful order.
    pub fn from_results(results: &ResultSet) -> Vec<SiteStatus> {
        let mut rows: Vec<SiteStatus> = results
            .iter()
            .map(|(url, up)| SiteStatus {
                url: url.clone(),
                up: *up,
            })
            .collect();
        rows.sort_by(|a, b| a.url.cmp(&b.url));
        rows
    }
}
