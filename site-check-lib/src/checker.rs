//! Main batch checker implementation.
//!
//! This module provides the primary `SiteChecker` struct that orchestrates
//! concurrent predicate evaluation over a batch of items.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::error::CheckError;
use crate::pool;
use crate::types::{CheckConfig, ResultSet};

/// Batch checker that evaluates a caller-supplied predicate against many
/// items concurrently.
///
/// The `SiteChecker` fans each item out to a bounded pool of worker tasks,
/// fans the `(item, result)` pairs back in over a channel, and returns the
/// aggregated map only once every invocation has completed. Callers never
/// observe partial results.
///
/// # Example
///
/// ```rust
/// use site_check_lib::{CheckConfig, SiteChecker};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let checker = SiteChecker::with_config(CheckConfig::default().with_concurrency(50));
///     let urls = vec!["a.example".to_string(), "b.example".to_string()];
///
///     let results = checker
///         .check_all(|url| async move { url.starts_with('a') }, &urls)
///         .await?;
///
///     assert_eq!(results["a.example"], true);
///     Ok(())
/// }
/// ```
pub struct SiteChecker {
    /// Configuration settings for this checker instance
    config: CheckConfig,
}

impl SiteChecker {
    /// Create a new batch checker with default configuration (32 workers).
    pub fn new() -> Self {
        Self {
            config: CheckConfig::default(),
        }
    }

    /// Create a new batch checker with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use site_check_lib::{CheckConfig, SiteChecker};
    ///
    /// let config = CheckConfig::default().with_concurrency(100);
    /// let checker = SiteChecker::with_config(config);
    /// ```
    pub fn with_config(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Evaluate `predicate` against every item concurrently and return the
    /// aggregated item-to-result map.
    ///
    /// Semantics:
    /// - Every input element, including duplicate occurrences, gets its own
    ///   predicate invocation; duplicate keys collapse to a single entry.
    /// - The call is a barrier: it returns only after all invocations have
    ///   completed and been recorded. No ordering is guaranteed among them.
    /// - An empty input returns an empty map immediately, spawning nothing.
    ///
    /// For N items each taking latency L, wall time approaches
    /// L x ceil(N / concurrency) rather than N x L.
    ///
    /// # Errors
    ///
    /// Returns `CheckError` if:
    /// - The configuration is invalid (zero workers; only reachable with a
    ///   hand-constructed `CheckConfig`)
    /// - A predicate invocation panics. The panic aborts the whole batch
    ///   and partial results are discarded; there is no per-item recovery.
    pub async fn check_all<F, Fut>(
        &self,
        predicate: F,
        items: &[String],
    ) -> Result<ResultSet, CheckError>
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = bool> + Send + 'static,
    {
        self.config.validate()?;

        if items.is_empty() {
            return Ok(ResultSet::new());
        }

        let workers = self.config.concurrency.min(items.len());
        debug!(items = items.len(), workers, "starting batch check");

        pool::run_pool(Arc::new(predicate), items.to_vec(), workers).await
    }

    /// Get the current configuration for this checker.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Update the configuration for this checker.
    ///
    /// Takes effect on the next `check_all` call; in-flight batches are
    /// unaffected.
    pub fn set_config(&mut self, config: CheckConfig) {
        self.config = config;
    }
}

impl Default for SiteChecker {
    fn default() -> Self {
        Self::new()
    }
}

/// Check every website with the default configuration.
///
/// Convenience wrapper around [`SiteChecker::check_all`] for the common
/// one-shot case.
///
/// # Example
///
/// ```rust
/// use site_check_lib::check_websites;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let urls = vec!["google.com".to_string(), "youtube.com".to_string()];
///     let results = check_websites(|_url| async { true }, &urls).await?;
///     assert_eq!(results.len(), 2);
///     Ok(())
/// }
/// ```
pub async fn check_websites<F, Fut>(
    predicate: F,
    items: &[String],
) -> Result<ResultSet, CheckError>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = bool> + Send + 'static,
{
    SiteChecker::new().check_all(predicate, items).await
}
