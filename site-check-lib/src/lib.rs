//! # Site Check Library
//!
//! A concurrent batch checker: evaluate a caller-supplied predicate against
//! a list of items in parallel and get back an aggregated item-to-result
//! map, faster than sequential evaluation when the predicate is
//! latency-bound (e.g., a network call).
//!
//! ## Quick Start
//!
//! ```rust
//! use site_check_lib::check_websites;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let urls = vec!["google.com".to_string(), "youtube.com".to_string()];
//!     let results = check_websites(|_url| async { true }, &urls).await?;
//!
//!     for (url, up) in &results {
//!         println!("{}: {}", url, up);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Design
//!
//! - **Bounded worker pool**: a fixed set of worker tasks pulls items off a
//!   shared queue, capping resource usage for arbitrarily large batches.
//! - **Message-passing aggregation**: workers send `(item, result)` pairs
//!   over a channel to a single aggregating task that exclusively owns the
//!   result map. No locks on shared results, no racing writes.
//! - **Barrier semantics**: `check_all` returns only once every predicate
//!   invocation has completed; callers never see partial results.

// Re-export main public API types and functions
// This makes them available as site_check_lib::TypeName
pub use checker::{check_websites, SiteChecker};
pub use config::{load_env_config, ConfigManager, DefaultsConfig, EnvConfig, FileConfig};
pub use error::CheckError;
pub use types::{CheckConfig, ResultSet, SiteStatus};

// Internal modules - these are not part of the public API
mod checker;
mod config;
mod error;
mod pool;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, CheckError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
