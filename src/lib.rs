//! Fathom: search aggregation and generic JSON extraction engine
//!
//! The search core of a local-first research assistant. A query fans out
//! concurrently to a configurable set of JSON-returning providers; each
//! response is normalized into a uniform result shape with declarative
//! dot-delimited field paths, then everything merges into one deduplicated,
//! citation-ready list with per-provider failure diagnostics.

pub mod config;
pub mod history;
pub mod introspect;
pub mod json;
pub mod network;
pub mod providers;
pub mod results;
pub mod search;
pub mod suggest;

pub use config::{ProviderSpec, ProvidersConfig};
pub use history::HistorySink;
pub use network::HttpClient;
pub use results::{ProviderError, ResultItem, ResultSet};
pub use search::{Aggregator, SearchService};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default per-provider timeout in seconds
pub const DEFAULT_TIMEOUT: u64 = 5;

/// Maximum per-provider timeout that can be set
pub const MAX_TIMEOUT: u64 = 30;
