//! Result types and the merge step
//!
//! Defines the per-query output of the engine and the sequential merge that
//! runs after all provider tasks have settled.

mod merge;
mod types;

pub use merge::{merge, normalize_url, ProviderOutcome};
pub use types::*;
