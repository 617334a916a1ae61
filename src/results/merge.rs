//! Sequential merge of per-provider outcomes
//!
//! Each provider task returns its own outcome; nothing is shared while the
//! tasks run. The merge walks the outcomes in provider declaration order
//! after the join, so the output is deterministic no matter which provider
//! finished first.

use super::types::{ProviderError, ProviderTiming, ResultItem, ResultSet};
use std::collections::HashSet;
use tracing::debug;

/// Outcome of one provider task, handed to the join point
pub struct ProviderOutcome {
    pub provider: String,
    pub result: Result<Vec<ResultItem>, ProviderError>,
    pub time_ms: u64,
}

/// Merge outcomes into the final [`ResultSet`].
///
/// Successful providers contribute their items in response order; failed
/// providers contribute exactly one `failures` entry and zero items. Items
/// are deduplicated by normalized URL across the whole list, first occurrence
/// wins. Items without a URL passed the citation invariant on their title
/// alone and are exempt from dedup.
pub fn merge(outcomes: Vec<ProviderOutcome>) -> ResultSet {
    let mut set = ResultSet::default();
    let mut seen = HashSet::new();

    for outcome in outcomes {
        match outcome.result {
            Ok(items) => {
                let emitted = items.len();
                let mut kept = 0usize;

                for item in items {
                    if !item.url.is_empty() && !seen.insert(normalize_url(&item.url)) {
                        continue;
                    }
                    set.results.push(item);
                    kept += 1;
                }

                if kept < emitted {
                    debug!(
                        provider = %outcome.provider,
                        dropped = emitted - kept,
                        "dropped duplicate urls during merge"
                    );
                }

                set.timings.push(ProviderTiming {
                    provider: outcome.provider,
                    time_ms: outcome.time_ms,
                    result_count: emitted,
                });
            }
            Err(error) => {
                set.failures.insert(outcome.provider, error);
            }
        }
    }

    set
}

/// Normalize a URL for deduplication: case-insensitive and insensitive to a
/// trailing slash.
pub fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_lowercase()
}
