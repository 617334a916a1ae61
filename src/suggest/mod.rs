//! Query suggestion fan-out
//!
//! Fans a partial query out to a fixed set of public suggestion endpoints
//! and merges by how many backends agree. Same fan-out/join shape as the
//! search path, but the sources are code, not config: suggestion APIs are
//! few and their response shapes stable.

mod backends;

pub use backends::{all_backends, SuggestBackend};

use crate::network::HttpClient;
use futures::future::join_all;
use std::collections::HashMap;
use tracing::debug;

/// Maximum suggestions returned to the caller
const MAX_SUGGESTIONS: usize = 10;

/// Fetch suggestions for a partial query from every backend concurrently.
///
/// A failing backend contributes nothing; suggestions several backends agree
/// on rank first, ties keep first-seen order.
pub async fn suggest(client: &HttpClient, query: &str) -> Vec<String> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let backends = all_backends();
    let calls = backends.iter().map(|b| b.suggest(client, query));
    let responses = join_all(calls).await;

    let collected: Vec<Vec<String>> = backends
        .iter()
        .zip(responses)
        .map(|(backend, response)| match response {
            Ok(suggestions) => suggestions,
            Err(error) => {
                debug!(backend = backend.name(), %error, "suggestion backend failed");
                Vec::new()
            }
        })
        .collect();

    merge_by_frequency(collected)
}

/// Merge backend suggestion lists by agreement count.
fn merge_by_frequency(lists: Vec<Vec<String>>) -> Vec<String> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for list in lists {
        for suggestion in list {
            if !counts.contains_key(&suggestion) {
                order.push(suggestion.clone());
            }
            *counts.entry(suggestion).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(String, usize)> = order
        .into_iter()
        .map(|s| {
            let count = counts[&s];
            (s, count)
        })
        .collect();
    // Stable sort: equal counts keep first-seen order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(s, _)| s)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn agreement_ranks_first() {
        let merged = merge_by_frequency(vec![
            list(&["rust book", "rust lang"]),
            list(&["rust lang", "rustup"]),
        ]);
        assert_eq!(merged[0], "rust lang");
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let merged = merge_by_frequency(vec![list(&["alpha", "beta"]), list(&["gamma"])]);
        assert_eq!(merged, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn truncates_to_cap() {
        let many: Vec<String> = (0..30).map(|i| format!("suggestion {i}")).collect();
        let merged = merge_by_frequency(vec![many]);
        assert_eq!(merged.len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn empty_input_is_empty_output() {
        assert!(merge_by_frequency(vec![]).is_empty());
        assert!(merge_by_frequency(vec![vec![], vec![]]).is_empty());
    }
}
