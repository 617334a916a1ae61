//! Result type definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// A single extracted search result
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultItem {
    /// Provider that produced this item, used as the citation label
    pub source: String,
    /// The title of the result
    pub title: String,
    /// The URL of the result
    pub url: String,
    /// Content snippet/description
    pub content: String,
}

impl ResultItem {
    /// An item is worth citing only if its URL or its title resolved.
    /// Blank items are dropped at extraction time, never surfaced.
    pub fn is_citable(&self) -> bool {
        !self.url.is_empty() || !self.title.is_empty()
    }
}

/// Per-provider failure taxonomy
///
/// Every variant is scoped to a single provider for a single query and is
/// captured into [`ResultSet::failures`], never propagated as a fatal error
/// for the overall aggregation.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProviderError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP status {0}")]
    HttpStatus(u16),
    #[error("response body is not valid JSON")]
    InvalidJson,
    #[error("results path did not resolve to an array")]
    InvalidShape,
    #[error("invalid provider configuration: {0}")]
    InvalidConfig(String),
}

/// Provider response timing information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderTiming {
    /// Provider name
    pub provider: String,
    /// Response time in milliseconds
    pub time_ms: u64,
    /// Number of items the provider emitted before merging
    pub result_count: usize,
}

/// The per-query output of the aggregation engine
///
/// `results` holds the merged, deduplicated items in provider declaration
/// order; `failures` maps each failed provider to the reason. A provider
/// contributes to exactly one of the two for a given query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    pub results: Vec<ResultItem>,
    pub failures: HashMap<String, ProviderError>,
    #[serde(default)]
    pub timings: Vec<ProviderTiming>,
}

impl ResultSet {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Providers that contributed at least one merged result, in order.
    pub fn sources(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.results {
            if !seen.contains(&item.source.as_str()) {
                seen.push(item.source.as_str());
            }
        }
        seen
    }

    /// Render the merged list as the citation block handed to the language
    /// model context.
    pub fn context_block(&self) -> String {
        self.results
            .iter()
            .map(|r| {
                format!(
                    "[{}] {}\nURL: {}\nSnippet: {}",
                    r.source, r.title, r.url, r.content
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n---\n\n")
    }
}
