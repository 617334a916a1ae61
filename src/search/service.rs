//! Service glue between the engine and its callers

use super::Aggregator;
use crate::config::{ProviderSpec, ProvidersConfig};
use crate::history::HistorySink;
use crate::network::HttpClient;
use crate::results::ResultSet;
use chrono::Utc;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tracing::warn;

/// Default cap on the merged result list handed to the model context
pub const DEFAULT_MAX_RESULTS: usize = 15;

/// One-per-process search facade for the chat/orchestration layer
///
/// Owns the provider configuration and takes a snapshot of it at the start
/// of each query; edits via [`set_providers`](Self::set_providers) apply to
/// the next query, never mid-flight.
pub struct SearchService {
    aggregator: Aggregator,
    providers: RwLock<Vec<ProviderSpec>>,
    per_provider_timeout: Duration,
    max_results: usize,
    sink: Option<Arc<dyn HistorySink>>,
}

impl SearchService {
    pub fn new(client: HttpClient, config: ProvidersConfig) -> Self {
        Self {
            aggregator: Aggregator::new(client),
            providers: RwLock::new(config.providers),
            per_provider_timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT),
            max_results: DEFAULT_MAX_RESULTS,
            sink: None,
        }
    }

    /// Set the per-provider timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.per_provider_timeout = timeout;
        self
    }

    /// Set the result-list cap.
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    /// Attach a history sink; every completed query is offered to it.
    pub fn with_history(mut self, sink: Arc<dyn HistorySink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replace the provider set. Takes effect on the next query.
    pub fn set_providers(&self, providers: Vec<ProviderSpec>) {
        *self.providers.write().unwrap() = providers;
    }

    /// Run one aggregation turn: snapshot the config, fan out, truncate,
    /// record to history, return.
    ///
    /// Absence of results is a normal outcome, not an error; a failing
    /// history sink is logged and swallowed.
    pub async fn search(&self, query: &str) -> ResultSet {
        let snapshot = self.providers.read().unwrap().clone();

        let mut set = self
            .aggregator
            .search(query, &snapshot, self.per_provider_timeout)
            .await;

        if set.results.len() > self.max_results {
            set.results.truncate(self.max_results);
        }

        if let Some(sink) = &self.sink {
            if let Err(error) = sink.record(query, &set, Utc::now()).await {
                warn!(%error, "history sink rejected the query record");
            }
        }

        set
    }
}
