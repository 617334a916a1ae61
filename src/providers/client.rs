//! Single-provider fetch and extraction

use crate::config::ProviderSpec;
use crate::introspect;
use crate::json;
use crate::network::HttpClient;
use crate::results::{ProviderError, ResultItem};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Items extracted from one provider response
///
/// The raw parsed body rides along for introspection and is discarded with
/// the rest of the per-query state once the aggregation returns.
pub struct ProviderFetch {
    pub items: Vec<ResultItem>,
    pub raw: Value,
}

/// Executes single-provider fetches against the shared HTTP client
#[derive(Clone)]
pub struct ProviderClient {
    client: HttpClient,
}

impl ProviderClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Fetch and extract one provider's results for `query`.
    ///
    /// Every failure mode maps to a [`ProviderError`]; the caller records it
    /// against the provider and moves on. Once `timeout` elapses the
    /// in-flight call is abandoned and any late response discarded.
    pub async fn fetch(
        &self,
        spec: &ProviderSpec,
        query: &str,
        timeout: Duration,
    ) -> Result<ProviderFetch, ProviderError> {
        spec.validate()?;

        let url = spec.expand(query);

        let request = self.client.get(&url, &spec.headers, timeout);
        let response = match tokio::time::timeout(timeout, request).await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) if e.is_timeout() => return Err(ProviderError::Timeout),
            Ok(Err(e)) => return Err(ProviderError::Network(e.to_string())),
            Err(_) => return Err(ProviderError::Timeout),
        };

        if !response.is_success() {
            return Err(ProviderError::HttpStatus(response.status));
        }

        let raw: Value =
            serde_json::from_str(&response.text).map_err(|_| ProviderError::InvalidJson)?;

        let entries = match json::extract(&raw, &spec.results_path) {
            Some(Value::Array(entries)) => entries,
            _ => {
                debug!(
                    provider = %spec.name,
                    results_path = %spec.results_path,
                    root_keys = ?introspect::describe_root(&raw),
                    "results path did not resolve to an array"
                );
                return Err(ProviderError::InvalidShape);
            }
        };

        let emitted = entries.len();
        let items: Vec<ResultItem> = entries
            .iter()
            .map(|entry| ResultItem {
                source: spec.name.clone(),
                title: json::extract_field(entry, &spec.title_path),
                url: json::extract_field(entry, &spec.url_path),
                content: json::extract_field(entry, &spec.content_path),
            })
            .filter(ResultItem::is_citable)
            .collect();

        if items.is_empty() && emitted > 0 {
            // The endpoint answered with items, but none were citable: the
            // item paths are probably wrong. Show the operator what the
            // first item actually contains.
            debug!(
                provider = %spec.name,
                first_item_keys = ?introspect::describe_first_item(spec, &raw),
                "no citable items extracted"
            );
        }

        Ok(ProviderFetch { items, raw })
    }
}
