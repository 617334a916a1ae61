//! Query fan-out and join across providers

use crate::config::ProviderSpec;
use crate::network::HttpClient;
use crate::providers::ProviderClient;
use crate::results::{self, ProviderError, ProviderOutcome, ResultSet};
use futures::future::join_all;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Fans one query out to every enabled provider and merges the outcomes
///
/// Providers are fully independent: one provider's latency or failure never
/// delays or blocks another's. All calls settle (success, error, or timeout)
/// before the merge runs, and the merge walks them in declaration order, so
/// completion order never leaks into result order. Dropping the returned
/// future cancels all in-flight provider calls.
pub struct Aggregator {
    client: ProviderClient,
    max_timeout: Duration,
}

impl Aggregator {
    pub fn new(client: HttpClient) -> Self {
        Self {
            client: ProviderClient::new(client),
            max_timeout: Duration::from_secs(crate::MAX_TIMEOUT),
        }
    }

    /// Cap the per-provider timeout callers may request.
    pub fn with_max_timeout(mut self, timeout: Duration) -> Self {
        self.max_timeout = timeout;
        self
    }

    /// Execute `query` against every enabled spec within `per_provider_timeout`.
    pub async fn search(
        &self,
        query: &str,
        specs: &[ProviderSpec],
        per_provider_timeout: Duration,
    ) -> ResultSet {
        let timeout = per_provider_timeout.min(self.max_timeout);

        let enabled: Vec<&ProviderSpec> = specs.iter().filter(|s| s.enabled).collect();
        if enabled.is_empty() {
            debug!("no enabled providers, returning empty result set");
            return ResultSet::default();
        }

        // A duplicated name cannot be attributed to exactly one outcome, so
        // none of its copies is dispatched; the name gets one config failure.
        let mut seen = HashSet::new();
        let mut duplicates: HashSet<String> = HashSet::new();
        for spec in &enabled {
            if !seen.insert(spec.name.as_str()) {
                duplicates.insert(spec.name.clone());
            }
        }

        let calls: Vec<_> = enabled
            .iter()
            .filter(|spec| !duplicates.contains(&spec.name))
            .map(|spec| self.query_provider(spec, query, timeout))
            .collect();

        info!(
            "dispatching query '{}' to {} providers (timeout {:?})",
            query,
            calls.len(),
            timeout
        );

        let mut outcomes = join_all(calls).await;

        for name in duplicates {
            outcomes.push(ProviderOutcome {
                provider: name,
                result: Err(ProviderError::InvalidConfig(
                    "duplicate provider name".to_string(),
                )),
                time_ms: 0,
            });
        }

        let set = results::merge(outcomes);
        info!(
            results = set.results.len(),
            failures = set.failures.len(),
            "query merged"
        );
        set
    }

    async fn query_provider(
        &self,
        spec: &ProviderSpec,
        query: &str,
        timeout: Duration,
    ) -> ProviderOutcome {
        let start = Instant::now();
        let result = self.client.fetch(spec, query, timeout).await;
        let time_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(fetch) => debug!(
                provider = %spec.name,
                items = fetch.items.len(),
                time_ms,
                "provider responded"
            ),
            Err(error) => warn!(provider = %spec.name, %error, "provider failed"),
        }

        ProviderOutcome {
            provider: spec.name.clone(),
            result: result.map(|fetch| fetch.items),
            time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aggregator() -> Aggregator {
        Aggregator::new(HttpClient::new().unwrap())
    }

    #[tokio::test]
    async fn empty_provider_list_is_not_an_error() {
        let set = aggregator()
            .search("anything", &[], Duration::from_secs(1))
            .await;
        assert!(set.results.is_empty());
        assert!(set.failures.is_empty());
    }

    #[tokio::test]
    async fn disabled_providers_are_never_called() {
        let spec = ProviderSpec {
            name: "off".to_string(),
            url_template: "https://example.invalid/?q={query}".to_string(),
            enabled: false,
            ..Default::default()
        };
        let set = aggregator()
            .search("anything", &[spec], Duration::from_secs(1))
            .await;
        assert!(set.results.is_empty());
        assert!(set.failures.is_empty());
    }

    #[tokio::test]
    async fn duplicate_names_become_one_config_failure() {
        let spec = ProviderSpec {
            name: "twin".to_string(),
            url_template: "https://example.invalid/?q={query}".to_string(),
            ..Default::default()
        };
        let set = aggregator()
            .search("anything", &[spec.clone(), spec], Duration::from_secs(1))
            .await;

        assert!(set.results.is_empty());
        assert_eq!(set.failures.len(), 1);
        assert!(matches!(
            set.failures.get("twin"),
            Some(ProviderError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn config_faults_are_reported_per_provider() {
        let spec = ProviderSpec {
            name: "no_marker".to_string(),
            url_template: "https://example.invalid/search".to_string(),
            ..Default::default()
        };
        let set = aggregator()
            .search("anything", &[spec], Duration::from_secs(1))
            .await;

        assert!(matches!(
            set.failures.get("no_marker"),
            Some(ProviderError::InvalidConfig(_))
        ));
    }
}
