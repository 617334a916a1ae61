//! Provider specification and configuration set

use crate::results::ProviderError;
use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use url::Url;

/// Substitution marker replaced by the URL-encoded query term
pub const QUERY_MARKER: &str = "{query}";

/// Declarative description of one search provider
///
/// A provider is data, not code: the endpoint template plus four dot-paths
/// are enough to turn any JSON-returning GET API into a search source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderSpec {
    /// Unique name, used as the citation label
    pub name: String,
    /// Endpoint with `{query}` where the encoded query term goes
    pub url_template: String,
    /// Extra request headers (API keys, auth)
    pub headers: HashMap<String, String>,
    /// Path to the array of result items; empty when the root is the array
    pub results_path: String,
    /// Paths evaluated relative to one result item
    pub title_path: String,
    pub url_path: String,
    pub content_path: String,
    /// Disabled providers are never called
    pub enabled: bool,
}

impl Default for ProviderSpec {
    fn default() -> Self {
        Self {
            name: String::new(),
            url_template: String::new(),
            headers: HashMap::new(),
            results_path: String::new(),
            title_path: String::new(),
            url_path: String::new(),
            content_path: String::new(),
            enabled: true,
        }
    }
}

impl ProviderSpec {
    /// Check the spec invariants, eagerly, before any network call.
    pub fn validate(&self) -> Result<(), ProviderError> {
        if self.name.trim().is_empty() {
            return Err(ProviderError::InvalidConfig(
                "provider name is empty".to_string(),
            ));
        }

        let markers = self.url_template.matches(QUERY_MARKER).count();
        if markers != 1 {
            return Err(ProviderError::InvalidConfig(format!(
                "url template must contain {QUERY_MARKER} exactly once, found {markers}"
            )));
        }

        let probe = self.expand("probe");
        let parsed = Url::parse(&probe).map_err(|e| {
            ProviderError::InvalidConfig(format!("url template does not expand to a valid URL: {e}"))
        })?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ProviderError::InvalidConfig(format!(
                "unsupported URL scheme '{}'",
                parsed.scheme()
            )));
        }

        Ok(())
    }

    /// Substitute the URL-encoded query term into the template.
    pub fn expand(&self, query: &str) -> String {
        self.url_template
            .replace(QUERY_MARKER, &urlencoding::encode(query))
    }
}

/// Ordered collection of provider specs
///
/// Declaration order is load-bearing: it decides merge order and dedup
/// precedence. The engine consumes a snapshot of this set at the start of
/// each query; edits apply to the next query.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub providers: Vec<ProviderSpec>,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            providers: default_providers(),
        }
    }
}

impl ProvidersConfig {
    /// Load provider specs from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ProvidersConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Append the optional self-hosted meta-search provider when
    /// `SEARXNG_URL` is set and no provider already claims the name.
    pub fn merge_env(&mut self) {
        if let Ok(base) = std::env::var("SEARXNG_URL") {
            if !base.trim().is_empty() && self.get("searxng").is_none() {
                let auth = match (std::env::var("AUTH_USERNAME"), std::env::var("AUTH_PASSWORD")) {
                    (Ok(user), Ok(pass)) => Some((user, pass)),
                    _ => None,
                };
                self.providers.push(searxng_provider(
                    &base,
                    auth.as_ref().map(|(u, p)| (u.as_str(), p.as_str())),
                ));
            }
        }
    }

    /// Get a provider spec by name.
    pub fn get(&self, name: &str) -> Option<&ProviderSpec> {
        self.providers.iter().find(|p| p.name == name)
    }

    /// All enabled providers, in declaration order.
    pub fn enabled(&self) -> Vec<&ProviderSpec> {
        self.providers.iter().filter(|p| p.enabled).collect()
    }
}

/// Built-in native provider set: public JSON search APIs expressed as plain
/// specs, no per-provider code.
fn default_providers() -> Vec<ProviderSpec> {
    vec![
        ProviderSpec {
            name: "reddit".to_string(),
            url_template: "https://www.reddit.com/search.json?q={query}&sort=relevance&limit=10"
                .to_string(),
            results_path: "data.children".to_string(),
            title_path: "data.title".to_string(),
            url_path: "data.url".to_string(),
            content_path: "data.selftext".to_string(),
            ..Default::default()
        },
        ProviderSpec {
            name: "hackernews".to_string(),
            url_template: "https://hn.algolia.com/api/v1/search?query={query}".to_string(),
            results_path: "hits".to_string(),
            title_path: "title".to_string(),
            url_path: "url".to_string(),
            content_path: "story_text".to_string(),
            ..Default::default()
        },
        ProviderSpec {
            name: "stackexchange".to_string(),
            url_template:
                "https://api.stackexchange.com/2.3/search/advanced?order=desc&sort=relevance&q={query}&site=stackoverflow"
                    .to_string(),
            results_path: "items".to_string(),
            title_path: "title".to_string(),
            url_path: "link".to_string(),
            ..Default::default()
        },
    ]
}

/// Spec for a self-hosted SearXNG instance serving its JSON format.
pub fn searxng_provider(base_url: &str, basic_auth: Option<(&str, &str)>) -> ProviderSpec {
    let base = base_url.trim_end_matches('/');

    let mut headers = HashMap::new();
    if let Some((user, pass)) = basic_auth {
        let credentials = BASE64.encode(format!("{user}:{pass}"));
        headers.insert("Authorization".to_string(), format!("Basic {credentials}"));
    }

    ProviderSpec {
        name: "searxng".to_string(),
        url_template: format!("{base}/search?q={QUERY_MARKER}&format=json"),
        headers,
        results_path: "results".to_string(),
        title_path: "title".to_string(),
        url_path: "url".to_string(),
        content_path: "content".to_string(),
        enabled: true,
    }
}
