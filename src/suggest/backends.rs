//! Suggestion backend implementations

use crate::network::HttpClient;
use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for suggestion backends
#[async_trait]
pub trait SuggestBackend: Send + Sync {
    /// Backend name
    fn name(&self) -> &str;

    /// Fetch suggestions for a query
    async fn suggest(&self, client: &HttpClient, query: &str) -> Result<Vec<String>>;
}

/// All backends consulted per suggestion request
pub fn all_backends() -> Vec<Box<dyn SuggestBackend>> {
    vec![
        Box::new(DuckDuckGo),
        Box::new(Brave),
        Box::new(Qwant),
        Box::new(Wikipedia),
    ]
}

/// Parse the OpenSearch-style `[query, [suggestions...]]` response shape
/// shared by several backends.
fn opensearch_suggestions(json: &Value) -> Vec<String> {
    json.as_array()
        .and_then(|arr| arr.get(1))
        .and_then(|v| v.as_array())
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect()
        })
        .unwrap_or_default()
}

/// DuckDuckGo suggestion backend
pub struct DuckDuckGo;

#[async_trait]
impl SuggestBackend for DuckDuckGo {
    fn name(&self) -> &str {
        "duckduckgo"
    }

    async fn suggest(&self, client: &HttpClient, query: &str) -> Result<Vec<String>> {
        let response = client
            .get_with_params("https://duckduckgo.com/ac/", &[("q", query), ("type", "list")])
            .await?;

        if !response.is_success() {
            return Ok(vec![]);
        }

        let json: Value = serde_json::from_str(&response.text)?;
        Ok(opensearch_suggestions(&json))
    }
}

/// Brave suggestion backend
pub struct Brave;

#[async_trait]
impl SuggestBackend for Brave {
    fn name(&self) -> &str {
        "brave"
    }

    async fn suggest(&self, client: &HttpClient, query: &str) -> Result<Vec<String>> {
        let response = client
            .get_with_params("https://search.brave.com/api/suggest", &[("q", query)])
            .await?;

        if !response.is_success() {
            return Ok(vec![]);
        }

        let json: Value = serde_json::from_str(&response.text)?;
        Ok(opensearch_suggestions(&json))
    }
}

/// Qwant suggestion backend
pub struct Qwant;

#[async_trait]
impl SuggestBackend for Qwant {
    fn name(&self) -> &str {
        "qwant"
    }

    async fn suggest(&self, client: &HttpClient, query: &str) -> Result<Vec<String>> {
        let response = client
            .get_with_params(
                "https://api.qwant.com/v3/suggest",
                &[("q", query), ("locale", "en_US"), ("version", "2")],
            )
            .await?;

        if !response.is_success() {
            return Ok(vec![]);
        }

        // Qwant returns: {"status": "success", "data": {"items": [{"value": "..."}]}}
        let json: Value = serde_json::from_str(&response.text)?;
        let suggestions = json
            .get("data")
            .and_then(|d| d.get("items"))
            .and_then(|items| items.as_array())
            .map(|arr| {
                arr.iter()
                    .filter_map(|item| {
                        item.get("value").and_then(|v| v.as_str()).map(String::from)
                    })
                    .collect()
            })
            .unwrap_or_default();

        Ok(suggestions)
    }
}

/// Wikipedia suggestion backend
pub struct Wikipedia;

#[async_trait]
impl SuggestBackend for Wikipedia {
    fn name(&self) -> &str {
        "wikipedia"
    }

    async fn suggest(&self, client: &HttpClient, query: &str) -> Result<Vec<String>> {
        let response = client
            .get_with_params(
                "https://en.wikipedia.org/w/api.php",
                &[
                    ("action", "opensearch"),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("search", query),
                    ("namespace", "0"),
                    ("limit", "10"),
                ],
            )
            .await?;

        if !response.is_success() {
            return Ok(vec![]);
        }

        let json: Value = serde_json::from_str(&response.text)?;
        Ok(opensearch_suggestions(&json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn backend_roster() {
        let backends = all_backends();
        let names: Vec<&str> = backends.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["duckduckgo", "brave", "qwant", "wikipedia"]);
    }

    #[test]
    fn opensearch_shape_parsing() {
        let json = json!(["rust", ["rust lang", "rust book"], [], []]);
        assert_eq!(
            opensearch_suggestions(&json),
            vec!["rust lang".to_string(), "rust book".to_string()]
        );
        assert!(opensearch_suggestions(&json!({"not": "an array"})).is_empty());
        assert!(opensearch_suggestions(&json!(["only-query"])).is_empty());
    }
}
