//! Fathom operator CLI
//!
//! One-shot harness around the engine: runs a single query (or suggestion
//! lookup) against the configured providers and prints the merged output.
//! The chat/server surface of the assistant lives elsewhere.

use anyhow::Result;
use fathom::{config, network::HttpClient, search::SearchService, suggest};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut timeout = Duration::from_secs(fathom::DEFAULT_TIMEOUT);
    let mut suggest_mode = false;
    let mut query_parts: Vec<String> = Vec::new();

    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--suggest" => suggest_mode = true,
            "--timeout" => {
                let secs: u64 = iter
                    .next()
                    .and_then(|v| v.parse().ok())
                    .ok_or_else(|| anyhow::anyhow!("--timeout expects seconds"))?;
                timeout = Duration::from_secs(secs.min(fathom::MAX_TIMEOUT));
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            _ => query_parts.push(arg),
        }
    }

    let query = query_parts.join(" ");
    if query.trim().is_empty() {
        print_usage();
        anyhow::bail!("no query given");
    }

    let client = HttpClient::new()?;

    if suggest_mode {
        for suggestion in suggest::suggest(&client, &query).await {
            println!("{suggestion}");
        }
        return Ok(());
    }

    let providers = config::load()?;
    info!(
        "loaded {} providers ({} enabled)",
        providers.providers.len(),
        providers.enabled().len()
    );

    let service = SearchService::new(client, providers).with_timeout(timeout);
    let set = service.search(&query).await;

    for item in &set.results {
        println!("[{}] {}", item.source, item.title);
        println!("    {}", item.url);
        if !item.content.is_empty() {
            println!("    {}", item.content);
        }
    }

    if set.is_empty() {
        println!("no results");
    }

    for (provider, error) in &set.failures {
        eprintln!("{provider}: {error}");
    }

    for timing in &set.timings {
        info!(
            "{}: {} results in {}ms",
            timing.provider, timing.result_count, timing.time_ms
        );
    }

    Ok(())
}

fn print_usage() {
    println!(
        r#"
fathom v{}
Search aggregation engine for a local-first research assistant

USAGE:
    fathom [OPTIONS] <QUERY>

OPTIONS:
    --timeout <SECONDS>    Per-provider timeout (default {}, max {})
    --suggest              Fetch query suggestions instead of searching
    -h, --help             Print help information

ENVIRONMENT VARIABLES:
    FATHOM_PROVIDERS       Path to a providers.yml
    SEARXNG_URL            Base URL of a self-hosted SearXNG instance
    AUTH_USERNAME          Basic auth user for the SearXNG instance
    AUTH_PASSWORD          Basic auth password for the SearXNG instance
    RUST_LOG               Log filter (default "info")
"#,
        fathom::VERSION,
        fathom::DEFAULT_TIMEOUT,
        fathom::MAX_TIMEOUT
    );
}
