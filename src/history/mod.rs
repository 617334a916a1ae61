//! History store interface
//!
//! The conversation database lives outside this crate; the engine only
//! writes query/result records through this trait. The read path belongs to
//! the UI layer and is not represented here.

use crate::results::ResultSet;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Receiver for completed query turns
#[async_trait]
pub trait HistorySink: Send + Sync {
    /// Persist one query with its merged results.
    ///
    /// Errors are reported to the caller for logging but must never fail the
    /// search that produced the record.
    async fn record(
        &self,
        query: &str,
        results: &ResultSet,
        timestamp: DateTime<Utc>,
    ) -> anyhow::Result<()>;
}
