//! crates/moviepulse_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like databases or the
//! file-backed vote ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    AnalyticsReport, BucketCount, Opinion, OpinionCategory, Sentiment, Timeframe, Vote,
    VotingPeriod,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., database, filesystem).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Vote Ledger Ports (Traits)
//=========================================================================================

/// The append-only vote collection owned by a single client.
///
/// The collection is read in full and rewritten in full on every mutation,
/// and a missing or corrupt store reads as the empty ledger. Operations are
/// synchronous because the backing store is a small local file, never a
/// network hop.
pub trait VoteLedger: Send + Sync {
    fn load(&self) -> PortResult<Vec<Vote>>;
    fn append(&self, vote: Vote) -> PortResult<()>;
    fn replace(&self, votes: Vec<Vote>) -> PortResult<()>;
}

/// Storage for the single voting-period record.
///
/// `load` returns `None` when nothing is stored; the policy layer substitutes
/// the default period rather than persisting one eagerly.
pub trait VotingPeriodStore: Send + Sync {
    fn load(&self) -> PortResult<Option<VotingPeriod>>;
    fn save(&self, period: &VotingPeriod) -> PortResult<()>;
}

//=========================================================================================
// Opinion Store Port
//=========================================================================================

/// Optional filters for a category listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpinionFilter<'a> {
    pub region: Option<&'a str>,
    pub timeframe: Option<Timeframe>,
    pub sentiment: Option<Sentiment>,
}

/// The multi-writer opinion collection. Concurrent write handling is
/// deferred entirely to the backing database.
#[async_trait]
pub trait OpinionStore: Send + Sync {
    /// Persists a fully-built opinion (id, sentiment and timestamp are
    /// minted by the caller before the write).
    async fn insert(&self, opinion: Opinion) -> PortResult<Opinion>;

    /// One page of opinions, newest first, plus the total count.
    /// `page` is 1-based.
    async fn list(&self, page: u64, limit: u64) -> PortResult<(Vec<Opinion>, u64)>;

    /// Opinions in one category, newest first, narrowed by the filter.
    async fn list_by_category(
        &self,
        category: OpinionCategory,
        filter: OpinionFilter<'_>,
        now: DateTime<Utc>,
    ) -> PortResult<Vec<Opinion>>;

    /// The full analytics roll-up. `now` anchors the trailing 30-day windows.
    async fn analytics(&self, now: DateTime<Utc>) -> PortResult<AnalyticsReport>;

    /// Top-10 tags by frequency across opinions that carry tags.
    async fn trending(&self) -> PortResult<Vec<BucketCount<String>>>;
}

//=========================================================================================
// Sentiment Port
//=========================================================================================

/// A pluggable sentiment capability. The default implementation is the
/// keyword heuristic in `sentiment.rs`; a real model can be substituted
/// without touching the opinion write path.
pub trait SentimentClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Sentiment;
}
