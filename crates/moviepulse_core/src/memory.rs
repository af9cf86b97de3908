//! crates/moviepulse_core/src/memory.rs
//!
//! In-memory implementations of the storage ports. These back the test
//! suites and any embedder that wants the voting flow without real storage;
//! the opinion store delegates its roll-ups to the pure analytics functions.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::analytics;
use crate::domain::{AnalyticsReport, BucketCount, Opinion, OpinionCategory, Vote, VotingPeriod};
use crate::ports::{
    OpinionFilter, OpinionStore, PortError, PortResult, VoteLedger, VotingPeriodStore,
};

fn guard<T>(mutex: &Mutex<T>) -> PortResult<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| PortError::Unexpected("store mutex poisoned".to_owned()))
}

/// A ledger held in a mutex-guarded vector.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    votes: Mutex<Vec<Vote>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VoteLedger for MemoryLedger {
    fn load(&self) -> PortResult<Vec<Vote>> {
        Ok(guard(&self.votes)?.clone())
    }

    fn append(&self, vote: Vote) -> PortResult<()> {
        guard(&self.votes)?.push(vote);
        Ok(())
    }

    fn replace(&self, votes: Vec<Vote>) -> PortResult<()> {
        *guard(&self.votes)? = votes;
        Ok(())
    }
}

/// A period record held in memory.
#[derive(Debug, Default)]
pub struct MemoryPeriodStore {
    period: Mutex<Option<VotingPeriod>>,
}

impl MemoryPeriodStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with a stored period, for tests that need a known window.
    pub fn with_period(period: VotingPeriod) -> Self {
        Self {
            period: Mutex::new(Some(period)),
        }
    }
}

impl VotingPeriodStore for MemoryPeriodStore {
    fn load(&self) -> PortResult<Option<VotingPeriod>> {
        Ok(guard(&self.period)?.clone())
    }

    fn save(&self, period: &VotingPeriod) -> PortResult<()> {
        *guard(&self.period)? = Some(period.clone());
        Ok(())
    }
}

/// An opinion store held in memory.
#[derive(Debug, Default)]
pub struct MemoryOpinionStore {
    opinions: Mutex<Vec<Opinion>>,
}

impl MemoryOpinionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OpinionStore for MemoryOpinionStore {
    async fn insert(&self, opinion: Opinion) -> PortResult<Opinion> {
        guard(&self.opinions)?.push(opinion.clone());
        Ok(opinion)
    }

    async fn list(&self, page: u64, limit: u64) -> PortResult<(Vec<Opinion>, u64)> {
        let mut opinions = guard(&self.opinions)?.clone();
        let total = opinions.len() as u64;
        opinions.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let skip = (page.saturating_sub(1) * limit) as usize;
        let page: Vec<Opinion> = opinions.into_iter().skip(skip).take(limit as usize).collect();
        Ok((page, total))
    }

    async fn list_by_category(
        &self,
        category: OpinionCategory,
        filter: OpinionFilter<'_>,
        now: DateTime<Utc>,
    ) -> PortResult<Vec<Opinion>> {
        let cutoff = filter.timeframe.map(|timeframe| timeframe.cutoff(now));
        let mut opinions: Vec<Opinion> = guard(&self.opinions)?
            .iter()
            .filter(|o| o.category == category)
            .filter(|o| match filter.region {
                Some(region) => o.demographics.region.as_deref() == Some(region),
                None => true,
            })
            .filter(|o| match filter.sentiment {
                Some(sentiment) => o.sentiment == sentiment,
                None => true,
            })
            .filter(|o| match cutoff {
                Some(cutoff) => o.created_at >= cutoff,
                None => true,
            })
            .cloned()
            .collect();
        opinions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(opinions)
    }

    async fn analytics(&self, now: DateTime<Utc>) -> PortResult<AnalyticsReport> {
        Ok(analytics::summarize(&guard(&self.opinions)?, now))
    }

    async fn trending(&self) -> PortResult<Vec<BucketCount<String>>> {
        Ok(analytics::trending_tags(&guard(&self.opinions)?))
    }
}
