//! crates/moviepulse_core/src/service.rs
//!
//! `VotingService` wires the injected storage ports to the pure eligibility,
//! submission and aggregation components, so none of them ever touch ambient
//! state directly. Handlers hold one service and call through it.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{
    Country, FilmIndustry, Genre, NoteEntry, OttPlatform, ProjectType, TelevisionContentType,
    Vote, VotedCombination, VotingPeriod, YouTubeContentCategory,
};
use crate::ports::{PortError, PortResult, VoteLedger, VotingPeriodStore};
use crate::submission::{ValidationError, VoteSubmission};
use crate::{eligibility, period, stats};

/// Why a submission did not append a vote.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Port(#[from] PortError),
}

/// The voting half of the application: one ledger, one period record.
#[derive(Clone)]
pub struct VotingService {
    ledger: Arc<dyn VoteLedger>,
    periods: Arc<dyn VotingPeriodStore>,
}

impl VotingService {
    pub fn new(ledger: Arc<dyn VoteLedger>, periods: Arc<dyn VotingPeriodStore>) -> Self {
        Self { ledger, periods }
    }

    /// The stored voting period, or the default window when none is stored.
    pub fn current_period(&self, now: DateTime<Utc>) -> PortResult<VotingPeriod> {
        period::current_period(self.periods.as_ref(), now)
    }

    /// Replaces the period wholesale.
    pub fn update_period(&self, period: VotingPeriod) -> PortResult<VotingPeriod> {
        self.periods.save(&period)?;
        Ok(period)
    }

    /// Flips the active flag on the current period and stores the result.
    pub fn toggle_active(&self, now: DateTime<Utc>) -> PortResult<VotingPeriod> {
        let mut period = self.current_period(now)?;
        period.is_active = !period.is_active;
        self.update_period(period)
    }

    /// Runs the eligibility gate for one project type.
    pub fn eligible(&self, project_type: ProjectType, now: DateTime<Utc>) -> PortResult<bool> {
        let votes = self.ledger.load()?;
        let period = self.current_period(now)?;
        Ok(eligibility::eligible(&votes, &period, project_type, now))
    }

    /// The combinations already voted during the active period.
    pub fn voted_combinations(&self, now: DateTime<Utc>) -> PortResult<Vec<VotedCombination>> {
        let votes = self.ledger.load()?;
        let period = self.current_period(now)?;
        Ok(eligibility::voted_combinations(&votes, &period))
    }

    /// Validates, mints and appends one vote. Does not run the eligibility
    /// gate; callers check that first.
    pub fn submit(&self, submission: VoteSubmission, now: DateTime<Utc>) -> Result<Vote, SubmitError> {
        submission.validate()?;
        let vote = submission.mint(now);
        self.ledger.append(vote.clone())?;
        Ok(vote)
    }

    /// A point-in-time copy of the ledger.
    pub fn snapshot(&self) -> PortResult<Vec<Vote>> {
        self.ledger.load()
    }

    // --- Aggregation views over the current snapshot ---

    pub fn genre_totals(&self) -> PortResult<Vec<(Genre, u64)>> {
        Ok(stats::totals_by_genre(&self.snapshot()?))
    }

    pub fn genre_counts_by_industry(&self, industry: FilmIndustry) -> PortResult<Vec<(Genre, u64)>> {
        Ok(stats::counts_by_industry(&self.snapshot()?, industry))
    }

    pub fn genre_counts_by_project_type(
        &self,
        project_type: ProjectType,
    ) -> PortResult<Vec<(Genre, u64)>> {
        Ok(stats::counts_by_project_type(&self.snapshot()?, project_type))
    }

    pub fn genre_counts_by_country(&self, country: Country) -> PortResult<Vec<(Genre, u64)>> {
        Ok(stats::counts_by_country(&self.snapshot()?, country))
    }

    pub fn genre_counts_by_ott_platform(
        &self,
        platform: OttPlatform,
    ) -> PortResult<Vec<(Genre, u64)>> {
        Ok(stats::counts_by_ott_platform(&self.snapshot()?, platform))
    }

    pub fn content_type_counts_by_channel(
        &self,
        channel: &str,
    ) -> PortResult<Vec<(TelevisionContentType, u64)>> {
        Ok(stats::counts_by_television_channel(&self.snapshot()?, channel))
    }

    pub fn category_counts_by_youtube_section(
        &self,
        section: &str,
    ) -> PortResult<Vec<(YouTubeContentCategory, u64)>> {
        Ok(stats::counts_by_youtube_section(&self.snapshot()?, section))
    }

    pub fn notes_by_sections(&self, project_types: &[ProjectType]) -> PortResult<Vec<NoteEntry>> {
        Ok(stats::notes_by_sections(&self.snapshot()?, project_types))
    }
}
