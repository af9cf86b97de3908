//! crates/moviepulse_core/src/eligibility.rs
//!
//! The eligibility gate: may a vote be cast in a given project-type category
//! during the current voting period? Everything here is a pure read over a
//! ledger snapshot; callers load the ledger through the port and pass it in.

use chrono::{DateTime, Utc};

use crate::domain::{Country, ProjectType, Vote, VotedCombination, VotingPeriod};

/// True when `vote` was cast inside the period window. Votes timestamped
/// exactly at either bound count as within.
fn in_period(vote: &Vote, period: &VotingPeriod) -> bool {
    vote.timestamp >= period.start_date && vote.timestamp <= period.end_date
}

/// Whether a new vote may be cast for `project_type`.
///
/// Ineligible when the period is not open, or when the ledger already holds
/// a vote of the same project type inside the period window. Absence of data
/// means eligible. Eligibility is scoped to the ledger, and each ledger has
/// exactly one owner, so this amounts to one vote per category per period
/// per device.
pub fn eligible(
    ledger: &[Vote],
    period: &VotingPeriod,
    project_type: ProjectType,
    now: DateTime<Utc>,
) -> bool {
    if !period.is_open(now) {
        return false;
    }
    !ledger
        .iter()
        .any(|vote| vote.project_type == project_type && in_period(vote, period))
}

/// Whether an in-period vote already exists for the (country, project type)
/// pair. Returns false when the period is inactive.
pub fn has_voted(
    ledger: &[Vote],
    period: &VotingPeriod,
    country: Country,
    project_type: ProjectType,
) -> bool {
    if !period.is_active {
        return false;
    }
    ledger.iter().any(|vote| {
        vote.country == country && vote.project_type == project_type && in_period(vote, period)
    })
}

/// The combinations already voted during the active period, for callers that
/// grey out taken choices. Empty when the period is inactive.
pub fn voted_combinations(ledger: &[Vote], period: &VotingPeriod) -> Vec<VotedCombination> {
    if !period.is_active {
        return Vec::new();
    }
    ledger
        .iter()
        .filter(|vote| in_period(vote, period))
        .map(|vote| VotedCombination {
            country: vote.country,
            film_industry: vote.film_industry,
            genre: vote.genre,
            project_type: vote.project_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilmIndustry, Genre};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn period(start: DateTime<Utc>, end: DateTime<Utc>) -> VotingPeriod {
        VotingPeriod {
            is_active: true,
            start_date: start,
            end_date: end,
        }
    }

    fn vote_at(project_type: ProjectType, timestamp: DateTime<Utc>) -> Vote {
        Vote {
            id: Uuid::new_v4(),
            country: Country::Usa,
            film_industry: Some(FilmIndustry::Hollywood),
            genre: Some(Genre::Action),
            project_type,
            ott_platform: None,
            youtube_content_category: None,
            television_channel: None,
            television_content_type: None,
            notes: None,
            timestamp,
        }
    }

    fn at(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn empty_ledger_is_eligible_while_open() {
        let p = period(at(1), at(28));
        assert!(eligible(&[], &p, ProjectType::Television, at(10)));
    }

    #[test]
    fn inactive_period_blocks_every_project_type() {
        let p = VotingPeriod {
            is_active: false,
            ..period(at(1), at(28))
        };
        for project_type in ProjectType::ALL {
            assert!(!eligible(&[], &p, project_type, at(10)));
        }
    }

    #[test]
    fn expired_period_blocks_even_an_empty_ledger() {
        let p = period(at(1), at(5));
        assert!(!eligible(&[], &p, ProjectType::Television, at(10)));
    }

    #[test]
    fn one_vote_blocks_its_category_until_the_period_changes() {
        let p = period(at(1), at(28));
        let ledger = vec![vote_at(ProjectType::Television, at(10))];

        assert!(!eligible(&ledger, &p, ProjectType::Television, at(11)));
        assert!(!eligible(&ledger, &p, ProjectType::Television, at(20)));
        // Other categories stay open.
        assert!(eligible(&ledger, &p, ProjectType::OttPlatform, at(11)));

        // A later period no longer sees the old vote.
        let next = period(at(29), Utc.with_ymd_and_hms(2024, 4, 28, 12, 0, 0).unwrap());
        assert!(eligible(
            &ledger,
            &next,
            ProjectType::Television,
            Utc.with_ymd_and_hms(2024, 4, 1, 12, 0, 0).unwrap()
        ));
    }

    #[test]
    fn boundary_timestamps_count_as_within() {
        let p = period(at(1), at(28));
        for boundary in [p.start_date, p.end_date] {
            let ledger = vec![vote_at(ProjectType::ShortFilm, boundary)];
            assert!(!eligible(&ledger, &p, ProjectType::ShortFilm, at(2)));
        }
    }

    #[test]
    fn out_of_period_votes_do_not_block() {
        let p = period(at(10), at(28));
        let ledger = vec![vote_at(ProjectType::ShortFilm, at(2))];
        assert!(eligible(&ledger, &p, ProjectType::ShortFilm, at(15)));
    }

    #[test]
    fn has_voted_is_scoped_by_country() {
        let p = period(at(1), at(28));
        let ledger = vec![vote_at(ProjectType::Television, at(10))];
        assert!(has_voted(&ledger, &p, Country::Usa, ProjectType::Television));
        assert!(!has_voted(&ledger, &p, Country::India, ProjectType::Television));
    }

    #[test]
    fn combinations_exclude_out_of_period_votes() {
        let p = period(at(10), at(28));
        let ledger = vec![
            vote_at(ProjectType::Television, at(2)),
            vote_at(ProjectType::ShortFilm, at(12)),
        ];
        let combos = voted_combinations(&ledger, &p);
        assert_eq!(combos.len(), 1);
        assert_eq!(combos[0].project_type, ProjectType::ShortFilm);
    }
}
