//! crates/moviepulse_core/src/stats.rs
//!
//! Counts-by-dimension over a ledger snapshot. Every view is the same
//! filter → group → count shape, so there is exactly one engine,
//! parameterised by a filter predicate, a target label set and a key
//! extractor. Each result carries one entry per label of the target set,
//! in the set's declared order; chart and table consumers rely on that
//! total ordering.

use crate::catalog::{youtube_section, OTT_GENRES};
use crate::domain::{
    Country, FilmIndustry, Genre, NoteEntry, OttPlatform, ProjectType, TelevisionContentType,
    Vote, YouTubeContentCategory,
};

/// The generic engine. Pure function of the snapshot: identical inputs
/// yield identical tables. Zero-count labels are included.
pub fn counts_by<T, F, K>(votes: &[Vote], labels: &[T], filter: F, key: K) -> Vec<(T, u64)>
where
    T: Copy + PartialEq,
    F: Fn(&Vote) -> bool,
    K: Fn(&Vote) -> Option<T>,
{
    let scoped: Vec<&Vote> = votes.iter().filter(|vote| filter(vote)).collect();
    labels
        .iter()
        .map(|&label| {
            let count = scoped.iter().filter(|vote| key(vote) == Some(label)).count() as u64;
            (label, count)
        })
        .collect()
}

/// A display percentage. An empty total reads as 0%, never a division error.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

//=========================================================================================
// Specific Views (partial applications of the engine)
//=========================================================================================

/// Genre table for one film industry.
pub fn counts_by_industry(votes: &[Vote], industry: FilmIndustry) -> Vec<(Genre, u64)> {
    counts_by(
        votes,
        &Genre::ALL,
        |vote| vote.film_industry == Some(industry),
        |vote| vote.genre,
    )
}

/// Genre table for one project type.
pub fn counts_by_project_type(votes: &[Vote], project_type: ProjectType) -> Vec<(Genre, u64)> {
    counts_by(
        votes,
        &Genre::ALL,
        |vote| vote.project_type == project_type,
        |vote| vote.genre,
    )
}

/// Genre table for one country.
pub fn counts_by_country(votes: &[Vote], country: Country) -> Vec<(Genre, u64)> {
    counts_by(
        votes,
        &Genre::ALL,
        |vote| vote.country == country,
        |vote| vote.genre,
    )
}

/// Genre table across the whole ledger.
pub fn totals_by_genre(votes: &[Vote]) -> Vec<(Genre, u64)> {
    counts_by(votes, &Genre::ALL, |_| true, |vote| vote.genre)
}

/// Genre table for one OTT platform, scoped to OTT votes and the OTT
/// genre subset.
pub fn counts_by_ott_platform(votes: &[Vote], platform: OttPlatform) -> Vec<(Genre, u64)> {
    counts_by(
        votes,
        &OTT_GENRES,
        |vote| {
            vote.project_type == ProjectType::OttPlatform && vote.ott_platform == Some(platform)
        },
        |vote| vote.genre,
    )
}

/// Content-type table for one television channel, scoped to television votes.
pub fn counts_by_television_channel(
    votes: &[Vote],
    channel: &str,
) -> Vec<(TelevisionContentType, u64)> {
    counts_by(
        votes,
        &TelevisionContentType::ALL,
        |vote| {
            vote.project_type == ProjectType::Television
                && vote.television_channel.as_deref() == Some(channel)
        },
        |vote| vote.television_content_type,
    )
}

/// Category table for one named YouTube section, scoped to YouTube content
/// votes. An unknown section yields an empty table.
pub fn counts_by_youtube_section(
    votes: &[Vote],
    section: &str,
) -> Vec<(YouTubeContentCategory, u64)> {
    counts_by(
        votes,
        youtube_section(section),
        |vote| vote.project_type == ProjectType::YouTubeContent,
        |vote| vote.youtube_content_category,
    )
}

/// How many television votes picked one content type.
pub fn count_by_television_content_type(votes: &[Vote], content_type: TelevisionContentType) -> u64 {
    votes
        .iter()
        .filter(|vote| {
            vote.project_type == ProjectType::Television
                && vote.television_content_type == Some(content_type)
        })
        .count() as u64
}

/// How many YouTube content votes picked one category.
pub fn count_by_youtube_category(votes: &[Vote], category: YouTubeContentCategory) -> u64 {
    votes
        .iter()
        .filter(|vote| {
            vote.project_type == ProjectType::YouTubeContent
                && vote.youtube_content_category == Some(category)
        })
        .count() as u64
}

/// Non-empty notes from votes in the given project types, newest first.
pub fn notes_by_sections(votes: &[Vote], project_types: &[ProjectType]) -> Vec<NoteEntry> {
    let mut entries: Vec<NoteEntry> = votes
        .iter()
        .filter(|vote| project_types.contains(&vote.project_type))
        .filter_map(|vote| {
            let notes = vote.notes.as_deref()?.trim();
            if notes.is_empty() {
                return None;
            }
            Some(NoteEntry {
                notes: notes.to_owned(),
                timestamp: vote.timestamp,
            })
        })
        .collect();
    entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    entries
}
