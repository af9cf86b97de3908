//! crates/moviepulse_core/src/submission.rs
//!
//! Vote submission: validate caller input, then mint an immutable ledger
//! entry with a fresh id and timestamp. Validation never consults the
//! eligibility gate; callers are expected to run the gate first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::{television_channels, OTT_GENRES, YOUTUBE_GENRES};
use crate::domain::{
    Country, FilmIndustry, Genre, OttPlatform, ProjectType, TelevisionContentType, Vote,
    YouTubeContentCategory,
};

/// Free-text notes are capped at this many characters.
pub const MAX_NOTES_LEN: usize = 500;

/// Caller input for one vote: everything except the id and timestamp,
/// which are minted at write time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteSubmission {
    pub country: Country,
    pub project_type: ProjectType,
    #[serde(default)]
    pub film_industry: Option<FilmIndustry>,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub ott_platform: Option<OttPlatform>,
    #[serde(default)]
    pub youtube_content_category: Option<YouTubeContentCategory>,
    #[serde(default)]
    pub television_channel: Option<String>,
    #[serde(default)]
    pub television_content_type: Option<TelevisionContentType>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Why a submission was rejected. Reported before any write occurs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("film industry and genre are required for this category")]
    MissingIndustryOrGenre,
    #[error("OTT platform and genre are required for OTT content votes")]
    MissingPlatformOrGenre,
    #[error("content category is required for YouTube content votes")]
    MissingYouTubeCategory,
    #[error("television channel and content type are required for television votes")]
    MissingChannelOrContentType,
    #[error("genre '{0}' is not offered for this category")]
    GenreNotOffered(&'static str),
    #[error("channel '{0}' is not offered in the selected country")]
    UnknownChannel(String),
    #[error("notes exceed {MAX_NOTES_LEN} characters")]
    NotesTooLong,
}

impl VoteSubmission {
    /// Checks the project-type-specific required fields and the notes bound.
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.project_type {
            ProjectType::HighBudgetFilm
            | ProjectType::LowBudgetFilm
            | ProjectType::ShortFilm
            | ProjectType::YouTubeFilm => {
                let genre = match (self.film_industry, self.genre) {
                    (Some(_), Some(genre)) => genre,
                    _ => return Err(ValidationError::MissingIndustryOrGenre),
                };
                if self.project_type == ProjectType::YouTubeFilm && !YOUTUBE_GENRES.contains(&genre)
                {
                    return Err(ValidationError::GenreNotOffered("YouTube film"));
                }
            }
            ProjectType::OttPlatform => match (self.ott_platform, self.genre) {
                (Some(_), Some(genre)) => {
                    if !OTT_GENRES.contains(&genre) {
                        return Err(ValidationError::GenreNotOffered("OTT"));
                    }
                }
                _ => return Err(ValidationError::MissingPlatformOrGenre),
            },
            ProjectType::YouTubeContent => {
                if self.youtube_content_category.is_none() {
                    return Err(ValidationError::MissingYouTubeCategory);
                }
            }
            ProjectType::Television => {
                let channel = match (&self.television_channel, self.television_content_type) {
                    (Some(channel), Some(_)) => channel,
                    _ => return Err(ValidationError::MissingChannelOrContentType),
                };
                if !television_channels(self.country).contains(&channel.as_str()) {
                    return Err(ValidationError::UnknownChannel(channel.clone()));
                }
            }
        }

        if let Some(notes) = &self.notes {
            if notes.chars().count() > MAX_NOTES_LEN {
                return Err(ValidationError::NotesTooLong);
            }
        }
        Ok(())
    }

    /// Builds the ledger entry. Fields outside the project type's group are
    /// cleared so exactly one group survives; whitespace-only notes drop to
    /// none. Call `validate` first.
    pub fn mint(self, now: DateTime<Utc>) -> Vote {
        let keeps_industry = self.project_type.requires_industry_and_genre();
        let keeps_genre = keeps_industry || self.project_type == ProjectType::OttPlatform;
        let notes = self
            .notes
            .map(|notes| notes.trim().to_owned())
            .filter(|notes| !notes.is_empty());

        Vote {
            id: Uuid::new_v4(),
            country: self.country,
            film_industry: self.film_industry.filter(|_| keeps_industry),
            genre: self.genre.filter(|_| keeps_genre),
            project_type: self.project_type,
            ott_platform: self
                .ott_platform
                .filter(|_| self.project_type == ProjectType::OttPlatform),
            youtube_content_category: self
                .youtube_content_category
                .filter(|_| self.project_type == ProjectType::YouTubeContent),
            television_channel: self
                .television_channel
                .filter(|_| self.project_type == ProjectType::Television),
            television_content_type: self
                .television_content_type
                .filter(|_| self.project_type == ProjectType::Television),
            notes,
            timestamp: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base(project_type: ProjectType) -> VoteSubmission {
        VoteSubmission {
            country: Country::Usa,
            project_type,
            film_industry: None,
            genre: None,
            ott_platform: None,
            youtube_content_category: None,
            television_channel: None,
            television_content_type: None,
            notes: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn film_tiers_require_industry_and_genre() {
        for kind in [
            ProjectType::HighBudgetFilm,
            ProjectType::LowBudgetFilm,
            ProjectType::ShortFilm,
            ProjectType::YouTubeFilm,
        ] {
            let mut submission = base(kind);
            assert_eq!(
                submission.validate(),
                Err(ValidationError::MissingIndustryOrGenre)
            );
            submission.film_industry = Some(FilmIndustry::Bollywood);
            assert_eq!(
                submission.validate(),
                Err(ValidationError::MissingIndustryOrGenre)
            );
            submission.genre = Some(Genre::Drama);
            assert_eq!(submission.validate(), Ok(()));
        }
    }

    #[test]
    fn youtube_film_genre_must_come_from_the_offered_subset() {
        let mut submission = base(ProjectType::YouTubeFilm);
        submission.film_industry = Some(FilmIndustry::Hollywood);
        submission.genre = Some(Genre::Horror);
        assert!(matches!(
            submission.validate(),
            Err(ValidationError::GenreNotOffered(_))
        ));
        submission.genre = Some(Genre::Comedy);
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn ott_requires_platform_and_offered_genre() {
        let mut submission = base(ProjectType::OttPlatform);
        submission.genre = Some(Genre::Drama);
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingPlatformOrGenre)
        );
        submission.ott_platform = Some(OttPlatform::Netflix);
        assert_eq!(submission.validate(), Ok(()));
        submission.genre = Some(Genre::Musical);
        assert!(matches!(
            submission.validate(),
            Err(ValidationError::GenreNotOffered(_))
        ));
    }

    #[test]
    fn television_channel_must_match_the_country_catalog() {
        let mut submission = base(ProjectType::Television);
        submission.television_channel = Some("ABC".to_owned());
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingChannelOrContentType)
        );
        submission.television_content_type = Some(TelevisionContentType::News);
        assert_eq!(submission.validate(), Ok(()));

        submission.television_channel = Some("BBC".to_owned());
        assert_eq!(
            submission.validate(),
            Err(ValidationError::UnknownChannel("BBC".to_owned()))
        );
    }

    #[test]
    fn notes_are_bounded() {
        let mut submission = base(ProjectType::YouTubeContent);
        submission.youtube_content_category = Some(YouTubeContentCategory::Esports);
        submission.notes = Some("x".repeat(MAX_NOTES_LEN));
        assert_eq!(submission.validate(), Ok(()));
        submission.notes = Some("x".repeat(MAX_NOTES_LEN + 1));
        assert_eq!(submission.validate(), Err(ValidationError::NotesTooLong));
    }

    #[test]
    fn mint_clears_fields_outside_the_selected_group() {
        let mut submission = base(ProjectType::Television);
        submission.television_channel = Some("ABC".to_owned());
        submission.television_content_type = Some(TelevisionContentType::News);
        // Stray fields a confused caller might send along.
        submission.film_industry = Some(FilmIndustry::Hollywood);
        submission.genre = Some(Genre::Drama);
        submission.ott_platform = Some(OttPlatform::Hulu);

        let vote = submission.mint(now());
        assert_eq!(vote.project_type, ProjectType::Television);
        assert_eq!(vote.television_channel.as_deref(), Some("ABC"));
        assert_eq!(
            vote.television_content_type,
            Some(TelevisionContentType::News)
        );
        assert!(vote.film_industry.is_none());
        assert!(vote.genre.is_none());
        assert!(vote.ott_platform.is_none());
        assert_eq!(vote.timestamp, now());
    }

    #[test]
    fn mint_preserves_populated_fields_exactly() {
        let mut submission = base(ProjectType::OttPlatform);
        submission.ott_platform = Some(OttPlatform::Mubi);
        submission.genre = Some(Genre::Documentary);
        submission.notes = Some("  slow cinema deserves a category  ".to_owned());

        let vote = submission.mint(now());
        assert_eq!(vote.ott_platform, Some(OttPlatform::Mubi));
        assert_eq!(vote.genre, Some(Genre::Documentary));
        assert_eq!(vote.notes.as_deref(), Some("slow cinema deserves a category"));
    }

    #[test]
    fn whitespace_notes_drop_to_none() {
        let mut submission = base(ProjectType::YouTubeContent);
        submission.youtube_content_category = Some(YouTubeContentCategory::Asmr);
        submission.notes = Some("   ".to_owned());
        let vote = submission.mint(now());
        assert!(vote.notes.is_none());
    }
}
