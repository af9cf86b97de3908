//! crates/moviepulse_core/src/catalog.rs
//!
//! Fixed catalogs backing the vote form: per-country television channels,
//! the YouTube section groupings, and the genre subsets offered for OTT and
//! YouTube-film votes. Validation and the by-section aggregations read these;
//! nothing here changes at runtime.

use crate::domain::{Country, Genre, YouTubeContentCategory};

/// Genres offered for YouTube film votes.
pub const YOUTUBE_GENRES: [Genre; 8] = [
    Genre::Comedy,
    Genre::Documentary,
    Genre::Educational,
    Genre::Animation,
    Genre::Action,
    Genre::Drama,
    Genre::Thriller,
    Genre::Mystery,
];

/// Genres offered for OTT platform votes. Also the label set of the
/// platform→genre aggregation.
pub const OTT_GENRES: [Genre; 12] = [
    Genre::Action,
    Genre::Drama,
    Genre::Comedy,
    Genre::Thriller,
    Genre::Horror,
    Genre::SciFi,
    Genre::Fantasy,
    Genre::Romance,
    Genre::Documentary,
    Genre::Crime,
    Genre::Mystery,
    Genre::Biography,
];

/// The named YouTube sections, each with its categories in dashboard order.
pub const YOUTUBE_SECTIONS: [(&str, &[YouTubeContentCategory]); 16] = [
    (
        "Gaming",
        &[
            YouTubeContentCategory::GamingLetsPlays,
            YouTubeContentCategory::GameReviews,
            YouTubeContentCategory::GameWalkthroughs,
            YouTubeContentCategory::GameModding,
            YouTubeContentCategory::Esports,
            YouTubeContentCategory::Speedruns,
            YouTubeContentCategory::GamingNews,
        ],
    ),
    (
        "Educational",
        &[
            YouTubeContentCategory::FactsAndTrivia,
            YouTubeContentCategory::HistoryDocumentaries,
            YouTubeContentCategory::ScienceExperiments,
            YouTubeContentCategory::TechInnovations,
            YouTubeContentCategory::LanguageLearning,
            YouTubeContentCategory::Tutorials,
        ],
    ),
    (
        "Trending",
        &[
            YouTubeContentCategory::CurrentEvents,
            YouTubeContentCategory::ViralChallenges,
            YouTubeContentCategory::SocialMediaTrends,
            YouTubeContentCategory::CelebrityGossip,
        ],
    ),
    (
        "Lifestyle",
        &[
            YouTubeContentCategory::DayInLifeVlogs,
            YouTubeContentCategory::TravelVlogs,
            YouTubeContentCategory::HealthFitnessTips,
            YouTubeContentCategory::LifeHacks,
            YouTubeContentCategory::MinimalismOrganization,
        ],
    ),
    (
        "Entertainment",
        &[
            YouTubeContentCategory::ReactionVideos,
            YouTubeContentCategory::ComedySkits,
            YouTubeContentCategory::PranksExperiments,
            YouTubeContentCategory::Challenges,
            YouTubeContentCategory::UnboxingsReviews,
            YouTubeContentCategory::Asmr,
        ],
    ),
    (
        "Creative",
        &[
            YouTubeContentCategory::MusicVideos,
            YouTubeContentCategory::ArtTutorials,
            YouTubeContentCategory::DiyProjects,
            YouTubeContentCategory::Animation,
            YouTubeContentCategory::Photography,
        ],
    ),
    (
        "Tech",
        &[
            YouTubeContentCategory::TechReviews,
            YouTubeContentCategory::GadgetInnovations,
            YouTubeContentCategory::PhonePcReviews,
            YouTubeContentCategory::SoftwareAppTutorials,
        ],
    ),
    (
        "Food",
        &[
            YouTubeContentCategory::RecipeTutorials,
            YouTubeContentCategory::FoodReviews,
            YouTubeContentCategory::CookingChallenges,
            YouTubeContentCategory::StreetFoodTours,
        ],
    ),
    (
        "Fitness",
        &[
            YouTubeContentCategory::WorkoutRoutines,
            YouTubeContentCategory::NutritionAdvice,
            YouTubeContentCategory::MentalHealthTips,
            YouTubeContentCategory::WeightLossJourneys,
            YouTubeContentCategory::YogaMeditation,
        ],
    ),
    (
        "Movies & TV",
        &[
            YouTubeContentCategory::MovieReviews,
            YouTubeContentCategory::TvShowReviews,
            YouTubeContentCategory::FanTheories,
            YouTubeContentCategory::BehindTheScenes,
            YouTubeContentCategory::TopLists,
        ],
    ),
    (
        "Finance",
        &[
            YouTubeContentCategory::PersonalFinance,
            YouTubeContentCategory::InvestmentStrategies,
            YouTubeContentCategory::CareerAdvice,
            YouTubeContentCategory::Entrepreneurship,
        ],
    ),
    (
        "Motivational",
        &[
            YouTubeContentCategory::SuccessStories,
            YouTubeContentCategory::MotivationalSpeeches,
            YouTubeContentCategory::PersonalDevelopment,
        ],
    ),
    (
        "Future Tech",
        &[
            YouTubeContentCategory::AiRobotics,
            YouTubeContentCategory::SpaceExploration,
            YouTubeContentCategory::VirtualReality,
            YouTubeContentCategory::FuturisticInnovations,
        ],
    ),
    (
        "Pets & Animals",
        &[
            YouTubeContentCategory::CuteAnimalVideos,
            YouTubeContentCategory::PetCareTips,
            YouTubeContentCategory::WildlifeDocumentaries,
            YouTubeContentCategory::AnimalRescues,
        ],
    ),
    (
        "Hobbies",
        &[
            YouTubeContentCategory::Collecting,
            YouTubeContentCategory::BoardGames,
            YouTubeContentCategory::ModelBuilding,
            YouTubeContentCategory::FanCommunities,
        ],
    ),
    (
        "Commentary",
        &[
            YouTubeContentCategory::PoliticalDiscussions,
            YouTubeContentCategory::DebatesAnalysis,
            YouTubeContentCategory::SocialJustice,
            YouTubeContentCategory::CulturalCriticism,
        ],
    ),
];

/// Looks up one section's category list by its dashboard name. An unknown
/// section yields an empty slice, not an error.
pub fn youtube_section(name: &str) -> &'static [YouTubeContentCategory] {
    YOUTUBE_SECTIONS
        .iter()
        .find(|(section, _)| *section == name)
        .map(|(_, categories)| *categories)
        .unwrap_or(&[])
}

/// The television channels offered for a given country. Channels are a
/// filter dimension only, so they stay catalog-validated strings rather
/// than one enum spanning every national broadcaster.
pub fn television_channels(country: Country) -> &'static [&'static str] {
    match country {
        Country::Usa => &[
            "ABC", "CBS", "NBC", "FOX", "CW", "PBS", "HBO", "Showtime", "Starz", "AMC", "FX",
            "USA", "TNT", "TBS", "History", "Discovery", "NatGeo", "ESPN", "CNN", "MSNBC",
            "Fox News", "Cartoon Network", "Adult Swim", "Nickelodeon", "Disney Channel", "MTV",
            "VH1", "Bravo", "Lifetime", "Syfy", "Other",
        ],
        Country::India => &[
            "StarPlus", "ZeeTV", "SonyTV", "ColorsTV", "StarBharat", "SonyMax", "ZeeCinema",
            "StarGold", "DDNational", "AndTV", "Star Sports", "Sony Sports", "Zee News", "NDTV",
            "Republic TV", "Aaj Tak", "India TV", "ABP News", "TV9", "ETV", "Sun TV", "Vijay TV",
            "Asianet", "Maa TV", "Gemini TV", "Other",
        ],
        Country::Uk => &[
            "BBC", "ITV", "Channel4", "Channel5", "Sky", "UKTV", "Dave", "E4", "BBC News",
            "Sky News", "Sky Sports", "BT Sport", "Discovery UK", "History UK", "Gold",
            "Comedy Central UK", "Channel 4 News", "More4", "Film4", "Other",
        ],
        Country::Canada => &[
            "CBC", "CTV", "Global", "Citytv", "TVO", "YTV", "HBO", "Discovery", "TSN",
            "Sportsnet", "CBC News", "CTV News", "Global News", "TVA", "MuchMusic",
            "Treehouse TV", "W Network", "Showcase", "Food Network Canada", "Other",
        ],
        Country::Australia => &[
            "ABC", "Seven", "Nine", "Ten", "SBS", "Foxtel", "Fox Sports", "ABC News",
            "Seven News", "9News", "Network 10", "Sky News Australia", "Nickelodeon Australia",
            "Disney Channel Australia", "Other",
        ],
        Country::Japan => &[
            "NHK", "Fuji", "TBS", "TV Asahi", "TV Tokyo", "Nippon TV", "Tokyo MX", "BS Asahi",
            "BS-TBS", "BS Fuji", "AT-X", "WOWOW", "J Sports", "Animax", "NHK BS Premium",
            "Other",
        ],
        Country::SouthKorea => &[
            "KBS", "MBC", "SBS", "TVN", "JTBC", "OCN", "EBS", "MBN", "Channel A", "TV Chosun",
            "MNet", "KBS News", "YTN", "SBS Sports", "KBS Drama", "Other",
        ],
        Country::France => &["TF1", "France 2", "France 3", "M6", "Canal+", "Arte", "Other"],
        Country::Germany => &["ARD", "ZDF", "RTL", "Sat.1", "ProSieben", "VOX", "Other"],
        Country::Italy => &[
            "Rai", "Rai 1", "Rai 2", "Rai 3", "Canale 5", "Italia 1", "Rete 4", "Other",
        ],
        Country::Spain => &["TVE", "Antena 3", "Telecinco", "La Sexta", "Cuatro", "Other"],
        Country::Brazil => &["Globo", "SBT", "Record", "Band", "RedeTV", "Other"],
        Country::Mexico => &[
            "Televisa", "TV Azteca", "Imagen Televisión", "Canal Once", "Other",
        ],
        Country::Nigeria => &[
            "NTA", "Channels TV", "AIT", "Silverbird TV", "WAP TV", "Other",
        ],
        Country::China => &[
            "CCTV", "Hunan TV", "Jiangsu TV", "Dragon TV", "Phoenix TV", "Other",
        ],
        Country::Russia => &["Channel One", "Russia-1", "NTV", "TNT", "CTC", "Other"],
        Country::SaudiArabia => &["Saudi TV", "MBC", "Rotana", "Al Arabiya", "Other"],
        Country::Uae => &["Dubai TV", "Abu Dhabi TV", "MBC", "Sama Dubai", "Other"],
        Country::Singapore => &[
            "MediaCorp Channel 5", "MediaCorp Channel 8", "CNA", "Suria", "Other",
        ],
        Country::Other => &["Other"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_section_is_empty() {
        assert!(youtube_section("Podcasts").is_empty());
        assert_eq!(youtube_section("Gaming").len(), 7);
    }

    #[test]
    fn every_country_offers_other() {
        for country in Country::ALL {
            assert!(television_channels(country).contains(&"Other"));
        }
    }

    #[test]
    fn sections_cover_seventy_categories() {
        let total: usize = YOUTUBE_SECTIONS.iter().map(|(_, c)| c.len()).sum();
        assert_eq!(total, 70);
    }
}
