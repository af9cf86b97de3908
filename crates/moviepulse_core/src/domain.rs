//! crates/moviepulse_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any database or storage format. The serde
//! spellings (camelCase fields, label strings such as "Sci-Fi" and
//! "OTTPlatform") are the wire format existing ledgers and dashboard
//! consumers already hold, so they must not drift.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Closed Label Sets
//=========================================================================================
//
// Every enum that can be the *target* of an aggregation exposes an `ALL`
// constant. The declared order of `ALL` is contractual: counts-by-dimension
// results contain exactly one entry per label, in this order.

/// The country a vote was cast from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    India,
    #[serde(rename = "UK")]
    Uk,
    Canada,
    Australia,
    Japan,
    #[serde(rename = "South Korea")]
    SouthKorea,
    France,
    Germany,
    Italy,
    Spain,
    Brazil,
    Mexico,
    Nigeria,
    China,
    Russia,
    #[serde(rename = "Saudi Arabia")]
    SaudiArabia,
    #[serde(rename = "UAE")]
    Uae,
    Singapore,
    Other,
}

impl Country {
    pub const ALL: [Self; 20] = [
        Self::Usa,
        Self::India,
        Self::Uk,
        Self::Canada,
        Self::Australia,
        Self::Japan,
        Self::SouthKorea,
        Self::France,
        Self::Germany,
        Self::Italy,
        Self::Spain,
        Self::Brazil,
        Self::Mexico,
        Self::Nigeria,
        Self::China,
        Self::Russia,
        Self::SaudiArabia,
        Self::Uae,
        Self::Singapore,
        Self::Other,
    ];
}

/// A regional film industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilmIndustry {
    Hollywood,
    Bollywood,
    Tollywood,
    Nollywood,
    Korean,
    European,
    Japanese,
    Chinese,
    Thai,
    Turkish,
    French,
    Italian,
    Regional,
}

impl FilmIndustry {
    pub const ALL: [Self; 13] = [
        Self::Hollywood,
        Self::Bollywood,
        Self::Tollywood,
        Self::Nollywood,
        Self::Korean,
        Self::European,
        Self::Japanese,
        Self::Chinese,
        Self::Thai,
        Self::Turkish,
        Self::French,
        Self::Italian,
        Self::Regional,
    ];
}

/// A content genre. This is the most common aggregation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Action,
    Drama,
    Comedy,
    Romance,
    Thriller,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Fantasy,
    Animation,
    Documentary,
    Mystery,
    Adventure,
    Crime,
    Biography,
    Historical,
    Musical,
    Educational,
}

impl Genre {
    pub const ALL: [Self; 17] = [
        Self::Action,
        Self::Drama,
        Self::Comedy,
        Self::Romance,
        Self::Thriller,
        Self::Horror,
        Self::SciFi,
        Self::Fantasy,
        Self::Animation,
        Self::Documentary,
        Self::Mystery,
        Self::Adventure,
        Self::Crime,
        Self::Biography,
        Self::Historical,
        Self::Musical,
        Self::Educational,
    ];
}

/// The top-level content category a vote belongs to. Eligibility is tracked
/// per project type per voting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    HighBudgetFilm,
    LowBudgetFilm,
    ShortFilm,
    YouTubeFilm,
    YouTubeContent,
    #[serde(rename = "OTTPlatform")]
    OttPlatform,
    Television,
}

impl ProjectType {
    pub const ALL: [Self; 7] = [
        Self::HighBudgetFilm,
        Self::LowBudgetFilm,
        Self::ShortFilm,
        Self::YouTubeFilm,
        Self::YouTubeContent,
        Self::OttPlatform,
        Self::Television,
    ];

    /// The three film budget tiers and YouTube films all collect an
    /// industry + genre pair.
    pub fn requires_industry_and_genre(self) -> bool {
        matches!(
            self,
            Self::HighBudgetFilm | Self::LowBudgetFilm | Self::ShortFilm | Self::YouTubeFilm
        )
    }
}

/// An over-the-top streaming platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OttPlatform {
    Netflix,
    AmazonPrime,
    #[serde(rename = "Disney+")]
    DisneyPlus,
    #[serde(rename = "HBOMax")]
    HboMax,
    Hulu,
    #[serde(rename = "AppleTV+")]
    AppleTvPlus,
    JioCinema,
    Hotstar,
    Aha,
    #[serde(rename = "SonyLIV")]
    SonyLiv,
    #[serde(rename = "ZEE5")]
    Zee5,
    Peacock,
    #[serde(rename = "Paramount+")]
    ParamountPlus,
    #[serde(rename = "Discovery+")]
    DiscoveryPlus,
    CrunchyRoll,
    #[serde(rename = "MXPlayer")]
    MxPlayer,
    #[serde(rename = "ALTBalaji")]
    AltBalaji,
    ErosNow,
    Voot,
    Tubi,
    #[serde(rename = "Roku Channel")]
    RokuChannel,
    #[serde(rename = "Pluto TV")]
    PlutoTv,
    Crackle,
    #[serde(rename = "MUBI")]
    Mubi,
    Shudder,
    BritBox,
    #[serde(rename = "Acorn TV")]
    AcornTv,
    Funimation,
    #[serde(rename = "DAZN")]
    Dazn,
    Twitch,
    Hayu,
    #[serde(rename = "iQIYI")]
    Iqiyi,
    #[serde(rename = "WeTV")]
    WeTv,
    Viki,
    #[serde(rename = "Sun NXT")]
    SunNxt,
    #[serde(rename = "YuppTV")]
    YuppTv,
    ThreeNow,
    Stan,
    #[serde(rename = "BINGE")]
    Binge,
    Crave,
    Other,
}

impl OttPlatform {
    pub const ALL: [Self; 41] = [
        Self::Netflix,
        Self::AmazonPrime,
        Self::DisneyPlus,
        Self::HboMax,
        Self::Hulu,
        Self::AppleTvPlus,
        Self::JioCinema,
        Self::Hotstar,
        Self::Aha,
        Self::SonyLiv,
        Self::Zee5,
        Self::Peacock,
        Self::ParamountPlus,
        Self::DiscoveryPlus,
        Self::CrunchyRoll,
        Self::MxPlayer,
        Self::AltBalaji,
        Self::ErosNow,
        Self::Voot,
        Self::Tubi,
        Self::RokuChannel,
        Self::PlutoTv,
        Self::Crackle,
        Self::Mubi,
        Self::Shudder,
        Self::BritBox,
        Self::AcornTv,
        Self::Funimation,
        Self::Dazn,
        Self::Twitch,
        Self::Hayu,
        Self::Iqiyi,
        Self::WeTv,
        Self::Viki,
        Self::SunNxt,
        Self::YuppTv,
        Self::ThreeNow,
        Self::Stan,
        Self::Binge,
        Self::Crave,
        Self::Other,
    ];
}

/// What kind of programme a television vote is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TelevisionContentType {
    News,
    Reality,
    TalkShow,
    GameShow,
    SoapOpera,
    SitCom,
    SeriesShow,
    CrimeShow,
    CulturalShow,
    KidsShow,
    Documentary,
    SportsShow,
    CookingShow,
    LifestyleShow,
    Politics,
    MusicalShow,
    RegionalDrama,
    AnimatedShow,
    SciFiShow,
    HistoricalShow,
    Fantasy,
    Comedy,
    Drama,
    Other,
}

impl TelevisionContentType {
    pub const ALL: [Self; 24] = [
        Self::News,
        Self::Reality,
        Self::TalkShow,
        Self::GameShow,
        Self::SoapOpera,
        Self::SitCom,
        Self::SeriesShow,
        Self::CrimeShow,
        Self::CulturalShow,
        Self::KidsShow,
        Self::Documentary,
        Self::SportsShow,
        Self::CookingShow,
        Self::LifestyleShow,
        Self::Politics,
        Self::MusicalShow,
        Self::RegionalDrama,
        Self::AnimatedShow,
        Self::SciFiShow,
        Self::HistoricalShow,
        Self::Fantasy,
        Self::Comedy,
        Self::Drama,
        Self::Other,
    ];
}

/// A YouTube content niche. The catalog module groups these into the named
/// sections shown on the stats dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YouTubeContentCategory {
    // Gaming
    GamingLetsPlays,
    GameReviews,
    GameWalkthroughs,
    GameModding,
    Esports,
    Speedruns,
    GamingNews,
    // Educational
    FactsAndTrivia,
    HistoryDocumentaries,
    ScienceExperiments,
    TechInnovations,
    LanguageLearning,
    Tutorials,
    // Trending
    CurrentEvents,
    ViralChallenges,
    SocialMediaTrends,
    CelebrityGossip,
    // Lifestyle
    DayInLifeVlogs,
    TravelVlogs,
    HealthFitnessTips,
    LifeHacks,
    MinimalismOrganization,
    // Entertainment
    ReactionVideos,
    ComedySkits,
    PranksExperiments,
    Challenges,
    UnboxingsReviews,
    #[serde(rename = "ASMR")]
    Asmr,
    // Creative
    MusicVideos,
    ArtTutorials,
    #[serde(rename = "DIYProjects")]
    DiyProjects,
    Animation,
    Photography,
    // Tech
    TechReviews,
    GadgetInnovations,
    #[serde(rename = "PhonePCReviews")]
    PhonePcReviews,
    SoftwareAppTutorials,
    // Food
    RecipeTutorials,
    FoodReviews,
    CookingChallenges,
    StreetFoodTours,
    // Fitness
    WorkoutRoutines,
    NutritionAdvice,
    MentalHealthTips,
    WeightLossJourneys,
    YogaMeditation,
    // Movies & TV
    MovieReviews,
    #[serde(rename = "TVShowReviews")]
    TvShowReviews,
    FanTheories,
    BehindTheScenes,
    TopLists,
    // Finance
    PersonalFinance,
    InvestmentStrategies,
    CareerAdvice,
    Entrepreneurship,
    // Motivational
    SuccessStories,
    MotivationalSpeeches,
    PersonalDevelopment,
    // Future Tech
    #[serde(rename = "AIRobotics")]
    AiRobotics,
    SpaceExploration,
    VirtualReality,
    FuturisticInnovations,
    // Pets & Animals
    CuteAnimalVideos,
    PetCareTips,
    WildlifeDocumentaries,
    AnimalRescues,
    // Hobbies
    Collecting,
    BoardGames,
    ModelBuilding,
    FanCommunities,
    // Commentary
    PoliticalDiscussions,
    DebatesAnalysis,
    SocialJustice,
    CulturalCriticism,
}

/// The survey category an opinion belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpinionCategory {
    Film,
    Television,
    YouTube,
    Streaming,
}

impl OpinionCategory {
    pub const ALL: [Self; 4] = [Self::Film, Self::Television, Self::YouTube, Self::Streaming];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Film => "film",
            Self::Television => "television",
            Self::YouTube => "youtube",
            Self::Streaming => "streaming",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "film" => Some(Self::Film),
            "television" => Some(Self::Television),
            "youtube" => Some(Self::YouTube),
            "streaming" => Some(Self::Streaming),
            _ => None,
        }
    }
}

/// The coarse sentiment label derived from an opinion's answer text at write
/// time. Never recomputed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Self; 3] = [Self::Positive, Self::Neutral, Self::Negative];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

/// A relative time window used to filter opinion listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    Day,
    Week,
    Month,
    Year,
}

impl Timeframe {
    /// The inclusive lower bound implied by this window, relative to `now`.
    /// Month and year are calendar arithmetic, not fixed day counts.
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Day => now - chrono::Duration::days(1),
            Self::Week => now - chrono::Duration::days(7),
            Self::Month => now.checked_sub_months(chrono::Months::new(1)).unwrap_or(now),
            Self::Year => now.checked_sub_months(chrono::Months::new(12)).unwrap_or(now),
        }
    }

    /// An unrecognised query value leaves the filter unset rather than
    /// producing an error.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "day" => Some(Self::Day),
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "year" => Some(Self::Year),
            _ => None,
        }
    }
}

//=========================================================================================
// Records
//=========================================================================================

/// One entry in the append-only vote ledger.
///
/// Exactly one of the project-type-specific field groups is populated:
/// industry + genre for the film tiers and YouTube films, platform + genre
/// for OTT, the content category for YouTube content, and channel + content
/// type for television. Submission enforces this; votes are never mutated
/// after they are appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub id: Uuid,
    pub country: Country,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub film_industry: Option<FilmIndustry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    pub project_type: ProjectType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ott_platform: Option<OttPlatform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_content_category: Option<YouTubeContentCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub television_channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub television_content_type: Option<TelevisionContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// The single active/inactive window gating new votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingPeriod {
    pub is_active: bool,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Optional demographic context attached to an opinion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Demographics {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// A free-text survey response stored server-side, distinct from a
/// structured vote. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opinion {
    pub id: Uuid,
    pub category: OpinionCategory,
    pub question: String,
    pub answer: String,
    pub user_id: String,
    #[serde(default)]
    pub demographics: Demographics,
    pub sentiment: Sentiment,
    pub impact: i32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

//=========================================================================================
// Derived / Aggregate Shapes
//=========================================================================================

/// A grouped count row, serialised with the `_id` bucket key the analytics
/// consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketCount<T> {
    #[serde(rename = "_id")]
    pub id: T,
    pub count: u64,
}

/// A calendar-day bucket key. Month and day are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DayKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// A calendar-day bucket key scoped to one opinion category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDayKey {
    pub category: OpinionCategory,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// The full analytics roll-up served by `/api/opinions/analytics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsReport {
    pub total_opinions: u64,
    pub category_breakdown: Vec<BucketCount<OpinionCategory>>,
    pub sentiment_analysis: Vec<BucketCount<Sentiment>>,
    pub regional_distribution: Vec<BucketCount<String>>,
    pub time_data: Vec<BucketCount<DayKey>>,
    pub category_trends: Vec<BucketCount<CategoryDayKey>>,
}

/// A note left alongside a vote, with the vote's timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEntry {
    pub notes: String,
    pub timestamp: DateTime<Utc>,
}

/// The (country, industry, genre, projectType) shape of an in-period vote,
/// used by callers that grey out already-voted combinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VotedCombination {
    pub country: Country,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub film_industry: Option<FilmIndustry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
    pub project_type: ProjectType,
}
