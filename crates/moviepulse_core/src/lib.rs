pub mod analytics;
pub mod catalog;
pub mod domain;
pub mod eligibility;
pub mod memory;
pub mod period;
pub mod ports;
pub mod sentiment;
pub mod service;
pub mod stats;
pub mod submission;

pub use domain::{
    AnalyticsReport, BucketCount, Country, Demographics, FilmIndustry, Genre, NoteEntry, Opinion,
    OpinionCategory, OttPlatform, ProjectType, Sentiment, TelevisionContentType, Timeframe, Vote,
    VotedCombination, VotingPeriod, YouTubeContentCategory,
};
pub use ports::{
    OpinionFilter, OpinionStore, PortError, PortResult, SentimentClassifier, VoteLedger,
    VotingPeriodStore,
};
pub use sentiment::KeywordSentiment;
pub use service::{SubmitError, VotingService};
pub use submission::{ValidationError, VoteSubmission};
