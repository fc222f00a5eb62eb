pub mod cleaner;
pub mod config;
pub mod feed;
pub mod metrics;
pub mod pipeline;
pub mod sentiment;
pub mod service;
pub mod testing;

pub use cleaner::TextCleaner;
pub use config::{
    load_config, load_config_from_str, validate_config, CompoundThresholds, Config, ConfigError,
    DecisionConfig, FeedConfig, SanitizedConfig, ScorerConfig, ScorerStrategy, ServerConfig,
};
pub use feed::{
    DryRunPublisher, FeedError, FeedQuery, FeedSource, HttpFeedClient, JsonFileFeed,
    PublishReceipt, StatusPublisher,
};
pub use pipeline::{
    aggregate, deduplicate_posts, AggregateResult, CleanedPost, DecisionEngine, DecisionOutcome,
    DedupOutcome, Mood, MoodRatios, Pipeline, PipelineError, PipelineReport, Post, RawPost,
};
pub use sentiment::{
    create_scorer, CompoundModel, CompoundScorer, LexiconModel, PolarityModel, PolarityScorer,
    ScoringError, Sentiment, SentimentScorer,
};
pub use service::{MoodService, RunOutcome, ServiceError};
