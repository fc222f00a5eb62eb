use serde::{Deserialize, Serialize};

use crate::sentiment::{ScoringError, Sentiment, SentimentScorer};

/// A post as delivered by a feed source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPost {
    pub text: String,
    /// How many times other accounts reshared this post.
    #[serde(default, alias = "retweet_count")]
    pub reshare_count: u32,
}

impl RawPost {
    pub fn new(text: impl Into<String>, reshare_count: u32) -> Self {
        Self {
            text: text.into(),
            reshare_count,
        }
    }
}

/// A post whose text has been cleaned but not yet scored.
///
/// Only `TextCleaner::clean_post` produces these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedPost {
    pub raw_text: String,
    pub cleaned_text: String,
    pub reshare_count: u32,
}

impl CleanedPost {
    /// Assign the sentiment, consuming the cleaned post.
    pub fn score(self, scorer: &dyn SentimentScorer) -> Result<Post, ScoringError> {
        let sentiment = scorer.score(&self.cleaned_text)?;
        Ok(Post {
            raw_text: self.raw_text,
            cleaned_text: self.cleaned_text,
            sentiment,
            reshare_count: self.reshare_count,
        })
    }
}

/// A cleaned and scored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub raw_text: String,
    pub cleaned_text: String,
    pub sentiment: Sentiment,
    pub reshare_count: u32,
}

impl Post {
    pub fn is_reshared(&self) -> bool {
        self.reshare_count > 0
    }
}
