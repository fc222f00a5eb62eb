//! Deduplication of reshared posts by cleaned text and sentiment.

use std::collections::HashSet;

use crate::sentiment::Sentiment;

use super::Post;

/// Result of deduplicating a batch.
#[derive(Debug, Clone)]
pub struct DedupOutcome {
    /// Surviving posts, in input order.
    pub retained: Vec<Post>,
    /// Reshared posts dropped as repeats.
    pub dropped: usize,
}

/// Collapse repeated reshared content.
///
/// Posts that were never reshared are always kept. A reshared post is kept
/// only if no earlier kept reshared post has the same
/// `(cleaned_text, sentiment)` key, so the first occurrence wins.
pub fn deduplicate_posts(posts: Vec<Post>) -> DedupOutcome {
    let mut seen: HashSet<(String, Sentiment)> = HashSet::new();
    let mut retained = Vec::with_capacity(posts.len());
    let mut dropped = 0;

    for post in posts {
        if !post.is_reshared() {
            retained.push(post);
            continue;
        }

        if seen.insert((post.cleaned_text.clone(), post.sentiment)) {
            retained.push(post);
        } else {
            dropped += 1;
        }
    }

    DedupOutcome { retained, dropped }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(text: &str, sentiment: Sentiment, reshare_count: u32) -> Post {
        Post {
            raw_text: text.to_string(),
            cleaned_text: text.to_string(),
            sentiment,
            reshare_count,
        }
    }

    #[test]
    fn test_reshared_duplicate_collapses_to_first() {
        let a = post("ok", Sentiment::Neutral, 3);
        let mut b = post("ok", Sentiment::Neutral, 3);
        b.raw_text = "RT @x: ok".to_string();

        let outcome = deduplicate_posts(vec![a.clone(), b]);
        assert_eq!(outcome.retained, vec![a]);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn test_unshared_first_keeps_both() {
        let a = post("ok", Sentiment::Neutral, 0);
        let b = post("ok", Sentiment::Neutral, 3);

        let outcome = deduplicate_posts(vec![a.clone(), b.clone()]);
        assert_eq!(outcome.retained, vec![a, b]);
        assert_eq!(outcome.dropped, 0);
    }

    #[test]
    fn test_unshared_posts_never_dropped() {
        let posts = vec![
            post("same", Sentiment::Positive, 0),
            post("same", Sentiment::Positive, 0),
            post("same", Sentiment::Positive, 0),
        ];
        let outcome = deduplicate_posts(posts);
        assert_eq!(outcome.retained.len(), 3);
    }

    #[test]
    fn test_key_includes_sentiment() {
        let posts = vec![
            post("fine", Sentiment::Positive, 1),
            post("fine", Sentiment::Negative, 1),
        ];
        let outcome = deduplicate_posts(posts);
        assert_eq!(outcome.retained.len(), 2);
    }

    #[test]
    fn test_preserves_order() {
        let posts = vec![
            post("c", Sentiment::Neutral, 2),
            post("a", Sentiment::Positive, 0),
            post("c", Sentiment::Neutral, 5),
            post("b", Sentiment::Negative, 1),
            post("a", Sentiment::Positive, 4),
        ];
        let outcome = deduplicate_posts(posts);
        let texts: Vec<_> = outcome
            .retained
            .iter()
            .map(|p| (p.cleaned_text.as_str(), p.reshare_count))
            .collect();
        assert_eq!(texts, vec![("c", 2), ("a", 0), ("b", 1), ("a", 4)]);
        assert_eq!(outcome.dropped, 1);
    }

    #[test]
    fn test_empty_input() {
        let outcome = deduplicate_posts(Vec::new());
        assert!(outcome.retained.is_empty());
        assert_eq!(outcome.dropped, 0);
    }
}
