//! Removal of platform noise from raw post text.
//!
//! Only reshare markers, mentions, tag markers and links are removed. Case and
//! whitespace are left alone so scorers see the text as it was written.

use once_cell::sync::Lazy;
use regex_lite::Regex;

use crate::pipeline::{CleanedPost, RawPost};

/// `RT @handle:` at the very start of the text.
static RESHARE_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^RT @[A-Za-z0-9_]*:").unwrap());

/// `@handle` anywhere in the text.
static MENTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"@[A-Za-z0-9_]+").unwrap());

/// `http://` or `https://` up to the next whitespace.
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"https?://\S+").unwrap());

/// Strips reshare markers, mentions, `#` symbols and links from post text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner;

impl TextCleaner {
    pub fn new() -> Self {
        Self
    }

    /// Clean raw post text.
    ///
    /// The removal pass runs until it no longer changes the text, so the
    /// result is a fixed point: cleaning it again returns it unchanged.
    pub fn clean(&self, raw_text: &str) -> String {
        let mut current = Self::clean_pass(raw_text);
        loop {
            let next = Self::clean_pass(&current);
            // Every pass only deletes, so equal length means nothing matched.
            if next.len() == current.len() {
                return current;
            }
            current = next;
        }
    }

    /// Clean a fetched post, keeping its raw text alongside.
    pub fn clean_post(&self, raw: RawPost) -> CleanedPost {
        let cleaned_text = self.clean(&raw.text);
        CleanedPost {
            raw_text: raw.text,
            cleaned_text,
            reshare_count: raw.reshare_count,
        }
    }

    fn clean_pass(text: &str) -> String {
        let text = RESHARE_MARKER.replace(text, "");
        let text = MENTION.replace_all(&text, "");
        let text = text.replace('#', "");
        LINK.replace_all(&text, "").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean(text: &str) -> String {
        TextCleaner::new().clean(text)
    }

    #[test]
    fn test_removes_leading_reshare_marker() {
        assert_eq!(clean("RT @alice: great day"), " great day");
        assert_eq!(clean("RT @bob_99:hello"), "hello");
    }

    #[test]
    fn test_reshare_marker_only_removed_at_start() {
        // The mention still goes, the literal "RT" and colon stay.
        assert_eq!(clean("so RT @alice: this"), "so RT : this");
    }

    #[test]
    fn test_no_leading_marker_after_clean() {
        for input in [
            "RT @a: RT @b: nested",
            "RT @: empty handle",
            "RT @x:RT @y:z",
        ] {
            let cleaned = clean(input);
            assert!(
                !RESHARE_MARKER.is_match(&cleaned),
                "{:?} -> {:?}",
                input,
                cleaned
            );
        }
    }

    #[test]
    fn test_removes_mentions() {
        assert_eq!(clean("thanks @alice and @bob!"), "thanks  and !");
    }

    #[test]
    fn test_keeps_tag_text() {
        assert_eq!(clean("loving #rust #async"), "loving rust async");
    }

    #[test]
    fn test_removes_links() {
        assert_eq!(
            clean("read this https://example.com/a?b=c now http://x.y"),
            "read this  now "
        );
    }

    #[test]
    fn test_combined_markers() {
        assert_eq!(clean("RT @a: great day! #nice"), " great day! nice");
    }

    #[test]
    fn test_empty_and_plain_input_unchanged() {
        assert_eq!(clean(""), "");
        assert_eq!(clean("ok"), "ok");
        assert_eq!(clean("  Mixed CASE  spacing "), "  Mixed CASE  spacing ");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "RT @a: great day! #nice",
            "@#alice hi",
            "h#ttps://example.com ok",
            "RT @#a: x",
            "@@bob",
            "plain text",
            "",
            "#",
            "RT @a: RT @b: x",
            "ünïcödé @ñame #tag",
        ];
        for input in inputs {
            let once = clean(input);
            let twice = clean(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn test_tag_removal_exposing_mention() {
        // Removing '#' glues '@' to the handle; the next pass strips it.
        assert_eq!(clean("@#alice hi"), " hi");
    }

    #[test]
    fn test_clean_post_keeps_raw_text() {
        let post = TextCleaner::new().clean_post(RawPost::new("RT @a: hi #there", 4));
        assert_eq!(post.raw_text, "RT @a: hi #there");
        assert_eq!(post.cleaned_text, " hi there");
        assert_eq!(post.reshare_count, 4);
    }
}
