//! # Infinite-scroll feed state
//!
//! [`Feed`] is the pure half of the image gallery. The view drives it:
//!
//! 1. [`Feed::on_sentinel`] with the sentinel's visibility. It returns `true`
//!    only on a hidden→visible transition while nothing is in flight, and
//!    marks a fetch as started.
//! 2. [`Feed::complete`] with the fetched URLs, or [`Feed::fail`]. When the
//!    sentinel is still on screen after a non-empty batch, `complete` starts
//!    the next fetch itself and returns `true`, so a viewport taller than the
//!    loaded grid keeps filling without another visibility transition.
//!    Failures never chain; the next transition retries.
//!
//! [`Feed::begin_fetch`] starts a fetch unconditionally (initial load) unless
//! one is already running.

use sha1::{Digest, Sha1};

use crate::models::FeedImage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Feed {
    images: Vec<FeedImage>,
    in_flight: bool,
    sentinel_visible: bool,
    next_seq: u64,
}

impl Feed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[FeedImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    /// Mark a fetch as started. Returns `false` if one is already running.
    pub fn begin_fetch(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        true
    }

    /// Record the sentinel's visibility. Returns `true` when the caller
    /// should fetch the next batch.
    pub fn on_sentinel(&mut self, visible: bool) -> bool {
        let became_visible = visible && !self.sentinel_visible;
        self.sentinel_visible = visible;
        became_visible && self.begin_fetch()
    }

    /// Append a fetched batch in response order and clear the in-flight flag.
    /// Returns `true` when the caller should fetch again right away.
    pub fn complete(&mut self, urls: Vec<String>) -> bool {
        let grew = !urls.is_empty();
        for url in urls {
            let id = self.next_id(&url);
            self.images.push(FeedImage { id, url });
        }
        self.in_flight = false;
        grew && self.sentinel_visible && self.begin_fetch()
    }

    /// A fetch failed. Loaded images stay; the next trigger may retry.
    pub fn fail(&mut self) {
        self.in_flight = false;
    }

    fn next_id(&mut self, url: &str) -> String {
        let digest = Sha1::digest(url.as_bytes());
        let short: String = digest.iter().take(4).map(|b| format!("{b:02x}")).collect();
        let id = format!("img-{}-{}", self.next_seq, short);
        self.next_seq += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn batch(n: usize, round: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("https://images.dog.ceo/breeds/hound/{round}-{i}.jpg"))
            .collect()
    }

    #[test]
    fn test_five_batches_of_five() {
        let mut feed = Feed::new();
        let mut expected = Vec::new();

        for round in 0..5 {
            assert!(feed.begin_fetch());
            let urls = batch(5, round);
            expected.extend(urls.clone());
            assert!(!feed.complete(urls));
        }

        assert_eq!(feed.len(), 25);
        let urls: Vec<_> = feed.images().iter().map(|i| i.url.clone()).collect();
        assert_eq!(urls, expected);
        let ids: HashSet<_> = feed.images().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 25);
    }

    #[test]
    fn test_duplicate_urls_get_distinct_ids() {
        let mut feed = Feed::new();
        feed.begin_fetch();
        let _ = feed.complete(vec!["https://x/a.jpg".into(), "https://x/a.jpg".into()]);
        assert_ne!(feed.images()[0].id, feed.images()[1].id);
        assert!(feed.images()[0].id.starts_with("img-0-"));
    }

    #[test]
    fn test_no_concurrent_fetches() {
        let mut feed = Feed::new();
        assert!(feed.begin_fetch());
        assert!(!feed.begin_fetch());
        assert!(!feed.on_sentinel(false));
        assert!(feed.is_loading());

        assert!(!feed.complete(batch(5, 0)));
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_sentinel_fires_on_transition_only() {
        let mut feed = Feed::new();
        assert!(!feed.on_sentinel(false));
        assert!(feed.on_sentinel(true));
        feed.on_sentinel(false);
        assert!(!feed.complete(batch(5, 0)));

        assert!(!feed.on_sentinel(false));
        assert!(feed.on_sentinel(true));
        feed.fail();
        // still visible: no new transition
        assert!(!feed.on_sentinel(true));
        assert!(!feed.on_sentinel(false));
        assert!(feed.on_sentinel(true));
    }

    #[test]
    fn test_visible_sentinel_chains_after_mount_fetch() {
        let mut feed = Feed::new();
        assert!(feed.begin_fetch());
        // sentinel comes into view while the first batch is loading
        assert!(!feed.on_sentinel(true));

        assert!(feed.complete(batch(5, 0)));
        assert!(feed.is_loading());

        feed.on_sentinel(false);
        assert!(!feed.complete(batch(5, 1)));
        assert!(!feed.is_loading());
        assert_eq!(feed.len(), 10);
    }

    #[test]
    fn test_empty_batch_does_not_chain() {
        let mut feed = Feed::new();
        assert!(feed.on_sentinel(true));
        assert!(!feed.complete(Vec::new()));
        assert!(!feed.is_loading());
    }

    #[test]
    fn test_failure_keeps_items_and_allows_retry() {
        let mut feed = Feed::new();
        feed.begin_fetch();
        assert!(!feed.complete(batch(5, 0)));

        assert!(feed.on_sentinel(true));
        feed.fail();
        assert_eq!(feed.len(), 5);
        assert!(!feed.is_loading());

        feed.on_sentinel(false);
        assert!(feed.on_sentinel(true));
    }
}
