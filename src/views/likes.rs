//! Like state for the feed views

use crate::models::Post;
use std::collections::{HashMap, HashSet};

/// Posts the viewer has liked on the Connect feed.
/// Displayed like counts stay static.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeSet {
    liked: HashSet<String>,
}

impl LikeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership. Returns the new state.
    pub fn toggle(&mut self, post_id: &str) -> bool {
        if self.liked.remove(post_id) {
            false
        } else {
            self.liked.insert(post_id.to_string());
            true
        }
    }

    pub fn is_liked(&self, post_id: &str) -> bool {
        self.liked.contains(post_id)
    }

    pub fn len(&self) -> usize {
        self.liked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.liked.is_empty()
    }
}

/// Click counters on the goal page, one per known post
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LikeCounters {
    counts: HashMap<String, u64>,
}

impl LikeCounters {
    pub fn seeded(posts: &[Post]) -> Self {
        Self {
            counts: posts.iter().map(|p| (p.id.clone(), p.likes)).collect(),
        }
    }

    /// Add one like. Unknown ids are ignored and return `None`.
    pub fn increment(&mut self, post_id: &str) -> Option<u64> {
        let count = self.counts.get_mut(post_id)?;
        *count = count.saturating_add(1);
        Some(*count)
    }

    pub fn get(&self, post_id: &str) -> Option<u64> {
        self.counts.get(post_id).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_toggle_follows_click_parity() {
        let mut likes = LikeSet::new();
        for clicks in 1..=7 {
            likes.toggle("101");
            assert_eq!(likes.is_liked("101"), clicks % 2 == 1);
        }
        assert!(!likes.is_liked("102"));
    }

    #[test]
    fn test_double_toggle_restores() {
        let mut likes = LikeSet::new();
        likes.toggle("101");
        let before = likes.clone();

        likes.toggle("102");
        likes.toggle("102");
        assert_eq!(likes, before);
    }

    #[test]
    fn test_counter_adds_one_per_click() {
        let posts = catalog::content_posts();
        let mut counters = LikeCounters::seeded(&posts);
        let first = &posts[0];

        assert_eq!(counters.increment(&first.id), Some(first.likes + 1));
        assert_eq!(counters.increment(&first.id), Some(first.likes + 2));
        assert_eq!(counters.get(&posts[1].id), Some(posts[1].likes));
        assert_eq!(counters.increment("nope"), None);
    }

    #[test]
    fn test_counter_saturates() {
        let posts = vec![Post::new("p", "c").engagement(u64::MAX, 0)];
        let mut counters = LikeCounters::seeded(&posts);
        assert_eq!(counters.increment("p"), Some(u64::MAX));
    }
}
