//! Bounded, id-keyed merge cache for polled feed items.

use std::collections::BTreeMap;

use jobboard_core::types::DbId;

use crate::source::FeedItem;

/// Items keyed by id. Re-delivered ids replace the stored copy, so a feed
/// never shows duplicates. When the cache exceeds `max_items` the lowest ids
/// are dropped first.
#[derive(Debug, Clone)]
pub struct FeedCache<T> {
    items: BTreeMap<DbId, T>,
    max_items: usize,
}

impl<T: FeedItem + Clone> FeedCache<T> {
    pub fn new(max_items: usize) -> Self {
        Self {
            items: BTreeMap::new(),
            max_items: max_items.max(1),
        }
    }

    /// Insert or replace each item by id. Returns how many ids were not
    /// previously cached.
    pub fn merge(&mut self, items: impl IntoIterator<Item = T>) -> usize {
        let mut added = 0;
        for item in items {
            if self.items.insert(item.id(), item).is_none() {
                added += 1;
            }
        }
        while self.items.len() > self.max_items {
            self.items.pop_first();
        }
        added
    }

    /// Cached items, newest (highest id) first.
    pub fn snapshot(&self) -> Vec<T> {
        self.items.values().rev().cloned().collect()
    }

    /// Highest cached id, or 0 when empty.
    pub fn cursor(&self) -> DbId {
        self.items.keys().next_back().copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
