//! Bounded most-recently-used lists.

use std::collections::VecDeque;

/// Maximum entries kept per recency list.
pub const RECENT_CAPACITY: usize = 10;

/// Most-recent-first list of handles without duplicates, capped at [`RECENT_CAPACITY`].
#[derive(Debug, Clone)]
pub struct RecencyList<T> {
    entries: VecDeque<T>,
}

impl<T> Default for RecencyList<T> {
    fn default() -> Self {
        Self {
            entries: VecDeque::with_capacity(RECENT_CAPACITY),
        }
    }
}

impl<T: Copy + PartialEq> RecencyList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `item` to the front, evicting the least-recent entry when full.
    pub fn touch(&mut self, item: T) {
        if let Some(pos) = self.entries.iter().position(|e| *e == item) {
            self.entries.remove(pos);
        } else if self.entries.len() >= RECENT_CAPACITY {
            self.entries.pop_back();
        }
        self.entries.push_front(item);
    }

    pub fn remove(&mut self, item: T) {
        self.entries.retain(|e| *e != item);
    }

    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        self.entries.retain(keep);
    }

    pub fn contains(&self, item: T) -> bool {
        self.entries.contains(&item)
    }

    /// Entries front (most recent) to back.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
