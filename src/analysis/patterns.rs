//! Occurrence counting for distinct cluster shapes

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::analysis::shape::Shape;

/// A distinct shape and how often it was observed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    /// Canonical shape
    pub shape: Shape,
    /// Number of observations
    pub count: u64,
}

/// Running tally of shapes in first-seen order
///
/// Entries keep the order in which their shapes were first observed; a hash
/// index from shape to entry position keeps every observation O(1) on
/// average regardless of how many distinct shapes have accumulated.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
    index: HashMap<Shape, usize>,
}

impl PatternTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one observation of `shape`
    pub fn observe(&mut self, shape: Shape) {
        self.observe_many(shape, 1);
    }

    /// Count `count` observations of `shape` at once
    ///
    /// A zero count leaves the table untouched.
    pub fn observe_many(&mut self, shape: Shape, count: u64) {
        if count == 0 {
            return;
        }
        match self.index.entry(shape) {
            Entry::Occupied(slot) => {
                if let Some(entry) = self.entries.get_mut(*slot.get()) {
                    entry.count += count;
                }
            }
            Entry::Vacant(slot) => {
                let shape = slot.key().clone();
                slot.insert(self.entries.len());
                self.entries.push(PatternEntry { shape, count });
            }
        }
    }

    /// Fold another table into this one
    ///
    /// Shapes new to `self` are appended in `other`'s first-seen order, so
    /// merging batch tables in batch order reproduces the sequential table.
    pub fn merge(&mut self, other: Self) {
        for entry in other.entries {
            self.observe_many(entry.shape, entry.count);
        }
    }

    /// Entries in first-seen order
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Number of distinct shapes
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been observed
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Observation count for a shape, zero if never seen
    pub fn count_of(&self, shape: &Shape) -> u64 {
        self.index
            .get(shape)
            .and_then(|&position| self.entries.get(position))
            .map_or(0, |entry| entry.count)
    }

    /// Sum of all counts, equal to the number of clusters observed
    pub fn total_observations(&self) -> u64 {
        self.entries.iter().map(|entry| entry.count).sum()
    }
}
