//! Stable identifier-to-integer mapping.
//!
//! Replaces opaque identifier strings (UUIDs in practice) with small
//! sequential integers while preserving referential consistency: the same
//! identifier always maps to the same integer within one mapper instance.

use indexmap::IndexMap;

/// Assigns sequential integers to identifier strings.
///
/// Integers are allocated contiguously starting at 1, in first-seen order.
/// One instance is created per transformation run and shared across all
/// rows, so an identifier appearing in several rows (or several columns)
/// keeps a single integer.
#[derive(Debug)]
pub struct IdMapper {
    assigned: IndexMap<String, u64>,
    next_id: u64,
}

impl Default for IdMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl IdMapper {
    pub fn new() -> Self {
        Self {
            assigned: IndexMap::new(),
            next_id: 1,
        }
    }

    /// Map an identifier to its integer, allocating the next one on first
    /// sight.
    pub fn map(&mut self, identifier: &str) -> u64 {
        if let Some(&id) = self.assigned.get(identifier) {
            return id;
        }
        let id = self.next_id;
        self.assigned.insert(identifier.to_string(), id);
        self.next_id += 1;
        id
    }

    /// Number of distinct identifiers seen so far.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    /// Iterate over (identifier, integer) pairs in first-seen order.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, u64)> {
        self.assigned.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
