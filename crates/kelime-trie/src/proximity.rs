// Keyboard proximity tables

use hashbrown::{HashMap, HashSet};

/// Maps a character to the characters physically adjacent to it on a
/// keyboard layout.
///
/// A character absent from the table has no known neighbors. The relation
/// is stored as given and is not assumed to be symmetric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProximityTable {
    neighbors: HashMap<char, HashSet<char>>,
}

impl ProximityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(key, neighbors)` rows, where `neighbors` lists
    /// the adjacent characters as a string. Repeated keys accumulate.
    pub fn from_rows(rows: &[(char, &str)]) -> Self {
        let mut table = Self::new();
        for &(key, near) in rows {
            table.extend(key, near.chars());
        }
        table
    }

    /// Add neighbors for `key`.
    pub fn extend<I>(&mut self, key: char, near: I)
    where
        I: IntoIterator<Item = char>,
    {
        self.neighbors.entry(key).or_default().extend(near);
    }

    /// Returns `true` if `candidate` is listed as a neighbor of `key`.
    #[inline]
    pub fn is_near(&self, key: char, candidate: char) -> bool {
        self.neighbors
            .get(&key)
            .is_some_and(|near| near.contains(&candidate))
    }

    /// Neighbors of `key`, in no particular order.
    pub fn neighbors(&self, key: char) -> impl Iterator<Item = char> + '_ {
        self.neighbors.get(&key).into_iter().flatten().copied()
    }

    /// Number of keys with at least one listed neighbor.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}
