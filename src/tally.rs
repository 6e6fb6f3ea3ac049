//! Insertion-ordered counters.
//!
//! Rankings built from these counters break ties by first appearance, so the table remembers
//! the order in which keys were first seen.

use std::collections::HashMap;

use anyhow::bail;
use serde::{Deserialize, Serialize};

/// String-keyed values kept in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FirstSeenMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> FirstSeenMap<V> {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Value for `key`, inserting `init(key)` at the end if the key is new.
    pub(crate) fn get_or_insert_with(
        &mut self,
        key: &str,
        init: impl FnOnce(&str) -> V,
    ) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                self.entries.push((key.to_owned(), init(key)));
                self.index.insert(key.to_owned(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[position].1
    }

    pub(crate) fn get(&self, key: &str) -> Option<&V> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    pub(crate) fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub(crate) fn entries(&self) -> &[(String, V)] {
        &self.entries
    }

    pub(crate) fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    pub(crate) fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }

    pub(crate) fn into_values(self) -> Vec<V> {
        self.entries.into_iter().map(|(_, value)| value).collect()
    }
}

impl<V> Default for FirstSeenMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts occurrences of string keys, remembering first-seen order.
///
/// Counts saturate at `u32::MAX`. Serialized as an ordered list of `(key, count)` pairs;
/// deserializing a list with a repeated key fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, u32)>", into = "Vec<(String, u32)>")]
pub struct FrequencyTable {
    counts: FirstSeenMap<u32>,
}

impl FrequencyTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `key`, returns the updated count.
    pub fn increment(&mut self, key: &str) -> u32 {
        self.add(key, 1)
    }

    /// Add `count` occurrences of `key`, returns the updated count.
    pub fn add(&mut self, key: &str, count: u32) -> u32 {
        let entry = self.counts.get_or_insert_with(key, |_| 0);
        *entry = entry.saturating_add(count);
        *entry
    }

    /// Count for `key`, if it was ever seen.
    pub fn get(&self, key: &str) -> Option<u32> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.entries().len()
    }

    /// True if no key was ever counted.
    pub fn is_empty(&self) -> bool {
        self.counts.entries().is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total(&self) -> u64 {
        self.iter()
            .fold(0u64, |sum, (_, count)| sum.saturating_add(u64::from(count)))
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts
            .entries()
            .iter()
            .map(|(key, count)| (key.as_str(), *count))
    }

    /// Entries by descending count. Ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(String, u32)> {
        let mut ranked: Vec<_> = self
            .iter()
            .map(|(key, count)| (key.to_owned(), count))
            .collect();
        // stable sort: equal counts stay in insertion order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` most frequent entries, see [`ranked`](Self::ranked).
    pub fn top(&self, n: usize) -> Vec<(String, u32)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }
}

/// `part / whole` as a percentage, 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) * 100.0 / f64::from(whole)
}

/// Merges repeated keys, saturating their counts.
impl FromIterator<(String, u32)> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        let mut table = FrequencyTable::new();
        for (key, count) in iter {
            table.add(&key, count);
        }
        table
    }
}

impl TryFrom<Vec<(String, u32)>> for FrequencyTable {
    type Error = anyhow::Error;

    fn try_from(entries: Vec<(String, u32)>) -> Result<Self, Self::Error> {
        let mut table = FrequencyTable::new();
        for (key, count) in entries {
            if table.counts.contains_key(&key) {
                bail!("'{key}' appears more than once in the frequency table");
            }
            table.add(&key, count);
        }
        Ok(table)
    }
}

impl From<FrequencyTable> for Vec<(String, u32)> {
    fn from(table: FrequencyTable) -> Self {
        table.counts.into_entries()
    }
}
