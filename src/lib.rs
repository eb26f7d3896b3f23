use std::collections::HashMap;

use serde::{ser::SerializeMap, Serialize, Serializer};

pub mod bank;
pub mod naive;
pub mod report;

#[cfg(test)]
mod proptests;

/// The character with the highest count, as seen by a left-to-right scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Dominant {
    #[serde(rename = "char")]
    pub ch: char,
    pub count: usize,
}

/// Map from character to occurrence count.
///
/// Iterates in order of first appearance. Two tables are equal when they
/// hold the same characters with the same counts, whatever the order.
#[derive(Clone, Debug, Default)]
pub struct FrequencyTable {
    entries: Vec<(char, usize)>,
    index: HashMap<char, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one occurrence of `ch` and return its new count.
    pub fn bump(&mut self, ch: char) -> usize {
        let next = self.entries.len();
        let slot = *self.index.entry(ch).or_insert(next);
        if slot == next {
            self.entries.push((ch, 0));
        }
        let count = &mut self.entries[slot].1;
        *count += 1;
        *count
    }

    /// Count of `ch`, zero if it never occurred.
    pub fn get(&self, ch: char) -> usize {
        self.index.get(&ch).map_or(0, |&i| self.entries[i].1)
    }

    pub fn contains(&self, ch: char) -> bool {
        self.index.contains_key(&ch)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, n)| n).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.entries.iter().copied()
    }
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(c, n)| other.get(c) == n)
    }
}

impl Eq for FrequencyTable {}

impl PartialEq<HashMap<char, usize>> for FrequencyTable {
    fn eq(&self, other: &HashMap<char, usize>) -> bool {
        self.len() == other.len() && self.iter().all(|(c, n)| other.get(&c) == Some(&n))
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (c, n) in self.iter() {
            map.serialize_entry(&c, &n)?;
        }
        map.end()
    }
}

/// Outcome of counting one input.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub table: FrequencyTable,
    /// `None` when nothing was counted.
    pub dominant: Option<Dominant>,
}

/// Whether `c` is dropped from the input when spaces are ignored.
///
/// Only U+0020 counts; tabs and newlines are kept.
pub(crate) fn is_skipped(c: char, ignore_spaces: bool) -> bool {
    ignore_spaces && c == ' '
}

/// Count every character of `input` in one pass.
///
/// The dominant character only changes when a count strictly exceeds the
/// running maximum, so on a tie the first character to reach the maximum
/// wins: `"aabb"` gives `'a'`, but `"abba"` gives `'b'`.
pub fn count(input: &str, ignore_spaces: bool) -> Tally {
    let mut table = FrequencyTable::new();
    let mut dominant: Option<Dominant> = None;

    for c in input.chars().filter(|&c| !is_skipped(c, ignore_spaces)) {
        let n = table.bump(c);
        if dominant.map_or(true, |d| n > d.count) {
            dominant = Some(Dominant { ch: c, count: n });
        }
    }

    Tally { table, dominant }
}
