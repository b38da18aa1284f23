// WHY: Core concordance types shared by the builder, renderers and stats
// The map is ordered so iteration is already the output order

use std::collections::btree_map::{self, BTreeMap};

pub mod abbreviations;
pub mod builder;
pub mod normalization;

// Re-export core types
pub use abbreviations::{AbbreviationSet, PeriodRole};
pub use builder::{build, build_from_reader, build_from_str, ConcordanceBuilder};
pub use normalization::{normalize_token, normalize_token_into};

/// Sentence numbers are 1-based; the first sentence of a document is 1
pub const FIRST_SENTENCE: usize = 1;

/// Occurrence data for one normalized word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConcordanceEntry {
    count: usize,
    sentences: Vec<usize>,
}

impl ConcordanceEntry {
    /// Record one more occurrence of the word in `sentence`
    pub fn record(&mut self, sentence: usize) {
        debug_assert!(self.sentences.last().map_or(true, |&last| last <= sentence));
        self.count += 1;
        self.sentences.push(sentence);
    }

    /// Total number of occurrences
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sentence number of each occurrence, in discovery order
    pub fn sentences(&self) -> &[usize] {
        &self.sentences
    }
}

/// Finished word index: normalized word to its occurrence data
///
/// Entries are only created through [`Concordance::record`], so every entry
/// has `count == sentences.len()` and non-decreasing sentence numbers. There
/// is no way to deserialize one from outside data:
///
/// ```compile_fail
/// let concordance: concord::Concordance =
///     serde_json::from_str(r#"{"entries":{},"sentence_count":0}"#).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Concordance {
    entries: BTreeMap<String, ConcordanceEntry>,
    sentence_count: usize,
}

impl Concordance {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert: insert `(1, [sentence])` for a new word, else bump its count and append
    pub fn record(&mut self, word: &str, sentence: usize) {
        match self.entries.get_mut(word) {
            Some(entry) => entry.record(sentence),
            None => self
                .entries
                .entry(word.to_owned())
                .or_default()
                .record(sentence),
        }
    }

    pub fn get(&self, word: &str) -> Option<&ConcordanceEntry> {
        self.entries.get(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Entries in ascending word order
    pub fn iter(&self) -> btree_map::Iter<'_, String, ConcordanceEntry> {
        self.entries.iter()
    }

    /// Words in ascending order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all occurrence counts
    pub fn total_occurrences(&self) -> usize {
        self.entries.values().map(ConcordanceEntry::count).sum()
    }

    /// Number of sentences closed by a terminating period during the parse
    pub fn sentence_count(&self) -> usize {
        self.sentence_count
    }

    pub(crate) fn set_sentence_count(&mut self, sentence_count: usize) {
        self.sentence_count = sentence_count;
    }
}

impl<'a> IntoIterator for &'a Concordance {
    type Item = (&'a String, &'a ConcordanceEntry);
    type IntoIter = btree_map::Iter<'a, String, ConcordanceEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_inserts_then_appends() {
        let mut concordance = Concordance::new();
        concordance.record("word", 1);
        concordance.record("word", 1);
        concordance.record("word", 3);

        let entry = concordance.get("word").unwrap();
        assert_eq!(entry.count(), 3);
        assert_eq!(entry.sentences(), &[1, 1, 3]);
        assert_eq!(concordance.len(), 1);
        assert_eq!(concordance.total_occurrences(), 3);
    }

    #[test]
    fn test_iteration_is_ascending() {
        let mut concordance = Concordance::new();
        for word in ["zebra", "e.g.", "apple", "eg", "mango"] {
            concordance.record(word, FIRST_SENTENCE);
        }

        let words: Vec<&str> = concordance.words().collect();
        assert_eq!(words, vec!["apple", "e.g.", "eg", "mango", "zebra"]);
        assert!(words.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_empty_concordance() {
        let concordance = Concordance::new();
        assert!(concordance.is_empty());
        assert_eq!(concordance.total_occurrences(), 0);
        assert_eq!(concordance.sentence_count(), 0);
        assert!(concordance.get("anything").is_none());
    }
}
