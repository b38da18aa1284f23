// WHY: Centralized abbreviation handling for sentence boundary detection
// A token ending in a period closes a sentence unless it is listed here

use std::collections::HashSet;
use std::sync::OnceLock;

use super::normalization::normalize_token;

/// Abbreviations that keep their trailing period and never close a sentence
pub const KNOWN_ABBREVIATIONS: &[&str] = &["al.", "e.g.", "etc.", "i.e."];

/// Title abbreviations that precede proper nouns like "Dr. Smith", "Mr. Johnson"
/// These never close a sentence and are indexed without their period
pub const TITLE_ABBREVIATIONS: &[&str] = &["dr.", "mr.", "mrs.", "ms.", "prof."];

static STANDARD: OnceLock<AbbreviationSet> = OnceLock::new();

/// How a period-terminated word is treated by the builder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodRole {
    /// Ordinary word ending a sentence; the period is dropped
    SentenceEnd,
    /// Known abbreviation; the period is part of the word
    Abbreviation,
    /// Title abbreviation; the period is dropped but the sentence continues
    Title,
}

/// Lookup over normalized (lowercase) abbreviation forms
#[derive(Debug, Clone)]
pub struct AbbreviationSet {
    abbreviations: HashSet<String>,
    titles: HashSet<String>,
}

impl AbbreviationSet {
    /// Create a set holding the default abbreviation and title lists
    pub fn new() -> Self {
        Self {
            abbreviations: KNOWN_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
            titles: TITLE_ABBREVIATIONS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Shared process-wide default set, built on first use
    pub fn standard() -> &'static AbbreviationSet {
        STANDARD.get_or_init(AbbreviationSet::new)
    }

    /// Default set extended with extra period-retaining abbreviations
    ///
    /// Each extra entry is normalized the same way document tokens are, and a
    /// trailing period is appended when missing. Entries that normalize to
    /// nothing are ignored.
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for abbr in extra {
            let mut normalized = normalize_token(abbr.as_ref());
            if normalized.trim_end_matches('.').is_empty() {
                continue;
            }
            if !normalized.ends_with('.') {
                normalized.push('.');
            }
            set.titles.remove(&normalized);
            set.abbreviations.insert(normalized);
        }
        set
    }

    /// Check if a normalized word is a known period-retaining abbreviation
    pub fn is_abbreviation(&self, word: &str) -> bool {
        self.abbreviations.contains(word)
    }

    /// Check if a normalized word is a title abbreviation
    pub fn is_title(&self, word: &str) -> bool {
        self.titles.contains(word)
    }

    /// Classify a normalized word that ends with a period
    pub fn classify(&self, word: &str) -> PeriodRole {
        if self.is_abbreviation(word) {
            PeriodRole::Abbreviation
        } else if self.is_title(word) {
            PeriodRole::Title
        } else {
            PeriodRole::SentenceEnd
        }
    }

    pub fn len(&self) -> usize {
        self.abbreviations.len() + self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for AbbreviationSet {
    fn default() -> Self {
        Self::new()
    }
}
