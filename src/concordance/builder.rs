// WHY: Single-pass aggregation of whitespace-delimited tokens into a concordance
// The sentence counter is a side channel driven by period-terminated tokens

use std::io::{self, BufRead};
use tracing::debug;

use super::abbreviations::{AbbreviationSet, PeriodRole};
use super::normalization::normalize_token_into;
use super::{Concordance, FIRST_SENTENCE};

/// Incremental concordance builder fed one token (or line) at a time
///
/// A word that ends a sentence is attributed to the sentence it ends; the
/// counter advances only after that word has been recorded. So
/// `"The The the."` records `the` three times in sentence 1, and the next
/// word starts sentence 2.
pub struct ConcordanceBuilder<'a> {
    abbreviations: &'a AbbreviationSet,
    concordance: Concordance,
    sentence: usize,
    tokens_seen: u64,
    buffer: String,
}

impl ConcordanceBuilder<'static> {
    /// Builder using the process-wide standard abbreviation set
    pub fn new() -> Self {
        Self::with_abbreviations(AbbreviationSet::standard())
    }
}

impl Default for ConcordanceBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> ConcordanceBuilder<'a> {
    pub fn with_abbreviations(abbreviations: &'a AbbreviationSet) -> Self {
        Self {
            abbreviations,
            concordance: Concordance::new(),
            sentence: FIRST_SENTENCE,
            tokens_seen: 0,
            buffer: String::new(),
        }
    }

    /// Process one raw token
    pub fn push_token(&mut self, token: &str) {
        self.tokens_seen += 1;
        normalize_token_into(token, &mut self.buffer);

        // All-punctuation tokens vanish without touching the counter
        if self.buffer.is_empty() {
            return;
        }

        let mut ends_sentence = false;
        if self.buffer.ends_with('.') {
            match self.abbreviations.classify(&self.buffer) {
                PeriodRole::Abbreviation => {}
                PeriodRole::Title => {
                    self.buffer.pop();
                }
                PeriodRole::SentenceEnd => {
                    self.buffer.pop();
                    ends_sentence = true;
                }
            }
        }

        // A lone "." closes the sentence but indexes nothing
        if !self.buffer.is_empty() {
            self.concordance.record(&self.buffer, self.sentence);
        }

        if ends_sentence {
            self.sentence += 1;
        }
    }

    /// Process every whitespace-delimited token of a line
    pub fn push_line(&mut self, line: &str) {
        for token in line.split_whitespace() {
            self.push_token(token);
        }
    }

    /// Sentence number the next word will be attributed to
    pub fn current_sentence(&self) -> usize {
        self.sentence
    }

    /// Raw tokens consumed so far, including ones that normalized to nothing
    pub fn tokens_seen(&self) -> u64 {
        self.tokens_seen
    }

    pub fn finish(self) -> Concordance {
        let mut concordance = self.concordance;
        concordance.set_sentence_count(self.sentence - FIRST_SENTENCE);

        debug!(
            tokens = self.tokens_seen,
            words = concordance.len(),
            sentences = concordance.sentence_count(),
            "Concordance build finished"
        );
        concordance
    }
}

/// Build a concordance from a sequence of raw tokens with the standard abbreviations
pub fn build<I, S>(tokens: I) -> Concordance
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = ConcordanceBuilder::new();
    for token in tokens {
        builder.push_token(token.as_ref());
    }
    builder.finish()
}

/// Build a concordance from in-memory text
pub fn build_from_str(text: &str) -> Concordance {
    build(text.split_whitespace())
}

/// Build a concordance from a buffered reader, line by line
///
/// Only the reader can fail; its error is returned unchanged.
pub fn build_from_reader<R: BufRead>(
    mut reader: R,
    abbreviations: &AbbreviationSet,
) -> io::Result<Concordance> {
    let mut builder = ConcordanceBuilder::with_abbreviations(abbreviations);
    let mut line = String::new();

    while reader.read_line(&mut line)? > 0 {
        builder.push_line(&line);
        line.clear();
    }

    Ok(builder.finish())
}
