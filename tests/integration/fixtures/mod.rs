// Test fixtures with known documents and expected concordance output
// WHY: Golden-file testing requires deterministic input/output pairs for validation

#![allow(dead_code)]

/// Titles and abbreviations mixed with sentence ends
pub const ABBREVIATION_TEXT: &str = "Dr. Smith, e.g. Jones. Bob.";

/// Expected text rendering for ABBREVIATION_TEXT
pub const ABBREVIATION_EXPECTED: &str = "\
bob: { 1 : 2 }
dr: { 1 : 1 }
e.g.: { 1 : 1 }
jones: { 1 : 1 }
smith: { 1 : 1 }";

/// Multi-line prose where sentences span line breaks
pub const PROSE_TEXT: &str = "Given an arbitrary text document written in English,
write a program that will generate a concordance. A concordance is an
alphabetical list of all word occurrences, labeled with word frequencies.
Bonus: label each word with the sentence numbers in which each
occurrence appeared, i.e. the sentence index.";

/// Expected text rendering for PROSE_TEXT
pub const PROSE_EXPECTED: &str = "\
a: { 3 : 1, 1, 2 }
all: { 1 : 2 }
alphabetical: { 1 : 2 }
an: { 2 : 1, 2 }
appeared: { 1 : 3 }
arbitrary: { 1 : 1 }
bonus: { 1 : 3 }
concordance: { 2 : 1, 2 }
document: { 1 : 1 }
each: { 2 : 3, 3 }
english: { 1 : 1 }
frequencies: { 1 : 2 }
generate: { 1 : 1 }
given: { 1 : 1 }
i.e.: { 1 : 3 }
in: { 2 : 1, 3 }
index: { 1 : 3 }
is: { 1 : 2 }
label: { 1 : 3 }
labeled: { 1 : 2 }
list: { 1 : 2 }
numbers: { 1 : 3 }
occurrence: { 1 : 3 }
occurrences: { 1 : 2 }
of: { 1 : 2 }
program: { 1 : 1 }
sentence: { 2 : 3, 3 }
text: { 1 : 1 }
that: { 1 : 1 }
the: { 2 : 3, 3 }
which: { 1 : 3 }
will: { 1 : 1 }
with: { 2 : 2, 3 }
word: { 3 : 2, 2, 3 }
write: { 1 : 1 }
written: { 1 : 1 }";
