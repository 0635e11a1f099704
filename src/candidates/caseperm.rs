// SPDX-License-Identifier: PMPL-1.0-or-later

//! Case permutations of a seed word

use super::Odometer;
use crate::types::Candidate;

/// Every upper/lower case variant of a word.
///
/// Ordered as a binary counter with the last character as the least
/// significant bit, lowercase before uppercase: `ab, aB, Ab, AB`.
#[derive(Debug, Clone)]
pub struct CasePermutations {
    word: String,
    inner: Odometer,
}

impl CasePermutations {
    pub fn new(word: &str) -> Self {
        let choices = word.chars().map(case_choices).collect();
        Self {
            word: word.to_string(),
            inner: Odometer::new(choices),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn cardinality(&self) -> Option<u128> {
        self.inner.cardinality()
    }
}

impl Iterator for CasePermutations {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Lower and upper form of a character.
///
/// Characters without a distinct single-character counterpart (digits,
/// punctuation, `ß`) keep one fixed choice so no variant is produced twice
/// and every variant keeps the word's length.
fn case_choices(ch: char) -> Vec<char> {
    match (single(ch.to_lowercase()), single(ch.to_uppercase())) {
        (Some(lower), Some(upper)) if lower != upper => vec![lower, upper],
        _ => vec![ch],
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        Some(_) => None,
        None => Some(first),
    }
}

pub fn make_caseperm_source(word: &str) -> CasePermutations {
    CasePermutations::new(word)
}
