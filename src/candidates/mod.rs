// SPDX-License-Identifier: PMPL-1.0-or-later

//! Candidate generation
//!
//! Both generators are odometers: every position owns an ordered list of
//! choices and the rightmost position advances fastest. Brute force gives each
//! position the full alphabet; case permutation gives each letter its lower
//! and upper form. Sources are single-pass iterators; restart by building a
//! new one.

pub mod bruteforce;
pub mod caseperm;
pub mod wordlist;

pub use bruteforce::{make_bruteforce_source, BruteForce};
pub use caseperm::{make_caseperm_source, CasePermutations};

use crate::types::Candidate;

/// Cartesian-product enumerator over per-position choice lists.
#[derive(Debug, Clone)]
pub struct Odometer {
    choices: Vec<Vec<char>>,
    indices: Vec<usize>,
    done: bool,
}

impl Odometer {
    /// Builds an odometer. No positions, or any position without choices,
    /// yields an empty sequence.
    pub fn new(choices: Vec<Vec<char>>) -> Self {
        let done = choices.is_empty() || choices.iter().any(Vec::is_empty);
        let indices = vec![0; choices.len()];
        Self {
            choices,
            indices,
            done,
        }
    }

    /// Total number of candidates, or `None` if it does not fit in a u128.
    pub fn cardinality(&self) -> Option<u128> {
        if self.choices.is_empty() {
            return Some(0);
        }
        self.choices
            .iter()
            .try_fold(1u128, |acc, c| acc.checked_mul(c.len() as u128))
    }

    fn current(&self) -> Candidate {
        self.indices
            .iter()
            .zip(&self.choices)
            .map(|(&i, options)| options[i])
            .collect()
    }

    fn advance(&mut self) {
        for pos in (0..self.indices.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.choices[pos].len() {
                return;
            }
            self.indices[pos] = 0;
        }
        // Every position wrapped around.
        self.done = true;
    }
}

impl Iterator for Odometer {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let candidate = self.current();
        self.advance();
        Some(candidate)
    }
}
