// SPDX-License-Identifier: PMPL-1.0-or-later

//! Exhaustive fixed-length enumeration over an alphabet

use super::Odometer;
use crate::types::{Alphabet, Candidate};

/// Every string of one length over an alphabet, in Cartesian-product order.
#[derive(Debug, Clone)]
pub struct BruteForce {
    length: usize,
    inner: Odometer,
}

impl BruteForce {
    /// Returns `None` for lengths below 1.
    pub fn with_alphabet(length: usize, alphabet: &Alphabet) -> Option<Self> {
        if length < 1 {
            return None;
        }
        let inner = Odometer::new(vec![alphabet.symbols().to_vec(); length]);
        Some(Self { length, inner })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn cardinality(&self) -> Option<u128> {
        self.inner.cardinality()
    }
}

impl Iterator for BruteForce {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Brute-force source over the default `[a-z0-9]` alphabet.
///
/// Zero and negative lengths give an absent source rather than an error.
pub fn make_bruteforce_source(length: i64) -> Option<BruteForce> {
    let length = usize::try_from(length).ok()?;
    BruteForce::with_alphabet(length, &Alphabet::default())
}
