// SPDX-License-Identifier: PMPL-1.0-or-later

//! Search strategies

use crate::types::AttackConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackStrategy {
    /// Exhaust every length-`n` string, then move to `n + 1`.
    LengthEscalation {
        start: usize,
        max_length: Option<usize>,
    },
    /// Try every case variant of each word in order.
    WordList { words: Vec<String> },
}

impl AttackStrategy {
    pub fn from_config(config: &AttackConfig) -> Self {
        match &config.words {
            Some(words) => AttackStrategy::WordList {
                words: words.clone(),
            },
            None => AttackStrategy::LengthEscalation {
                start: 1,
                max_length: config.max_length,
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttackStrategy::LengthEscalation { .. } => "length-escalation",
            AttackStrategy::WordList { .. } => "word-list",
        }
    }

    pub fn description(&self) -> String {
        // Used directly in progress output.
        match self {
            AttackStrategy::LengthEscalation {
                start,
                max_length: Some(max),
            } => format!("Enumerate every string of length {} to {}", start, max),
            AttackStrategy::LengthEscalation {
                start,
                max_length: None,
            } => format!("Enumerate every string from length {} upward", start),
            AttackStrategy::WordList { words } => {
                format!("Try every case variant of {} words", words.len())
            }
        }
    }
}
