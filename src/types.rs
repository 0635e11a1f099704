// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for lockpick

use crate::error::ProbeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Reply the server sends when a guess is accepted
pub const SUCCESS_REPLY: &str = "Connection success!";

/// Reply the server sends once it stops accepting guesses
pub const LOCKOUT_REPLY: &str = "Too many attempts";

/// Largest reply read from the server in one exchange
pub const REPLY_BUFFER_SIZE: usize = 1024;

/// Default brute-force charset: lowercase ASCII letters followed by digits
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789";

/// Default word list file name
pub const DEFAULT_WORDLIST: &str = "passwords.txt";

/// A single password guess
pub type Candidate = String;

/// Classification of one guess/reply exchange
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Match(Candidate),
    Continue,
    Lockout,
}

/// Result of running one candidate source to completion against the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionResult {
    Found(Candidate),
    Exhausted,
    Lockout,
}

/// Terminal state of a whole run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "password", rename_all = "snake_case")]
pub enum RunOutcome {
    Success(Candidate),
    Lockout,
    NotFound,
}

impl RunOutcome {
    pub fn password(&self) -> Option<&str> {
        match self {
            RunOutcome::Success(password) => Some(password),
            RunOutcome::Lockout | RunOutcome::NotFound => None,
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunOutcome::Success(password) => write!(f, "SUCCESS ({})", password),
            RunOutcome::Lockout => write!(f, "LOCKOUT"),
            RunOutcome::NotFound => write!(f, "NOT FOUND"),
        }
    }
}

/// Ordered set of symbols the brute-force generator draws from.
///
/// Duplicate symbols are dropped on construction (first occurrence wins) so
/// a generator built over it never repeats a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self, ProbeError> {
        let mut unique: Vec<char> = Vec::with_capacity(symbols.len());
        for symbol in symbols.chars() {
            if !unique.contains(&symbol) {
                unique.push(symbol);
            }
        }

        if unique.is_empty() {
            return Err(ProbeError::InvalidConfig(
                "alphabet must contain at least one symbol".to_string(),
            ));
        }

        Ok(Self { symbols: unique })
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

impl TryFrom<String> for Alphabet {
    type Error = ProbeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Alphabet::new(&value)
    }
}

impl FromStr for Alphabet {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Alphabet::new(s)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol)?;
        }
        Ok(())
    }
}

/// Attack configuration
#[derive(Debug, Clone)]
pub struct AttackConfig {
    pub host: String,
    pub port: u16,
    pub alphabet: Alphabet,
    /// Longest brute-force length to try; `None` escalates without bound
    pub max_length: Option<usize>,
    /// Read/write timeout on the transport; `None` blocks indefinitely
    pub timeout: Option<Duration>,
    /// Ordered seed words; `Some` selects word-list mode
    pub words: Option<Vec<String>>,
}

impl AttackConfig {
    pub fn target(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AttackConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 9090,
            alphabet: Alphabet::default(),
            max_length: None,
            timeout: None,
            words: None,
        }
    }
}
