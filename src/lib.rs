// SPDX-License-Identifier: PMPL-1.0-or-later

//! Lockpick — password guessing client for plaintext socket login servers.
//!
//! Connects to an authentication server, sends one password candidate per
//! round trip and reads the plaintext verdict. Candidates come from one of
//! two generators:
//!
//! 1. **Brute force**: every string of a given length over `[a-z0-9]`,
//!    escalating the length when a space is exhausted.
//! 2. **Case permutation**: every upper/lower case variant of each word in
//!    a word list.
//!
//! The run stops on the first accepted password or as soon as the server
//! reports a lockout.

pub mod attack;
pub mod candidates;
pub mod error;
pub mod probe;
pub mod report;
pub mod types;

pub use error::ProbeError;
