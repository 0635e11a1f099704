// SPDX-License-Identifier: PMPL-1.0-or-later

//! Probe session: feeds candidates to the server one round trip at a time

use super::{classify, read_reply, send_guess};
use crate::error::ProbeError;
use crate::types::*;
use std::io::{Read, Write};

/// Drives a borrowed transport with strict request/reply alternation.
///
/// Once the server reports a lockout the session latches: later guesses and
/// runs report `Lockout` without touching the transport.
pub struct ProbeSession<'t, T> {
    transport: &'t mut T,
    attempts: u64,
    locked_out: bool,
}

impl<'t, T: Read + Write> ProbeSession<'t, T> {
    pub fn new(transport: &'t mut T) -> Self {
        Self {
            transport,
            attempts: 0,
            locked_out: false,
        }
    }

    /// Guesses sent so far.
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    pub fn is_locked_out(&self) -> bool {
        self.locked_out
    }

    /// One round trip: send the guess, read exactly one reply, classify it.
    pub fn guess(&mut self, candidate: &str) -> Result<Outcome, ProbeError> {
        if self.locked_out {
            return Ok(Outcome::Lockout);
        }

        send_guess(&mut *self.transport, candidate)?;
        self.attempts += 1;
        let reply = read_reply(&mut *self.transport)?;
        tracing::trace!(attempt = self.attempts, candidate, reply = %reply, "guess");

        let outcome = classify(&reply, candidate);
        if outcome == Outcome::Lockout {
            self.locked_out = true;
        }
        Ok(outcome)
    }

    /// Consume `source` until a match, a lockout, or exhaustion.
    pub fn run<I>(&mut self, source: I) -> Result<SessionResult, ProbeError>
    where
        I: IntoIterator<Item = Candidate>,
    {
        if self.locked_out {
            return Ok(SessionResult::Lockout);
        }

        for candidate in source {
            match self.guess(&candidate)? {
                Outcome::Match(found) => return Ok(SessionResult::Found(found)),
                Outcome::Lockout => return Ok(SessionResult::Lockout),
                Outcome::Continue => {}
            }
        }

        Ok(SessionResult::Exhausted)
    }
}
