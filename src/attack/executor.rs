// SPDX-License-Identifier: PMPL-1.0-or-later

//! Attack execution engine
//!
//! Each strategy is a small state machine: build a candidate source for the
//! current search space, run it through the probe session, then either stop
//! or move to the next space. One transport serves the whole run.

use crate::attack::strategies::AttackStrategy;
use crate::candidates::{make_caseperm_source, BruteForce};
use crate::error::ProbeError;
use crate::probe::ProbeSession;
use crate::report::RunReport;
use crate::types::*;
use std::collections::VecDeque;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Instant;

enum Escalation {
    Escalating(usize),
    Done(RunOutcome),
}

enum WordSearch {
    Trying(VecDeque<String>),
    Done(RunOutcome),
}

pub struct AttackExecutor {
    config: AttackConfig,
    strategy: AttackStrategy,
}

impl AttackExecutor {
    pub fn new(config: AttackConfig) -> Self {
        let strategy = AttackStrategy::from_config(&config);
        Self { config, strategy }
    }

    pub fn strategy(&self) -> &AttackStrategy {
        &self.strategy
    }

    /// Connect to the configured server and run.
    ///
    /// The stream lives for this call only and is closed on every exit path.
    pub fn execute(&self) -> Result<RunReport, ProbeError> {
        let mut stream = self.connect()?;
        self.execute_on(&mut stream)
    }

    /// Run against an already-connected transport.
    pub fn execute_on<T: Read + Write>(&self, transport: &mut T) -> Result<RunReport, ProbeError> {
        tracing::info!(
            server = %self.config.target(),
            strategy = self.strategy.name(),
            "{}",
            self.strategy.description()
        );

        let created_at = chrono::Utc::now().to_rfc3339();
        let started = Instant::now();
        let mut session = ProbeSession::new(transport);
        let mut spaces_tried = 0;

        let outcome = match &self.strategy {
            AttackStrategy::LengthEscalation { start, max_length } => {
                self.escalate(&mut session, *start, *max_length, &mut spaces_tried)?
            }
            AttackStrategy::WordList { words } => {
                self.try_words(&mut session, words, &mut spaces_tried)?
            }
        };

        tracing::info!(attempts = session.attempts(), "finished: {}", outcome);

        Ok(RunReport {
            created_at,
            target: self.config.target(),
            strategy: self.strategy.name().to_string(),
            outcome,
            attempts: session.attempts(),
            spaces_tried,
            elapsed_ms: u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        })
    }

    fn escalate<T: Read + Write>(
        &self,
        session: &mut ProbeSession<'_, T>,
        start: usize,
        max_length: Option<usize>,
        spaces_tried: &mut usize,
    ) -> Result<RunOutcome, ProbeError> {
        let mut state = Escalation::Escalating(start);

        loop {
            state = match state {
                Escalation::Done(outcome) => return Ok(outcome),
                Escalation::Escalating(length) if max_length.is_some_and(|max| length > max) => {
                    Escalation::Done(RunOutcome::NotFound)
                }
                Escalation::Escalating(length) => {
                    // An absent source (length 0) simply has nothing to send.
                    let source = BruteForce::with_alphabet(length, &self.config.alphabet);
                    tracing::debug!(
                        length,
                        candidates = ?source.as_ref().and_then(BruteForce::cardinality),
                        "trying length"
                    );
                    *spaces_tried += 1;

                    match session.run(source.into_iter().flatten())? {
                        SessionResult::Found(password) => {
                            Escalation::Done(RunOutcome::Success(password))
                        }
                        SessionResult::Lockout => Escalation::Done(RunOutcome::Lockout),
                        SessionResult::Exhausted => Escalation::Escalating(length + 1),
                    }
                }
            };
        }
    }

    fn try_words<T: Read + Write>(
        &self,
        session: &mut ProbeSession<'_, T>,
        words: &[String],
        spaces_tried: &mut usize,
    ) -> Result<RunOutcome, ProbeError> {
        let mut state = WordSearch::Trying(words.iter().cloned().collect());

        loop {
            state = match state {
                WordSearch::Done(outcome) => return Ok(outcome),
                WordSearch::Trying(mut remaining) => match remaining.pop_front() {
                    None => WordSearch::Done(RunOutcome::NotFound),
                    Some(word) => {
                        let source = make_caseperm_source(&word);
                        tracing::debug!(
                            word = %word,
                            candidates = ?source.cardinality(),
                            "trying word"
                        );
                        *spaces_tried += 1;

                        match session.run(source)? {
                            SessionResult::Found(password) => {
                                WordSearch::Done(RunOutcome::Success(password))
                            }
                            SessionResult::Lockout => WordSearch::Done(RunOutcome::Lockout),
                            SessionResult::Exhausted => WordSearch::Trying(remaining),
                        }
                    }
                },
            };
        }
    }

    fn connect(&self) -> Result<TcpStream, ProbeError> {
        let addrs: Vec<SocketAddr> = (self.config.host.as_str(), self.config.port)
            .to_socket_addrs()?
            .collect();
        tracing::debug!(server = %self.config.target(), ?addrs, "connecting");

        let mut last_err = None;
        for addr in &addrs {
            let attempt = match self.config.timeout {
                Some(timeout) => TcpStream::connect_timeout(addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => {
                    stream.set_read_timeout(self.config.timeout)?;
                    stream.set_write_timeout(self.config.timeout)?;
                    stream.set_nodelay(true)?;
                    return Ok(stream);
                }
                Err(err) => last_err = Some(err),
            }
        }

        Err(match last_err {
            Some(err) => err.into(),
            None => ProbeError::InvalidConfig(format!(
                "{} did not resolve to any address",
                self.config.target()
            )),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Server that accepts exactly one password and counts guesses.
    struct OnePassword {
        password: &'static str,
        lock_after: Option<usize>,
        received: Vec<String>,
        reply: Vec<u8>,
    }

    impl OnePassword {
        fn new(password: &'static str) -> Self {
            Self {
                password,
                lock_after: None,
                received: Vec::new(),
                reply: Vec::new(),
            }
        }
    }

    impl Write for OnePassword {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let guess = String::from_utf8_lossy(buf).into_owned();
            self.reply = if self.lock_after == Some(self.received.len()) {
                LOCKOUT_REPLY.as_bytes().to_vec()
            } else if guess == self.password {
                SUCCESS_REPLY.as_bytes().to_vec()
            } else {
                b"Wrong password!".to_vec()
            };
            self.received.push(guess);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Read for OnePassword {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            let n = self.reply.len().min(buf.len());
            buf[..n].copy_from_slice(&self.reply[..n]);
            self.reply.drain(..n);
            Ok(n)
        }
    }

    #[test]
    fn escalates_until_found() {
        let executor = AttackExecutor::new(AttackConfig::default());
        let mut server = OnePassword::new("a2");
        let report = executor.execute_on(&mut server).unwrap();

        assert_eq!(report.outcome, RunOutcome::Success("a2".to_string()));
        assert_eq!(report.attempts, 36 + 29);
        assert_eq!(report.spaces_tried, 2);
        assert_eq!(server.received[35], "9");
        assert_eq!(server.received[36], "aa");
    }

    #[test]
    fn ceiling_ends_with_not_found() {
        let config = AttackConfig {
            alphabet: Alphabet::new("ab").unwrap(),
            max_length: Some(2),
            ..AttackConfig::default()
        };
        let executor = AttackExecutor::new(config);
        let mut server = OnePassword::new("abc");
        let report = executor.execute_on(&mut server).unwrap();

        assert_eq!(report.outcome, RunOutcome::NotFound);
        assert_eq!(report.attempts, 2 + 4);
        assert_eq!(report.spaces_tried, 2);
    }

    #[test]
    fn lockout_stops_escalation() {
        let executor = AttackExecutor::new(AttackConfig::default());
        let mut server = OnePassword::new("zzzz");
        server.lock_after = Some(40);
        let report = executor.execute_on(&mut server).unwrap();

        assert_eq!(report.outcome, RunOutcome::Lockout);
        assert_eq!(server.received.len(), 41);
    }

    #[test]
    fn word_list_stops_at_first_match() {
        let config = AttackConfig {
            words: Some(vec!["admin".to_string(), "root".to_string()]),
            ..AttackConfig::default()
        };
        let executor = AttackExecutor::new(config);
        let mut server = OnePassword::new("ADMIN");
        let report = executor.execute_on(&mut server).unwrap();

        assert_eq!(report.outcome, RunOutcome::Success("ADMIN".to_string()));
        assert_eq!(report.attempts, 32);
        assert!(server
            .received
            .iter()
            .all(|guess| guess.eq_ignore_ascii_case("admin")));
    }

    #[test]
    fn exhausted_word_list_is_not_found() {
        let config = AttackConfig {
            words: Some(vec!["ab".to_string(), "c".to_string()]),
            ..AttackConfig::default()
        };
        let executor = AttackExecutor::new(config);
        let mut server = OnePassword::new("nope");
        let report = executor.execute_on(&mut server).unwrap();

        assert_eq!(report.outcome, RunOutcome::NotFound);
        assert_eq!(server.received, vec!["ab", "aB", "Ab", "AB", "c", "C"]);
    }

    #[test]
    fn empty_word_list_sends_nothing() {
        let config = AttackConfig {
            words: Some(Vec::new()),
            ..AttackConfig::default()
        };
        let executor = AttackExecutor::new(config);
        let mut server = OnePassword::new("x");
        let report = executor.execute_on(&mut server).unwrap();

        assert_eq!(report.outcome, RunOutcome::NotFound);
        assert_eq!(report.attempts, 0);
        assert!(server.received.is_empty());
    }
}
