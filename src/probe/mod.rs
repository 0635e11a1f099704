// SPDX-License-Identifier: PMPL-1.0-or-later

//! Guess/reply protocol against the authentication server
//!
//! The wire format is fixed by the server: the client writes the raw UTF-8
//! bytes of a guess with no delimiter, the server answers with up to 1024
//! bytes of UTF-8 text compared by exact equality against two sentinels.

pub mod session;

use crate::error::ProbeError;
use crate::types::*;
use std::io::{self, Read, Write};

pub use session::ProbeSession;

/// Classify a decoded reply. Anything but the two sentinels means "wrong guess".
pub fn classify(reply: &str, candidate: &str) -> Outcome {
    match reply {
        SUCCESS_REPLY => Outcome::Match(candidate.to_string()),
        LOCKOUT_REPLY => Outcome::Lockout,
        _ => Outcome::Continue,
    }
}

/// Run one candidate source to completion on a borrowed transport.
pub fn run<I, T>(source: I, transport: &mut T) -> Result<SessionResult, ProbeError>
where
    I: IntoIterator<Item = Candidate>,
    T: Read + Write,
{
    ProbeSession::new(transport).run(source)
}

/// Write a guess in full.
pub(crate) fn send_guess<T: Write>(transport: &mut T, candidate: &str) -> Result<(), ProbeError> {
    transport.write_all(candidate.as_bytes())?;
    transport.flush()?;
    Ok(())
}

/// Read one reply.
///
/// Blocks until at least one byte arrives. Replies carry no delimiter, so a
/// read that ends inside a multi-byte character, or that so far spells only
/// the start of a sentinel, keeps reading until the reply is complete or the
/// buffer fills. The transport's read timeout bounds the wait.
pub(crate) fn read_reply<T: Read>(transport: &mut T) -> Result<String, ProbeError> {
    let mut buf = [0u8; REPLY_BUFFER_SIZE];
    let mut filled = 0;

    loop {
        let n = match transport.read(&mut buf[filled..]) {
            Ok(0) => return Err(ProbeError::ConnectionClosed),
            Ok(n) => n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err.into()),
        };
        filled += n;

        match std::str::from_utf8(&buf[..filled]) {
            Ok(text) if is_partial_sentinel(text) && filled < buf.len() => continue,
            Ok(text) => return Ok(text.to_string()),
            Err(err) if err.error_len().is_none() && filled < buf.len() => continue,
            Err(err) => return Err(ProbeError::Decode(err)),
        }
    }
}

fn is_partial_sentinel(text: &str) -> bool {
    [SUCCESS_REPLY, LOCKOUT_REPLY]
        .iter()
        .any(|sentinel| sentinel.len() > text.len() && sentinel.starts_with(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Reader that hands out its chunks one `read` call at a time.
    struct Chunked(Vec<Vec<u8>>);

    impl Read for Chunked {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() {
                return Ok(0);
            }
            let chunk = self.0.remove(0);
            buf[..chunk.len()].copy_from_slice(&chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn classify_sentinels() {
        assert_eq!(
            classify("Connection success!", "abc"),
            Outcome::Match("abc".to_string())
        );
        assert_eq!(classify("Too many attempts", "abc"), Outcome::Lockout);
        assert_eq!(classify("Wrong password!", "abc"), Outcome::Continue);
    }

    #[test]
    fn classify_is_exact() {
        assert_eq!(classify("Connection success!\n", "x"), Outcome::Continue);
        assert_eq!(classify("connection success!", "x"), Outcome::Continue);
        assert_eq!(classify(" Too many attempts", "x"), Outcome::Continue);
    }

    #[test]
    fn read_reply_decodes_text() {
        let mut reader = Cursor::new(b"Wrong password!".to_vec());
        assert_eq!(read_reply(&mut reader).unwrap(), "Wrong password!");
    }

    #[test]
    fn read_reply_on_closed_stream() {
        let mut reader = Cursor::new(Vec::new());
        assert!(matches!(
            read_reply(&mut reader),
            Err(ProbeError::ConnectionClosed)
        ));
    }

    #[test]
    fn read_reply_rejects_invalid_utf8() {
        let mut reader = Cursor::new(vec![0x66, 0xff, 0x6f]);
        assert!(matches!(read_reply(&mut reader), Err(ProbeError::Decode(_))));
    }

    #[test]
    fn read_reply_joins_split_character() {
        let bytes = "héllo".as_bytes();
        let mut reader = Chunked(vec![bytes[..2].to_vec(), bytes[2..].to_vec()]);
        assert_eq!(read_reply(&mut reader).unwrap(), "héllo");
    }

    #[test]
    fn read_reply_joins_split_sentinel() {
        let mut reader = Chunked(vec![b"Conne".to_vec(), b"ction success!".to_vec()]);
        assert_eq!(read_reply(&mut reader).unwrap(), SUCCESS_REPLY);

        let mut reader = Chunked(vec![
            b"Too".to_vec(),
            b" many ".to_vec(),
            b"attempts".to_vec(),
        ]);
        assert_eq!(read_reply(&mut reader).unwrap(), LOCKOUT_REPLY);
    }

    #[test]
    fn read_reply_stops_on_non_sentinel_text() {
        let mut reader = Chunked(vec![b"Wrong".to_vec(), b" password!".to_vec()]);
        assert_eq!(read_reply(&mut reader).unwrap(), "Wrong");
    }

    #[test]
    fn read_reply_is_capped_at_buffer_size() {
        let mut reader = Cursor::new(vec![b'x'; REPLY_BUFFER_SIZE * 2]);
        assert_eq!(read_reply(&mut reader).unwrap().len(), REPLY_BUFFER_SIZE);
    }
}
