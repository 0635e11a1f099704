// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for probe runs.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// Send or receive on the transport failed.
    #[error("transport error: {0}")]
    Transport(#[source] io::Error),

    /// The server closed the connection mid-run.
    #[error("connection closed by server")]
    ConnectionClosed,

    /// The server did not answer within the configured timeout.
    #[error("timed out waiting for server")]
    Timeout,

    /// The reply was not valid UTF-8.
    #[error("reply is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// Word list file does not exist.
    #[error("word list not found: {}", path.display())]
    ResourceNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Word list exists but could not be read.
    #[error("failed to read word list {}: {source}", path.display())]
    WordList {
        /// Path being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProbeError {
    /// Returns true for failures of the connection itself.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::ConnectionClosed | Self::Timeout
        )
    }
}

impl From<io::Error> for ProbeError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            // Socket timeouts surface as WouldBlock on Unix and TimedOut on Windows.
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut => Self::Timeout,
            io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::BrokenPipe => Self::ConnectionClosed,
            _ => Self::Transport(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_timeouts_map_to_timeout() {
        let err: ProbeError = io::Error::from(io::ErrorKind::WouldBlock).into();
        assert!(matches!(err, ProbeError::Timeout));
        let err: ProbeError = io::Error::from(io::ErrorKind::TimedOut).into();
        assert!(matches!(err, ProbeError::Timeout));
    }

    #[test]
    fn reset_maps_to_connection_closed() {
        let err: ProbeError = io::Error::from(io::ErrorKind::ConnectionReset).into();
        assert!(matches!(err, ProbeError::ConnectionClosed));
        assert!(err.is_transport());
    }

    #[test]
    fn refused_stays_transport() {
        let err: ProbeError = io::Error::from(io::ErrorKind::ConnectionRefused).into();
        assert!(matches!(err, ProbeError::Transport(_)));
        assert!(err.is_transport());
    }

    #[test]
    fn missing_word_list_is_not_transport() {
        let err = ProbeError::ResourceNotFound {
            path: PathBuf::from("passwords.txt"),
        };
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "word list not found: passwords.txt");
    }
}
