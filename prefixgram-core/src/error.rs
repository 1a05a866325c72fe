//! Core error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while emitting prefix n-gram records
///
/// Content is never an error: empty lines, empty words and odd bytes all
/// produce well-defined output. Only the surrounding I/O can fail.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The input file is missing, unreadable or permission-denied
    #[error("cannot open input {}", path.display())]
    InputUnavailable {
        /// Path that failed to open
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// Reading failed after the input was opened
    #[error("read failed at line {line}")]
    Read {
        /// 1-based number of the line being read
        line: u64,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The record sink rejected a write or flush
    #[error("write failed")]
    Write(#[source] io::Error),
}

impl CoreError {
    /// True when the downstream reader closed the output pipe
    ///
    /// A mapper piped into `head` or an early-exiting reducer sees this; it
    /// is not a failure of the pass itself.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, CoreError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
