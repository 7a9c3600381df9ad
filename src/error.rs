use std::convert::Infallible;
use std::io;

use thiserror::Error;

/// Result type for codec and stream operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error values.
#[derive(Error, Debug)]
pub enum Error {
    /// Format tag or name is not one of linear PCM, A-law or μ-law.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Linear PCM input ended in the middle of a 16-bit sample.
    #[error("truncated stream: linear PCM input ended with an odd byte")]
    TruncatedStream,

    /// The underlying reader or writer failed.
    #[error("underlying stream error: {0}")]
    Io(#[from] io::Error),

    /// The stream wrapper has already been closed.
    #[error("stream is closed")]
    Closed,

    /// Buffer has an invalid size.
    #[error("invalid buffer size")]
    InvalidBufferSize,
}

impl From<Infallible> for Error {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            // keep the kind so that callers can still retry Interrupted and WouldBlock
            Error::Io(inner) => inner.kind(),
            Error::TruncatedStream => io::ErrorKind::UnexpectedEof,
            Error::UnsupportedFormat(_) | Error::InvalidBufferSize => io::ErrorKind::InvalidInput,
            Error::Closed => io::ErrorKind::Other,
        };
        io::Error::new(kind, err)
    }
}
