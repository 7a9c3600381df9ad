//! Transcoding wrappers around `std::io` readers and writers.
//!
//! [`Decoder`] reads G.711 codes from an underlying reader and yields them in another format.
//! [`Encoder`] accepts bytes in some format and writes G.711 codes to an underlying writer.
//! Linear PCM is always 16-bit signed little-endian.

mod decoder;
mod encoder;

pub use decoder::Decoder;
pub use encoder::Encoder;

use log::warn;

use crate::error::{Error, Result};
use crate::format::{Format, Law};

/// Per-stream conversion state shared by [`Decoder`] and [`Encoder`].
#[derive(Debug)]
pub(crate) struct StreamState {
    name: &'static str,
    law: Law,
    format: Format,
    // half of a linear sample waiting for its other half, only used when format is LinearPcm
    pending: Option<u8>,
    closed: bool,
}

impl StreamState {
    pub(crate) fn new(name: &'static str, law: Law, format: Format) -> StreamState {
        StreamState {
            name,
            law,
            format,
            pending: None,
            closed: false,
        }
    }

    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }
        Ok(())
    }

    /// Marks the stream closed and returns the byte which was still pending.
    pub(crate) fn close(&mut self) -> Result<Option<u8>> {
        self.ensure_open()?;
        self.closed = true;
        Ok(self.pending.take())
    }
}

impl Drop for StreamState {
    fn drop(&mut self) {
        if !self.closed && self.pending.is_some() {
            warn!("{} {} stream dropped with half a linear sample pending, discarding it",
                self.law, self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close() {
        let mut state = StreamState::new("encoder", Law::ALaw, Format::LinearPcm);
        assert!(state.ensure_open().is_ok());
        state.pending = Some(3);
        assert_eq!(state.close().ok(), Some(Some(3)));
        assert!(matches!(state.ensure_open(), Err(Error::Closed)));
        assert!(matches!(state.close(), Err(Error::Closed)));
        assert_eq!(state.pending, None);
    }
}
