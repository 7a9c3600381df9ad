use std::io::{self, Read};

use log::debug;

use super::StreamState;
use crate::error::{Error, Result};
use crate::format::{Format, Law};

/// Reads G.711 codes of a fixed law from `R` and yields them converted to a target format.
///
/// For a linear PCM target every code read from the underlying reader produces two bytes
/// (low byte first). Conversion between the laws uses the direct conversion tables.
///
/// ```
/// use std::io::Read;
/// use g711_streams::{Decoder, Format};
///
/// let alaw = [0xd5u8, 0x80];
/// let mut decoder = Decoder::alaw(&alaw[..], Format::LinearPcm)?;
/// let mut lpcm = Vec::new();
/// decoder.read_to_end(&mut lpcm)?;
/// assert_eq!(lpcm, [0x08, 0x00, 0x80, 0x15]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Decoder<R> {
    inner: R,
    state: StreamState,
}

impl<R: Read> Decoder<R> {
    /// Creates a decoder reading `law` codes from `inner` and producing `target`.
    pub fn new<F>(inner: R, law: Law, target: F) -> Result<Decoder<R>>
    where
        F: TryInto<Format>,
        Error: From<F::Error>,
    {
        let target = target.try_into()?;
        debug!("{law} decoder created with {target} output");
        Ok(Decoder {
            inner,
            state: StreamState::new("decoder", law, target),
        })
    }

    /// Creates a decoder for an A-law source.
    pub fn alaw<F>(inner: R, target: F) -> Result<Decoder<R>>
    where
        F: TryInto<Format>,
        Error: From<F::Error>,
    {
        Decoder::new(inner, Law::ALaw, target)
    }

    /// Creates a decoder for a μ-law source.
    pub fn ulaw<F>(inner: R, target: F) -> Result<Decoder<R>>
    where
        F: TryInto<Format>,
        Error: From<F::Error>,
    {
        Decoder::new(inner, Law::ULaw, target)
    }

    /// Closes the decoder. Later reads fail with [`Error::Closed`].
    ///
    /// A pending high byte of a linear sample is discarded.
    pub fn close(&mut self) -> Result<()> {
        let pending = self.state.close()?;
        debug!("{} decoder closed, pending byte discarded: {}", self.state.law, pending.is_some());
        Ok(())
    }

    fn read_codes(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf).map_err(|err| Error::Io(err).into())
    }
}

impl<R> Decoder<R> {
    /// The law of the underlying reader.
    pub fn law(&self) -> Law {
        self.state.law
    }

    /// The format produced by this decoder.
    pub fn format(&self) -> Format {
        self.state.format
    }

    /// Number of converted bytes not yet returned to the caller (0 or 1).
    pub fn pending(&self) -> usize {
        usize::from(self.state.pending.is_some())
    }

    /// Whether [`Decoder::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.state.closed
    }

    /// Reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Mutable reference to the underlying reader. Reading from it directly skips codes.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    /// Returns the underlying reader. Codes which have been read but not returned are lost.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for Decoder<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.state.ensure_open()?;
        if buf.is_empty() {
            return Ok(0);
        }
        // the high byte left over from a one byte read goes out first
        if let Some(high) = self.state.pending.take() {
            buf[0] = high;
            return Ok(1);
        }
        let law = self.state.law;
        match self.state.format.law() {
            Some(target) => {
                let n = self.read_codes(buf)?;
                for code in &mut buf[..n] {
                    *code = target.transcode_from(law, *code);
                }
                Ok(n)
            }
            None if buf.len() == 1 => {
                let mut code = [0u8; 1];
                if self.read_codes(&mut code)? == 0 {
                    return Ok(0);
                }
                let [low, high] = law.decode(code[0]).to_le_bytes();
                buf[0] = low;
                self.state.pending = Some(high);
                Ok(1)
            }
            None => {
                let half = buf.len() / 2;
                let n = self.read_codes(&mut buf[..half])?;
                // expand from the back so that codes are not overwritten before they are decoded
                for i in (0..n).rev() {
                    let sample = law.decode(buf[i]).to_le_bytes();
                    buf[2 * i..2 * i + 2].copy_from_slice(&sample);
                }
                Ok(2 * n)
            }
        }
    }
}
