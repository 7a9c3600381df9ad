use std::io::{self, Write};

use log::debug;

use super::StreamState;
use crate::error::{Error, Result};
use crate::format::{Format, Law};

/// Accepts bytes in a source format and writes them to `W` as G.711 codes of a fixed law.
///
/// With a linear PCM source, a write which ends in the middle of a sample keeps the odd byte
/// and completes the sample with the first byte of the next write. [`Encoder::close`] reports
/// [`Error::TruncatedStream`] if a byte is still pending at that point.
///
/// ```
/// use std::io::Write;
/// use g711_streams::{Encoder, Format};
///
/// let mut encoder = Encoder::ulaw(Vec::new(), Format::LinearPcm)?;
/// encoder.write_all(&[0x00, 0x00, 0xff])?;
/// assert_eq!(encoder.pending(), 1);
/// encoder.write_all(&[0xff])?;
/// assert_eq!(encoder.finish()?, [0xff, 0x7f]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Encoder<W> {
    inner: W,
    state: StreamState,
    // converted codes of the current write
    scratch: Vec<u8>,
}

impl<W: Write> Encoder<W> {
    /// Creates an encoder accepting `source` bytes and writing `law` codes to `inner`.
    pub fn new<F>(inner: W, law: Law, source: F) -> Result<Encoder<W>>
    where
        F: TryInto<Format>,
        Error: From<F::Error>,
    {
        let source = source.try_into()?;
        debug!("{law} encoder created with {source} input");
        Ok(Encoder {
            inner,
            state: StreamState::new("encoder", law, source),
            scratch: Vec::new(),
        })
    }

    /// Creates an encoder writing A-law codes.
    pub fn alaw<F>(inner: W, source: F) -> Result<Encoder<W>>
    where
        F: TryInto<Format>,
        Error: From<F::Error>,
    {
        Encoder::new(inner, Law::ALaw, source)
    }

    /// Creates an encoder writing μ-law codes.
    pub fn ulaw<F>(inner: W, source: F) -> Result<Encoder<W>>
    where
        F: TryInto<Format>,
        Error: From<F::Error>,
    {
        Encoder::new(inner, Law::ULaw, source)
    }

    /// Flushes the underlying writer and closes the encoder. Later writes fail with
    /// [`Error::Closed`].
    ///
    /// Returns [`Error::TruncatedStream`] if half of a linear sample was still pending.
    /// A failed flush of the underlying writer is returned instead, as [`Error::Io`].
    /// The pending byte is discarded and the encoder is closed in any case.
    pub fn close(&mut self) -> Result<()> {
        let pending = self.state.close()?;
        let flushed = self.inner.flush();
        if pending.is_some() {
            debug!("{} encoder closed with a truncated linear sample", self.state.law);
        }
        flushed?;
        if pending.is_some() {
            return Err(Error::TruncatedStream);
        }
        debug!("{} encoder closed", self.state.law);
        Ok(())
    }

    /// Closes the encoder and returns the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.close()?;
        Ok(self.inner)
    }

    /// Converts `buf` into `scratch`. Returns the new odd byte and whether the pending byte
    /// was completed by the first byte of `buf`.
    fn convert(&mut self, buf: &[u8]) -> (Option<u8>, bool) {
        let law = self.state.law;
        self.scratch.clear();
        match self.state.format.law() {
            Some(source) => {
                self.scratch.extend(buf.iter().map(|code| law.transcode_from(source, *code)));
                (None, false)
            }
            None => {
                let mut rest = buf;
                let mut completed = false;
                if let (Some(low), Some((high, tail))) = (self.state.pending, rest.split_first()) {
                    self.scratch.push(law.encode(i16::from_le_bytes([low, *high])));
                    rest = tail;
                    completed = true;
                }
                let frames = rest.chunks_exact(2);
                let odd = frames.remainder().first().copied();
                self.scratch.extend(
                    frames.map(|frame| law.encode(i16::from_le_bytes([frame[0], frame[1]]))),
                );
                (odd, completed)
            }
        }
    }

    /// Writes `scratch` downstream and returns the number of codes written. An error is
    /// returned only if nothing was written.
    fn write_codes(&mut self) -> io::Result<usize> {
        let mut written = 0;
        while written < self.scratch.len() {
            match self.inner.write(&self.scratch[written..]) {
                Ok(0) => {
                    if written > 0 {
                        break;
                    }
                    return Err(Error::Io(io::ErrorKind::WriteZero.into()).into());
                }
                Ok(n) => written += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => {
                    if written > 0 {
                        let law = self.state.law;
                        debug!("{law} encoder short write after {written} codes: {err}");
                        break;
                    }
                    return Err(Error::Io(err).into());
                }
            }
        }
        Ok(written)
    }
}

impl<W> Encoder<W> {
    /// The law written to the underlying writer.
    pub fn law(&self) -> Law {
        self.state.law
    }

    /// The format accepted by this encoder.
    pub fn format(&self) -> Format {
        self.state.format
    }

    /// Number of buffered bytes waiting for the rest of their sample (0 or 1).
    pub fn pending(&self) -> usize {
        usize::from(self.state.pending.is_some())
    }

    /// Whether [`Encoder::close`] has been called.
    pub fn is_closed(&self) -> bool {
        self.state.closed
    }

    /// Reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutable reference to the underlying writer. Writing to it directly interleaves with
    /// the encoded output.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Returns the underlying writer without closing. A pending byte is lost.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Encoder<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.state.ensure_open()?;
        if buf.is_empty() {
            return Ok(0);
        }
        let (odd, completed) = self.convert(buf);
        // state only changes for codes which reached the underlying writer, so that the
        // caller can retry the unconsumed bytes
        let written = self.write_codes()?;
        if written == self.scratch.len() {
            self.state.pending = odd;
            return Ok(buf.len());
        }
        // short write: report the source bytes behind the written codes
        if completed {
            self.state.pending = None;
            Ok(2 * written - 1)
        } else {
            Ok(written * self.state.format.frame_size())
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        self.state.ensure_open()?;
        self.inner.flush().map_err(|err| Error::Io(err).into())
    }
}
