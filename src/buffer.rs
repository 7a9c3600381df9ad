//! Whole-buffer conversions for data which is already in memory.

use crate::error::{Error, Result};
use crate::format::Law;

/// Encodes 16-bit signed integer samples to `law` codes.
///
/// `out_codes` must have the same length as `samples`. If an error is returned,
/// `out_codes` is left unmodified.
pub fn encode_samples(law: Law, samples: &[i16], out_codes: &mut [u8]) -> Result<()> {
    if samples.len() != out_codes.len() {
        return Err(Error::InvalidBufferSize);
    }
    for (code, sample) in out_codes.iter_mut().zip(samples) {
        *code = law.encode(*sample);
    }
    Ok(())
}

/// Decodes `law` codes to 16-bit signed integer samples.
///
/// `out_samples` must have the same length as `codes`. If an error is returned,
/// `out_samples` is left unmodified.
pub fn decode_samples(law: Law, codes: &[u8], out_samples: &mut [i16]) -> Result<()> {
    if codes.len() != out_samples.len() {
        return Err(Error::InvalidBufferSize);
    }
    for (sample, code) in out_samples.iter_mut().zip(codes) {
        *sample = law.decode(*code);
    }
    Ok(())
}

/// Encodes little-endian 16-bit linear PCM bytes to `law` codes.
///
/// Returns [`Error::TruncatedStream`] if `lpcm` has an odd length.
pub fn encode_buffer(law: Law, lpcm: &[u8]) -> Result<Vec<u8>> {
    if lpcm.len() % 2 != 0 {
        return Err(Error::TruncatedStream);
    }
    Ok(lpcm
        .chunks_exact(2)
        .map(|frame| law.encode(i16::from_le_bytes([frame[0], frame[1]])))
        .collect())
}

/// Decodes `law` codes to little-endian 16-bit linear PCM bytes.
pub fn decode_buffer(law: Law, codes: &[u8]) -> Vec<u8> {
    let mut lpcm = Vec::with_capacity(codes.len() * 2);
    for code in codes {
        lpcm.extend_from_slice(&law.decode(*code).to_le_bytes());
    }
    lpcm
}

/// Converts `from` codes to the other law using the direct conversion tables.
pub fn transcode_buffer(from: Law, codes: &[u8]) -> Vec<u8> {
    let to = match from {
        Law::ALaw => Law::ULaw,
        Law::ULaw => Law::ALaw,
    };
    codes.iter().map(|code| to.transcode_from(from, *code)).collect()
}
