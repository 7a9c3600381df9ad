use std::fmt;
use std::str::FromStr;

#[cfg(feature = "internal-no-panic")]
use no_panic::no_panic;

use crate::{alaw_to_ulaw, decode_alaw, decode_ulaw, encode_alaw, encode_ulaw, ulaw_to_alaw};
use crate::error::Error;

/// G.711 companding law.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Law {
    /// ITU-T G.711 A-law.
    ALaw,
    /// ITU-T G.711 μ-law.
    ULaw,
}

impl Law {
    /// Encodes a linear sample with this law.
    #[cfg_attr(feature = "internal-no-panic", no_panic)]
    #[inline(always)]
    pub fn encode(self, linear: i16) -> u8 {
        match self {
            Law::ALaw => encode_alaw(linear),
            Law::ULaw => encode_ulaw(linear),
        }
    }

    /// Decodes a code of this law to a linear sample.
    #[cfg_attr(feature = "internal-no-panic", no_panic)]
    #[inline(always)]
    pub fn decode(self, encoded: u8) -> i16 {
        match self {
            Law::ALaw => decode_alaw(encoded),
            Law::ULaw => decode_ulaw(encoded),
        }
    }

    /// Converts a code of law `from` to this law using the direct conversion tables.
    #[cfg_attr(feature = "internal-no-panic", no_panic)]
    #[inline(always)]
    pub fn transcode_from(self, from: Law, encoded: u8) -> u8 {
        match (from, self) {
            (Law::ALaw, Law::ULaw) => alaw_to_ulaw(encoded),
            (Law::ULaw, Law::ALaw) => ulaw_to_alaw(encoded),
            _ => encoded,
        }
    }

    /// The code which represents silence.
    pub fn silence(self) -> u8 {
        match self {
            Law::ALaw => crate::ALAW_SILENCE,
            Law::ULaw => crate::ULAW_SILENCE,
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Law::ALaw => f.write_str("A-law"),
            Law::ULaw => f.write_str("μ-law"),
        }
    }
}

/// Sample format of a raw byte stream.
///
/// Numeric tags are 0 for A-law, 1 for μ-law and 2 for linear PCM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// 8-bit A-law codes.
    ALaw,
    /// 8-bit μ-law codes.
    ULaw,
    /// 16-bit signed little-endian linear PCM.
    LinearPcm,
}

impl Format {
    /// Number of bytes in one sample frame.
    pub fn frame_size(self) -> usize {
        match self {
            Format::ALaw | Format::ULaw => 1,
            Format::LinearPcm => 2,
        }
    }

    /// The companding law of this format, `None` for linear PCM.
    pub fn law(self) -> Option<Law> {
        match self {
            Format::ALaw => Some(Law::ALaw),
            Format::ULaw => Some(Law::ULaw),
            Format::LinearPcm => None,
        }
    }
}

impl From<Law> for Format {
    fn from(law: Law) -> Self {
        match law {
            Law::ALaw => Format::ALaw,
            Law::ULaw => Format::ULaw,
        }
    }
}

impl TryFrom<u8> for Format {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(Format::ALaw),
            1 => Ok(Format::ULaw),
            2 => Ok(Format::LinearPcm),
            _ => Err(Error::UnsupportedFormat(format!("tag {tag}"))),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "alaw" | "a-law" | "pcma" => Ok(Format::ALaw),
            "ulaw" | "u-law" | "mulaw" | "mu-law" | "μ-law" | "µ-law" | "pcmu" => {
                Ok(Format::ULaw)
            }
            "lpcm" | "pcm" | "linear" | "s16le" => Ok(Format::LinearPcm),
            _ => Err(Error::UnsupportedFormat(s.to_string())),
        }
    }
}

impl TryFrom<&str> for Format {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::ALaw => f.write_str("A-law"),
            Format::ULaw => f.write_str("μ-law"),
            Format::LinearPcm => f.write_str("linear PCM"),
        }
    }
}
