// SPDX-License-Identifier: CC0-1.0

#[cfg(feature = "internal-no-panic")]
use no_panic::no_panic;

use crate::segment::{magnitude, segment};

/// Silence (linear 0) encoded as μ-law.
pub const ULAW_SILENCE: u8 = 0xff;

// bias added to the 14-bit magnitude before the segment is located
const ULAW_BIAS: u32 = 33;
// biased magnitudes from here on are beyond the last segment
const ULAW_CLIP: u32 = 0x2000;

const ULAW_VALUES: [i16; 256] = build_decode_table();

// values fit in 15 bits
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn build_decode_table() -> [i16; 256] {
    let mut table = [0i16; 256];
    let mut code = 0;
    while code < 256 {
        let u = !(code as u8);
        let biased = ((((u & 0x0f) as i32) << 3) + 0x84) << ((u & 0x70) >> 4);
        table[code] = if u & 0x80 != 0 {
            (0x84 - biased) as i16
        } else {
            (biased - 0x84) as i16
        };
        code += 1;
    }
    table
}

/// Decodes a 8-bit encoded G.711 μ-law value to a linear 16-bit signed integer sample value.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub fn decode_ulaw(encoded: u8) -> i16 {
    ULAW_VALUES[usize::from(encoded)]
}

/// Encodes a linear 16-bit signed integer sample value to a 8-bit encoded G.711 μ-law value.
///
/// μ-law operates on 14-bit magnitudes, so the lowest 2 bits of `linear` are discarded.
/// Values beyond the last segment saturate to the largest code.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub fn encode_ulaw(linear: i16) -> u8 {
    let sign = if linear >= 0 {
        0x00
    } else {
        0x80
    };
    let biased = magnitude(linear >> 2) + ULAW_BIAS;
    let code = if biased >= ULAW_CLIP {
        0x7f
    } else {
        let seg = segment(biased, 6);
        (seg << 4) | ((biased >> (seg + 1)) & 0x0f)
    };
    #[allow(clippy::cast_possible_truncation)] // code is at most 0x7f
    let code = code as u8;
    !(sign | code)
}

#[cfg(test)]
pub(crate) fn ulaw_step_size(encoded: u8) -> i32 {
    8 << ((!encoded >> 4) & 0x07)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ulaw() {
        // spot values from the G.191 reference decoder
        assert_eq!(decode_ulaw(0), -32124);
        assert_eq!(decode_ulaw(15), -16764);
        assert_eq!(decode_ulaw(112), -120);
        assert_eq!(decode_ulaw(127), 0);
        assert_eq!(decode_ulaw(128), 32124);
        assert_eq!(decode_ulaw(200), 1372);
        assert_eq!(decode_ulaw(254), 8);
        assert_eq!(decode_ulaw(255), 0);
    }

    #[test]
    fn test_encode_ulaw() {
        assert_eq!(encode_ulaw(0), ULAW_SILENCE);
        assert_eq!(decode_ulaw(ULAW_SILENCE), 0);
        assert_eq!(encode_ulaw(-1), 0x7f);
        assert_eq!(encode_ulaw(8), 0xfe);
        assert_eq!(encode_ulaw(1372), 200);
        assert_eq!(encode_ulaw(-32124), 0);
    }

    #[test]
    fn test_encode_ulaw_saturates() {
        assert_eq!(encode_ulaw(i16::MAX), 0x80);
        assert_eq!(encode_ulaw(i16::MIN), 0x00);
        assert_eq!(decode_ulaw(encode_ulaw(i16::MAX)), 32124);
        assert_eq!(decode_ulaw(encode_ulaw(i16::MIN)), -32124);
    }

    #[test]
    fn test_ulaw_reencode_is_lossless() {
        for code in 0..=255u8 {
            // 0x7f is the negative zero, which encodes back to the positive zero
            let expected = if code == 0x7f { ULAW_SILENCE } else { code };
            assert_eq!(encode_ulaw(decode_ulaw(code)), expected);
        }
    }

    #[test]
    fn test_ulaw_roundtrip_error_is_within_step() {
        for linear in i16::MIN..=i16::MAX {
            let code = encode_ulaw(linear);
            let error = (i32::from(linear) - i32::from(decode_ulaw(code))).abs();
            assert!(error <= ulaw_step_size(code), "linear {linear} code {code} error {error}");
        }
    }

    #[test]
    fn test_encode_ulaw_is_monotonic() {
        let mut previous = decode_ulaw(encode_ulaw(i16::MIN));
        for linear in i16::MIN..=i16::MAX {
            let decoded = decode_ulaw(encode_ulaw(linear));
            assert!(decoded >= previous);
            previous = decoded;
        }
    }
}
