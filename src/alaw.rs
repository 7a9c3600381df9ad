
#[cfg(feature = "internal-no-panic")]
use no_panic::no_panic;

use crate::segment::{magnitude, segment};

/// Alternate mark inversion mask applied to every A-law code.
pub(crate) const ALAW_AMI_MASK: u8 = 0x55;

/// Silence (linear 0) encoded as A-law.
pub const ALAW_SILENCE: u8 = 0xd5;

// the decoding table is built at compile time from the G.711 reconstruction rule:
// segment 0 is linear with step 16, segments 1..=7 double the step and add the segment bias
const ALAW_VALUES: [i16; 256] = build_decode_table();

// values fit in 15 bits
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn build_decode_table() -> [i16; 256] {
    let mut table = [0i16; 256];
    let mut code = 0;
    while code < 256 {
        let a = (code as u8) ^ ALAW_AMI_MASK;
        let mantissa = ((a & 0x0f) as i32) << 4;
        let seg = ((a & 0x70) >> 4) as i32;
        let value = if seg == 0 {
            mantissa + 8
        } else {
            (mantissa + 0x108) << (seg - 1)
        };
        table[code] = if a & 0x80 != 0 { value as i16 } else { -(value as i16) };
        code += 1;
    }
    table
}

/// Decodes a 8-bit encoded G.711 A-law value to a linear 16-bit signed integer sample value.
///
/// A-law has no zero level: [`ALAW_SILENCE`] decodes to 8, the middle of the first step.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub fn decode_alaw(encoded: u8) -> i16 {
    ALAW_VALUES[usize::from(encoded)]
}

/// Encodes a linear 16-bit signed integer sample value to a 8-bit encoded G.711 A-law value.
///
/// A-law operates on 13-bit magnitudes, so the lowest 3 bits of `linear` are discarded.
/// Values beyond the last segment saturate to the largest code.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub fn encode_alaw(linear: i16) -> u8 {
    // A-law sets the sign bit for positive values
    let sign = if linear >= 0 {
        0x80
    } else {
        0x00
    };
    let magnitude = magnitude(linear >> 3); // 0..=4095, always inside segment 7
    let seg = segment(magnitude, 5);
    // segments 0 and 1 share the same step size
    let mantissa = (magnitude >> seg.max(1)) & 0x0f;
    #[allow(clippy::cast_possible_truncation)] // seg is at most 7, so the code is at most 0x7f
    let code = ((seg << 4) | mantissa) as u8;
    (sign | code) ^ ALAW_AMI_MASK
}

#[cfg(test)]
pub(crate) fn alaw_step_size(encoded: u8) -> i32 {
    let seg = ((encoded ^ ALAW_AMI_MASK) >> 4) & 0x07;
    16 << seg.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_alaw() {
        // spot values from the G.191 reference decoder
        assert_eq!(decode_alaw(0), -5504);
        assert_eq!(decode_alaw(1), -5248);
        assert_eq!(decode_alaw(42), -32256);
        assert_eq!(decode_alaw(85), -8);
        assert_eq!(decode_alaw(128), 5504);
        assert_eq!(decode_alaw(170), 32256);
        assert_eq!(decode_alaw(213), 8);
        assert_eq!(decode_alaw(255), 848);
    }

    #[test]
    fn test_decode_alaw_is_odd_symmetric() {
        for code in 0..=127u8 {
            assert_eq!(decode_alaw(code), -decode_alaw(code | 0x80));
        }
    }

    #[test]
    fn test_encode_alaw() {
        assert_eq!(encode_alaw(0), ALAW_SILENCE);
        assert_eq!(decode_alaw(ALAW_SILENCE), 8);
        assert_eq!(encode_alaw(-1), 0x55);
        assert_eq!(encode_alaw(15), 0xd5);
        assert_eq!(encode_alaw(16), 0xd4);
        assert_eq!(encode_alaw(5504), 128);
        assert_eq!(encode_alaw(-5504), 0);
    }

    #[test]
    fn test_encode_alaw_saturates() {
        assert_eq!(encode_alaw(i16::MAX), 0xaa);
        assert_eq!(encode_alaw(i16::MIN), 0x2a);
        assert_eq!(decode_alaw(encode_alaw(i16::MAX)), 32256);
        assert_eq!(decode_alaw(encode_alaw(i16::MIN)), -32256);
    }

    #[test]
    fn test_alaw_reencode_is_lossless() {
        for code in 0..=255u8 {
            assert_eq!(encode_alaw(decode_alaw(code)), code);
        }
    }

    #[test]
    fn test_alaw_roundtrip_error_is_within_step() {
        for linear in i16::MIN..=i16::MAX {
            let code = encode_alaw(linear);
            let error = (i32::from(linear) - i32::from(decode_alaw(code))).abs();
            assert!(error <= alaw_step_size(code), "linear {linear} code {code} error {error}");
        }
    }

    #[test]
    fn test_encode_alaw_is_monotonic() {
        let mut previous = decode_alaw(encode_alaw(i16::MIN));
        for linear in i16::MIN..=i16::MAX {
            let decoded = decode_alaw(encode_alaw(linear));
            assert!(decoded >= previous);
            previous = decoded;
        }
    }
}
