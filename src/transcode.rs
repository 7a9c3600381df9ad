
#[cfg(feature = "internal-no-panic")]
use no_panic::no_panic;

use crate::alaw::ALAW_AMI_MASK;

// A-law magnitude code (sign bit cleared, AMI mask removed) to μ-law magnitude code
// (before 1s' complement), from the G.711 direct conversion tables
const A2U: [u8; 128] = [
    1, 3, 5, 7, 9, 11, 13, 15,
    16, 17, 18, 19, 20, 21, 22, 23,
    24, 25, 26, 27, 28, 29, 30, 31,
    32, 32, 33, 33, 34, 34, 35, 35,
    36, 37, 38, 39, 40, 41, 42, 43,
    44, 45, 46, 47, 48, 48, 49, 49,
    50, 51, 52, 53, 54, 55, 56, 57,
    58, 59, 60, 61, 62, 63, 64, 64,
    65, 66, 67, 68, 69, 70, 71, 72,
    73, 74, 75, 76, 77, 78, 79, 80,
    80, 81, 82, 83, 84, 85, 86, 87,
    88, 89, 90, 91, 92, 93, 94, 95,
    96, 97, 98, 99, 100, 101, 102, 103,
    104, 105, 106, 107, 108, 109, 110, 111,
    112, 113, 114, 115, 116, 117, 118, 119,
    120, 121, 122, 123, 124, 125, 126, 127,
];

// μ-law magnitude code to A-law magnitude code, 1-based
const U2A: [u8; 128] = [
    1, 1, 2, 2, 3, 3, 4, 4,
    5, 5, 6, 6, 7, 7, 8, 8,
    9, 10, 11, 12, 13, 14, 15, 16,
    17, 18, 19, 20, 21, 22, 23, 24,
    25, 27, 29, 31, 33, 34, 35, 36,
    37, 38, 39, 40, 41, 42, 43, 44,
    46, 48, 49, 50, 51, 52, 53, 54,
    55, 56, 57, 58, 59, 60, 61, 62,
    64, 65, 66, 67, 68, 69, 70, 71,
    72, 73, 74, 75, 76, 77, 78, 79,
    80, 82, 83, 84, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 96,
    97, 98, 99, 100, 101, 102, 103, 104,
    105, 106, 107, 108, 109, 110, 111, 112,
    113, 114, 115, 116, 117, 118, 119, 120,
    121, 122, 123, 124, 125, 126, 127, 128,
];

// full 256 entry tables indexed by the encoded byte, expanded at compile time
const ALAW_TO_ULAW: [u8; 256] = build_alaw_to_ulaw();
const ULAW_TO_ALAW: [u8; 256] = build_ulaw_to_alaw();

#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)] // code is below 256
const fn build_alaw_to_ulaw() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut code = 0;
    while code < 256 {
        let a = code as u8;
        table[code] = if a & 0x80 != 0 {
            0xff ^ A2U[(a ^ (0x80 | ALAW_AMI_MASK)) as usize]
        } else {
            0x7f ^ A2U[(a ^ ALAW_AMI_MASK) as usize]
        };
        code += 1;
    }
    table
}

#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)] // code is below 256
const fn build_ulaw_to_alaw() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut code = 0;
    while code < 256 {
        let u = code as u8;
        table[code] = if u & 0x80 != 0 {
            (0x80 | ALAW_AMI_MASK) ^ (U2A[(0xff ^ u) as usize] - 1)
        } else {
            ALAW_AMI_MASK ^ (U2A[(0x7f ^ u) as usize] - 1)
        };
        code += 1;
    }
    table
}

/// Converts a G.711 A-law value directly to a G.711 μ-law value.
///
/// This uses the standard conversion table, which differs from decoding and re-encoding
/// by one step for some codes.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub fn alaw_to_ulaw(encoded: u8) -> u8 {
    ALAW_TO_ULAW[usize::from(encoded)]
}

/// Converts a G.711 μ-law value directly to a G.711 A-law value.
#[cfg_attr(feature = "internal-no-panic", no_panic)]
#[inline(always)]
pub fn ulaw_to_alaw(encoded: u8) -> u8 {
    ULAW_TO_ALAW[usize::from(encoded)]
}
