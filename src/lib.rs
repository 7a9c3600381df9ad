//!
//! This crate implements the [G.711](https://en.wikipedia.org/wiki/G.711) audio companding
//! codec:
//!  - conversion of 16-bit linear PCM samples to and from A-law and μ-law codes
//!  - direct conversion between A-law and μ-law codes using the standard tables
//!  - [`Decoder`] and [`Encoder`], which transcode raw byte streams between linear PCM
//!    (16-bit signed little-endian), A-law and μ-law through `std::io::Read` and
//!    `std::io::Write`
//!
//! The per-sample functions are pure and read only compile time tables, so they can be called
//! from any number of threads.
//!

#![forbid(
    unsafe_code,
    clippy::panic,
    clippy::exit,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::unimplemented,
    clippy::todo,
    clippy::unreachable,
)]
#![deny(
    clippy::cast_ptr_alignment,
    clippy::char_lit_as_u8,
    clippy::unnecessary_cast,
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::checked_conversions,
)]
#![allow(clippy::manual_range_contains)]

mod segment;

mod alaw;
pub use alaw::{decode_alaw, encode_alaw, ALAW_SILENCE};

mod ulaw;
pub use ulaw::{decode_ulaw, encode_ulaw, ULAW_SILENCE};

mod transcode;
pub use transcode::{alaw_to_ulaw, ulaw_to_alaw};

mod format;
pub use format::{Format, Law};

mod buffer;
pub use buffer::{decode_buffer, decode_samples, encode_buffer, encode_samples, transcode_buffer};

mod stream;
pub use stream::{Decoder, Encoder};

mod error;
pub use error::{Error, Result};
