use std::io::{self, Read, Write};
use std::thread;

use g711_streams::{
    decode_alaw, decode_buffer, encode_buffer, encode_ulaw, transcode_buffer, Decoder, Encoder,
    Error, Format, Law, ALAW_SILENCE, ULAW_SILENCE,
};

fn sweep() -> Vec<u8> {
    (i16::MIN..=i16::MAX)
        .step_by(97)
        .flat_map(|s| s.to_le_bytes())
        .collect()
}

#[test]
fn encoder_matches_buffer_encoding() -> Result<(), Error> {
    let lpcm = sweep();
    for law in [Law::ALaw, Law::ULaw] {
        let mut encoder = Encoder::new(Vec::new(), law, Format::LinearPcm)?;
        // uneven chunk sizes split samples at arbitrary points
        for chunk in lpcm.chunks(7) {
            encoder.write_all(chunk)?;
        }
        assert_eq!(encoder.finish()?, encode_buffer(law, &lpcm)?);
    }
    Ok(())
}

#[test]
fn decoder_matches_buffer_decoding() -> Result<(), Error> {
    let codes: Vec<u8> = (0..=255).collect();
    for law in [Law::ALaw, Law::ULaw] {
        let mut decoder = Decoder::new(&codes[..], law, Format::LinearPcm)?;
        let mut lpcm = Vec::new();
        let mut buf = [0u8; 3];
        loop {
            let n = decoder.read(&mut buf)?;
            if n == 0 {
                break;
            }
            lpcm.extend_from_slice(&buf[..n]);
        }
        assert_eq!(lpcm, decode_buffer(law, &codes));
    }
    Ok(())
}

#[test]
fn reader_and_writer_agree_on_law_conversion() -> Result<(), Error> {
    let ulaw: Vec<u8> = (0..=255).rev().collect();
    let mut read = Vec::new();
    Decoder::ulaw(&ulaw[..], Format::ALaw)?.read_to_end(&mut read)?;
    let mut encoder = Encoder::alaw(Vec::new(), Format::ULaw)?;
    encoder.write_all(&ulaw)?;
    let written = encoder.finish()?;
    assert_eq!(read, written);
    assert_eq!(read, transcode_buffer(Law::ULaw, &ulaw));
    Ok(())
}

#[test]
fn decoder_feeds_encoder() -> Result<(), Error> {
    // A-law decoded to linear and encoded again is lossless
    let alaw: Vec<u8> = (0..=255).collect();
    let mut decoder = Decoder::alaw(&alaw[..], "lpcm")?;
    let mut encoder = Encoder::alaw(Vec::new(), "lpcm")?;
    io::copy(&mut decoder, &mut encoder)?;
    assert_eq!(encoder.finish()?, alaw);
    Ok(())
}

#[test]
fn silence() -> Result<(), Error> {
    let mut encoder = Encoder::ulaw(Vec::new(), Format::LinearPcm)?;
    encoder.write_all(&[0; 8])?;
    assert_eq!(encoder.finish()?, [ULAW_SILENCE; 4]);

    let mut lpcm = Vec::new();
    Decoder::alaw(&[ALAW_SILENCE; 2][..], Format::LinearPcm)?.read_to_end(&mut lpcm)?;
    assert_eq!(lpcm, [0x08, 0x00, 0x08, 0x00]);
    Ok(())
}

#[test]
fn truncated_linear_input() -> Result<(), Error> {
    let mut encoder = Encoder::alaw(Vec::new(), Format::LinearPcm)?;
    encoder.write_all(&sweep()[..101])?;
    assert_eq!(encoder.pending(), 1);
    assert_eq!(encoder.get_ref().len(), 50);
    assert!(matches!(encoder.close(), Err(Error::TruncatedStream)));
    Ok(())
}

#[test]
fn io_copy_reports_truncation_through_io_error() -> Result<(), Error> {
    let mut encoder = Encoder::ulaw(Vec::new(), Format::LinearPcm)?;
    io::copy(&mut &[1u8, 2, 3][..], &mut encoder)?;
    let err = io::Error::from(encoder.close().err().ok_or(Error::Closed)?);
    assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    Ok(())
}

#[test]
fn codec_functions_are_thread_safe() {
    let handles: Vec<_> = (0..4)
        .map(|offset: i16| {
            thread::spawn(move || {
                (offset..=i16::MAX).step_by(4).all(|s| {
                    decode_alaw(g711_streams::encode_alaw(s)) >= 0 && encode_ulaw(s) >= 0x80
                })
            })
        })
        .collect();
    for handle in handles {
        assert!(matches!(handle.join(), Ok(true)));
    }
}
