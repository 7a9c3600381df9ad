use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use g711_streams::{decode_alaw, decode_ulaw, encode_alaw, encode_ulaw, Decoder, Encoder, Format};

fn transcode(from: &str, to: &str) -> Result<u64, g711_streams::Error> {
    let from: Format = from.parse()?;
    let to: Format = to.parse()?;
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let copied = match (from.law(), to.law()) {
        (Some(law), _) => {
            let mut decoder = Decoder::new(stdin, law, to)?;
            let mut stdout = stdout;
            let copied = io::copy(&mut decoder, &mut stdout)?;
            stdout.flush()?;
            copied
        }
        (None, Some(law)) => {
            let mut stdin = stdin;
            let mut encoder = Encoder::new(stdout, law, from)?;
            let copied = io::copy(&mut stdin, &mut encoder)?;
            encoder.close()?;
            copied
        }
        (None, None) => return Err(g711_streams::Error::UnsupportedFormat(
            "linear PCM to linear PCM".to_string())),
    };
    Ok(copied)
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage: codec-tester {{decode|encode}} {{ulaw|alaw}} values...");
        println!(
            "       codec-tester transcode {{lpcm|ulaw|alaw}} {{lpcm|ulaw|alaw}} < input > output"
        );
        return ExitCode::FAILURE;
    }

    let command = &args[1];
    if command == "transcode" {
        if args.len() != 4 {
            eprintln!("ERROR: transcode needs a source and a target format");
            return ExitCode::FAILURE;
        }
        return match transcode(&args[2], &args[3]) {
            Ok(bytes) => {
                log::info!("transcoded {bytes} bytes from {} to {}", args[2], args[3]);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("ERROR: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let format = &args[2];
    for value in &args[3..] {
        let result = match (command.as_ref(), format.as_ref()) {
            ("decode", "ulaw") => value.parse::<u8>().map(|v| decode_ulaw(v).to_string()),
            ("decode", "alaw") => value.parse::<u8>().map(|v| decode_alaw(v).to_string()),
            ("encode", "ulaw") => value.parse::<i16>().map(|v| encode_ulaw(v).to_string()),
            ("encode", "alaw") => value.parse::<i16>().map(|v| encode_alaw(v).to_string()),
            _ => {
                eprintln!("ERROR: invalid command or format: {}, {}", command, format);
                return ExitCode::FAILURE;
            }
        };
        match result {
            Ok(output) => println!("{}", output),
            Err(err) => {
                eprintln!("ERROR: bad value {}: {}", value, err);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
