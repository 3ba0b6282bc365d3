use bracket_rle::{decode_multiline, encode_multiline};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;

/// Demo shell for the codec.
///
/// Usage: cargo run --example cli <encode|decode> [filename]
///
/// Reads the file (or stdin when no filename is given), runs the line-wise
/// codec, and prints the result. `RUST_LOG` controls tracing verbosity.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <encode|decode> [filename]", args[0]);
        process::exit(1);
    }

    let input = match args.get(2) {
        Some(filename) => fs::read_to_string(filename).unwrap_or_else(|err| {
            eprintln!("Cannot read \"{}\": {}", filename, err);
            process::exit(1);
        }),
        None => {
            let mut buffer = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Cannot read stdin: {}", err);
                process::exit(1);
            }
            buffer
        }
    };

    match args[1].as_str() {
        "encode" => print!("{}", encode_multiline(&input)),
        "decode" => match decode_multiline(&input) {
            Ok(decoded) => print!("{}", decoded),
            Err(err) => {
                eprintln!("Malformed encoded string: {}", err);
                process::exit(1);
            }
        },
        action => {
            eprintln!("Unknown action \"{}\"; expected encode or decode", action);
            process::exit(1);
        }
    }
}
