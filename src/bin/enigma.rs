//! `enigma`: encode a message on an emulated Enigma machine.
//!
//! **Usage:**
//! ```text
//! enigma [--settings <SETTINGS>] [MESSAGE]
//! enigma --check-known
//! ```
//!
//! Prints the ciphertext and the round-trip decrypt of MESSAGE, or checks
//! the machine against the historical sample messages. Exits non-zero on
//! invalid settings or a failed sample.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use enigma::samples::KNOWN_MESSAGES;
use enigma::Machine;

/// Encode a message on an emulated Enigma machine.
#[derive(Parser)]
#[command(name = "enigma", about = "Encode and decode messages on an emulated Enigma machine")]
struct Args {
    /// Machine settings: plugboard,reflector,type,position,ring[,type,position,ring...]
    #[arg(long, short, default_value = ",B,I,A,A,II,E,A,III,T,A")]
    settings: String,

    /// Decode the historical sample messages and report the result.
    #[arg(long, conflicts_with = "message")]
    check_known: bool,

    /// Message to encode; letters only, case and whitespace are ignored.
    #[arg(default_value = "ENIGMAXMACHINEXEMULATOR")]
    message: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.check_known {
        let failed = check_known_messages()?;
        if failed > 0 {
            eprintln!("{} sample message(s) FAILED", failed);
            process::exit(1);
        }
        return Ok(());
    }

    let mut machine = Machine::from_settings(&args.settings)
        .with_context(|| format!("cannot build machine from '{}'", args.settings))?;

    let message: String = args
        .message
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect();

    let encoded = machine.encode_str(&message)?;
    machine.reset();
    let decoded = machine.encode_str(&encoded)?;

    println!("Original message: {}", message);
    println!("Encoded as:       {}", encoded);
    println!("Decoded back as:  {}", decoded);
    Ok(())
}

/// Decodes every sample message, printing one line per message.
///
/// # Errors
/// Returns an error if a sample's settings cannot be built.
fn check_known_messages() -> Result<usize> {
    let mut failed = 0usize;
    for (i, sample) in KNOWN_MESSAGES.iter().enumerate() {
        let mut machine = Machine::from_settings(sample.settings)
            .with_context(|| format!("sample '{}' has invalid settings", sample.name))?;
        let decoded = machine.encode_str(sample.ciphertext)?;
        let status = if decoded == sample.plaintext {
            "SUCCEEDED"
        } else {
            failed += 1;
            "FAILED!"
        };
        println!("Decoding message {} ({}): {}", i + 1, sample.name, status);
    }
    Ok(failed)
}
