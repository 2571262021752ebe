//! The encode and decode subcommands.

use std::io::Write;

use clap::Subcommand;
use munemo::Generator;

use crate::error::Error;

/// The operations offered on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Encode integers into tokens, one per line
    Encode {
        /// The integers to encode
        #[clap(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
    /// Decode tokens into integers, one per line
    Decode {
        /// The tokens to decode
        #[clap(required = true)]
        tokens: Vec<String>,
    },
}

/// Runs a command with the given generator, writing one result per line to
/// `out`. Decoding stops at the first token that fails.
#[tracing::instrument(skip(generator, out))]
pub fn run<W: Write>(command: &Command, generator: &Generator, out: &mut W) -> Result<(), Error> {
    match command {
        Command::Encode { values } => {
            for value in values {
                writeln!(out, "{}", generator.encode(*value))?;
            }
        }
        Command::Decode { tokens } => {
            for token in tokens {
                let value = generator.decode(token)?;
                writeln!(out, "{value}")?;
            }
        }
    }

    Ok(())
}
