use std::process;

use clap::{Parser, Subcommand, error::ErrorKind};

use crate::cmd::*;

mod args;

pub mod helpers;

pub mod io;
pub use io::*;

mod processor;
pub use processor::*;

pub const HYPHEN: &str = "-";

/// The one-line usage printed for malformed invocations.
pub const USAGE: &str = "base91x -e|-d <in-file> <out-file>";

/// The CLI interface for the base91x application.
#[derive(Debug, Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
pub struct Cli {
    /// The selected command.
    #[clap(subcommand)]
    pub command: Base91xCommand,

    #[clap(flatten)]
    pub verbosity: args::Verbosity,
}

impl Cli {
    /// Parses the process arguments into a [`Cli`].
    ///
    /// Help and version requests are served by clap. Every other
    /// parsing failure prints the short usage line to stdout and
    /// terminates the process with exit code 1.
    pub fn parse_or_usage() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
                _ => {
                    eprint!("{}", e.render());
                    println!("{USAGE}");
                    process::exit(1)
                }
            },
        }
    }
}

/// The top-level commands supported by base91x.
#[derive(Debug, Subcommand)]
pub enum Base91xCommand {
    /// Encodes binary input into base91x text.
    #[clap(short_flag = 'e')]
    Encode(encode::Encode),
    /// Decodes base91x text back into binary.
    #[clap(short_flag = 'd')]
    Decode(decode::Decode),
    /// Measures encoding and decoding throughput on random data.
    #[clap(short_flag = 'p')]
    Perf(perf::Perf),
}

impl Command for Base91xCommand {
    fn handle(self) -> eyre::Result<()> {
        match self {
            Self::Encode(encode) => encode.handle(),
            Self::Decode(decode) => decode.handle(),
            Self::Perf(perf) => perf.handle(),
        }
    }
}
