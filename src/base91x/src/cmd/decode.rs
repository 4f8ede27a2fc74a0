use clap::Args;

use super::Command;
use crate::cli::{InputsOutputs, helpers, process};

/// Subcommand for decoding base91x text back into binary files.
///
/// Input bytes that are not base91x symbols, such as line breaks or
/// any non-ASCII characters, are ignored.
#[derive(Debug, Args)]
pub struct Decode {
    #[clap(flatten)]
    pub io: InputsOutputs,
}

impl Command for Decode {
    fn handle(self) -> eyre::Result<()> {
        let (inputs, outputs) = self.io.evaluate("bin")?;
        process(
            inputs,
            outputs,
            |r| {
                let text = r.read_to_vec()?;
                let data = base91x_codec::decode(&text);
                log::debug!("Decoded {} input bytes into {} bytes", text.len(), data.len());

                Ok(data)
            },
            helpers::write_data,
        )
    }
}
