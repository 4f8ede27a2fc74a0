use clap::Args;

use super::Command;
use crate::cli::{InputsOutputs, helpers, process};

/// Subcommand for encoding binary files into base91x text.
#[derive(Debug, Args)]
pub struct Encode {
    #[clap(flatten)]
    pub io: InputsOutputs,
}

impl Command for Encode {
    fn handle(self) -> eyre::Result<()> {
        let (inputs, outputs) = self.io.evaluate("b91")?;
        process(
            inputs,
            outputs,
            |r| {
                let data = r.read_to_vec()?;
                let text = base91x_codec::encode(&data);
                log::debug!("Encoded {} bytes into {} symbols", data.len(), text.len());

                Ok(text)
            },
            helpers::write_data,
        )
    }
}
