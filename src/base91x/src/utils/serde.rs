use std::io::{self, IsTerminal, Write};

use serde::Serialize;

/// Serializes the given value to stdout as JSON.
///
/// Output to a terminal gets pretty-printed, while a minified
/// representation is emitted when piped to another application.
pub fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    let mut stdout = io::stdout().lock();

    if stdout.is_terminal() {
        serde_json::to_writer_pretty(&mut stdout, value)?;
    } else {
        serde_json::to_writer(&mut stdout, value)?;
    }
    writeln!(stdout)?;

    Ok(())
}
