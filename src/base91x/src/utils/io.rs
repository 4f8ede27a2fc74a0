use std::{
    io::{self, IsTerminal},
    process,
};

use crate::cli::USAGE;

/// Obtains a buffered reader over the contents of stdin.
///
/// This function will terminate the process and print the usage line
/// if stdin is connected to a terminal.
pub fn stdin_reader() -> io::BufReader<io::StdinLock<'static>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        println!("{USAGE}");
        process::exit(1);
    }

    io::BufReader::new(stdin.lock())
}
