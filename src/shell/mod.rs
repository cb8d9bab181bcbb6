//! Interactive command shell.
//!
//! Reads one command per line, dispatches it to the [`ContactService`] and
//! prints the result. Errors are printed and the loop carries on; only
//! `close`/`exit` or end of input stop it.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{execute, Outcome};

use crate::services::ContactService;
use std::io::{self, BufRead, Write};
use tracing::{info, warn};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// Handle a single input line. Blank lines produce no output.
pub fn handle_line(service: &mut ContactService, line: &str) -> Option<Outcome> {
    let result = Command::parse(line).and_then(|command| match command {
        Some(command) => execute(service, command).map(Some),
        None => Ok(None),
    });

    match result {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error = %e, "command failed");
            Some(Outcome::Continue(format!("Error: {}", e)))
        }
    }
}

/// Run the shell until `exit` or end of input.
///
/// # Errors
/// Only I/O failures on `input` or `output` end the loop with an error.
/// Input that is not valid UTF-8 is decoded lossily and handled like any
/// other line.
pub fn run<R, W>(service: &mut ContactService, mut input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", GREETING)?;
    let mut buf = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("end of input");
            writeln!(output)?;
            writeln!(output, "Good bye!")?;
            return Ok(());
        }

        // Undecodable bytes become U+FFFD so the line still reaches the parser
        let line = String::from_utf8_lossy(&buf);
        match handle_line(service, &line) {
            Some(Outcome::Continue(message)) => writeln!(output, "{}", message)?,
            Some(Outcome::Exit(message)) => {
                writeln!(output, "{}", message)?;
                return Ok(());
            }
            None => {}
        }
    }
}
