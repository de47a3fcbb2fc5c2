//! `reflow stream` command implementation.

use std::io::{BufRead, Write};

use reflow_engine::LineSession;

use crate::error::CliError;

/// Read stdin line by line and write the processed form of each line to
/// stdout as it completes.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub(crate) fn stream() -> Result<(), CliError> {
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();
    let mut session = LineSession::new();

    for line in stdin.lines() {
        let mut line = line?;
        line.push('\n');
        stdout.write_all(session.push(&line).as_bytes())?;
        stdout.flush()?;
    }
    stdout.write_all(session.finish().as_bytes())?;
    Ok(())
}
