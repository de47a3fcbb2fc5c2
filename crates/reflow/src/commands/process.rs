//! `reflow process` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use reflow_engine::process;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the process command.
#[derive(Args)]
pub(crate) struct ProcessArgs {
    /// Path to the input text file.
    input: PathBuf,

    /// Path to the output file (stdout when omitted).
    output: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long, env = "REFLOW_VERBOSE")]
    pub(crate) verbose: bool,
}

impl ProcessArgs {
    /// Execute the process command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or the output cannot
    /// be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        if self.output.as_deref() == Some(self.input.as_path()) {
            return Err(CliError::Validation(
                "input and output must be different files".to_owned(),
            ));
        }

        let text = std::fs::read_to_string(&self.input)?;
        tracing::info!(path = %self.input.display(), bytes = text.len(), "Processing input");

        let result = process(&text);

        match &self.output {
            Some(target) => {
                std::fs::write(target, &result)?;
                output.success(&format!("Wrote {}", target.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(result.as_bytes())?;
            }
        }
        Ok(())
    }
}
