use crate::cli::message::{group_in_fives, standardize};
use crate::error::{EnigmaError, Result};
use crate::machine::Machine;
use crate::settings::{is_configuration_line, Settings};
use std::io::{BufRead, Write};
use tracing::debug;

/// Line-oriented driver: configuration lines set up the machine, every
/// other line is encrypted with it.
#[derive(Debug, Default)]
pub struct Session {
    machine: Option<Machine>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a machine already configured from `settings`.
    pub fn with_settings(settings: &Settings) -> Result<Self> {
        let mut session = Self::new();
        session.configure(settings)?;
        Ok(session)
    }

    /// Replace the machine with a fresh one built from `settings`.
    pub fn configure(&mut self, settings: &Settings) -> Result<()> {
        let machine = settings.machine()?;
        debug!(settings = %settings, "machine configured");
        self.machine = Some(machine);
        Ok(())
    }

    pub fn machine(&self) -> Option<&Machine> {
        self.machine.as_ref()
    }

    /// Handle one input line.
    ///
    /// Returns `None` for a configuration line and the grouped ciphertext
    /// for a message line.
    pub fn process_line(&mut self, line: &str) -> Result<Option<String>> {
        if is_configuration_line(line) {
            let settings: Settings = line.parse()?;
            self.configure(&settings)?;
            return Ok(None);
        }

        let machine = self.machine.as_mut().ok_or(EnigmaError::NotConfigured)?;
        let letters = standardize(line)?;
        let output = machine.encode(&letters);
        debug!(letters = letters.len(), positions = ?machine.positions(), "message line processed");
        Ok(Some(group_in_fives(&output)))
    }
}

/// Process every line of `input`, writing one output line per message line.
///
/// Stops at the first error; output for earlier lines has already been
/// written. Returns the number of message lines processed.
pub fn run_session<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    initial: Option<&Settings>,
) -> Result<usize> {
    let mut session = match initial {
        Some(settings) => Session::with_settings(settings)?,
        None => Session::new(),
    };

    let mut messages = 0;
    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let result = session.process_line(&line).map_err(|e| {
            debug!(line = number + 1, error = %e, "input rejected");
            e
        })?;
        if let Some(text) = result {
            writeln!(output, "{}", text)?;
            messages += 1;
        }
    }
    output.flush()?;
    Ok(messages)
}
