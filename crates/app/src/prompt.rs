use std::io::{BufRead, Write};

use engine::MoneyCents;

use crate::error::Result;

/// Line oriented prompts over any reader/writer pair.
///
/// Every read returns `None` once the input is exhausted so callers can
/// stop cleanly on EOF.
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `label` and reads one trimmed line.
    pub fn line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// Reads a line that is not blank, asking again otherwise.
    pub fn required(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            match self.line(label)? {
                Some(value) if value.is_empty() => {
                    writeln!(self.output, "A value is required.")?;
                }
                other => return Ok(other),
            }
        }
    }

    /// Reads a positive amount, asking again until one parses.
    pub fn amount(&mut self, label: &str) -> Result<Option<MoneyCents>> {
        loop {
            let Some(raw) = self.line(label)? else {
                return Ok(None);
            };
            match raw.parse::<MoneyCents>() {
                Ok(amount) if amount.is_positive() => return Ok(Some(amount)),
                Ok(_) => writeln!(self.output, "Amount must be greater than zero.")?,
                Err(err) => writeln!(self.output, "{err}")?,
            }
        }
    }
}
