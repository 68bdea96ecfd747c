//! Line-oriented prompting over any reader/writer pair.

use crate::errors::Result;
use std::io::{BufRead, Write};

/// Reads answers from `input` and writes prompts to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Wraps an input and output stream.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// The output stream, for printing tables and notices.
    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Reads one trimmed line. Returns `None` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prints `label` (with `default` in brackets if non-empty) and reads the answer.
    ///
    /// An empty answer yields `default`. Returns `None` at end of input.
    pub fn ask(&mut self, label: &str, default: &str) -> Result<Option<String>> {
        if default.is_empty() {
            write!(self.output, "{label}: ")?;
        } else {
            write!(self.output, "{label} [{default}]: ")?;
        }
        self.output.flush()?;

        Ok(self.read_line()?.map(|answer| {
            if answer.is_empty() {
                default.to_string()
            } else {
                answer
            }
        }))
    }
}
