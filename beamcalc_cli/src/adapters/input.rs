//! Input sources: command-line flags and interactive prompts.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use beamcalc_core::{BoundingBox, LoadCase, MaterialProperties, SizingInput};

use super::InputSource;

/// A single request built from command-line flags. Yields once.
pub struct FlagInput {
    pending: Option<SizingInput>,
}

impl FlagInput {
    pub fn new(input: SizingInput) -> Self {
        Self { pending: Some(input) }
    }
}

impl InputSource for FlagInput {
    fn collect(&mut self) -> Result<Option<SizingInput>> {
        Ok(self.pending.take())
    }
}

/// Asks for each value in turn on a line-oriented reader.
///
/// An empty answer to the first question, or end of input, ends the session.
/// Answers that do not parse as numbers are re-asked.
pub struct PromptInput<R, W> {
    reader: R,
    writer: W,
    material: MaterialProperties,
    count: usize,
}

enum Answer {
    Value(f64),
    Blank,
    Eof,
}

impl<R: BufRead, W: Write> PromptInput<R, W> {
    pub fn new(reader: R, writer: W, material: MaterialProperties) -> Self {
        Self {
            reader,
            writer,
            material,
            count: 0,
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Answer> {
        loop {
            write!(self.writer, "{}", prompt)?;
            self.writer.flush().context("Failed to flush prompt")?;

            let mut line = String::new();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read input")?;
            if read == 0 {
                return Ok(Answer::Eof);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                return Ok(Answer::Blank);
            }
            match trimmed.parse::<f64>() {
                Ok(value) => return Ok(Answer::Value(value)),
                Err(_) => writeln!(self.writer, "Please enter a valid number (got '{}')", trimmed)?,
            }
        }
    }

    /// Ask until a number arrives; `None` on end of input.
    fn ask_required(&mut self, prompt: &str) -> Result<Option<f64>> {
        loop {
            match self.ask(prompt)? {
                Answer::Value(v) => return Ok(Some(v)),
                Answer::Eof => return Ok(None),
                Answer::Blank => writeln!(self.writer, "A value is required")?,
            }
        }
    }
}

impl<R: BufRead, W: Write> InputSource for PromptInput<R, W> {
    fn collect(&mut self) -> Result<Option<SizingInput>> {
        let x_min = match self.ask("x_min (blank to finish): ")? {
            Answer::Value(v) => v,
            Answer::Blank | Answer::Eof => return Ok(None),
        };
        let Some(y_min) = self.ask_required("y_min: ")? else {
            return Ok(None);
        };
        let Some(x_max) = self.ask_required("x_max: ")? else {
            return Ok(None);
        };
        let Some(y_max) = self.ask_required("y_max: ")? else {
            return Ok(None);
        };
        let Some(load) = self.ask_required("Uniform distributed load: ")? else {
            return Ok(None);
        };

        self.count += 1;
        Ok(Some(SizingInput::new(
            format!("B-{}", self.count),
            BoundingBox::new(x_min, y_min, x_max, y_max),
            self.material,
            LoadCase::uniform(load),
        )))
    }
}
