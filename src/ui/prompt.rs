//! Line-oriented prompting over any reader/writer pair.
//!
//! The binary drives this with locked stdin/stdout; tests feed it a
//! `Cursor` and collect the output in a `Vec<u8>`.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::io::{BufRead, Write};

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question`, then read one line.
    ///
    /// The answer is trimmed and lowercased. A closed input stream is an
    /// error, otherwise every validation loop would spin forever on EOF.
    pub fn ask(&mut self, question: &str) -> AppResult<String> {
        writeln!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Err(AppError::InputClosed);
        }

        Ok(answer.trim().to_lowercase())
    }

    /// Keep asking until `parse` accepts the answer.
    ///
    /// There is no retry limit: every rejected answer prints `invalid`
    /// and the question is asked again.
    pub fn ask_until<T, F>(&mut self, question: &str, invalid: &str, parse: F) -> AppResult<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        loop {
            let answer = self.ask(question)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }
            log::debug!("rejected answer {answer:?}");
            warning(&mut self.output, invalid)?;
        }
    }

    /// `true` only when the answer is exactly "yes" (case-insensitive).
    pub fn confirm(&mut self, question: &str) -> AppResult<bool> {
        Ok(self.ask(question)? == "yes")
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
