//! Interactive confirmation before deletion.
//!
//! [`decide`] turns one answer into a decision; [`confirm`] keeps asking a
//! [`ResponseSource`] until it gets one. Only the source touches the
//! terminal, so the loop is tested with scripted answers.

use crate::error::{Result, SweepError};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// What to do with a proposed path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Delete,
    Skip,
}

/// Something that can answer a yes/no question.
pub trait ResponseSource {
    /// Ask `question` and return the raw answer line.
    ///
    /// Returns `Ok(None)` when no more answers are available.
    fn ask(&mut self, question: &str) -> Result<Option<String>>;
}

/// Map an answer to a decision.
///
/// Only an exact `y` or `n` counts. The line terminator is ignored; other
/// whitespace and case are not.
pub fn decide(answer: &str) -> Option<Decision> {
    match answer.trim_end_matches(['\n', '\r']) {
        "y" => Some(Decision::Delete),
        "n" => Some(Decision::Skip),
        _ => None,
    }
}

/// The question asked for `path`.
pub fn question_for(path: &Path) -> String {
    format!("Are you sure you want to delete: {} [y/n]? ", path.display())
}

/// Ask about `path` until the answer is `y` or `n`.
///
/// Running out of answers counts as `n`.
pub fn confirm(path: &Path, source: &mut dyn ResponseSource) -> Result<Decision> {
    let question = question_for(path);
    loop {
        match source.ask(&question)? {
            Some(answer) => {
                if let Some(decision) = decide(&answer) {
                    return Ok(decision);
                }
            }
            None => {
                tracing::warn!(path = %path.display(), "no answer on input, skipping");
                return Ok(Decision::Skip);
            }
        }
    }
}

/// Reads answers from stdin, printing each question to stdout.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl ResponseSource for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{}", question)
            .and_then(|()| stdout.flush())
            .map_err(|e| SweepError::from_io("failed to write prompt", "<stdout>", e))?;

        let mut line = String::new();
        let read = io::stdin()
            .lock()
            .read_line(&mut line)
            .map_err(|e| SweepError::from_io("failed to read answer", "<stdin>", e))?;

        Ok((read > 0).then_some(line))
    }
}
