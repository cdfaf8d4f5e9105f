use std::io::{self, BufRead};
use thiserror::Error;

#[cfg(test)]
pub mod mock;

#[derive(Debug, Error)]
pub enum AnswerError {
    #[error("input was closed before an answer was given")]
    Closed,

    #[error("could not read answer: {0}")]
    Io(#[from] io::Error),
}

pub trait AnswerSource {
    /// Blocks until one line of input is available. The line terminator is
    /// not part of the returned answer.
    fn read_answer(&mut self) -> Result<String, AnswerError>;
}

pub struct LineInput<R> {
    reader: R,
    closed: bool,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput {
            reader,
            closed: false,
        }
    }
}

impl<R: BufRead> AnswerSource for LineInput<R> {
    // A terminal can deliver end of input more than once, so the first one is
    // latched and the reader is not touched again.
    fn read_answer(&mut self) -> Result<String, AnswerError> {
        if self.closed {
            return Err(AnswerError::Closed);
        }
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            self.closed = true;
            return Err(AnswerError::Closed);
        }
        strip_line_terminator(&mut line);
        Ok(line)
    }
}

// Strips a single `\n` or `\r\n`, nothing else.
fn strip_line_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
