//! # Scripted I/O
//!
//! Deterministic stand-ins for the console: [`ScriptedReader`] answers reads
//! from a fixed list of lines and [`Transcript`] records everything written.
//! Useful in tests, or to drive a [`Prompt`](crate::utils::Prompt) from
//! pre-recorded answers.
//!
//! ```rust
//! use askline::utils::{Prompt, ScriptedReader, Transcript};
//!
//! let mut prompt = Prompt::new(ScriptedReader::new(["abc", "2"]), Transcript::default());
//!
//! assert_eq!(prompt.ask_bounded_number(1, 3).unwrap(), 2);
//! assert_eq!(
//!     prompt.writer().output(),
//!     "(1 - 3) 'abc' is not a number\n(1 - 3) "
//! );
//! ```

use std::collections::VecDeque;
use std::io;

use crate::utils::terminal::{Reader, Writer};

/// Hands out pre-recorded lines, one per read.
///
/// Once every line is used up, reads fail with
/// [`io::ErrorKind::UnexpectedEof`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedReader {
    lines: VecDeque<String>,
    decorations: Vec<String>,
}

impl ScriptedReader {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            decorations: Vec::new(),
        }
    }

    /// Lines not read yet.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// The decoration passed with every read so far.
    pub fn decorations(&self) -> &[String] {
        &self.decorations
    }
}

impl Reader for ScriptedReader {
    fn read(&mut self, decoration: &str) -> io::Result<String> {
        self.decorations.push(decoration.to_string());
        self.lines.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script has no more lines")
        })
    }
}

/// Collects written text, with `\n` for every line break.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    output: String,
}

impl Transcript {
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Complete lines written so far; a trailing unterminated fragment
    /// (such as a pending hint) is left out.
    pub fn lines(&self) -> Vec<&str> {
        let complete = match self.output.rfind('\n') {
            Some(end) => &self.output[..end],
            None => return Vec::new(),
        };
        complete.split('\n').collect()
    }
}

impl Writer for Transcript {
    fn write(&mut self, text: &str, line_break: bool) -> io::Result<()> {
        self.output.push_str(text);
        if line_break {
            self.output.push('\n');
        }
        Ok(())
    }
}
