//! # Terminal Prompt
//!
//! [`Prompt`] repeatedly asks the user for input until it meets a
//! [`Requirement`]. Each interaction goes like this:
//!
//! 1. The requirement's description, if any, is written once.
//! 2. The hint, if any, is written as `(hint) ` right before the read.
//! 3. One line is read and trimmed.
//! 4. If the line contains an exit keyword (`exit`, `quit` by default, any
//!    case) the whole call fails with [`PromptError::Cancelled`].
//! 5. Otherwise the requirement is applied. A
//!    [`ValidationOutcome`](crate::utils::ValidationOutcome) is
//!    written and the loop goes back to step 2; a value is returned.
//!
//! All I/O goes through the [`Reader`] and [`Writer`] boundaries, so the
//! loop can run against [`Console`] or against the doubles in
//! [`script`](crate::utils::script).
//!
//! ## Example
//! ```rust,no_run
//! use askline::utils::{Prompt, PromptError};
//!
//! let mut prompt = Prompt::console();
//!
//! match prompt.ask_bounded_number(1, 16) {
//!     Ok(threads) => println!("Threads: {}", threads),
//!     Err(PromptError::Cancelled) => println!("Bye!"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use chrono::NaiveDate;
use tracing::{debug, info, instrument, trace};

use crate::chain;
use crate::utils::requirement::Requirement;
use crate::utils::rules::{Between, Choice, Date, Menu, NotEmpty, Number};

/// Source of raw user input. Blocks until a line is available.
///
/// Returning an error of kind [`io::ErrorKind::UnexpectedEof`] signals that
/// no more input will ever arrive.
pub trait Reader {
    fn read(&mut self, decoration: &str) -> io::Result<String>;
}

/// Sink for everything the user gets to see.
pub trait Writer {
    fn write(&mut self, text: &str, line_break: bool) -> io::Result<()>;
}

impl<F> Reader for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    fn read(&mut self, decoration: &str) -> io::Result<String> {
        self(decoration)
    }
}

impl<F> Writer for F
where
    F: FnMut(&str, bool) -> io::Result<()>,
{
    fn write(&mut self, text: &str, line_break: bool) -> io::Result<()> {
        self(text, line_break)
    }
}

/// Reads from stdin and writes to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Reader for Console {
    fn read(&mut self, decoration: &str) -> io::Result<String> {
        {
            let mut stdout = io::stdout().lock();
            stdout.write_all(decoration.as_bytes())?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "stdin was closed",
            ));
        }
        Ok(line)
    }
}

impl Writer for Console {
    fn write(&mut self, text: &str, line_break: bool) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        if line_break {
            writeln!(stdout, "{}", text)
        } else {
            write!(stdout, "{}", text)?;
            stdout.flush()
        }
    }
}

/// Settings shared by every interaction of a [`Prompt`].
///
/// - `decoration`: handed to the [`Reader`] on every read, conventionally `"> "`.
/// - `exit_keywords`: any of these inside the input (any case) cancels the prompt.
///   Empty keywords are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PromptConfig {
    pub decoration: String,
    pub exit_keywords: Vec<String>,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            decoration: "> ".to_string(),
            exit_keywords: vec!["exit".to_string(), "quit".to_string()],
        }
    }
}

impl PromptConfig {
    pub fn with_decoration(mut self, decoration: impl Into<String>) -> Self {
        self.decoration = decoration.into();
        self
    }

    pub fn with_exit_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exit_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `input` asks to cancel: case-insensitive substring match
    /// against every non-empty exit keyword.
    pub fn is_exit(&self, input: &str) -> bool {
        let input = input.to_lowercase();
        self.exit_keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| input.contains(&keyword.to_lowercase()))
    }
}

/// Why a prompting call ended without a value.
///
/// Never produced for invalid input: that is a
/// [`ValidationOutcome`](crate::utils::ValidationOutcome) and the loop keeps
/// asking.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("prompt was cancelled")]
    Cancelled,
    #[error("input was closed before a valid answer was given")]
    InputClosed,
    #[error("no value can be between {min} and {max}")]
    EmptyRange { min: i64, max: i64 },
    #[error("a choice needs at least one option")]
    EmptyChoice,
    #[error("a menu needs at least one item")]
    EmptyMenu,
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl PromptError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Asks for input until it meets a requirement.
///
/// Holds no state between calls; every `ask*` method is an independent
/// interaction.
pub struct Prompt<R = Console, W = Console> {
    config: PromptConfig,
    reader: R,
    writer: W,
}

impl Prompt<Console, Console> {
    /// A prompt on stdin/stdout with the default configuration.
    pub fn console() -> Self {
        Self::new(Console, Console)
    }
}

impl<R: Reader, W: Writer> Prompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self::with_config(PromptConfig::default(), reader, writer)
    }

    pub fn with_config(config: PromptConfig, reader: R, writer: W) -> Self {
        Self {
            config,
            reader,
            writer,
        }
    }

    pub fn reader(&self) -> &R {
        &self.reader
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Asks until `requirement` is met and returns the converted value.
    ///
    /// Invalid input is reported and asked again, without limit. Only
    /// cancellation, closed input or an I/O failure end the call early.
    pub fn ask<Q>(&mut self, requirement: &Q) -> Result<Q::Output, PromptError>
    where
        Q: Requirement<Input = String> + ?Sized,
    {
        let description = requirement.describe();
        if !description.is_empty() {
            self.writer.write(&description, true)?;
        }

        let hint = requirement.hint();
        loop {
            if !hint.is_empty() {
                self.writer.write(&format!("({}) ", hint), false)?;
            }

            let raw = self.read_input()?;
            let input = raw.trim();

            if self.config.is_exit(input) {
                info!("prompt cancelled by exit keyword");
                return Err(PromptError::Cancelled);
            }

            match requirement.meet(input.to_string()) {
                Ok(value) => return Ok(value),
                Err(outcome) => {
                    debug!(%outcome, "input rejected");
                    self.writer.write(&outcome.to_string(), true)?;
                }
            }
        }
    }

    /// An integer within `[min, max]`.
    #[instrument(level = "debug", skip(self))]
    pub fn ask_bounded_number(&mut self, min: i64, max: i64) -> Result<i64, PromptError> {
        if min > max {
            return Err(PromptError::EmptyRange { min, max });
        }
        self.ask(&chain![Number, Between::new(min, max)])
    }

    /// The value behind one of the given labels, e.g.
    /// `[("yes", true), ("no", false)]`.
    #[instrument(level = "debug", skip_all)]
    pub fn ask_choice<T, I, L>(&mut self, options: I) -> Result<T, PromptError>
    where
        T: Clone,
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
    {
        let choice = Choice::new(options);
        if choice.labels().is_empty() {
            return Err(PromptError::EmptyChoice);
        }
        self.ask(&choice)
    }

    /// One of `items`, picked by its 1-based position in a numbered list.
    #[instrument(level = "debug", skip_all, fields(items = items.len()))]
    pub fn ask_menu<T>(&mut self, items: Vec<T>) -> Result<T, PromptError>
    where
        T: Clone + Display,
    {
        if items.is_empty() {
            return Err(PromptError::EmptyMenu);
        }
        let count = items.len() as i64;
        self.ask(&chain![Number, Between::new(1, count), Menu::new(items)])
    }

    /// Any non-empty text.
    #[instrument(level = "debug", skip(self))]
    pub fn ask_name(&mut self) -> Result<String, PromptError> {
        self.ask(&NotEmpty)
    }

    /// Any integer.
    #[instrument(level = "debug", skip(self))]
    pub fn ask_number(&mut self) -> Result<i64, PromptError> {
        self.ask(&Number)
    }

    /// A date written as `dd.mm.yyyy`.
    #[instrument(level = "debug", skip(self))]
    pub fn ask_date(&mut self) -> Result<NaiveDate, PromptError> {
        self.ask(&Date)
    }

    fn read_input(&mut self) -> Result<String, PromptError> {
        match self.reader.read(&self.config.decoration) {
            Ok(raw) => {
                trace!(raw = %raw, "read input");
                Ok(raw)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Err(PromptError::InputClosed),
            Err(e) => Err(PromptError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::script::{ScriptedReader, Transcript};
    use rstest::rstest;

    fn scripted(lines: &[&str]) -> Prompt<ScriptedReader, Transcript> {
        Prompt::new(ScriptedReader::new(lines.iter().copied()), Transcript::default())
    }

    #[test]
    fn test_default_config() {
        let config = PromptConfig::default();
        assert_eq!(config.decoration, "> ");
        assert_eq!(config.exit_keywords, vec!["exit", "quit"]);
    }

    #[rstest]
    #[case("exit")]
    #[case("quit")]
    #[case("QUIT")]
    #[case("Exit now")]
    #[case("please quit")]
    fn test_is_exit_matches_keyword_substrings(#[case] input: &str) {
        assert!(PromptConfig::default().is_exit(input));
    }

    #[rstest]
    #[case("")]
    #[case("ex it")]
    #[case("42")]
    #[case("qui")]
    fn test_is_exit_ignores_other_input(#[case] input: &str) {
        assert!(!PromptConfig::default().is_exit(input));
    }

    #[test]
    fn test_is_exit_ignores_empty_keywords() {
        let config = PromptConfig::default().with_exit_keywords(["", "Stop"]);
        assert!(!config.is_exit("anything"));
        assert!(config.is_exit("stop"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: PromptConfig = serde_json::from_str(r#"{ "decoration": "$ " }"#).unwrap();
        assert_eq!(config.decoration, "$ ");
        assert_eq!(config.exit_keywords, vec!["exit", "quit"]);
    }

    #[test]
    fn test_ask_returns_first_valid_value() {
        let mut prompt = scripted(&["7"]);
        assert_eq!(prompt.ask_number().unwrap(), 7);
        assert_eq!(prompt.writer().output(), "");
    }

    #[test]
    fn test_ask_trims_input() {
        let mut prompt = scripted(&["  Ada Lovelace \n"]);
        assert_eq!(prompt.ask_name().unwrap(), "Ada Lovelace");
    }

    #[test]
    fn test_ask_retries_after_outcome() {
        let mut prompt = scripted(&["", "   ", "Grace"]);
        assert_eq!(prompt.ask_name().unwrap(), "Grace");
        assert_eq!(prompt.writer().output(), "Empty\nEmpty\n");
    }

    #[test]
    fn test_ask_cancels_before_validation() {
        let mut prompt = scripted(&["quit", "3"]);
        let err = prompt.ask_bounded_number(1, 3).unwrap_err();
        assert!(err.is_cancelled());
        assert_eq!(prompt.writer().output(), "(1 - 3) ");
        assert_eq!(prompt.reader().remaining(), 1);
    }

    #[test]
    fn test_ask_passes_decoration_to_reader() {
        let config = PromptConfig::default().with_decoration("? ");
        let mut prompt = Prompt::with_config(
            config,
            ScriptedReader::new(["x", "1"]),
            Transcript::default(),
        );
        prompt.ask_number().unwrap();
        assert_eq!(prompt.reader().decorations(), ["? ", "? "]);
    }

    #[test]
    fn test_ask_reports_closed_input() {
        let mut prompt = scripted(&["nope"]);
        assert!(matches!(
            prompt.ask_number(),
            Err(PromptError::InputClosed)
        ));
    }

    #[test]
    fn test_ask_propagates_reader_failure() {
        let reader = |_: &str| -> io::Result<String> { Err(io::Error::other("broken pipe")) };
        let mut prompt = Prompt::new(reader, Transcript::default());
        assert!(matches!(prompt.ask_number(), Err(PromptError::Io(_))));
    }

    #[test]
    fn test_closures_as_boundaries() {
        let mut written = Vec::new();
        let reader = |_: &str| -> io::Result<String> { Ok("yes".to_string()) };
        let writer = |text: &str, _: bool| -> io::Result<()> {
            written.push(text.to_string());
            Ok(())
        };
        let mut prompt = Prompt::new(reader, writer);
        assert!(prompt.ask_choice([("yes", true), ("no", false)]).unwrap());
        drop(prompt);
        assert_eq!(written, vec!["(yes/no) ".to_string()]);
    }

    #[test]
    fn test_ask_bounded_number_rejects_empty_range() {
        let mut prompt = scripted(&["1"]);
        assert!(matches!(
            prompt.ask_bounded_number(5, 1),
            Err(PromptError::EmptyRange { min: 5, max: 1 })
        ));
        assert_eq!(prompt.reader().remaining(), 1);
    }

    #[test]
    fn test_ask_menu_rejects_no_items() {
        let mut prompt = scripted(&["1"]);
        assert!(matches!(
            prompt.ask_menu(Vec::<String>::new()),
            Err(PromptError::EmptyMenu)
        ));
    }

    #[test]
    fn test_ask_choice_rejects_no_options() {
        let mut prompt = scripted(&["a"]);
        let options: Vec<(&str, u8)> = Vec::new();
        assert!(matches!(
            prompt.ask_choice(options),
            Err(PromptError::EmptyChoice)
        ));
    }

    #[test]
    fn test_ask_date() {
        let mut prompt = scripted(&["03.13.2019", "13.03.2019"]);
        assert_eq!(
            prompt.ask_date().unwrap(),
            NaiveDate::from_ymd_opt(2019, 3, 13).unwrap()
        );
        assert_eq!(
            prompt.writer().output(),
            "(dd.mm.yyyy) '03.13.2019' is not a date (dd.mm.yyyy)\n(dd.mm.yyyy) "
        );
    }
}
