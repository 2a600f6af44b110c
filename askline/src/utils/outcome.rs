//! # Validation Outcomes
//!
//! A [`ValidationOutcome`] explains why a raw input was rejected by a
//! [`Requirement`](crate::utils::Requirement). The prompt loop displays it
//! and asks again; it never aborts the interaction.
//!
//! ```rust
//! use askline::utils::ValidationOutcome;
//!
//! let outcome = ValidationOutcome::NotInRange { min: 1, max: 5 };
//! assert_eq!(outcome.to_string(), "Please provide a value between 1 and 5");
//! ```

/// Why a value did not meet a requirement.
///
/// Each variant carries what is needed to render a helpful message:
/// - [`Empty`](ValidationOutcome::Empty): nothing was typed.
/// - [`NotANumber`](ValidationOutcome::NotANumber): the offending raw input.
/// - [`NotInRange`](ValidationOutcome::NotInRange): the closed interval that was expected.
/// - [`NotAnOption`](ValidationOutcome::NotAnOption): the labels that would have been accepted.
/// - [`NotADate`](ValidationOutcome::NotADate): the offending raw input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "detail", rename_all = "snake_case")
)]
pub enum ValidationOutcome {
    #[error("Empty")]
    Empty,
    #[error("'{0}' is not a number")]
    NotANumber(String),
    #[error("Please provide a value between {min} and {max}")]
    NotInRange { min: i64, max: i64 },
    #[error("Please select one of {}", .0.join("/"))]
    NotAnOption(Vec<String>),
    #[error("'{0}' is not a date (dd.mm.yyyy)")]
    NotADate(String),
}
