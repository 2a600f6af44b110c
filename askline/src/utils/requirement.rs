//! # Requirements & Chains
//!
//! A [`Requirement`] is one rule applied to user input. It may both test
//! and convert a value: [`Number`](crate::utils::Number) turns a `String`
//! into an `i64`, [`Between`](crate::utils::Between) checks that `i64`
//! against a closed interval, [`Menu`](crate::utils::Menu) turns it into
//! the selected item.
//!
//! Requirements compose with [`Chain`]. The output of the first feeds the
//! input of the second, the first failure short-circuits the rest, and the
//! hints and descriptions of every stage are aggregated in order.
//!
//! ## Example
//! ```rust
//! use askline::chain;
//! use askline::utils::{Between, Menu, Number, Requirement, ValidationOutcome};
//!
//! let pick = chain![Number, Between::new(1, 3), Menu::new(vec!["a", "b", "c"])];
//!
//! assert_eq!(pick.meet("2".to_string()), Ok("b"));
//! assert_eq!(
//!     pick.meet("5".to_string()),
//!     Err(ValidationOutcome::NotInRange { min: 1, max: 3 })
//! );
//! assert_eq!(pick.hint(), "1 - 3");
//! assert_eq!(pick.describe(), "1. a\n2. b\n3. c");
//! ```

use crate::utils::outcome::ValidationOutcome;

/// A validation and conversion rule for user input.
///
/// `meet` must be a pure function of its input: calling it twice with the
/// same value yields the same result.
pub trait Requirement {
    /// What the requirement accepts.
    type Input;
    /// What the requirement produces once met.
    type Output;

    /// A short cue shown next to the input prompt, e.g. `1 - 5`.
    /// Empty means no hint.
    fn hint(&self) -> String {
        String::new()
    }

    /// A longer explanation shown once before the first read.
    /// Empty means nothing to show.
    fn describe(&self) -> String {
        String::new()
    }

    /// Tests `value` and converts it, or explains why it was rejected.
    fn meet(&self, value: Self::Input) -> Result<Self::Output, ValidationOutcome>;
}

impl<R: Requirement + ?Sized> Requirement for &R {
    type Input = R::Input;
    type Output = R::Output;

    fn hint(&self) -> String {
        (**self).hint()
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn meet(&self, value: Self::Input) -> Result<Self::Output, ValidationOutcome> {
        (**self).meet(value)
    }
}

/// Two requirements applied one after the other.
///
/// Longer chains nest to the left, see the [`chain!`](crate::chain) macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Requirement for Chain<A, B>
where
    A: Requirement,
    B: Requirement<Input = A::Output>,
{
    type Input = A::Input;
    type Output = B::Output;

    /// Every non-empty hint, joined with `", "`.
    fn hint(&self) -> String {
        join_non_empty([self.first.hint(), self.second.hint()], ", ")
    }

    /// Every non-empty description, one per line.
    fn describe(&self) -> String {
        join_non_empty([self.first.describe(), self.second.describe()], "\n")
    }

    fn meet(&self, value: Self::Input) -> Result<Self::Output, ValidationOutcome> {
        let value = self.first.meet(value)?;
        self.second.meet(value)
    }
}

fn join_non_empty<const N: usize>(parts: [String; N], separator: &str) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Combinator methods available on every [`Requirement`].
pub trait RequirementExt: Requirement + Sized {
    /// Feeds the output of `self` into `next`.
    fn then<B>(self, next: B) -> Chain<Self, B>
    where
        B: Requirement<Input = Self::Output>,
    {
        Chain::new(self, next)
    }
}

impl<R: Requirement> RequirementExt for R {}

/// Builds a left-to-right [`Chain`] out of any number of requirements.
///
/// `chain![a, b, c]` expands to `Chain::new(Chain::new(a, b), c)`.
#[macro_export]
macro_rules! chain {
    ($first:expr $(,)?) => {
        $first
    };
    ($first:expr, $second:expr $(, $rest:expr)* $(,)?) => {
        $crate::chain!($crate::utils::Chain::new($first, $second) $(, $rest)*)
    };
}
