//! # Concrete Requirements
//!
//! The building blocks [`Prompt`](crate::utils::Prompt) chains together:
//!
//! | Requirement | Converts                  | Rejects with                      |
//! |-------------|---------------------------|-----------------------------------|
//! | [`NotEmpty`]| `String` → `String`       | [`ValidationOutcome::Empty`]      |
//! | [`Number`]  | `String` → `i64`          | [`ValidationOutcome::NotANumber`] |
//! | [`Between`] | `i64` → `i64`             | [`ValidationOutcome::NotInRange`] |
//! | [`Choice`]  | `String` → `T`            | [`ValidationOutcome::NotAnOption`]|
//! | [`Menu`]    | `i64` (1-based) → `T`     | [`ValidationOutcome::NotInRange`] |
//! | [`Date`]    | `String` → `NaiveDate`    | [`ValidationOutcome::NotADate`]   |
//!
//! ## Example
//! ```rust
//! use askline::utils::{Choice, Requirement, ValidationOutcome};
//!
//! let confirm = Choice::new([("yes", true), ("no", false)]);
//! assert_eq!(confirm.hint(), "yes/no");
//! assert_eq!(confirm.meet("yes".to_string()), Ok(true));
//! assert!(matches!(
//!     confirm.meet("maybe".to_string()),
//!     Err(ValidationOutcome::NotAnOption(_))
//! ));
//! ```

use std::fmt::Display;

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::utils::outcome::ValidationOutcome;
use crate::utils::requirement::Requirement;

/// A non-empty string is expected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotEmpty;

impl Requirement for NotEmpty {
    type Input = String;
    type Output = String;

    fn meet(&self, value: String) -> Result<String, ValidationOutcome> {
        if value.is_empty() {
            return Err(ValidationOutcome::Empty);
        }
        Ok(value)
    }
}

/// An integer is expected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Number;

impl Requirement for Number {
    type Input = String;
    type Output = i64;

    fn meet(&self, value: String) -> Result<i64, ValidationOutcome> {
        value
            .parse::<i64>()
            .map_err(|_| ValidationOutcome::NotANumber(value))
    }
}

/// A value within the closed interval `[min, max]` is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Between {
    min: i64,
    max: i64,
}

impl Between {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }
}

impl Requirement for Between {
    type Input = i64;
    type Output = i64;

    fn hint(&self) -> String {
        if self.min == self.max {
            return format!("{}", self.min);
        }
        format!("{} - {}", self.min, self.max)
    }

    fn meet(&self, value: i64) -> Result<i64, ValidationOutcome> {
        if value < self.min || value > self.max {
            return Err(ValidationOutcome::NotInRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(value)
    }
}

/// One of several labelled options is expected; the label's value is returned.
///
/// Labels keep the order they were first given in, both in the hint and in
/// the rejection message. A repeated label keeps its first position but
/// takes the later value. Matching is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice<T> {
    options: IndexMap<String, T>,
}

impl<T> Choice<T> {
    pub fn new<I, L>(options: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
    {
        Self {
            options: options
                .into_iter()
                .map(|(label, value)| (label.into(), value))
                .collect(),
        }
    }

    /// The accepted labels, in declaration order.
    pub fn labels(&self) -> Vec<String> {
        self.options.keys().cloned().collect()
    }
}

impl<T: Clone> Requirement for Choice<T> {
    type Input = String;
    type Output = T;

    fn hint(&self) -> String {
        self.labels().join("/")
    }

    fn meet(&self, value: String) -> Result<T, ValidationOutcome> {
        self.options
            .get(&value)
            .cloned()
            .ok_or_else(|| ValidationOutcome::NotAnOption(self.labels()))
    }
}

/// Picks an item from a numbered list by its 1-based position.
///
/// Has no hint; the numbered list itself is the description:
/// ```text
/// 1. first
/// 2. second
/// ```
/// Usually preceded by [`Number`] and [`Between`] so the user sees the
/// valid range, but it checks the index itself as well and rejects anything
/// outside `[1, len]` with [`ValidationOutcome::NotInRange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu<T> {
    items: Vec<T>,
}

impl<T> Menu<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: Clone + Display> Requirement for Menu<T> {
    type Input = i64;
    type Output = T;

    fn describe(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn meet(&self, value: i64) -> Result<T, ValidationOutcome> {
        usize::try_from(value)
            .ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| self.items.get(index))
            .cloned()
            .ok_or(ValidationOutcome::NotInRange {
                min: 1,
                max: self.items.len() as i64,
            })
    }
}

/// A calendar date written as `dd.mm.yyyy` is expected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Date;

impl Date {
    pub const FORMAT: &'static str = "%d.%m.%Y";
}

impl Requirement for Date {
    type Input = String;
    type Output = NaiveDate;

    fn hint(&self) -> String {
        "dd.mm.yyyy".to_string()
    }

    fn meet(&self, value: String) -> Result<NaiveDate, ValidationOutcome> {
        NaiveDate::parse_from_str(&value, Self::FORMAT)
            .map_err(|_| ValidationOutcome::NotADate(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_not_empty_passes_text_through() {
        assert_eq!(NotEmpty.meet("Ada".to_string()), Ok("Ada".to_string()));
    }

    #[test]
    fn test_not_empty_rejects_empty() {
        assert_eq!(NotEmpty.meet(String::new()), Err(ValidationOutcome::Empty));
    }

    #[test]
    fn test_number_parses_integers() {
        assert_eq!(Number.meet("42".to_string()), Ok(42));
        assert_eq!(Number.meet("-7".to_string()), Ok(-7));
    }

    #[rstest]
    #[case("abc")]
    #[case("4.2")]
    #[case("")]
    #[case("99999999999999999999")]
    fn test_number_rejects_non_integers(#[case] raw: &str) {
        assert_eq!(
            Number.meet(raw.to_string()),
            Err(ValidationOutcome::NotANumber(raw.to_string()))
        );
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(5)]
    fn test_between_accepts_closed_interval(#[case] value: i64) {
        assert_eq!(Between::new(1, 5).meet(value), Ok(value));
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(i64::MIN)]
    fn test_between_rejects_outside(#[case] value: i64) {
        assert_eq!(
            Between::new(1, 5).meet(value),
            Err(ValidationOutcome::NotInRange { min: 1, max: 5 })
        );
    }

    #[test]
    fn test_between_hint() {
        assert_eq!(Between::new(1, 5).hint(), "1 - 5");
        assert_eq!(Between::new(4, 4).hint(), "4");
        assert_eq!(Between::new(-2, 2).hint(), "-2 - 2");
    }

    #[test]
    fn test_choice_maps_label_to_value() {
        let choice = Choice::new([("yes", true), ("no", false)]);
        assert_eq!(choice.meet("yes".to_string()), Ok(true));
        assert_eq!(choice.meet("no".to_string()), Ok(false));
    }

    #[test]
    fn test_choice_rejects_unknown_label() {
        let choice = Choice::new([("yes", true), ("no", false)]);
        assert_eq!(
            choice.meet("maybe".to_string()),
            Err(ValidationOutcome::NotAnOption(vec![
                "yes".to_string(),
                "no".to_string()
            ]))
        );
        // Exact match only.
        assert!(choice.meet("YES".to_string()).is_err());
    }

    #[test]
    fn test_choice_repeated_label_keeps_first_position_and_last_value() {
        let choice = Choice::new([("yes", 1), ("no", 0), ("yes", 2)]);
        assert_eq!(choice.hint(), "yes/no");
        assert_eq!(choice.labels(), vec!["yes".to_string(), "no".to_string()]);
        assert_eq!(choice.meet("yes".to_string()), Ok(2));
        assert_eq!(
            choice.meet("maybe".to_string()),
            Err(ValidationOutcome::NotAnOption(vec![
                "yes".to_string(),
                "no".to_string()
            ]))
        );
    }

    #[test]
    fn test_choice_hint_keeps_declaration_order() {
        let choice = Choice::new([("quick", 1), ("deep", 2), ("custom", 3)]);
        assert_eq!(choice.hint(), "quick/deep/custom");
        assert_eq!(choice.describe(), "");
    }

    #[test]
    fn test_menu_describe_numbers_items() {
        let menu = Menu::new(vec!["tea", "coffee"]);
        assert_eq!(menu.describe(), "1. tea\n2. coffee");
        assert_eq!(menu.hint(), "");
    }

    #[test]
    fn test_menu_selects_by_one_based_index() {
        let menu = Menu::new(vec!["a", "b", "c"]);
        assert_eq!(menu.meet(1), Ok("a"));
        assert_eq!(menu.meet(3), Ok("c"));
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(-1)]
    #[case(i64::MAX)]
    fn test_menu_rejects_index_outside_items(#[case] index: i64) {
        let menu = Menu::new(vec!["a", "b", "c"]);
        assert_eq!(
            menu.meet(index),
            Err(ValidationOutcome::NotInRange { min: 1, max: 3 })
        );
    }

    #[test]
    fn test_date_parses_day_month_year() {
        assert_eq!(
            Date.meet("13.03.2019".to_string()),
            Ok(NaiveDate::from_ymd_opt(2019, 3, 13).unwrap())
        );
    }

    #[test]
    fn test_date_rejects_month_day_year() {
        assert_eq!(
            Date.meet("03.13.2019".to_string()),
            Err(ValidationOutcome::NotADate("03.13.2019".to_string()))
        );
        assert!(Date.meet("2019-03-13".to_string()).is_err());
    }

    #[test]
    fn test_meet_has_no_hidden_state() {
        let number = Number;
        assert_eq!(number.meet("12".to_string()), number.meet("12".to_string()));
        let choice = Choice::new([("a", 1)]);
        assert_eq!(choice.meet("b".to_string()), choice.meet("b".to_string()));
    }
}
