//! Rules for resolving ambiguous additions.

use serde::Deserialize;

/// What to do when adding years or months lands on a day (or month) that
/// does not exist in the target, e.g. February 29th plus one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdditionRule {
    /// Clamp to the last valid day (or month).
    #[default]
    Truncate,
    /// Move to the first day (or month) after the last valid one.
    Overspill,
    /// Move past the last valid day (or month) by the missing amount.
    Exact,
    /// Fail with an overflow error.
    Overflow,
}

/// One [`AdditionRule`] per kind of arithmetic.
///
/// Every field defaults to [`AdditionRule::Truncate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AdditionRuleset {
    /// Rule for year/month/day dates.
    pub date: AdditionRule,
    /// Rule for year/day-of-year dates.
    pub ordinal: AdditionRule,
    /// Rule for calendar months.
    pub month: AdditionRule,
}

impl AdditionRuleset {
    /// Uses `rule` for every kind of arithmetic.
    pub fn uniform(rule: AdditionRule) -> Self {
        Self {
            date: rule,
            ordinal: rule,
            month: rule,
        }
    }

    pub fn with_date(mut self, rule: AdditionRule) -> Self {
        self.date = rule;
        self
    }

    pub fn with_ordinal(mut self, rule: AdditionRule) -> Self {
        self.ordinal = rule;
        self
    }

    pub fn with_month(mut self, rule: AdditionRule) -> Self {
        self.month = rule;
        self
    }
}

/// Result of an addition before any rule is applied.
///
/// `value` is the clamped result; `roundoff` counts the days (or months)
/// that had to be cut off to make it valid. A roundoff of zero means the
/// addition was exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdditionOutcome<T> {
    pub value: T,
    pub roundoff: i32,
}

impl<T> AdditionOutcome<T> {
    pub fn new(value: T, roundoff: i32) -> Self {
        Self { value, roundoff }
    }

    pub fn exact(value: T) -> Self {
        Self { value, roundoff: 0 }
    }

    pub fn is_exact(&self) -> bool {
        self.roundoff == 0
    }
}
