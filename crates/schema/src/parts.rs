//! Field records returned by schema decompositions.

use std::fmt;

/// A (year, month, day) triple.
///
/// Ordering is lexicographic, which matches chronological order within a
/// single schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateParts {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl DateParts {
    /// Creates a new triple. No validation takes place.
    pub const fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the (year, month) part.
    pub const fn month_parts(self) -> MonthParts {
        MonthParts::new(self.year, self.month)
    }
}

impl fmt::Display for DateParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A (year, day-of-year) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrdinalParts {
    pub year: i32,
    pub day_of_year: u16,
}

impl OrdinalParts {
    /// Creates a new pair. No validation takes place.
    pub const fn new(year: i32, day_of_year: u16) -> Self {
        Self { year, day_of_year }
    }
}

impl fmt::Display for OrdinalParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.year, self.day_of_year)
    }
}

/// A (year, month) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthParts {
    pub year: i32,
    pub month: u8,
}

impl MonthParts {
    /// Creates a new pair. No validation takes place.
    pub const fn new(year: i32, month: u8) -> Self {
        Self { year, month }
    }

    /// Attaches a day of the month.
    pub const fn with_day(self, day: u8) -> DateParts {
        DateParts::new(self.year, self.month, day)
    }
}

impl fmt::Display for MonthParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}
