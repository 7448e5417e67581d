//! Error types for the kalends-scope crate.

use kalends_daynumber::DayNumberError;

/// Error type for validation and range checks against a calendar scope.
///
/// Argument errors name the offending field; overflow errors carry no
/// payload because they are raised on hot paths where the cause is
/// always "the result left the supported range".
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year lies outside the scope's year range.
    #[error("year {year} out of range (must be {min}..={max})")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// First supported year.
        min: i32,
        /// Last supported year.
        max: i32,
    },

    /// Returned when a month does not exist in the given year.
    #[error("month {month} out of range for year {year} (must be 1..={max})")]
    MonthOutOfRange {
        year: i32,
        /// The rejected month.
        month: u8,
        /// Number of months in `year`.
        max: u8,
    },

    /// Returned when a day does not exist in the given month.
    #[error("day {day} out of range for {year}-{month:02} (must be 1..={max})")]
    DayOutOfRange {
        year: i32,
        month: u8,
        /// The rejected day of the month.
        day: u8,
        /// Number of days in the month.
        max: u8,
    },

    /// Returned when a day of the year does not exist in the given year.
    #[error("day of year {day_of_year} out of range for year {year} (must be 1..={max})")]
    DayOfYearOutOfRange {
        year: i32,
        /// The rejected day of the year.
        day_of_year: u16,
        /// Number of days in `year`.
        max: u16,
    },

    /// Returned when an integer does not name a day of the week.
    #[error("day of week {value} out of range (must be 1..=7)")]
    DayOfWeekOutOfRange {
        /// The rejected ISO weekday number.
        value: i32,
    },

    /// Returned when a date computation leaves the supported range.
    #[error("date overflow")]
    DateOverflow,

    /// Returned when a month computation leaves the supported range.
    #[error("month overflow")]
    MonthOverflow,

    /// Returned when a scope is requested over years the schema cannot
    /// represent, or over an empty range.
    #[error("unsupported year range {min}..={max}")]
    UnsupportedYears { min: i32, max: i32 },
}

impl CalendarError {
    /// Returns `true` for [`DateOverflow`](Self::DateOverflow) and
    /// [`MonthOverflow`](Self::MonthOverflow).
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::DateOverflow | Self::MonthOverflow)
    }

    /// Name of the argument an out-of-range error refers to.
    pub fn param_name(&self) -> Option<&'static str> {
        match self {
            Self::YearOutOfRange { .. } => Some("year"),
            Self::MonthOutOfRange { .. } => Some("month"),
            Self::DayOutOfRange { .. } => Some("day"),
            Self::DayOfYearOutOfRange { .. } => Some("day_of_year"),
            Self::DayOfWeekOutOfRange { .. } => Some("day_of_week"),
            Self::DateOverflow | Self::MonthOverflow | Self::UnsupportedYears { .. } => None,
        }
    }
}

impl From<DayNumberError> for CalendarError {
    fn from(err: DayNumberError) -> Self {
        match err {
            DayNumberError::Overflow => Self::DateOverflow,
            DayNumberError::InvalidDayOfWeek { value } => Self::DayOfWeekOutOfRange { value },
        }
    }
}
