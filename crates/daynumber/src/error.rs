//! Error types for the kalends-daynumber crate.

/// Error type for all fallible operations in the kalends-daynumber crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DayNumberError {
    /// Returned when a day shift would leave the range of [`DayNumber`](crate::DayNumber).
    #[error("day number overflow")]
    Overflow,

    /// Returned when an integer does not name a day of the week.
    #[error("invalid day of week: {value} (must be 1..=7)")]
    InvalidDayOfWeek {
        /// The rejected ISO weekday number.
        value: i32,
    },
}
