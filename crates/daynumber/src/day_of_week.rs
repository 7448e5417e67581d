//! ISO-numbered day of the week.

use std::fmt;

use crate::error::DayNumberError;

/// Day of the week, numbered the ISO way (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl DayOfWeek {
    /// All seven days, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Creates a `DayOfWeek` from its ISO number.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::InvalidDayOfWeek`] if `value` is not in 1..=7.
    pub fn from_iso_number(value: i32) -> Result<Self, DayNumberError> {
        if !(1..=7).contains(&value) {
            return Err(DayNumberError::InvalidDayOfWeek { value });
        }
        Ok(Self::from_index(value - 1))
    }

    /// Returns the ISO number (1..=7).
    pub fn iso_number(self) -> i32 {
        self as i32
    }

    /// Maps a 0-based index (Monday = 0) onto a weekday; the index is
    /// reduced modulo 7 first.
    pub(crate) fn from_index(index: i32) -> Self {
        Self::ALL[index.rem_euclid(7) as usize]
    }

    /// Returns the 0-based index (Monday = 0).
    pub(crate) fn index(self) -> i32 {
        self as i32 - 1
    }
}

impl TryFrom<i32> for DayOfWeek {
    type Error = DayNumberError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_iso_number(value)
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        };
        f.write_str(name)
    }
}
