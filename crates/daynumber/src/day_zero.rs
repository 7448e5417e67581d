//! Well-known epochs.
//!
//! Each constant is the [`DayNumber`] of the first day of year 1 of the
//! corresponding calendar.

use crate::day_number::DayNumber;

/// Namespace for well-known calendar epochs.
#[derive(Debug, Clone, Copy)]
pub struct DayZero;

impl DayZero {
    /// Monday, January 1st, 1 CE (Gregorian).
    pub const NEW_STYLE: DayNumber = DayNumber::ZERO;

    /// Saturday, January 1st, 1 CE (Julian), i.e. December 30th, 0 (Gregorian).
    pub const OLD_STYLE: DayNumber = DayNumber::from_days_since_zero(-2);

    /// Sunday, December 31st, 0 (Gregorian).
    pub const SUNDAY_BEFORE_NEW_STYLE: DayNumber = DayNumber::from_days_since_zero(-1);

    /// August 29th, 284 CE (Julian).
    pub const COPTIC: DayNumber = DayNumber::from_days_since_zero(103_604);

    /// August 29th, 8 CE (Julian).
    pub const ETHIOPIC: DayNumber = DayNumber::from_days_since_zero(2_795);

    /// February 26th, 747 BCE (Julian), the era of Nabonassar.
    pub const EGYPTIAN: DayNumber = DayNumber::from_days_since_zero(-272_788);

    /// July 11th, 552 CE (Julian).
    pub const ARMENIAN: DayNumber = DayNumber::from_days_since_zero(201_442);

    /// September 22nd, 1792 (Gregorian).
    pub const FRENCH_REPUBLICAN: DayNumber = DayNumber::from_days_since_zero(654_414);

    /// July 16th, 622 CE (Julian).
    pub const TABULAR_ISLAMIC: DayNumber = DayNumber::from_days_since_zero(227_014);

    /// January 1st, 1789 (Gregorian).
    pub const POSITIVIST: DayNumber = DayNumber::from_days_since_zero(653_054);
}
