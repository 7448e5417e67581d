//! Linear day count shared by every calendar.

use std::fmt;
use std::ops::Sub;

use crate::day_of_week::DayOfWeek;
use crate::error::DayNumberError;

/// Number of days since Monday, January 1st, 1 CE (proleptic Gregorian).
///
/// All shifts are checked: a result outside the `i32` range is reported as
/// [`DayNumberError::Overflow`], never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayNumber(i32);

impl DayNumber {
    /// Monday, January 1st, 1 CE (Gregorian).
    pub const ZERO: DayNumber = DayNumber(0);

    /// Smallest representable day number.
    pub const MIN: DayNumber = DayNumber(i32::MIN);

    /// Largest representable day number.
    pub const MAX: DayNumber = DayNumber(i32::MAX);

    /// Creates a `DayNumber` from a count of days since [`DayNumber::ZERO`].
    pub const fn from_days_since_zero(days: i32) -> Self {
        Self(days)
    }

    /// Returns the count of days since [`DayNumber::ZERO`].
    pub const fn days_since_zero(self) -> i32 {
        self.0
    }

    /// Shifts by `days`, returning `None` on overflow.
    pub const fn checked_add_days(self, days: i32) -> Option<Self> {
        match self.0.checked_add(days) {
            Some(d) => Some(Self(d)),
            None => None,
        }
    }

    /// Shifts by `days`.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] if the result is not representable.
    pub fn plus_days(self, days: i32) -> Result<Self, DayNumberError> {
        self.checked_add_days(days).ok_or(DayNumberError::Overflow)
    }

    /// Returns the day after this one.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] at [`DayNumber::MAX`].
    pub fn next_day(self) -> Result<Self, DayNumberError> {
        self.plus_days(1)
    }

    /// Returns the day before this one.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] at [`DayNumber::MIN`].
    pub fn previous_day(self) -> Result<Self, DayNumberError> {
        self.plus_days(-1)
    }

    /// Counts the days from `other` to `self` as an `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] if the difference does not fit in
    /// an `i32`; use the `-` operator for an `i64` result instead.
    pub fn count_days_since(self, other: DayNumber) -> Result<i32, DayNumberError> {
        self.0.checked_sub(other.0).ok_or(DayNumberError::Overflow)
    }

    /// Returns the day of the week. [`DayNumber::ZERO`] is a Monday.
    pub fn day_of_week(self) -> DayOfWeek {
        DayOfWeek::from_index(self.0.rem_euclid(7))
    }

    /// Latest `day_of_week` strictly before this day.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] near [`DayNumber::MIN`].
    pub fn previous(self, day_of_week: DayOfWeek) -> Result<Self, DayNumberError> {
        // -7..=-1
        let mut delta = self.weekday_delta(day_of_week);
        if delta >= 0 {
            delta -= 7;
        }
        self.plus_days(delta)
    }

    /// Latest `day_of_week` on or before this day.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] near [`DayNumber::MIN`].
    pub fn previous_or_same(self, day_of_week: DayOfWeek) -> Result<Self, DayNumberError> {
        let mut delta = self.weekday_delta(day_of_week);
        if delta > 0 {
            delta -= 7;
        }
        self.plus_days(delta)
    }

    /// The `day_of_week` closest to this day, at most three days away in
    /// either direction.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] near either end of the range.
    pub fn nearest(self, day_of_week: DayOfWeek) -> Result<Self, DayNumberError> {
        let mut delta = self.weekday_delta(day_of_week);
        if delta > 3 {
            delta -= 7;
        }
        self.plus_days(delta)
    }

    /// Earliest `day_of_week` on or after this day.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] near [`DayNumber::MAX`].
    pub fn next_or_same(self, day_of_week: DayOfWeek) -> Result<Self, DayNumberError> {
        self.plus_days(self.weekday_delta(day_of_week))
    }

    /// Earliest `day_of_week` strictly after this day.
    ///
    /// # Errors
    ///
    /// Returns [`DayNumberError::Overflow`] near [`DayNumber::MAX`].
    pub fn next(self, day_of_week: DayOfWeek) -> Result<Self, DayNumberError> {
        // 1..=7
        let mut delta = self.weekday_delta(day_of_week);
        if delta == 0 {
            delta = 7;
        }
        self.plus_days(delta)
    }

    /// Days to move forward (0..=6) to land on `day_of_week`.
    fn weekday_delta(self, day_of_week: DayOfWeek) -> i32 {
        (day_of_week.index() - self.day_of_week().index()).rem_euclid(7)
    }
}

/// Number of days between two day numbers; cannot overflow.
impl Sub for DayNumber {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        i64::from(self.0) - i64::from(rhs.0)
    }
}

impl From<DayNumber> for i32 {
    fn from(value: DayNumber) -> Self {
        value.0
    }
}

impl fmt::Display for DayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_monday() {
        assert_eq!(DayNumber::ZERO.day_of_week(), DayOfWeek::Monday);
        assert_eq!(
            DayNumber::from_days_since_zero(-1).day_of_week(),
            DayOfWeek::Sunday
        );
        assert_eq!(
            DayNumber::from_days_since_zero(6).day_of_week(),
            DayOfWeek::Sunday
        );
    }

    #[test]
    fn plus_days() {
        let d = DayNumber::from_days_since_zero(10);
        assert_eq!(d.plus_days(5).unwrap().days_since_zero(), 15);
        assert_eq!(d.plus_days(-15).unwrap().days_since_zero(), -5);
    }

    #[test]
    fn plus_days_overflow() {
        assert_eq!(DayNumber::MAX.plus_days(1), Err(DayNumberError::Overflow));
        assert_eq!(DayNumber::MIN.plus_days(-1), Err(DayNumberError::Overflow));
        assert_eq!(DayNumber::MAX.next_day(), Err(DayNumberError::Overflow));
        assert_eq!(DayNumber::MIN.previous_day(), Err(DayNumberError::Overflow));
        assert!(DayNumber::MIN.checked_add_days(-1).is_none());
    }

    #[test]
    fn subtraction_is_i64() {
        assert_eq!(DayNumber::MAX - DayNumber::MIN, u32::MAX as i64);
        assert_eq!(
            DayNumber::MAX.count_days_since(DayNumber::MIN),
            Err(DayNumberError::Overflow)
        );
        let a = DayNumber::from_days_since_zero(100);
        let b = DayNumber::from_days_since_zero(-20);
        assert_eq!(a.count_days_since(b).unwrap(), 120);
        assert_eq!(b - a, -120);
    }

    #[test]
    fn adjusters_on_same_weekday() {
        // Day 0 is a Monday.
        let monday = DayNumber::ZERO;
        let d = |n| DayNumber::from_days_since_zero(n);
        assert_eq!(monday.previous(DayOfWeek::Monday).unwrap(), d(-7));
        assert_eq!(monday.previous_or_same(DayOfWeek::Monday).unwrap(), d(0));
        assert_eq!(monday.nearest(DayOfWeek::Monday).unwrap(), d(0));
        assert_eq!(monday.next_or_same(DayOfWeek::Monday).unwrap(), d(0));
        assert_eq!(monday.next(DayOfWeek::Monday).unwrap(), d(7));
    }

    #[test]
    fn nearest_goes_both_ways() {
        let monday = DayNumber::ZERO;
        let d = |n| DayNumber::from_days_since_zero(n);
        assert_eq!(monday.nearest(DayOfWeek::Thursday).unwrap(), d(3));
        assert_eq!(monday.nearest(DayOfWeek::Friday).unwrap(), d(-3));
        assert_eq!(monday.nearest(DayOfWeek::Sunday).unwrap(), d(-1));
    }

    #[test]
    fn adjusters_overflow() {
        assert_eq!(
            DayNumber::MAX.next(DayNumber::MAX.day_of_week()),
            Err(DayNumberError::Overflow)
        );
        assert_eq!(
            DayNumber::MIN.previous(DayNumber::MIN.day_of_week()),
            Err(DayNumberError::Overflow)
        );
        assert_eq!(
            DayNumber::MAX.next_or_same(DayNumber::MAX.day_of_week()),
            Ok(DayNumber::MAX)
        );
    }

    #[test]
    fn display() {
        assert_eq!(DayNumber::from_days_since_zero(-42).to_string(), "-42");
    }
}
