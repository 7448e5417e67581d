//! Calendar dates.

use std::cmp::Ordering;
use std::fmt;
use std::ptr;

use kalends_daynumber::{DayNumber, DayOfWeek};
use kalends_schema::{DateParts, OrdinalParts};
use kalends_scope::CalendarError;

use crate::calendar::Calendar;
use crate::month::CalendarMonth;

/// A date of a [`Calendar`], stored as a count of days since its epoch.
///
/// Fields are decomposed on demand through the calendar's schema. Two dates
/// compare only when they belong to the same calendar instance; across
/// calendars they are never equal and have no order. Use
/// [`day_number`](Self::day_number) to compare days across calendars.
#[derive(Clone, Copy)]
pub struct CalendarDate<'a> {
    calendar: &'a Calendar,
    days_since_epoch: i32,
}

impl<'a> CalendarDate<'a> {
    /// `days_since_epoch` must lie in the calendar's scope.
    pub(crate) fn new(calendar: &'a Calendar, days_since_epoch: i32) -> Self {
        Self {
            calendar,
            days_since_epoch,
        }
    }

    pub fn calendar(&self) -> &'a Calendar {
        self.calendar
    }

    pub fn days_since_epoch(&self) -> i32 {
        self.days_since_epoch
    }

    /// The calendar-independent day number.
    pub fn day_number(&self) -> DayNumber {
        // The scope checked that every supported day shifts without overflow.
        DayNumber::from_days_since_zero(self.calendar.epoch().days_since_zero() + self.days_since_epoch)
    }

    pub fn parts(&self) -> DateParts {
        self.calendar.schema().get_date_parts(self.days_since_epoch)
    }

    pub fn ordinal_parts(&self) -> OrdinalParts {
        self.calendar.schema().get_ordinal_parts(self.days_since_epoch)
    }

    pub fn year(&self) -> i32 {
        self.ordinal_parts().year
    }

    pub fn month(&self) -> u8 {
        self.parts().month
    }

    pub fn day(&self) -> u8 {
        self.parts().day
    }

    pub fn day_of_year(&self) -> u16 {
        self.ordinal_parts().day_of_year
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        self.day_number().day_of_week()
    }

    pub fn is_intercalary(&self) -> bool {
        let DateParts { year, month, day } = self.parts();
        self.calendar.schema().is_intercalary_day(year, month, day)
    }

    /// Whether the day lies outside the regular month or week structure.
    pub fn is_supplementary(&self) -> bool {
        let DateParts { year, month, day } = self.parts();
        self.calendar.schema().is_supplementary_day(year, month, day)
    }

    pub fn epagomenal_number(&self) -> Option<u8> {
        let DateParts { year, month, day } = self.parts();
        self.calendar.schema().epagomenal_number(year, month, day)
    }

    pub fn plus_days(&self, days: i32) -> Result<Self, CalendarError> {
        let target = self
            .days_since_epoch
            .checked_add(days)
            .ok_or(CalendarError::DateOverflow)?;
        self.calendar.scope().check_overflow(target)?;
        Ok(self.with_days(target))
    }

    pub fn next_day(&self) -> Result<Self, CalendarError> {
        let target = self.days_since_epoch + 1;
        self.calendar.scope().check_upper_bound(target)?;
        Ok(self.with_days(target))
    }

    pub fn previous_day(&self) -> Result<Self, CalendarError> {
        let target = self.days_since_epoch - 1;
        self.calendar.scope().check_lower_bound(target)?;
        Ok(self.with_days(target))
    }

    /// Adds years under the calendar's date rule.
    pub fn plus_years(&self, years: i32) -> Result<Self, CalendarError> {
        let parts = self.calendar.date_math().add_years(self.parts(), years)?;
        Ok(self.with_parts(parts))
    }

    /// Adds months under the calendar's date rule.
    pub fn plus_months(&self, months: i32) -> Result<Self, CalendarError> {
        let parts = self.calendar.date_math().add_months(self.parts(), months)?;
        Ok(self.with_parts(parts))
    }

    /// Adds years keeping the day of the year, under the calendar's ordinal
    /// rule.
    pub fn plus_years_ordinal(&self, years: i32) -> Result<Self, CalendarError> {
        let OrdinalParts { year, day_of_year } = self
            .calendar
            .ordinal_math()
            .add_years_ordinal(self.ordinal_parts(), years)?;
        let days = self
            .calendar
            .schema()
            .count_days_since_epoch_ordinal(year, day_of_year);
        Ok(self.with_days(days))
    }

    /// Whole years from `other` to `self`, under the calendar's date rule.
    ///
    /// `other` is first converted into this calendar.
    pub fn count_years_since(&self, other: CalendarDate<'_>) -> Result<i32, CalendarError> {
        let other = other.with_calendar(self.calendar)?;
        let (years, _) = self
            .calendar
            .date_math()
            .count_years_between(other.parts(), self.parts());
        Ok(years)
    }

    /// Whole months from `other` to `self`, under the calendar's date rule.
    ///
    /// `other` is first converted into this calendar.
    pub fn count_months_since(&self, other: CalendarDate<'_>) -> Result<i32, CalendarError> {
        let other = other.with_calendar(self.calendar)?;
        let (months, _) = self
            .calendar
            .date_math()
            .count_months_between(other.parts(), self.parts());
        Ok(months)
    }

    /// Days from `other` to `self`; works across calendars.
    pub fn count_days_since(&self, other: CalendarDate<'_>) -> Result<i32, CalendarError> {
        Ok(self.day_number().count_days_since(other.day_number())?)
    }

    /// The nearest earlier date falling on `day_of_week`.
    pub fn previous(&self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        self.adjust(self.day_number().previous(day_of_week)?)
    }

    pub fn previous_or_same(&self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        self.adjust(self.day_number().previous_or_same(day_of_week)?)
    }

    /// The date falling on `day_of_week` at most three days away.
    pub fn nearest(&self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        self.adjust(self.day_number().nearest(day_of_week)?)
    }

    pub fn next_or_same(&self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        self.adjust(self.day_number().next_or_same(day_of_week)?)
    }

    /// The nearest later date falling on `day_of_week`.
    pub fn next(&self, day_of_week: DayOfWeek) -> Result<Self, CalendarError> {
        self.adjust(self.day_number().next(day_of_week)?)
    }

    pub fn start_of_year(&self) -> Self {
        self.with_days(self.calendar.schema().start_of_year(self.year()))
    }

    pub fn end_of_year(&self) -> Self {
        let schema = self.calendar.schema();
        let year = self.year();
        self.with_days(
            schema.count_days_since_epoch_ordinal(year, schema.count_days_in_year(year)),
        )
    }

    pub fn start_of_month(&self) -> Self {
        let day = self.day();
        self.with_days(self.days_since_epoch - i32::from(day) + 1)
    }

    pub fn end_of_month(&self) -> Self {
        let DateParts { year, month, day } = self.parts();
        let days_in_month = self.calendar.schema().count_days_in_month(year, month);
        self.with_days(self.days_since_epoch + i32::from(days_in_month - day))
    }

    /// The month containing this date.
    pub fn calendar_month(&self) -> CalendarMonth<'a> {
        let DateParts { year, month, .. } = self.parts();
        let months = self.calendar.schema().count_months_since_epoch(year, month);
        CalendarMonth::new(self.calendar, months)
    }

    /// The same day in another calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] if the day lies outside
    /// `calendar`'s range.
    pub fn with_calendar<'b>(
        &self,
        calendar: &'b Calendar,
    ) -> Result<CalendarDate<'b>, CalendarError> {
        calendar.date_from_day_number(self.day_number())
    }

    fn with_days(&self, days_since_epoch: i32) -> Self {
        Self::new(self.calendar, days_since_epoch)
    }

    fn with_parts(&self, parts: DateParts) -> Self {
        let days = self
            .calendar
            .schema()
            .count_days_since_epoch(parts.year, parts.month, parts.day);
        self.with_days(days)
    }

    fn adjust(&self, day_number: DayNumber) -> Result<Self, CalendarError> {
        self.calendar.date_from_day_number(day_number)
    }
}

impl PartialEq for CalendarDate<'_> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.calendar, other.calendar) && self.days_since_epoch == other.days_since_epoch
    }
}

impl PartialOrd for CalendarDate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.calendar, other.calendar)
            .then(|| self.days_since_epoch.cmp(&other.days_since_epoch))
    }
}

impl fmt::Debug for CalendarDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarDate")
            .field("calendar", &self.calendar.name())
            .field("parts", &self.parts())
            .finish()
    }
}

impl fmt::Display for CalendarDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.parts(), self.calendar.name())
    }
}
