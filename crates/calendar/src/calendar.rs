//! A named calendar: a scope plus the rules for its arithmetic.

use kalends_daynumber::DayNumber;
use kalends_math::{AdditionRuleset, DateMath, MonthMath};
use kalends_schema::CalendricalSchema;
use kalends_scope::{CalendarError, CalendarScope};

use crate::date::CalendarDate;
use crate::month::CalendarMonth;

/// A calendar: a [`CalendarScope`] and an [`AdditionRuleset`] under a name.
///
/// Dates and months borrow the calendar they belong to.
#[derive(Debug, Clone)]
pub struct Calendar {
    name: String,
    scope: CalendarScope,
    rules: AdditionRuleset,
}

impl Calendar {
    /// Creates a calendar whose arithmetic truncates.
    pub fn new(name: impl Into<String>, scope: CalendarScope) -> Self {
        Self {
            name: name.into(),
            scope,
            rules: AdditionRuleset::default(),
        }
    }

    pub fn with_rules(mut self, rules: AdditionRuleset) -> Self {
        self.rules = rules;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &CalendarScope {
        &self.scope
    }

    pub fn schema(&self) -> &'static dyn CalendricalSchema {
        self.scope.schema()
    }

    pub fn epoch(&self) -> DayNumber {
        self.scope.epoch()
    }

    pub fn rules(&self) -> AdditionRuleset {
        self.rules
    }

    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns the out-of-range error naming the first invalid field.
    pub fn date(&self, year: i32, month: u8, day: u8) -> Result<CalendarDate<'_>, CalendarError> {
        self.scope.validate_year_month_day(year, month, day)?;
        let days = self.schema().count_days_since_epoch(year, month, day);
        Ok(CalendarDate::new(self, days))
    }

    /// Creates a date from year and day of the year.
    pub fn ordinal_date(
        &self,
        year: i32,
        day_of_year: u16,
    ) -> Result<CalendarDate<'_>, CalendarError> {
        self.scope.validate_ordinal(year, day_of_year)?;
        let days = self.schema().count_days_since_epoch_ordinal(year, day_of_year);
        Ok(CalendarDate::new(self, days))
    }

    pub fn month(&self, year: i32, month: u8) -> Result<CalendarMonth<'_>, CalendarError> {
        self.scope.validate_year_month(year, month)?;
        let months = self.schema().count_months_since_epoch(year, month);
        Ok(CalendarMonth::new(self, months))
    }

    /// Creates the date falling on `day_number`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::DateOverflow`] if the day lies outside the
    /// calendar's range.
    pub fn date_from_day_number(
        &self,
        day_number: DayNumber,
    ) -> Result<CalendarDate<'_>, CalendarError> {
        let days = self.scope.days_since_epoch(day_number)?;
        Ok(CalendarDate::new(self, days))
    }

    /// Creates a date from a count of days since the calendar's epoch.
    pub fn date_from_days_since_epoch(
        &self,
        days_since_epoch: i32,
    ) -> Result<CalendarDate<'_>, CalendarError> {
        self.scope.check_overflow(days_since_epoch)?;
        Ok(CalendarDate::new(self, days_since_epoch))
    }

    /// First supported date.
    pub fn min_date(&self) -> CalendarDate<'_> {
        CalendarDate::new(self, self.scope.segment().min_days())
    }

    /// Last supported date.
    pub fn max_date(&self) -> CalendarDate<'_> {
        CalendarDate::new(self, self.scope.segment().max_days())
    }

    pub fn is_leap_year(&self, year: i32) -> Result<bool, CalendarError> {
        self.scope.validate_year(year)?;
        Ok(self.schema().is_leap_year(year))
    }

    pub fn count_months_in_year(&self, year: i32) -> Result<u8, CalendarError> {
        self.scope.validate_year(year)?;
        Ok(self.schema().count_months_in_year(year))
    }

    pub fn count_days_in_year(&self, year: i32) -> Result<u16, CalendarError> {
        self.scope.validate_year(year)?;
        Ok(self.schema().count_days_in_year(year))
    }

    pub fn count_days_in_month(&self, year: i32, month: u8) -> Result<u8, CalendarError> {
        self.scope.validate_year_month(year, month)?;
        Ok(self.schema().count_days_in_month(year, month))
    }

    /// Arithmetic on dates, under the calendar's date rule.
    pub fn date_math(&self) -> DateMath<'_> {
        DateMath::new(&self.scope, self.rules.date)
    }

    /// Arithmetic on ordinal dates, under the calendar's ordinal rule.
    pub fn ordinal_math(&self) -> DateMath<'_> {
        DateMath::new(&self.scope, self.rules.ordinal)
    }

    /// Arithmetic on months, under the calendar's month rule.
    pub fn month_math(&self) -> MonthMath<'_> {
        MonthMath::new(&self.scope, self.rules.month)
    }
}
