//! Calendar months.

use std::fmt;
use std::ptr;

use kalends_schema::MonthParts;
use kalends_scope::CalendarError;

use crate::calendar::Calendar;
use crate::date::CalendarDate;

/// A month of a [`Calendar`], stored as a count of months since its epoch.
#[derive(Clone, Copy)]
pub struct CalendarMonth<'a> {
    calendar: &'a Calendar,
    months_since_epoch: i32,
}

impl<'a> CalendarMonth<'a> {
    pub(crate) fn new(calendar: &'a Calendar, months_since_epoch: i32) -> Self {
        Self {
            calendar,
            months_since_epoch,
        }
    }

    pub fn calendar(&self) -> &'a Calendar {
        self.calendar
    }

    pub fn months_since_epoch(&self) -> i32 {
        self.months_since_epoch
    }

    pub fn parts(&self) -> MonthParts {
        self.calendar.schema().get_month_parts(self.months_since_epoch)
    }

    pub fn year(&self) -> i32 {
        self.parts().year
    }

    pub fn month(&self) -> u8 {
        self.parts().month
    }

    pub fn count_days(&self) -> u8 {
        let MonthParts { year, month } = self.parts();
        self.calendar.schema().count_days_in_month(year, month)
    }

    /// Whether the month only exists in leap years.
    pub fn is_intercalary(&self) -> bool {
        let MonthParts { year, month } = self.parts();
        self.calendar.schema().is_intercalary_month(year, month)
    }

    pub fn first_date(&self) -> CalendarDate<'a> {
        let MonthParts { year, month } = self.parts();
        let days = self.calendar.schema().count_days_since_epoch(year, month, 1);
        CalendarDate::new(self.calendar, days)
    }

    pub fn last_date(&self) -> CalendarDate<'a> {
        let first = self.first_date().days_since_epoch();
        CalendarDate::new(self.calendar, first + i32::from(self.count_days()) - 1)
    }

    /// Every date of the month, in order.
    pub fn dates(&self) -> impl Iterator<Item = CalendarDate<'a>> + use<'a> {
        let calendar = self.calendar;
        let first = self.first_date().days_since_epoch();
        let count = i32::from(self.count_days());
        (first..first + count).map(move |days| CalendarDate::new(calendar, days))
    }

    pub fn plus_months(&self, months: i32) -> Result<Self, CalendarError> {
        let parts = self.calendar.month_math().add_months(self.parts(), months)?;
        Ok(self.with_parts(parts))
    }

    /// Adds years under the calendar's month rule.
    pub fn plus_years(&self, years: i32) -> Result<Self, CalendarError> {
        let parts = self.calendar.month_math().add_years(self.parts(), years)?;
        Ok(self.with_parts(parts))
    }

    /// Months from `other` to `self`.
    ///
    /// Returns `None` when `other` belongs to another calendar, like the
    /// ordering does.
    pub fn count_months_since(&self, other: CalendarMonth<'_>) -> Option<i32> {
        self.same_calendar(&other).then(|| {
            self.calendar
                .month_math()
                .count_months_between(other.parts(), self.parts())
        })
    }

    /// Whole years from `other` to `self`, under the calendar's month rule.
    ///
    /// Returns `None` when `other` belongs to another calendar.
    pub fn count_years_since(&self, other: CalendarMonth<'_>) -> Option<i32> {
        self.same_calendar(&other).then(|| {
            let (years, _) = self
                .calendar
                .month_math()
                .count_years_between(other.parts(), self.parts());
            years
        })
    }

    fn same_calendar(&self, other: &CalendarMonth<'_>) -> bool {
        ptr::eq(self.calendar, other.calendar)
    }

    fn with_parts(&self, parts: MonthParts) -> Self {
        let months = self
            .calendar
            .schema()
            .count_months_since_epoch(parts.year, parts.month);
        Self::new(self.calendar, months)
    }
}

impl PartialEq for CalendarMonth<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_calendar(other) && self.months_since_epoch == other.months_since_epoch
    }
}

impl PartialOrd for CalendarMonth<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.same_calendar(other)
            .then(|| self.months_since_epoch.cmp(&other.months_since_epoch))
    }
}

impl fmt::Debug for CalendarMonth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CalendarMonth")
            .field("calendar", &self.calendar.name())
            .field("parts", &self.parts())
            .finish()
    }
}

impl fmt::Display for CalendarMonth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.parts(), self.calendar.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalends_daynumber::DayZero;
    use kalends_schema::{DateParts, SchemaKind};
    use kalends_scope::CalendarScope;

    fn calendar(kind: SchemaKind) -> Calendar {
        let scope = CalendarScope::standard(kind.schema(), DayZero::NEW_STYLE).unwrap();
        Calendar::new(kind.name(), scope)
    }

    #[test]
    fn first_and_last_dates() {
        let cal = calendar(SchemaKind::Gregorian);
        let feb = cal.month(2000, 2).unwrap();
        assert_eq!(feb.count_days(), 29);
        assert_eq!(feb.first_date().parts(), DateParts::new(2000, 2, 1));
        assert_eq!(feb.last_date().parts(), DateParts::new(2000, 2, 29));
        assert_eq!(feb.dates().count(), 29);
        assert_eq!(feb.to_string(), "2000-02 (gregorian)");
    }

    #[test]
    fn leap_month() {
        let cal = calendar(SchemaKind::Lunisolar);
        let month = cal.month(3, 13).unwrap();
        assert!(month.is_intercalary());
        assert_eq!(month.plus_years(1).unwrap().parts(), MonthParts::new(4, 12));
        assert_eq!(month.plus_months(1).unwrap().parts(), MonthParts::new(4, 1));
        let later = cal.month(5, 1).unwrap();
        assert_eq!(later.count_months_since(month), Some(1 + 12));
        assert_eq!(later.count_years_since(month), Some(1));
        assert!(month < later);
    }

    #[test]
    fn counting_across_calendars_is_refused() {
        let gregorian = calendar(SchemaKind::Gregorian);
        let julian = calendar(SchemaKind::Julian);
        let start = gregorian.month(2000, 1).unwrap();
        let end = julian.month(2001, 1).unwrap();
        assert_eq!(end.count_months_since(start), None);
        assert_eq!(end.count_years_since(start), None);
        assert_eq!(end.partial_cmp(&start), None);

        // Two instances of the same schema are still different calendars.
        let other = calendar(SchemaKind::Gregorian);
        assert_eq!(other.month(2001, 1).unwrap().count_months_since(start), None);
        assert_eq!(
            gregorian.month(2001, 1).unwrap().count_months_since(start),
            Some(12)
        );
    }
}
