//! Year, month and day arithmetic on calendar dates.

use kalends_schema::{DateParts, OrdinalParts, SchemaProfile};
use kalends_scope::{CalendarError, CalendarScope};
use tracing::trace;

use crate::rule::{AdditionOutcome, AdditionRule};
use crate::strategy::Strategy;

/// Calendar arithmetic over one scope under one [`AdditionRule`].
///
/// Inputs are assumed to be valid dates of the scope. Results are either
/// valid dates of the scope or an overflow error.
#[derive(Debug, Clone)]
pub struct DateMath<'a> {
    scope: &'a CalendarScope,
    rule: AdditionRule,
    strategy: Strategy,
}

impl<'a> DateMath<'a> {
    pub fn new(scope: &'a CalendarScope, rule: AdditionRule) -> Self {
        Self {
            scope,
            rule,
            strategy: Strategy::of(scope.schema()),
        }
    }

    pub fn scope(&self) -> &'a CalendarScope {
        self.scope
    }

    pub fn rule(&self) -> AdditionRule {
        self.rule
    }

    /// Same scope, different rule.
    pub fn with_rule(&self, rule: AdditionRule) -> Self {
        Self {
            rule,
            ..self.clone()
        }
    }

    /// Adds `days` to a date.
    pub fn add_days(&self, parts: DateParts, days: i32) -> Result<DateParts, CalendarError> {
        let schema = self.scope.schema();
        let start = schema.count_days_since_epoch(parts.year, parts.month, parts.day);
        let target = self.shift_days(start, days)?;
        Ok(schema.get_date_parts(target))
    }

    /// Adds `days` to an ordinal date.
    pub fn add_days_ordinal(
        &self,
        parts: OrdinalParts,
        days: i32,
    ) -> Result<OrdinalParts, CalendarError> {
        let schema = self.scope.schema();
        let start = schema.count_days_since_epoch_ordinal(parts.year, parts.day_of_year);
        let target = self.shift_days(start, days)?;
        Ok(schema.get_ordinal_parts(target))
    }

    /// Adds `years` and clamps the day without applying the rule.
    pub fn add_years_exact(
        &self,
        parts: DateParts,
        years: i32,
    ) -> Result<AdditionOutcome<DateParts>, CalendarError> {
        let year = self.target_year(parts.year, years)?;
        let schema = self.scope.schema();
        if self.strategy.is_plain() && parts.month > schema.count_months_in_year(year) {
            let end = schema.end_of_year_parts(year);
            // A leap-week calendar only loses its short intercalary month, so
            // the last month is the natural counterpart.
            let roundoff = if schema.profile() == SchemaProfile::LeapWeek {
                0
            } else {
                i32::from(parts.day)
            };
            return Ok(AdditionOutcome::new(end, roundoff));
        }
        Ok(self.clamp_day(year, parts.month, parts.day))
    }

    /// Adds `years`, resolving a missing day with the rule.
    pub fn add_years(&self, parts: DateParts, years: i32) -> Result<DateParts, CalendarError> {
        let outcome = self.add_years_exact(parts, years)?;
        self.resolve(outcome)
    }

    /// Adds `months` and clamps the day without applying the rule.
    pub fn add_months_exact(
        &self,
        parts: DateParts,
        months: i32,
    ) -> Result<AdditionOutcome<DateParts>, CalendarError> {
        let schema = self.scope.schema();
        let start = self
            .strategy
            .months_since_epoch(schema, parts.year, parts.month);
        let target = start
            .checked_add(months)
            .filter(|m| self.scope.segment().months().contains(m))
            .ok_or(CalendarError::DateOverflow)?;
        let month = self.strategy.month_parts(schema, target);
        Ok(self.clamp_day(month.year, month.month, parts.day))
    }

    /// Adds `months`, resolving a missing day with the rule.
    pub fn add_months(&self, parts: DateParts, months: i32) -> Result<DateParts, CalendarError> {
        let outcome = self.add_months_exact(parts, months)?;
        self.resolve(outcome)
    }

    /// Adds `years` to an ordinal date and clamps the day of the year without
    /// applying the rule.
    pub fn add_years_ordinal_exact(
        &self,
        parts: OrdinalParts,
        years: i32,
    ) -> Result<AdditionOutcome<OrdinalParts>, CalendarError> {
        let year = self.target_year(parts.year, years)?;
        let days_in_year = self.scope.schema().count_days_in_year(year);
        if parts.day_of_year > days_in_year {
            return Ok(AdditionOutcome::new(
                OrdinalParts::new(year, days_in_year),
                i32::from(parts.day_of_year - days_in_year),
            ));
        }
        Ok(AdditionOutcome::exact(OrdinalParts::new(
            year,
            parts.day_of_year,
        )))
    }

    /// Adds `years` to an ordinal date, resolving a missing day with the rule.
    pub fn add_years_ordinal(
        &self,
        parts: OrdinalParts,
        years: i32,
    ) -> Result<OrdinalParts, CalendarError> {
        let outcome = self.add_years_ordinal_exact(parts, years)?;
        match self.resolution(outcome.roundoff)? {
            0 => Ok(outcome.value),
            shift => self.add_days_ordinal(outcome.value, shift),
        }
    }

    /// Counts whole years from `start` to `end`.
    ///
    /// Returns the count and `start` shifted by that many years; the shifted
    /// date never passes `end`. Under [`AdditionRule::Overflow`] the shift is
    /// computed with [`AdditionRule::Truncate`].
    pub fn count_years_between(&self, start: DateParts, end: DateParts) -> (i32, DateParts) {
        let math = self.counting();
        let estimate = end.year - start.year;
        step_back(estimate, start, end, |n| math.add_years(start, n))
    }

    /// Counts whole months from `start` to `end`.
    ///
    /// Same contract as [`count_years_between`](Self::count_years_between).
    pub fn count_months_between(&self, start: DateParts, end: DateParts) -> (i32, DateParts) {
        let math = self.counting();
        let schema = self.scope.schema();
        let estimate = self.strategy.months_since_epoch(schema, end.year, end.month)
            - self
                .strategy
                .months_since_epoch(schema, start.year, start.month);
        step_back(estimate, start, end, |n| math.add_months(start, n))
    }

    fn counting(&self) -> Self {
        match self.rule {
            AdditionRule::Overflow => self.with_rule(AdditionRule::Truncate),
            _ => self.clone(),
        }
    }

    fn target_year(&self, year: i32, years: i32) -> Result<i32, CalendarError> {
        let target = year
            .checked_add(years)
            .ok_or(CalendarError::DateOverflow)?;
        self.scope.check_year_overflow(target)?;
        Ok(target)
    }

    fn shift_days(&self, days_since_epoch: i32, days: i32) -> Result<i32, CalendarError> {
        let target = days_since_epoch
            .checked_add(days)
            .ok_or(CalendarError::DateOverflow)?;
        self.scope.check_overflow(target)?;
        Ok(target)
    }

    fn clamp_day(&self, year: i32, month: u8, day: u8) -> AdditionOutcome<DateParts> {
        let days_in_month = self.scope.schema().count_days_in_month(year, month);
        if day > days_in_month {
            AdditionOutcome::new(
                DateParts::new(year, month, days_in_month),
                i32::from(day - days_in_month),
            )
        } else {
            AdditionOutcome::exact(DateParts::new(year, month, day))
        }
    }

    /// Number of days to move past a clamped result.
    fn resolution(&self, roundoff: i32) -> Result<i32, CalendarError> {
        if roundoff == 0 {
            return Ok(0);
        }
        trace!(rule = ?self.rule, roundoff, "resolving roundoff");
        match self.rule {
            AdditionRule::Truncate => Ok(0),
            AdditionRule::Overspill => Ok(1),
            AdditionRule::Exact => Ok(roundoff),
            AdditionRule::Overflow => Err(CalendarError::DateOverflow),
        }
    }

    fn resolve(&self, outcome: AdditionOutcome<DateParts>) -> Result<DateParts, CalendarError> {
        match self.resolution(outcome.roundoff)? {
            0 => Ok(outcome.value),
            shift => self.add_days(outcome.value, shift),
        }
    }
}

/// Starting from an estimate, steps one unit toward zero until `add(n)`
/// succeeds without passing `end`.
pub(crate) fn step_back<T: Ord + Copy>(
    estimate: i32,
    start: T,
    end: T,
    add: impl Fn(i32) -> Result<T, CalendarError>,
) -> (i32, T) {
    let mut n = estimate;
    while n != 0 {
        match add(n) {
            Ok(candidate) if (n > 0 && candidate <= end) || (n < 0 && candidate >= end) => {
                return (n, candidate);
            }
            _ => n -= n.signum(),
        }
    }
    (0, start)
}
