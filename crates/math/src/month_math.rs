//! Arithmetic on calendar months.

use kalends_schema::{MonthParts, SchemaProfile};
use kalends_scope::{CalendarError, CalendarScope};
use tracing::trace;

use crate::date_math::step_back;
use crate::rule::AdditionRule;
use crate::strategy::Strategy;

/// Month arithmetic over one scope under one [`AdditionRule`].
///
/// Only plain schemas can hit a missing month: adding years to the leap
/// month of a lunisolar year, or to the leap week of a leap-week year.
#[derive(Debug, Clone)]
pub struct MonthMath<'a> {
    scope: &'a CalendarScope,
    rule: AdditionRule,
    strategy: Strategy,
}

impl<'a> MonthMath<'a> {
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

    pub fn with_rule(&self, rule: AdditionRule) -> Self {
        Self {
            rule,
            ..self.clone()
        }
    }

    /// Adds `years` to a month.
    ///
    /// When the month does not exist in the target year, a leap-week schema
    /// always clamps to the last month; other schemas follow the rule.
    pub fn add_years(&self, parts: MonthParts, years: i32) -> Result<MonthParts, CalendarError> {
        let year = parts
            .year
            .checked_add(years)
            .filter(|y| self.scope.segment().years().contains(y))
            .ok_or(CalendarError::MonthOverflow)?;
        let schema = self.scope.schema();
        let months_in_year = self.strategy.count_months_in_year(schema, year);
        if parts.month <= months_in_year {
            return Ok(MonthParts::new(year, parts.month));
        }

        let last = MonthParts::new(year, months_in_year);
        if schema.profile() == SchemaProfile::LeapWeek {
            return Ok(last);
        }
        let roundoff = i32::from(parts.month - months_in_year);
        trace!(rule = ?self.rule, roundoff, "resolving month roundoff");
        match self.rule {
            AdditionRule::Truncate => Ok(last),
            AdditionRule::Overspill => self.add_months(last, 1),
            AdditionRule::Exact => self.add_months(last, roundoff),
            AdditionRule::Overflow => Err(CalendarError::MonthOverflow),
        }
    }

    /// Adds `months` to a month.
    pub fn add_months(&self, parts: MonthParts, months: i32) -> Result<MonthParts, CalendarError> {
        let schema = self.scope.schema();
        let target = self
            .months_since_epoch(parts)
            .checked_add(months)
            .ok_or(CalendarError::MonthOverflow)?;
        self.scope.check_months_overflow(target)?;
        Ok(self.strategy.month_parts(schema, target))
    }

    /// Counts whole years from `start` to `end`, returning the count and
    /// `start` shifted by that many years.
    pub fn count_years_between(&self, start: MonthParts, end: MonthParts) -> (i32, MonthParts) {
        let math = match self.rule {
            AdditionRule::Overflow => self.with_rule(AdditionRule::Truncate),
            _ => self.clone(),
        };
        step_back(end.year - start.year, start, end, |n| math.add_years(start, n))
    }

    /// Counts months from `start` to `end`.
    pub fn count_months_between(&self, start: MonthParts, end: MonthParts) -> i32 {
        self.months_since_epoch(end) - self.months_since_epoch(start)
    }

    fn months_since_epoch(&self, parts: MonthParts) -> i32 {
        self.strategy
            .months_since_epoch(self.scope.schema(), parts.year, parts.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kalends_daynumber::DayZero;
    use kalends_schema::SchemaKind;

    fn lunisolar() -> CalendarScope {
        CalendarScope::standard(SchemaKind::Lunisolar.schema(), DayZero::NEW_STYLE).unwrap()
    }

    // Year 3 is the first leap year of the lunisolar schema; year 4 is common.
    const LEAP_MONTH: MonthParts = MonthParts::new(3, 13);

    #[test]
    fn missing_leap_month() {
        let scope = lunisolar();
        let math = MonthMath::new(&scope, AdditionRule::Truncate);
        assert_eq!(math.add_years(LEAP_MONTH, 1).unwrap(), MonthParts::new(4, 12));
        assert_eq!(
            math.with_rule(AdditionRule::Overspill)
                .add_years(LEAP_MONTH, 1)
                .unwrap(),
            MonthParts::new(5, 1)
        );
        assert_eq!(
            math.with_rule(AdditionRule::Exact)
                .add_years(LEAP_MONTH, 1)
                .unwrap(),
            MonthParts::new(5, 1)
        );
        assert_eq!(
            math.with_rule(AdditionRule::Overflow).add_years(LEAP_MONTH, 1),
            Err(CalendarError::MonthOverflow)
        );
    }

    #[test]
    fn leap_week_clamps_whatever_the_rule() {
        let scope =
            CalendarScope::standard(SchemaKind::Pax.schema(), DayZero::SUNDAY_BEFORE_NEW_STYLE)
                .unwrap();
        for rule in [
            AdditionRule::Truncate,
            AdditionRule::Overspill,
            AdditionRule::Exact,
            AdditionRule::Overflow,
        ] {
            let math = MonthMath::new(&scope, rule);
            assert_eq!(
                math.add_years(MonthParts::new(6, 14), 1).unwrap(),
                MonthParts::new(7, 13)
            );
        }
    }

    #[test]
    fn add_months_and_count() {
        let scope = lunisolar();
        let math = MonthMath::new(&scope, AdditionRule::Truncate);
        let start = MonthParts::new(2, 12);
        assert_eq!(math.add_months(start, 1).unwrap(), MonthParts::new(3, 1));
        assert_eq!(math.add_months(start, 13).unwrap(), MonthParts::new(3, 13));
        assert_eq!(math.add_months(start, 14).unwrap(), MonthParts::new(4, 1));
        assert_eq!(math.count_months_between(start, MonthParts::new(4, 1)), 14);
        assert_eq!(
            math.add_months(MonthParts::new(1, 1), -1),
            Err(CalendarError::MonthOverflow)
        );
    }

    #[test]
    fn count_years_steps_back_over_the_leap_month() {
        let scope = lunisolar();
        let math = MonthMath::new(&scope, AdditionRule::Overflow);
        assert_eq!(
            math.count_years_between(LEAP_MONTH, MonthParts::new(4, 12)),
            (1, MonthParts::new(4, 12))
        );
        assert_eq!(
            math.count_years_between(LEAP_MONTH, MonthParts::new(4, 11)),
            (0, LEAP_MONTH)
        );
        assert_eq!(
            math.count_years_between(MonthParts::new(5, 1), MonthParts::new(3, 2)),
            (-1, MonthParts::new(4, 1))
        );
    }
}
