//! Known addition results across schemas.

use kalends_daynumber::DayZero;
use kalends_math::{AdditionOutcome, AdditionRule, DateMath, MonthMath};
use kalends_schema::{DateParts, MonthParts, SchemaKind};
use kalends_scope::{CalendarError, CalendarScope};

fn scope(kind: SchemaKind) -> CalendarScope {
    CalendarScope::standard(kind.schema(), DayZero::NEW_STYLE).unwrap()
}

#[test]
fn gregorian_leap_day_plus_one_year() {
    let scope = scope(SchemaKind::Gregorian);
    let leap_day = DateParts::new(2000, 2, 29);
    let expected = [
        (AdditionRule::Truncate, Ok(DateParts::new(2001, 2, 28))),
        (AdditionRule::Overspill, Ok(DateParts::new(2001, 3, 1))),
        (AdditionRule::Exact, Ok(DateParts::new(2001, 3, 1))),
        (AdditionRule::Overflow, Err(CalendarError::DateOverflow)),
    ];
    for (rule, result) in expected {
        let math = DateMath::new(&scope, rule);
        assert_eq!(
            math.add_years_exact(leap_day, 1).unwrap(),
            AdditionOutcome::new(DateParts::new(2001, 2, 28), 1)
        );
        assert_eq!(math.add_years(leap_day, 1), result, "{rule:?}");
    }
}

#[test]
fn pax_last_month_of_leap_year_plus_one_year() {
    let scope = CalendarScope::standard(SchemaKind::Pax.schema(), DayZero::SUNDAY_BEFORE_NEW_STYLE)
        .unwrap();
    for rule in [
        AdditionRule::Truncate,
        AdditionRule::Overspill,
        AdditionRule::Exact,
        AdditionRule::Overflow,
    ] {
        let math = DateMath::new(&scope, rule);
        for day in [1, 15, 28] {
            let outcome = math.add_years_exact(DateParts::new(6, 14, day), 1).unwrap();
            assert_eq!(outcome, AdditionOutcome::exact(DateParts::new(7, 13, 28)));
            assert_eq!(
                math.add_years(DateParts::new(6, 14, day), 1).unwrap(),
                DateParts::new(7, 13, 28)
            );
        }
        // Common month 13 into the Pax week.
        assert_eq!(
            math.add_years_exact(DateParts::new(5, 13, 10), 1).unwrap(),
            AdditionOutcome::new(DateParts::new(6, 13, 7), 3)
        );
    }
}

#[test]
fn lunisolar_leap_month_plus_one_year() {
    let scope = scope(SchemaKind::Lunisolar);
    let math = DateMath::new(&scope, AdditionRule::Truncate);
    let start = DateParts::new(3, 13, 12);
    assert_eq!(
        math.add_years_exact(start, 1).unwrap(),
        AdditionOutcome::new(DateParts::new(4, 12, 29), 12)
    );
    assert_eq!(
        math.with_rule(AdditionRule::Exact).add_years(start, 1).unwrap(),
        DateParts::new(5, 1, 12)
    );
    assert_eq!(
        math.with_rule(AdditionRule::Overspill)
            .add_years(start, 1)
            .unwrap(),
        DateParts::new(5, 1, 1)
    );
}

#[test]
fn coptic_epagomenal_days() {
    let scope = scope(SchemaKind::Coptic13);
    let math = DateMath::new(&scope, AdditionRule::Truncate);
    // 3 is a leap year: the sixth epagomenal day only exists then.
    let sixth = DateParts::new(3, 13, 6);
    assert_eq!(
        math.add_years(sixth, 1).unwrap(),
        DateParts::new(4, 13, 5)
    );
    assert_eq!(
        math.add_months(DateParts::new(4, 12, 30), 1).unwrap(),
        DateParts::new(4, 13, 5)
    );
    assert_eq!(
        math.with_rule(AdditionRule::Exact)
            .add_months(DateParts::new(4, 12, 30), 1)
            .unwrap(),
        DateParts::new(5, 1, 25)
    );
}

#[test]
fn month_math_on_thirteen_month_years() {
    let scope = scope(SchemaKind::InternationalFixed);
    let math = MonthMath::new(&scope, AdditionRule::Truncate);
    assert_eq!(
        math.add_months(MonthParts::new(2000, 13), 1).unwrap(),
        MonthParts::new(2001, 1)
    );
    assert_eq!(
        math.count_months_between(MonthParts::new(2000, 1), MonthParts::new(2001, 1)),
        13
    );
    assert_eq!(
        math.count_years_between(MonthParts::new(2000, 5), MonthParts::new(2003, 4)),
        (2, MonthParts::new(2002, 5))
    );
}
