use kalends_calendar::{Calendar, CalendarConfig, registry};
use kalends_daynumber::{DayNumber, DayOfWeek};
use kalends_math::{AdditionRule, AdditionRuleset};
use kalends_schema::{DateParts, MonthParts, SchemaKind};
use kalends_scope::CalendarError;

fn civil_with(rule: AdditionRule) -> Calendar {
    CalendarConfig::new("civil", SchemaKind::Gregorian)
        .with_rules(AdditionRuleset::uniform(rule))
        .build()
        .unwrap()
}

#[test]
fn leap_day_plus_one_year_under_each_rule() {
    let expected = [
        (AdditionRule::Truncate, Ok(DateParts::new(2001, 2, 28))),
        (AdditionRule::Overspill, Ok(DateParts::new(2001, 3, 1))),
        (AdditionRule::Exact, Ok(DateParts::new(2001, 3, 1))),
        (AdditionRule::Overflow, Err(CalendarError::DateOverflow)),
    ];
    for (rule, result) in expected {
        let calendar = civil_with(rule);
        let leap_day = calendar.date(2000, 2, 29).unwrap();
        assert_eq!(
            leap_day.plus_years(1).map(|d| d.parts()),
            result,
            "{rule:?}"
        );
    }
}

#[test]
fn next_monday_from_day_zero() {
    let monday = DayNumber::ZERO.next(DayOfWeek::Monday).unwrap();
    assert_eq!(monday.days_since_zero(), 7);
    let civil = registry::civil();
    let first = civil.min_date();
    assert_eq!(first.next(DayOfWeek::Monday).unwrap().parts(), DateParts::new(1, 1, 8));
    assert_eq!(first.nearest(DayOfWeek::Sunday).unwrap_err(), CalendarError::DateOverflow);
    assert_eq!(
        first.next_or_same(DayOfWeek::Monday).unwrap(),
        first
    );
}

#[test]
fn pax_last_month_of_leap_year_plus_one_year() {
    let pax = registry::pax();
    let date = pax.date(2000, 14, 20).unwrap();
    let next = date.plus_years(1).unwrap();
    assert_eq!(next.parts(), DateParts::new(2001, 13, 28));
    assert_eq!(next.day_of_week(), DayOfWeek::Saturday);

    let month = pax.month(2000, 14).unwrap();
    assert_eq!(month.plus_years(1).unwrap().parts(), MonthParts::new(2001, 13));
    let pax_week = pax.month(2000, 13).unwrap();
    assert!(pax_week.is_intercalary());
    assert_eq!(pax_week.count_days(), 7);
}

#[test]
fn counting_never_passes_the_end() {
    let calendar = civil_with(AdditionRule::Exact);
    let start = calendar.date(2000, 1, 31).unwrap();
    let end = calendar.date(2000, 3, 2).unwrap();
    let (months, shifted) = calendar
        .date_math()
        .count_months_between(start.parts(), end.parts());
    assert_eq!(months, 1);
    assert_eq!(shifted, DateParts::new(2000, 3, 2));
    assert!(shifted <= end.parts());
    assert_eq!(end.count_months_since(start).unwrap(), 1);
}

#[test]
fn month_and_year_boundaries() {
    let coptic = registry::coptic();
    let date = coptic.date(3, 12, 33).unwrap();
    assert_eq!(date.epagomenal_number(), Some(3));
    assert_eq!(date.end_of_month().parts(), DateParts::new(3, 12, 36));
    assert_eq!(date.end_of_year(), date.end_of_month());
    assert_eq!(date.start_of_year().parts(), DateParts::new(3, 1, 1));
    assert_eq!(date.calendar_month().count_days(), 36);
}
