//! Boundary behaviour of scopes over every built-in schema.

use kalends_daynumber::DayZero;
use kalends_schema::SchemaKind;
use kalends_scope::{CalendarError, CalendarScope, PROLEPTIC_YEARS, STANDARD_YEARS};

#[test]
fn first_and_last_days_are_valid_and_one_beyond_overflows() {
    for kind in SchemaKind::ALL {
        for years in [STANDARD_YEARS, PROLEPTIC_YEARS] {
            let scope = CalendarScope::new(kind.schema(), DayZero::NEW_STYLE, years).unwrap();
            let segment = scope.segment();
            let schema = scope.schema();

            let min = segment.min_date_parts();
            let max = segment.max_date_parts();
            assert!(scope.validate_year_month_day(min.year, min.month, min.day).is_ok());
            assert!(scope.validate_year_month_day(max.year, max.month, max.day).is_ok());
            assert_eq!(
                schema.count_days_since_epoch(max.year, max.month, max.day),
                segment.max_days(),
                "{}",
                schema.name()
            );

            assert!(scope.check_overflow(segment.min_days()).is_ok());
            assert!(scope.check_overflow(segment.max_days()).is_ok());
            assert_eq!(
                scope.check_overflow(segment.min_days() - 1),
                Err(CalendarError::DateOverflow)
            );
            assert_eq!(
                scope.check_overflow(segment.max_days() + 1),
                Err(CalendarError::DateOverflow)
            );
            assert!(scope.check_months_overflow(segment.max_months()).is_ok());
            assert_eq!(
                scope.check_months_overflow(segment.max_months() + 1),
                Err(CalendarError::MonthOverflow)
            );
        }
    }
}

#[test]
fn every_day_of_a_year_validates_and_the_next_does_not() {
    for kind in SchemaKind::ALL {
        let scope = CalendarScope::standard(kind.schema(), DayZero::NEW_STYLE).unwrap();
        let schema = scope.schema();
        for year in [1, 2, 3, 4, 6, 99, 100, 400, 2000, 9999] {
            let months = schema.count_months_in_year(year);
            for month in 1..=months {
                let days = schema.count_days_in_month(year, month);
                assert!(scope.validate_year_month_day(year, month, days).is_ok());
                let err = scope
                    .validate_year_month_day(year, month, days + 1)
                    .unwrap_err();
                assert_eq!(err.param_name(), Some("day"), "{} {year}-{month}", schema.name());
            }
            assert!(scope.validate_year_month(year, months + 1).is_err());
            let len = schema.count_days_in_year(year);
            assert!(scope.validate_ordinal(year, len).is_ok());
            assert!(scope.validate_ordinal(year, len + 1).is_err());
        }
    }
}

#[test]
fn years_outside_the_schema_domain_are_rejected() {
    let schema = SchemaKind::Gregorian.schema();
    let err = CalendarScope::new(schema, DayZero::NEW_STYLE, -5_000_000..=0).unwrap_err();
    assert_eq!(
        err,
        CalendarError::UnsupportedYears {
            min: -5_000_000,
            max: 0
        }
    );
}
