use kalends_calendar::{CalendarDate, registry};
use kalends_daynumber::{DayNumber, DayOfWeek};
use kalends_schema::DateParts;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn parts_in(date: CalendarDate<'_>, calendar: &kalends_calendar::Calendar) -> DateParts {
    date.with_calendar(calendar).unwrap().parts()
}

#[test]
fn epochs_match_their_historical_dates() {
    let julian = registry::julian();
    let gregorian = registry::gregorian();
    let cases = [
        (registry::coptic(), julian, DateParts::new(284, 8, 29)),
        (registry::ethiopic(), julian, DateParts::new(8, 8, 29)),
        (registry::tabular_islamic(), julian, DateParts::new(622, 7, 16)),
        (registry::armenian(), julian, DateParts::new(552, 7, 11)),
        (registry::egyptian(), julian, DateParts::new(-746, 2, 26)),
        (registry::french_republican(), gregorian, DateParts::new(1792, 9, 22)),
        (registry::positivist(), gregorian, DateParts::new(1789, 1, 1)),
    ];
    for (calendar, reference, expected) in cases {
        let first = calendar.date(1, 1, 1).unwrap();
        assert_eq!(
            parts_in(first, reference),
            expected,
            "{} 1/1/1",
            calendar.name()
        );
    }
}

#[test]
fn known_day_numbers() {
    let civil = registry::civil();
    assert_eq!(
        civil.date(2000, 1, 1).unwrap().day_number(),
        DayNumber::from_days_since_zero(730_119)
    );
    assert_eq!(
        civil.date(1970, 1, 1).unwrap().day_number(),
        DayNumber::from_days_since_zero(719_162)
    );
    assert_eq!(civil.date(1, 1, 1).unwrap().day_of_week(), DayOfWeek::Monday);
    // Gregorian reform: Thursday 4 October 1582 (Julian) was followed by
    // Friday 15 October 1582 (Gregorian).
    let last_julian = registry::julian().date(1582, 10, 4).unwrap();
    let first_gregorian = registry::gregorian().date(1582, 10, 15).unwrap();
    assert_eq!(last_julian.day_of_week(), DayOfWeek::Thursday);
    assert_eq!(first_gregorian.count_days_since(last_julian).unwrap(), 1);
}

#[test]
fn pax_years_start_on_sunday() {
    let pax = registry::pax();
    for year in [1, 6, 99, 100, 399, 400, 2000, 2024] {
        assert_eq!(
            pax.date(year, 1, 1).unwrap().day_of_week(),
            DayOfWeek::Sunday,
            "year {year}"
        );
    }
}

#[test]
fn random_day_numbers_round_trip_in_every_calendar() {
    let mut rng = StdRng::seed_from_u64(11);
    for name in registry::NAMES {
        let calendar = registry::by_name(name).unwrap();
        let lo = calendar.min_date().day_number().days_since_zero();
        let hi = calendar.max_date().day_number().days_since_zero();
        for _ in 0..500 {
            let day_number = DayNumber::from_days_since_zero(rng.random_range(lo..=hi));
            let date = calendar.date_from_day_number(day_number).unwrap();
            let DateParts { year, month, day } = date.parts();
            let again = calendar.date(year, month, day).unwrap();
            assert_eq!(again, date, "{name}");
            assert_eq!(again.day_number(), day_number);
            let ordinal = calendar
                .ordinal_date(date.year(), date.day_of_year())
                .unwrap();
            assert_eq!(ordinal, date);
        }
        assert!(
            calendar
                .date_from_day_number(DayNumber::from_days_since_zero(hi + 1))
                .is_err()
        );
        assert!(
            calendar
                .date_from_day_number(DayNumber::from_days_since_zero(lo - 1))
                .is_err()
        );
    }
}
