//! Forward and inverse maps agree for every built-in schema.

use kalends_schema::{CalendricalSchema, DateParts, MonthParts, OrdinalParts, SchemaKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const YEARS: std::ops::RangeInclusive<i32> = -30..=430;

fn each_schema(mut f: impl FnMut(&'static dyn CalendricalSchema)) {
    for kind in SchemaKind::ALL {
        f(kind.schema());
    }
}

#[test]
fn date_parts_round_trip_and_days_are_consecutive() {
    each_schema(|schema| {
        let mut expected = schema.start_of_year(*YEARS.start());
        for year in YEARS {
            assert_eq!(schema.start_of_year(year), expected, "{} {year}", schema.name());
            for month in 1..=schema.count_months_in_year(year) {
                for day in 1..=schema.count_days_in_month(year, month) {
                    let days = schema.count_days_since_epoch(year, month, day);
                    assert_eq!(days, expected, "{} {year}-{month}-{day}", schema.name());
                    assert_eq!(
                        schema.get_date_parts(days),
                        DateParts::new(year, month, day),
                        "{}",
                        schema.name()
                    );
                    expected += 1;
                }
            }
        }
    });
}

#[test]
fn ordinal_parts_round_trip() {
    each_schema(|schema| {
        for year in YEARS {
            for doy in 1..=schema.count_days_in_year(year) {
                let days = schema.count_days_since_epoch_ordinal(year, doy);
                assert_eq!(
                    schema.get_ordinal_parts(days),
                    OrdinalParts::new(year, doy),
                    "{}",
                    schema.name()
                );
                let (month, day) = schema.get_month(year, doy);
                assert_eq!(schema.get_day_of_year(year, month, day), doy);
            }
        }
    });
}

#[test]
fn year_length_is_the_sum_of_month_lengths() {
    each_schema(|schema| {
        for year in YEARS {
            let sum: u16 = (1..=schema.count_months_in_year(year))
                .map(|m| u16::from(schema.count_days_in_month(year, m)))
                .sum();
            assert_eq!(sum, schema.count_days_in_year(year), "{} {year}", schema.name());
            assert!(schema.count_days_in_year(year) >= schema.min_days_in_year());
            assert_eq!(
                schema.start_of_year(year + 1) - schema.start_of_year(year),
                i32::from(schema.count_days_in_year(year))
            );
        }
    });
}

#[test]
fn month_index_is_consecutive() {
    each_schema(|schema| {
        let mut expected = schema.count_months_since_epoch(*YEARS.start(), 1);
        for year in YEARS {
            for month in 1..=schema.count_months_in_year(year) {
                assert!(schema.count_days_in_month(year, month) >= schema.min_days_in_month());
                let months = schema.count_months_since_epoch(year, month);
                assert_eq!(months, expected, "{} {year}-{month}", schema.name());
                assert_eq!(schema.get_month_parts(months), MonthParts::new(year, month));
                expected += 1;
            }
        }
        assert_eq!(schema.count_months_since_epoch(1, 1), 0);
        assert_eq!(schema.start_of_year(1), 0);
    });
}

#[test]
fn regular_schemas_have_a_constant_month_count() {
    each_schema(|schema| {
        if let Some(months) = schema.is_regular() {
            for year in YEARS {
                assert_eq!(schema.count_months_in_year(year), months);
            }
        }
    });
}

#[test]
fn random_days_round_trip_across_the_domain() {
    let mut rng = StdRng::seed_from_u64(42);
    each_schema(|schema| {
        let years = schema.supported_years();
        let lo = schema.start_of_year(*years.start());
        let hi = schema.start_of_year(*years.end() + 1) - 1;
        for _ in 0..2000 {
            let days = rng.random_range(lo..=hi);
            let DateParts { year, month, day } = schema.get_date_parts(days);
            assert!(years.contains(&year));
            assert_eq!(
                schema.count_days_since_epoch(year, month, day),
                days,
                "{} {days}",
                schema.name()
            );
        }
        assert_eq!(schema.get_date_parts(lo), schema.start_of_year_parts(*years.start()));
        assert_eq!(schema.get_date_parts(hi), schema.end_of_year_parts(*years.end()));
    });
}
