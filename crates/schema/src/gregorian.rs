//! Gregorian schema.

use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, regular_month_parts,
    regular_months_since_epoch,
};
use crate::solar12;

const DAYS_IN_YEAR: i64 = 365;
// One leap year every 4 years
const DAYS_IN_4_YEAR_CYCLE: i64 = DAYS_IN_YEAR * 4 + 1;
// No leap year every 100 years
const DAYS_IN_100_YEAR_CYCLE: i64 = 25 * DAYS_IN_4_YEAR_CYCLE - 1;
// One extra leap year every 400 years
pub(crate) const DAYS_IN_400_YEAR_CYCLE: i64 = 4 * DAYS_IN_100_YEAR_CYCLE + 1;

/// Proleptic Gregorian calendar: twelve months, leap years every 4 years
/// except centuries not divisible by 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianSchema;

pub(crate) const fn is_leap_year(year: i32) -> bool {
    if year % 25 != 0 {
        year % 4 == 0
    } else {
        year % 16 == 0
    }
}

/// Days from January 1st, 1 to January 1st of `year`.
pub(crate) const fn start_of_year(year: i32) -> i32 {
    let y = year as i64 - 1;
    (DAYS_IN_YEAR * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)) as i32
}

/// Year containing the given day, counted from January 1st, 1.
pub(crate) const fn year_of(days_since_epoch: i32) -> i32 {
    let days = days_since_epoch as i64;
    let (n_400, days) = (
        days.div_euclid(DAYS_IN_400_YEAR_CYCLE),
        days.rem_euclid(DAYS_IN_400_YEAR_CYCLE),
    );
    let (n_100, days) = (days / DAYS_IN_100_YEAR_CYCLE, days % DAYS_IN_100_YEAR_CYCLE);
    let (n_4, days) = (days / DAYS_IN_4_YEAR_CYCLE, days % DAYS_IN_4_YEAR_CYCLE);
    let n_1 = days / DAYS_IN_YEAR;

    // The last day of a 4- or 400-year cycle belongs to the previous year.
    (400 * n_400 + 100 * n_100 + 4 * n_4 + n_1 + (n_100 != 4 && n_1 != 4) as i64) as i32
}

impl CalendricalSchema for GregorianSchema {
    fn name(&self) -> &'static str {
        "gregorian"
    }

    fn profile(&self) -> SchemaProfile {
        SchemaProfile::Solar12
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn min_days_in_month(&self) -> u8 {
        28
    }

    fn is_regular(&self) -> Option<u8> {
        Some(12)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(year)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == 2 && day == 29
    }

    fn is_supplementary_day(&self, _year: i32, _month: u8, _day: u8) -> bool {
        false
    }

    fn count_months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        365 + u16::from(is_leap_year(year))
    }

    fn count_days_in_month(&self, year: i32, month: u8) -> u8 {
        solar12::days_in_month(is_leap_year(year), month)
    }

    fn count_days_in_year_before_month(&self, year: i32, month: u8) -> u16 {
        solar12::days_before_month(is_leap_year(year), month)
    }

    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32 {
        regular_months_since_epoch(12, year, month)
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular_month_parts(12, months_since_epoch)
    }

    fn start_of_year(&self, year: i32) -> i32 {
        start_of_year(year)
    }

    fn get_year(&self, days_since_epoch: i32) -> OrdinalParts {
        let year = year_of(days_since_epoch);
        ordinal_in_year(year, start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        solar12::month_day(is_leap_year(year), day_of_year)
    }
}
