//! Julian schema.

use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, regular_month_parts,
    regular_months_since_epoch,
};
use crate::solar12;

/// Proleptic Julian calendar: the Gregorian month layout with a leap year
/// every fourth year.
#[derive(Debug, Clone, Copy, Default)]
pub struct JulianSchema;

const fn is_leap_year(year: i32) -> bool {
    year % 4 == 0
}

const fn start_of_year(year: i32) -> i32 {
    let y = year as i64 - 1;
    (365 * y + y.div_euclid(4)) as i32
}

impl CalendricalSchema for JulianSchema {
    fn name(&self) -> &'static str {
        "julian"
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
        let year = ((4 * days_since_epoch as i64 + 1464).div_euclid(1461)) as i32;
        ordinal_in_year(year, start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        solar12::month_day(is_leap_year(year), day_of_year)
    }
}
