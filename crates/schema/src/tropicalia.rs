//! Tropicalia schema.

use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, refine_year, regular_month_parts,
    regular_months_since_epoch,
};

/// Days in one 128-year cycle: 31 leap years.
const DAYS_IN_128_YEAR_CYCLE: i64 = 128 * 365 + 31;

/// A tropical-year approximation: twelve months alternating 31 and 30 days,
/// the last month 29 days (30 in leap years), leap years every fourth year
/// except multiples of 128.
#[derive(Debug, Clone, Copy, Default)]
pub struct TropicaliaSchema;

const fn is_leap_year(year: i32) -> bool {
    year.rem_euclid(4) == 0 && year.rem_euclid(128) != 0
}

const fn start_of_year(year: i32) -> i32 {
    let y = year as i64 - 1;
    (365 * y + y.div_euclid(4) - y.div_euclid(128)) as i32
}

impl CalendricalSchema for TropicaliaSchema {
    fn name(&self) -> &'static str {
        "tropicalia"
    }

    fn profile(&self) -> SchemaProfile {
        SchemaProfile::Solar12
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn min_days_in_month(&self) -> u8 {
        29
    }

    fn is_regular(&self) -> Option<u8> {
        Some(12)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(year)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == 12 && day == 30
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
        match month {
            12 => 29 + u8::from(is_leap_year(year)),
            m if m % 2 == 1 => 31,
            _ => 30,
        }
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: u8) -> u16 {
        let m = u16::from(month);
        30 * (m - 1) + m / 2
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
        let estimate =
            (128 * i64::from(days_since_epoch)).div_euclid(DAYS_IN_128_YEAR_CYCLE) as i32 + 1;
        let year = refine_year(estimate, days_since_epoch, start_of_year);
        ordinal_in_year(year, start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        // Pairs of months span 61 days.
        let d0 = day_of_year - 1;
        let month = 2 * (d0 / 61) + 1 + u16::from(d0 % 61 >= 31);
        let day = day_of_year - self.count_days_in_year_before_month(year, month as u8);
        (month as u8, day as u8)
    }
}
