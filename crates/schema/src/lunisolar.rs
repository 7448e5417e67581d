//! A simple arithmetical lunisolar schema.

use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{CalendricalSchema, SchemaProfile, ordinal_in_year, refine_year};

const DAYS_IN_19_YEAR_CYCLE: i64 = 19 * 354 + 7 * 30;
const MONTHS_IN_19_YEAR_CYCLE: i64 = 19 * 12 + 7;

/// Days in a common year; also the day of the year (0-based) where the
/// leap month begins.
const COMMON_YEAR_LENGTH: u16 = 354;

/// Twelve lunar months alternating 30 and 29 days; seven years out of every
/// nineteen gain a thirteenth month of 30 days.
#[derive(Debug, Clone, Copy, Default)]
pub struct LunisolarSchema;

fn is_leap_year(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Number of leap years in `1..=n` (negative for `n < 0`).
fn count_leap_years(n: i32) -> i64 {
    (7 * i64::from(n) + 1).div_euclid(19)
}

fn start_of_year(year: i32) -> i32 {
    let y = i64::from(year) - 1;
    (354 * y + 30 * count_leap_years(year - 1)) as i32
}

fn months_before_year(year: i32) -> i32 {
    let y = i64::from(year) - 1;
    (12 * y + count_leap_years(year - 1)) as i32
}

impl CalendricalSchema for LunisolarSchema {
    fn name(&self) -> &'static str {
        "lunisolar"
    }

    fn profile(&self) -> SchemaProfile {
        SchemaProfile::Lunisolar
    }

    fn min_days_in_year(&self) -> u16 {
        COMMON_YEAR_LENGTH
    }

    fn min_days_in_month(&self) -> u8 {
        29
    }

    fn is_regular(&self) -> Option<u8> {
        None
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(year)
    }

    fn is_intercalary_month(&self, year: i32, month: u8) -> bool {
        month == 13 && is_leap_year(year)
    }

    fn is_intercalary_day(&self, year: i32, month: u8, _day: u8) -> bool {
        self.is_intercalary_month(year, month)
    }

    fn is_supplementary_day(&self, _year: i32, _month: u8, _day: u8) -> bool {
        false
    }

    fn count_months_in_year(&self, year: i32) -> u8 {
        12 + u8::from(is_leap_year(year))
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        COMMON_YEAR_LENGTH + if is_leap_year(year) { 30 } else { 0 }
    }

    fn count_days_in_month(&self, _year: i32, month: u8) -> u8 {
        if month % 2 == 1 { 30 } else { 29 }
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: u8) -> u16 {
        let m = u16::from(month);
        29 * (m - 1) + m / 2
    }

    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32 {
        months_before_year(year) + i32::from(month) - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        let estimate =
            (19 * i64::from(months_since_epoch)).div_euclid(MONTHS_IN_19_YEAR_CYCLE) as i32 + 1;
        let year = refine_year(estimate, months_since_epoch, months_before_year);
        let month = months_since_epoch - months_before_year(year) + 1;
        MonthParts::new(year, month as u8)
    }

    fn start_of_year(&self, year: i32) -> i32 {
        start_of_year(year)
    }

    fn get_year(&self, days_since_epoch: i32) -> OrdinalParts {
        let estimate =
            (19 * i64::from(days_since_epoch)).div_euclid(DAYS_IN_19_YEAR_CYCLE) as i32 + 1;
        let year = refine_year(estimate, days_since_epoch, start_of_year);
        ordinal_in_year(year, start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        let d0 = day_of_year - 1;
        if d0 >= COMMON_YEAR_LENGTH {
            return (13, (d0 - COMMON_YEAR_LENGTH + 1) as u8);
        }
        let month = (2 * d0 + 59) / 59;
        let day = day_of_year - self.count_days_in_year_before_month(0, month as u8);
        (month as u8, day as u8)
    }
}
