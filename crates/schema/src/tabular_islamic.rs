//! Tabular (arithmetical) Islamic schema.

use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, regular_month_parts,
    regular_months_since_epoch,
};

/// Arithmetical Islamic calendar: twelve lunar months alternating 30 and 29
/// days, with 11 leap years per 30-year cycle (Kūshyār ibn Labbān pattern).
/// Leap years give month 12 a 30th day.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularIslamicSchema;

const fn is_leap_year(year: i32) -> bool {
    (14 + 11 * year as i64).rem_euclid(30) < 11
}

const fn start_of_year(year: i32) -> i32 {
    (354 * (year as i64 - 1) + (3 + 11 * year as i64).div_euclid(30)) as i32
}

impl CalendricalSchema for TabularIslamicSchema {
    fn name(&self) -> &'static str {
        "tabular_islamic"
    }

    fn profile(&self) -> SchemaProfile {
        SchemaProfile::Lunar
    }

    fn min_days_in_year(&self) -> u16 {
        354
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
        354 + u16::from(is_leap_year(year))
    }

    fn count_days_in_month(&self, year: i32, month: u8) -> u8 {
        if month % 2 == 1 || (month == 12 && is_leap_year(year)) {
            30
        } else {
            29
        }
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: u8) -> u16 {
        let m = u16::from(month);
        29 * (m - 1) + m / 2
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
        let year = (30 * i64::from(days_since_epoch) + 10_646).div_euclid(10_631) as i32;
        ordinal_in_year(year, start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        // Pairs of months span 59 days.
        let month = ((2 * (day_of_year - 1) + 59) / 59).min(12) as u8;
        let day = day_of_year - self.count_days_in_year_before_month(year, month);
        (month, day as u8)
    }
}
