//! Positivist calendar schema.

use crate::gregorian;
use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, regular_month_parts,
    regular_months_since_epoch,
};

/// Year 1 of the Positivist calendar is Gregorian year 1789.
const YEAR_OFFSET: i32 = 1788;

/// Comte's Positivist calendar: thirteen months of 28 days followed by one
/// complementary day (two in leap years) attached to month 13. Leap years
/// follow the Gregorian rule on the corresponding Gregorian year.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositivistSchema;

fn is_leap_year(year: i32) -> bool {
    gregorian::is_leap_year(year + YEAR_OFFSET)
}

fn start_of_year(year: i32) -> i32 {
    gregorian::start_of_year(year + YEAR_OFFSET) - gregorian::start_of_year(1 + YEAR_OFFSET)
}

impl CalendricalSchema for PositivistSchema {
    fn name(&self) -> &'static str {
        "positivist"
    }

    fn profile(&self) -> SchemaProfile {
        SchemaProfile::Solar13
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn min_days_in_month(&self) -> u8 {
        28
    }

    fn is_regular(&self) -> Option<u8> {
        Some(13)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        is_leap_year(year)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == 13 && day == 30
    }

    fn is_supplementary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == 13 && day > 28
    }

    fn count_months_in_year(&self, _year: i32) -> u8 {
        13
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        365 + u16::from(is_leap_year(year))
    }

    fn count_days_in_month(&self, year: i32, month: u8) -> u8 {
        if month == 13 {
            29 + u8::from(is_leap_year(year))
        } else {
            28
        }
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: u8) -> u16 {
        28 * (u16::from(month) - 1)
    }

    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32 {
        regular_months_since_epoch(13, year, month)
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular_month_parts(13, months_since_epoch)
    }

    fn start_of_year(&self, year: i32) -> i32 {
        start_of_year(year)
    }

    fn get_year(&self, days_since_epoch: i32) -> OrdinalParts {
        let shift = gregorian::start_of_year(1 + YEAR_OFFSET);
        let year = gregorian::year_of(days_since_epoch + shift) - YEAR_OFFSET;
        ordinal_in_year(year, start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        let d0 = day_of_year - 1;
        let month = (d0 / 28 + 1).min(13);
        (month as u8, (d0 - 28 * (month - 1) + 1) as u8)
    }
}
