//! International Fixed calendar schema.

use crate::gregorian;
use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, regular_month_parts,
    regular_months_since_epoch,
};

/// Day of the year (0-based) of Leap Day, June 29th.
const LEAP_DAY_INDEX: u16 = 5 * 28 + 28;

/// International Fixed (Cotsworth) calendar: thirteen months of 28 days.
/// Year Day is the 29th of month 13; in Gregorian leap years, Leap Day is
/// the 29th of month 6. Both are outside the week.
#[derive(Debug, Clone, Copy, Default)]
pub struct InternationalFixedSchema;

impl CalendricalSchema for InternationalFixedSchema {
    fn name(&self) -> &'static str {
        "international_fixed"
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
        gregorian::is_leap_year(year)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == 6 && day == 29
    }

    fn is_supplementary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        day == 29 && (month == 6 || month == 13)
    }

    fn count_months_in_year(&self, _year: i32) -> u8 {
        13
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        365 + u16::from(gregorian::is_leap_year(year))
    }

    fn count_days_in_month(&self, year: i32, month: u8) -> u8 {
        match month {
            13 => 29,
            6 => 28 + u8::from(gregorian::is_leap_year(year)),
            _ => 28,
        }
    }

    fn count_days_in_year_before_month(&self, year: i32, month: u8) -> u16 {
        28 * (u16::from(month) - 1) + u16::from(month > 6 && gregorian::is_leap_year(year))
    }

    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32 {
        regular_months_since_epoch(13, year, month)
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular_month_parts(13, months_since_epoch)
    }

    fn start_of_year(&self, year: i32) -> i32 {
        gregorian::start_of_year(year)
    }

    fn get_year(&self, days_since_epoch: i32) -> OrdinalParts {
        let year = gregorian::year_of(days_since_epoch);
        ordinal_in_year(year, gregorian::start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        let mut d0 = day_of_year - 1;
        if gregorian::is_leap_year(year) {
            if d0 == LEAP_DAY_INDEX {
                return (6, 29);
            }
            if d0 > LEAP_DAY_INDEX {
                d0 -= 1;
            }
        }
        if d0 == 364 {
            return (13, 29);
        }
        ((d0 / 28 + 1) as u8, (d0 % 28 + 1) as u8)
    }
}
