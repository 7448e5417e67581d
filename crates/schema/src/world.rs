//! World calendar schema.

use crate::gregorian;
use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, regular_month_parts,
    regular_months_since_epoch,
};

/// Day of the year (0-based) of the leap-year blank day, June 31st.
const LEAP_DAY_INDEX: u16 = 182;

/// World calendar: four identical quarters of 31, 30 and 30 days, plus
/// blank days outside the week: Worldsday (December 31st) every year and
/// Leapyear Day (June 31st) in Gregorian leap years.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorldSchema;

impl CalendricalSchema for WorldSchema {
    fn name(&self) -> &'static str {
        "world"
    }

    fn profile(&self) -> SchemaProfile {
        SchemaProfile::Solar12
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn min_days_in_month(&self) -> u8 {
        30
    }

    fn is_regular(&self) -> Option<u8> {
        Some(12)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        gregorian::is_leap_year(year)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == 6 && day == 31
    }

    fn is_supplementary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        day == 31 && (month == 6 || month == 12)
    }

    fn count_months_in_year(&self, _year: i32) -> u8 {
        12
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        365 + u16::from(gregorian::is_leap_year(year))
    }

    fn count_days_in_month(&self, year: i32, month: u8) -> u8 {
        match month {
            12 => 31,
            6 => 30 + u8::from(gregorian::is_leap_year(year)),
            m if m % 3 == 1 => 31,
            _ => 30,
        }
    }

    fn count_days_in_year_before_month(&self, year: i32, month: u8) -> u16 {
        let m0 = u16::from(month) - 1;
        let in_quarter = match m0 % 3 {
            0 => 0,
            1 => 31,
            _ => 61,
        };
        91 * (m0 / 3) + in_quarter + u16::from(month > 6 && gregorian::is_leap_year(year))
    }

    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32 {
        regular_months_since_epoch(12, year, month)
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular_month_parts(12, months_since_epoch)
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
                return (6, 31);
            }
            if d0 > LEAP_DAY_INDEX {
                d0 -= 1;
            }
        }
        if d0 == 364 {
            return (12, 31);
        }
        let (quarter, d) = (d0 / 91, d0 % 91);
        let (offset, start) = match d {
            0..=30 => (0, 0),
            31..=60 => (1, 31),
            _ => (2, 61),
        };
        ((3 * quarter + offset + 1) as u8, (d - start + 1) as u8)
    }
}
