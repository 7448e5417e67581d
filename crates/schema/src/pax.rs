//! Pax calendar schema.
//!
//! Thirteen months of 28 days; in leap years a seven-day month "Pax" is
//! inserted between the twelfth month and the last one, which becomes month
//! 14. Years therefore have 364 or 371 days and always start on the same
//! weekday.

use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{CalendricalSchema, SchemaProfile, ordinal_in_year, refine_year};

const DAYS_IN_400_YEAR_CYCLE: i64 = 400 * 364 + 7 * 69;
const MONTHS_IN_400_YEAR_CYCLE: i64 = 400 * 13 + 69;

/// Day of the year (0-based) of the first day of the Pax week.
const PAX_WEEK_INDEX: u16 = 12 * 28;

#[derive(Debug, Clone, Copy, Default)]
pub struct PaxSchema;

/// A year is leap when its last two digits are 99 or a multiple of 6, except
/// for centennial years not divisible by 400.
pub(crate) fn is_leap_year(year: i32) -> bool {
    let y = year.rem_euclid(100);
    y == 99 || (y % 6 == 0 && (y != 0 || year.rem_euclid(400) == 0))
}

/// Number of leap years in `1..=n` (negative for `n < 0`).
fn count_leap_years(n: i32) -> i64 {
    let n = i64::from(n);
    let r = n.rem_euclid(100);
    17 * n.div_euclid(100) + r / 6 + i64::from(r == 99) + n.div_euclid(400)
}

fn start_of_year(year: i32) -> i32 {
    let y = i64::from(year) - 1;
    (364 * y + 7 * count_leap_years(year - 1)) as i32
}

fn months_before_year(year: i32) -> i32 {
    let y = i64::from(year) - 1;
    (13 * y + count_leap_years(year - 1)) as i32
}

impl CalendricalSchema for PaxSchema {
    fn name(&self) -> &'static str {
        "pax"
    }

    fn profile(&self) -> SchemaProfile {
        SchemaProfile::LeapWeek
    }

    fn min_days_in_year(&self) -> u16 {
        364
    }

    fn min_days_in_month(&self) -> u8 {
        7
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
        13 + u8::from(is_leap_year(year))
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        if is_leap_year(year) { 371 } else { 364 }
    }

    fn count_days_in_month(&self, year: i32, month: u8) -> u8 {
        if self.is_intercalary_month(year, month) {
            7
        } else {
            28
        }
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: u8) -> u16 {
        match month {
            14 => PAX_WEEK_INDEX + 7,
            m => 28 * (u16::from(m) - 1),
        }
    }

    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32 {
        months_before_year(year) + i32::from(month) - 1
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        let estimate =
            (400 * i64::from(months_since_epoch)).div_euclid(MONTHS_IN_400_YEAR_CYCLE) as i32 + 1;
        let year = refine_year(estimate, months_since_epoch, months_before_year);
        let month = months_since_epoch - months_before_year(year) + 1;
        MonthParts::new(year, month as u8)
    }

    fn start_of_year(&self, year: i32) -> i32 {
        start_of_year(year)
    }

    fn get_year(&self, days_since_epoch: i32) -> OrdinalParts {
        let estimate =
            (400 * i64::from(days_since_epoch)).div_euclid(DAYS_IN_400_YEAR_CYCLE) as i32 + 1;
        let year = refine_year(estimate, days_since_epoch, start_of_year);
        ordinal_in_year(year, start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, year: i32, day_of_year: u16) -> (u8, u8) {
        let d0 = day_of_year - 1;
        if is_leap_year(year) && d0 >= PAX_WEEK_INDEX {
            return if d0 < PAX_WEEK_INDEX + 7 {
                (13, (d0 - PAX_WEEK_INDEX + 1) as u8)
            } else {
                (14, (d0 - PAX_WEEK_INDEX - 7 + 1) as u8)
            };
        }
        ((d0 / 28 + 1) as u8, (d0 % 28 + 1) as u8)
    }
}
