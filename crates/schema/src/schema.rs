//! The calendrical schema abstraction.

use std::fmt;
use std::ops::RangeInclusive;

use crate::parts::{DateParts, MonthParts, OrdinalParts};

/// Years over which every built-in schema is exact and free of `i32`
/// overflow, for day counts as well as month counts.
pub const DEFAULT_SUPPORTED_YEARS: RangeInclusive<i32> = -2_097_151..=2_097_152;

/// Broad shape of a schema.
///
/// Scopes use it to pick a validation fast path and the arithmetic uses it to
/// recognise the leap-week month remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaProfile {
    /// Twelve months of at least 28 days, solar year.
    Solar12,
    /// Thirteen months, solar year.
    Solar13,
    /// Twelve lunar months.
    Lunar,
    /// Twelve or thirteen lunar months.
    Lunisolar,
    /// Leap years gain a whole intercalary week, stored as an extra month.
    LeapWeek,
    /// Anything else.
    Other,
}

/// One calendar's rules as pure functions over integers.
///
/// Methods never fail and never validate their input: callers guarantee
/// that years lie in [`supported_years`](Self::supported_years), months in
/// `1..=count_months_in_year(y)`, days in `1..=count_days_in_month(y, m)`
/// and days of the year in `1..=count_days_in_year(y)`. Range enforcement is
/// the job of a calendar scope.
///
/// Day counts are "days since epoch" where day `0` is the first day of
/// year `1`; month counts are "months since epoch" where month `0` is the
/// first month of year `1`.
pub trait CalendricalSchema: fmt::Debug + Send + Sync {
    /// Short lower-case identifier.
    fn name(&self) -> &'static str;

    /// Shape of the schema.
    fn profile(&self) -> SchemaProfile;

    /// Years for which the schema's arithmetic is exact.
    fn supported_years(&self) -> RangeInclusive<i32> {
        DEFAULT_SUPPORTED_YEARS
    }

    /// Length of the shortest year.
    fn min_days_in_year(&self) -> u16;

    /// Length of the shortest month.
    fn min_days_in_month(&self) -> u8;

    /// Returns `Some(months_in_year)` when every year has the same number of
    /// months, `None` otherwise.
    fn is_regular(&self) -> Option<u8>;

    fn is_leap_year(&self, year: i32) -> bool;

    /// Whether the month only exists in leap years.
    fn is_intercalary_month(&self, _year: i32, _month: u8) -> bool {
        false
    }

    /// Whether the day only exists in leap years.
    fn is_intercalary_day(&self, year: i32, month: u8, day: u8) -> bool;

    /// Whether the day lies outside the regular month/week structure
    /// (blank days, epagomenal days).
    fn is_supplementary_day(&self, year: i32, month: u8, day: u8) -> bool;

    /// Returns the 1-based number of an epagomenal day, `None` for any other
    /// day.
    fn epagomenal_number(&self, _year: i32, _month: u8, _day: u8) -> Option<u8> {
        None
    }

    fn count_months_in_year(&self, year: i32) -> u8;

    fn count_days_in_year(&self, year: i32) -> u16;

    fn count_days_in_month(&self, year: i32, month: u8) -> u8;

    /// Days in `year` before the first day of `month`.
    fn count_days_in_year_before_month(&self, year: i32, month: u8) -> u16;

    /// Months since epoch of the given month.
    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32;

    /// Inverse of [`count_months_since_epoch`](Self::count_months_since_epoch).
    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts;

    /// Days since epoch of the first day of `year`.
    fn start_of_year(&self, year: i32) -> i32;

    /// Year and day of the year containing `days_since_epoch`.
    fn get_year(&self, days_since_epoch: i32) -> OrdinalParts;

    /// Month and day for a day of the year.
    fn get_month(&self, year: i32, day_of_year: u16) -> (u8, u8);

    /// Days in `year` after the last day of `month`.
    fn count_days_in_year_after_month(&self, year: i32, month: u8) -> u16 {
        self.count_days_in_year(year)
            - self.count_days_in_year_before_month(year, month)
            - u16::from(self.count_days_in_month(year, month))
    }

    fn count_days_in_month_before(&self, _year: i32, _month: u8, day: u8) -> u8 {
        day - 1
    }

    fn count_days_in_month_after(&self, year: i32, month: u8, day: u8) -> u8 {
        self.count_days_in_month(year, month) - day
    }

    fn count_days_in_year_before(&self, year: i32, month: u8, day: u8) -> u16 {
        self.get_day_of_year(year, month, day) - 1
    }

    fn count_days_in_year_after(&self, year: i32, month: u8, day: u8) -> u16 {
        self.count_days_in_year(year) - self.get_day_of_year(year, month, day)
    }

    fn get_day_of_year(&self, year: i32, month: u8, day: u8) -> u16 {
        self.count_days_in_year_before_month(year, month) + u16::from(day)
    }

    fn count_days_since_epoch(&self, year: i32, month: u8, day: u8) -> i32 {
        self.start_of_year(year)
            + i32::from(self.count_days_in_year_before_month(year, month))
            + i32::from(day)
            - 1
    }

    fn count_days_since_epoch_ordinal(&self, year: i32, day_of_year: u16) -> i32 {
        self.start_of_year(year) + i32::from(day_of_year) - 1
    }

    fn get_date_parts(&self, days_since_epoch: i32) -> DateParts {
        let OrdinalParts { year, day_of_year } = self.get_year(days_since_epoch);
        let (month, day) = self.get_month(year, day_of_year);
        DateParts::new(year, month, day)
    }

    fn get_ordinal_parts(&self, days_since_epoch: i32) -> OrdinalParts {
        self.get_year(days_since_epoch)
    }

    fn start_of_year_parts(&self, year: i32) -> DateParts {
        DateParts::new(year, 1, 1)
    }

    fn end_of_year_parts(&self, year: i32) -> DateParts {
        let month = self.count_months_in_year(year);
        self.end_of_month_parts(year, month)
    }

    fn end_of_month_parts(&self, year: i32, month: u8) -> DateParts {
        DateParts::new(year, month, self.count_days_in_month(year, month))
    }
}

/// Decodes a linear month index for a schema with a fixed month count.
pub(crate) fn regular_month_parts(months_in_year: u8, months_since_epoch: i32) -> MonthParts {
    let n = i32::from(months_in_year);
    MonthParts::new(
        months_since_epoch.div_euclid(n) + 1,
        (months_since_epoch.rem_euclid(n) + 1) as u8,
    )
}

/// Linear month index for a schema with a fixed month count.
pub(crate) fn regular_months_since_epoch(months_in_year: u8, year: i32, month: u8) -> i32 {
    i32::from(months_in_year) * (year - 1) + i32::from(month) - 1
}

/// Refines an approximate year until `start(year) <= value < start(year + 1)`.
///
/// `start` must be strictly increasing; the estimate is expected to be off by
/// at most a couple of years.
pub(crate) fn refine_year(estimate: i32, value: i32, start: impl Fn(i32) -> i32) -> i32 {
    let mut year = estimate;
    while start(year) > value {
        year -= 1;
    }
    while start(year + 1) <= value {
        year += 1;
    }
    year
}

/// Builds the ordinal parts of `days_since_epoch` once its year is known.
pub(crate) fn ordinal_in_year(year: i32, start_of_year: i32, days_since_epoch: i32) -> OrdinalParts {
    OrdinalParts::new(year, (days_since_epoch - start_of_year + 1) as u16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_month_index_round_trip() {
        for months in -40..40 {
            let MonthParts { year, month } = regular_month_parts(12, months);
            assert!((1..=12).contains(&month));
            assert_eq!(regular_months_since_epoch(12, year, month), months);
        }
        assert_eq!(regular_month_parts(13, 0), MonthParts::new(1, 1));
        assert_eq!(regular_month_parts(13, -1), MonthParts::new(0, 13));
    }

    #[test]
    fn refine_year_moves_both_ways() {
        let start = |y: i32| 10 * (y - 1);
        assert_eq!(refine_year(5, 0, start), 1);
        assert_eq!(refine_year(-3, 19, start), 2);
        assert_eq!(refine_year(2, 10, start), 2);
        assert_eq!(refine_year(2, -1, start), 0);
    }
}
