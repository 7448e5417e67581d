//! Thirty-day months followed by a handful of epagomenal days.
//!
//! The Coptic, Egyptian and French Republican calendars share one layout:
//! twelve months of 30 days, then five (or six in leap years) epagomenal
//! days. They differ only in their leap rule. Each can be presented with
//! the epagomenal days glued onto month 12 or as a short month 13.

use crate::parts::{MonthParts, OrdinalParts};
use crate::schema::{
    CalendricalSchema, SchemaProfile, ordinal_in_year, refine_year, regular_month_parts,
    regular_months_since_epoch,
};

/// Days in 4000 years under the French Republican (Romme) rule.
const DAYS_IN_4000_YEAR_CYCLE: i64 = 4000 * 365 + 1000 - 40 + 10 - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearRule {
    /// Leap year when `y mod 4 = 3`.
    Coptic,
    /// No leap years.
    Egyptian,
    /// Gregorian rule, plus no leap year every 4000 years.
    FrenchRepublican,
}

impl YearRule {
    fn is_leap(self, year: i32) -> bool {
        match self {
            YearRule::Coptic => year.rem_euclid(4) == 3,
            YearRule::Egyptian => false,
            YearRule::FrenchRepublican => {
                year.rem_euclid(4) == 0
                    && (year.rem_euclid(100) != 0 || year.rem_euclid(400) == 0)
                    && year.rem_euclid(4000) != 0
            }
        }
    }

    fn start_of_year(self, year: i32) -> i32 {
        let y = i64::from(year) - 1;
        let days = match self {
            YearRule::Coptic => 365 * y + i64::from(year).div_euclid(4),
            YearRule::Egyptian => 365 * y,
            YearRule::FrenchRepublican => {
                365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
                    - y.div_euclid(4000)
            }
        };
        days as i32
    }

    fn year_of(self, days_since_epoch: i32) -> i32 {
        let days = i64::from(days_since_epoch);
        match self {
            YearRule::Coptic => (4 * days + 1463).div_euclid(1461) as i32,
            YearRule::Egyptian => days.div_euclid(365) as i32 + 1,
            YearRule::FrenchRepublican => {
                let estimate = (4000 * days).div_euclid(DAYS_IN_4000_YEAR_CYCLE) as i32 + 1;
                refine_year(estimate, days_since_epoch, |y| self.start_of_year(y))
            }
        }
    }
}

/// A 30-day-month schema with epagomenal days.
///
/// With twelve months, the epagomenal days extend month 12 to 35 or 36 days.
/// With thirteen months, they form month 13.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EpagomenalSchema {
    name: &'static str,
    rule: YearRule,
    months_in_year: u8,
}

impl EpagomenalSchema {
    pub const COPTIC12: EpagomenalSchema = Self::new("coptic12", YearRule::Coptic, 12);
    pub const COPTIC13: EpagomenalSchema = Self::new("coptic13", YearRule::Coptic, 13);
    pub const EGYPTIAN12: EpagomenalSchema = Self::new("egyptian12", YearRule::Egyptian, 12);
    pub const EGYPTIAN13: EpagomenalSchema = Self::new("egyptian13", YearRule::Egyptian, 13);
    pub const FRENCH_REPUBLICAN12: EpagomenalSchema =
        Self::new("french_republican12", YearRule::FrenchRepublican, 12);
    pub const FRENCH_REPUBLICAN13: EpagomenalSchema =
        Self::new("french_republican13", YearRule::FrenchRepublican, 13);

    const fn new(name: &'static str, rule: YearRule, months_in_year: u8) -> Self {
        Self {
            name,
            rule,
            months_in_year,
        }
    }

    /// Month holding the epagomenal days.
    fn epagomenal_month(&self) -> u8 {
        self.months_in_year
    }

    /// Regular days preceding the epagomenal days in their month.
    fn regular_days_in_epagomenal_month(&self) -> u8 {
        if self.months_in_year == 12 { 30 } else { 0 }
    }
}

impl CalendricalSchema for EpagomenalSchema {
    fn name(&self) -> &'static str {
        self.name
    }

    fn profile(&self) -> SchemaProfile {
        if self.months_in_year == 12 {
            SchemaProfile::Solar12
        } else {
            SchemaProfile::Solar13
        }
    }

    fn min_days_in_year(&self) -> u16 {
        365
    }

    fn min_days_in_month(&self) -> u8 {
        if self.months_in_year == 12 { 30 } else { 5 }
    }

    fn is_regular(&self) -> Option<u8> {
        Some(self.months_in_year)
    }

    fn is_leap_year(&self, year: i32) -> bool {
        self.rule.is_leap(year)
    }

    fn is_intercalary_day(&self, _year: i32, month: u8, day: u8) -> bool {
        month == self.epagomenal_month() && day == self.regular_days_in_epagomenal_month() + 6
    }

    fn is_supplementary_day(&self, year: i32, month: u8, day: u8) -> bool {
        self.epagomenal_number(year, month, day).is_some()
    }

    fn epagomenal_number(&self, _year: i32, month: u8, day: u8) -> Option<u8> {
        let offset = self.regular_days_in_epagomenal_month();
        (month == self.epagomenal_month() && day > offset).then(|| day - offset)
    }

    fn count_months_in_year(&self, _year: i32) -> u8 {
        self.months_in_year
    }

    fn count_days_in_year(&self, year: i32) -> u16 {
        365 + u16::from(self.rule.is_leap(year))
    }

    fn count_days_in_month(&self, year: i32, month: u8) -> u8 {
        if month < self.epagomenal_month() {
            30
        } else {
            self.regular_days_in_epagomenal_month() + 5 + u8::from(self.rule.is_leap(year))
        }
    }

    fn count_days_in_year_before_month(&self, _year: i32, month: u8) -> u16 {
        30 * (u16::from(month) - 1)
    }

    fn count_months_since_epoch(&self, year: i32, month: u8) -> i32 {
        regular_months_since_epoch(self.months_in_year, year, month)
    }

    fn get_month_parts(&self, months_since_epoch: i32) -> MonthParts {
        regular_month_parts(self.months_in_year, months_since_epoch)
    }

    fn start_of_year(&self, year: i32) -> i32 {
        self.rule.start_of_year(year)
    }

    fn get_year(&self, days_since_epoch: i32) -> OrdinalParts {
        let year = self.rule.year_of(days_since_epoch);
        ordinal_in_year(year, self.rule.start_of_year(year), days_since_epoch)
    }

    fn get_month(&self, _year: i32, day_of_year: u16) -> (u8, u8) {
        let d0 = day_of_year - 1;
        let month = (d0 / 30 + 1).min(u16::from(self.months_in_year));
        (month as u8, (d0 - 30 * (month - 1) + 1) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::DateParts;

    #[test]
    fn coptic_leap_years() {
        let schema = EpagomenalSchema::COPTIC12;
        assert!(schema.is_leap_year(3));
        assert!(schema.is_leap_year(-1));
        assert!(!schema.is_leap_year(4));
        assert!(!schema.is_leap_year(0));
    }

    #[test]
    fn french_republican_leap_years() {
        let schema = EpagomenalSchema::FRENCH_REPUBLICAN13;
        assert!(schema.is_leap_year(4));
        assert!(!schema.is_leap_year(100));
        assert!(schema.is_leap_year(400));
        assert!(!schema.is_leap_year(4000));
        assert!(schema.is_leap_year(8000 - 400));
    }

    #[test]
    fn coptic12_epagomenal_days() {
        let schema = EpagomenalSchema::COPTIC12;
        assert_eq!(schema.count_days_in_month(3, 12), 36);
        assert_eq!(schema.count_days_in_month(4, 12), 35);
        assert_eq!(schema.epagomenal_number(3, 12, 30), None);
        assert_eq!(schema.epagomenal_number(3, 12, 31), Some(1));
        assert_eq!(schema.epagomenal_number(3, 12, 36), Some(6));
        assert!(schema.is_intercalary_day(3, 12, 36));
        assert!(!schema.is_intercalary_day(3, 12, 35));
        assert!(schema.is_supplementary_day(4, 12, 33));
        assert_eq!(schema.get_month(3, 366), (12, 36));
        assert_eq!(schema.get_month(3, 330), (11, 30));
    }

    #[test]
    fn coptic13_epagomenal_month() {
        let schema = EpagomenalSchema::COPTIC13;
        assert_eq!(schema.count_days_in_month(3, 13), 6);
        assert_eq!(schema.count_days_in_month(4, 13), 5);
        assert_eq!(schema.epagomenal_number(4, 13, 2), Some(2));
        assert_eq!(schema.epagomenal_number(4, 12, 30), None);
        assert!(schema.is_intercalary_day(3, 13, 6));
        assert_eq!(schema.get_month(3, 361), (13, 1));
        assert_eq!(
            schema.get_date_parts(schema.count_days_since_epoch(3, 13, 6)),
            DateParts::new(3, 13, 6)
        );
    }

    #[test]
    fn egyptian_years_are_365_days() {
        let schema = EpagomenalSchema::EGYPTIAN12;
        for year in -5..5 {
            assert_eq!(
                schema.start_of_year(year + 1) - schema.start_of_year(year),
                365
            );
        }
        assert_eq!(schema.get_year(-1), OrdinalParts::new(0, 365));
    }

    #[test]
    fn year_lengths_agree_with_year_starts() {
        for schema in [
            EpagomenalSchema::COPTIC12,
            EpagomenalSchema::EGYPTIAN13,
            EpagomenalSchema::FRENCH_REPUBLICAN12,
        ] {
            for year in -4005..-3995 {
                assert_eq!(
                    schema.start_of_year(year + 1) - schema.start_of_year(year),
                    i32::from(schema.count_days_in_year(year)),
                    "{} year {year}",
                    schema.name()
                );
            }
        }
    }
}
