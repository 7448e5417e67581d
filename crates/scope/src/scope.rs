//! A schema bound to an epoch and a range of years.

use std::ops::RangeInclusive;

use kalends_daynumber::DayNumber;
use kalends_schema::{CalendricalSchema, SchemaProfile};
use tracing::debug;

use crate::error::CalendarError;
use crate::segment::CalendricalSegment;

/// Years `1..=9999`.
pub const STANDARD_YEARS: RangeInclusive<i32> = 1..=9999;

/// Years `-999_998..=999_999`.
pub const PROLEPTIC_YEARS: RangeInclusive<i32> = -999_998..=999_999;

/// Validates calendar fields and day counts against a supported range.
///
/// A scope is immutable. Validation methods are eager and name the offending
/// field; `check_*` methods are cheap bound checks that fail with an unnamed
/// overflow error.
///
/// Scopes over [`STANDARD_YEARS`] with a twelve-month solar schema take a
/// fast path: the year is checked with two integer comparisons, the month
/// against the constant 12, and the day against the schema only when it
/// exceeds the shortest month.
#[derive(Debug, Clone)]
pub struct CalendarScope {
    schema: &'static dyn CalendricalSchema,
    epoch: DayNumber,
    segment: CalendricalSegment,
    is_standard: bool,
    min_year: i32,
    max_year: i32,
    min_days: i32,
    max_days: i32,
}

impl CalendarScope {
    /// Creates a scope over `years`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedYears`] if `years` is empty, lies
    /// outside the schema's domain, or maps to days that `epoch` cannot
    /// shift into the range of [`DayNumber`].
    pub fn new(
        schema: &'static dyn CalendricalSchema,
        epoch: DayNumber,
        years: RangeInclusive<i32>,
    ) -> Result<Self, CalendarError> {
        let segment = CalendricalSegment::create(schema, years)?;
        let (min_days, max_days) = (segment.min_days(), segment.max_days());
        if epoch.checked_add_days(min_days).is_none() || epoch.checked_add_days(max_days).is_none()
        {
            return Err(CalendarError::UnsupportedYears {
                min: segment.min_year(),
                max: segment.max_year(),
            });
        }
        let is_standard = segment.years() == STANDARD_YEARS
            && schema.profile() == SchemaProfile::Solar12
            && schema.is_regular() == Some(12);
        debug!(
            schema = schema.name(),
            epoch = epoch.days_since_zero(),
            min_year = segment.min_year(),
            max_year = segment.max_year(),
            is_standard,
            "built calendar scope"
        );
        Ok(Self {
            schema,
            epoch,
            is_standard,
            min_year: segment.min_year(),
            max_year: segment.max_year(),
            min_days,
            max_days,
            segment,
        })
    }

    /// Creates a scope over [`STANDARD_YEARS`].
    pub fn standard(
        schema: &'static dyn CalendricalSchema,
        epoch: DayNumber,
    ) -> Result<Self, CalendarError> {
        Self::new(schema, epoch, STANDARD_YEARS)
    }

    /// Creates a scope over [`PROLEPTIC_YEARS`].
    pub fn proleptic(
        schema: &'static dyn CalendricalSchema,
        epoch: DayNumber,
    ) -> Result<Self, CalendarError> {
        Self::new(schema, epoch, PROLEPTIC_YEARS)
    }

    pub fn schema(&self) -> &'static dyn CalendricalSchema {
        self.schema
    }

    pub fn epoch(&self) -> DayNumber {
        self.epoch
    }

    pub fn segment(&self) -> &CalendricalSegment {
        &self.segment
    }

    /// Whether the scope uses the standard fast path.
    pub fn is_standard(&self) -> bool {
        self.is_standard
    }

    pub fn validate_year(&self, year: i32) -> Result<(), CalendarError> {
        if year < self.min_year || year > self.max_year {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        Ok(())
    }

    pub fn validate_year_month(&self, year: i32, month: u8) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        let max = if self.is_standard {
            12
        } else {
            self.schema.count_months_in_year(year)
        };
        if month < 1 || month > max {
            return Err(CalendarError::MonthOutOfRange { year, month, max });
        }
        Ok(())
    }

    pub fn validate_year_month_day(
        &self,
        year: i32,
        month: u8,
        day: u8,
    ) -> Result<(), CalendarError> {
        self.validate_year_month(year, month)?;
        if day < 1
            || (day > self.schema.min_days_in_month()
                && day > self.schema.count_days_in_month(year, month))
        {
            return Err(CalendarError::DayOutOfRange {
                year,
                month,
                day,
                max: self.schema.count_days_in_month(year, month),
            });
        }
        Ok(())
    }

    pub fn validate_ordinal(&self, year: i32, day_of_year: u16) -> Result<(), CalendarError> {
        self.validate_year(year)?;
        if day_of_year < 1
            || (day_of_year > self.schema.min_days_in_year()
                && day_of_year > self.schema.count_days_in_year(year))
        {
            return Err(CalendarError::DayOfYearOutOfRange {
                year,
                day_of_year,
                max: self.schema.count_days_in_year(year),
            });
        }
        Ok(())
    }

    /// Fails with [`CalendarError::DateOverflow`] unless `days_since_epoch`
    /// lies in the scope.
    pub fn check_overflow(&self, days_since_epoch: i32) -> Result<(), CalendarError> {
        if days_since_epoch < self.min_days || days_since_epoch > self.max_days {
            return Err(CalendarError::DateOverflow);
        }
        Ok(())
    }

    pub fn check_upper_bound(&self, days_since_epoch: i32) -> Result<(), CalendarError> {
        if days_since_epoch > self.max_days {
            return Err(CalendarError::DateOverflow);
        }
        Ok(())
    }

    pub fn check_lower_bound(&self, days_since_epoch: i32) -> Result<(), CalendarError> {
        if days_since_epoch < self.min_days {
            return Err(CalendarError::DateOverflow);
        }
        Ok(())
    }

    /// Fails with [`CalendarError::DateOverflow`] unless `year` lies in the
    /// scope.
    pub fn check_year_overflow(&self, year: i32) -> Result<(), CalendarError> {
        if year < self.min_year || year > self.max_year {
            return Err(CalendarError::DateOverflow);
        }
        Ok(())
    }

    /// Fails with [`CalendarError::MonthOverflow`] unless `months_since_epoch`
    /// lies in the scope.
    pub fn check_months_overflow(&self, months_since_epoch: i32) -> Result<(), CalendarError> {
        if !self.segment.months().contains(&months_since_epoch) {
            return Err(CalendarError::MonthOverflow);
        }
        Ok(())
    }

    /// Converts a count of days since epoch into a [`DayNumber`].
    pub fn day_number(&self, days_since_epoch: i32) -> Result<DayNumber, CalendarError> {
        Ok(self.epoch.plus_days(days_since_epoch)?)
    }

    /// Converts a [`DayNumber`] into days since epoch, failing with
    /// [`CalendarError::DateOverflow`] if the day lies outside the scope.
    pub fn days_since_epoch(&self, day_number: DayNumber) -> Result<i32, CalendarError> {
        let days = day_number.count_days_since(self.epoch)?;
        self.check_overflow(days)?;
        Ok(days)
    }
}
