//! Supported ranges of a schema over a span of years.

use std::ops::RangeInclusive;

use kalends_schema::{CalendricalSchema, DateParts, MonthParts, OrdinalParts};
use tracing::debug;

use crate::error::CalendarError;

/// The years, months and days a schema covers between two boundary years.
///
/// Every range is inclusive and expressed in the schema's own counts (days
/// and months since epoch). Construction evaluates the schema only at the
/// two boundary years.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendricalSegment {
    years: RangeInclusive<i32>,
    months: RangeInclusive<i32>,
    days: RangeInclusive<i32>,
    min_date_parts: DateParts,
    max_date_parts: DateParts,
    min_ordinal_parts: OrdinalParts,
    max_ordinal_parts: OrdinalParts,
    min_month_parts: MonthParts,
    max_month_parts: MonthParts,
}

impl CalendricalSegment {
    /// Builds the segment of `schema` spanning `years`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedYears`] if the range is empty or
    /// reaches outside [`CalendricalSchema::supported_years`].
    pub fn create(
        schema: &dyn CalendricalSchema,
        years: RangeInclusive<i32>,
    ) -> Result<Self, CalendarError> {
        let (min_year, max_year) = (*years.start(), *years.end());
        let domain = schema.supported_years();
        if min_year > max_year || !domain.contains(&min_year) || !domain.contains(&max_year) {
            return Err(CalendarError::UnsupportedYears {
                min: min_year,
                max: max_year,
            });
        }

        let last_month = schema.count_months_in_year(max_year);
        let last_day_of_year = schema.count_days_in_year(max_year);
        let segment = Self {
            years,
            months: schema.count_months_since_epoch(min_year, 1)
                ..=schema.count_months_since_epoch(max_year, last_month),
            days: schema.start_of_year(min_year)
                ..=schema.count_days_since_epoch_ordinal(max_year, last_day_of_year),
            min_date_parts: schema.start_of_year_parts(min_year),
            max_date_parts: schema.end_of_year_parts(max_year),
            min_ordinal_parts: OrdinalParts::new(min_year, 1),
            max_ordinal_parts: OrdinalParts::new(max_year, last_day_of_year),
            min_month_parts: MonthParts::new(min_year, 1),
            max_month_parts: MonthParts::new(max_year, last_month),
        };
        debug!(
            schema = schema.name(),
            min_year,
            max_year,
            min_days = *segment.days.start(),
            max_days = *segment.days.end(),
            "built calendrical segment"
        );
        Ok(segment)
    }

    pub fn years(&self) -> RangeInclusive<i32> {
        self.years.clone()
    }

    /// Months since epoch, first month of the first year to last month of
    /// the last year.
    pub fn months(&self) -> RangeInclusive<i32> {
        self.months.clone()
    }

    /// Days since epoch, first day of the first year to last day of the
    /// last year.
    pub fn days(&self) -> RangeInclusive<i32> {
        self.days.clone()
    }

    pub fn min_year(&self) -> i32 {
        *self.years.start()
    }

    pub fn max_year(&self) -> i32 {
        *self.years.end()
    }

    pub fn min_days(&self) -> i32 {
        *self.days.start()
    }

    pub fn max_days(&self) -> i32 {
        *self.days.end()
    }

    pub fn min_months(&self) -> i32 {
        *self.months.start()
    }

    pub fn max_months(&self) -> i32 {
        *self.months.end()
    }

    pub fn min_date_parts(&self) -> DateParts {
        self.min_date_parts
    }

    pub fn max_date_parts(&self) -> DateParts {
        self.max_date_parts
    }

    pub fn min_ordinal_parts(&self) -> OrdinalParts {
        self.min_ordinal_parts
    }

    pub fn max_ordinal_parts(&self) -> OrdinalParts {
        self.max_ordinal_parts
    }

    pub fn min_month_parts(&self) -> MonthParts {
        self.min_month_parts
    }

    pub fn max_month_parts(&self) -> MonthParts {
        self.max_month_parts
    }
}
