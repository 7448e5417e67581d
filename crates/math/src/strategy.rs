//! Month indexing, picked once from the schema's shape.

use kalends_schema::{CalendricalSchema, MonthParts};

/// Regular schemas index months in closed form; plain schemas defer to the
/// schema, whose month count varies by year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Strategy {
    Regular { months_in_year: u8 },
    Plain,
}

impl Strategy {
    pub(crate) fn of(schema: &dyn CalendricalSchema) -> Self {
        match schema.is_regular() {
            Some(months_in_year) => Self::Regular { months_in_year },
            None => Self::Plain,
        }
    }

    pub(crate) fn is_plain(self) -> bool {
        self == Self::Plain
    }

    pub(crate) fn months_since_epoch(
        self,
        schema: &dyn CalendricalSchema,
        year: i32,
        month: u8,
    ) -> i32 {
        match self {
            Self::Regular { months_in_year } => {
                i32::from(months_in_year) * (year - 1) + i32::from(month) - 1
            }
            Self::Plain => schema.count_months_since_epoch(year, month),
        }
    }

    pub(crate) fn month_parts(self, schema: &dyn CalendricalSchema, months: i32) -> MonthParts {
        match self {
            Self::Regular { months_in_year } => {
                let n = i32::from(months_in_year);
                MonthParts::new(months.div_euclid(n) + 1, (months.rem_euclid(n) + 1) as u8)
            }
            Self::Plain => schema.get_month_parts(months),
        }
    }

    pub(crate) fn count_months_in_year(self, schema: &dyn CalendricalSchema, year: i32) -> u8 {
        match self {
            Self::Regular { months_in_year } => months_in_year,
            Self::Plain => schema.count_months_in_year(year),
        }
    }
}
