//! Well-known calendars, built once per process on first use.
//!
//! | Calendar | Schema | Epoch | Years |
//! |----------|--------|-------|-------|
//! | `civil` | Gregorian | new style | 1..=9999 |
//! | `gregorian` | Gregorian | new style | proleptic |
//! | `julian` | Julian | old style | proleptic |
//! | `coptic` | Coptic, 12 months | Coptic | 1..=9999 |
//! | `ethiopic` | Coptic, 12 months | Ethiopic | 1..=9999 |
//! | `egyptian` | Egyptian, 12 months | Egyptian | 1..=9999 |
//! | `armenian` | Egyptian, 12 months | Armenian | 1..=9999 |
//! | `french_republican` | French Republican, 12 months | French Republican | 1..=9999 |
//! | `tabular_islamic` | Tabular Islamic | Tabular Islamic | 1..=9999 |
//! | `tropicalia` | Tropicalia | new style | 1..=9999 |
//! | `world` | World | Sunday before new style | 1..=9999 |
//! | `international_fixed` | International Fixed | Sunday before new style | 1..=9999 |
//! | `positivist` | Positivist | Positivist | 1..=9999 |
//! | `pax` | Pax | Sunday before new style | 1..=9999 |
//! | `lunisolar` | Lunisolar | new style | 1..=9999 |

use std::ops::RangeInclusive;
use std::sync::LazyLock;

use kalends_daynumber::{DayNumber, DayZero};
use kalends_schema::SchemaKind;
use kalends_scope::{CalendarScope, PROLEPTIC_YEARS, STANDARD_YEARS};
use tracing::debug;

use crate::calendar::Calendar;

fn build(name: &str, kind: SchemaKind, epoch: DayNumber, years: RangeInclusive<i32>) -> Calendar {
    let scope = CalendarScope::new(kind.schema(), epoch, years)
        .expect("built-in calendars use supported year ranges");
    debug!(calendar = name, schema = kind.name(), "initialized registry calendar");
    Calendar::new(name, scope)
}

macro_rules! calendars {
    ($($(#[$doc:meta])* $fn_name:ident, $static_name:ident => ($kind:expr, $epoch:expr, $years:expr);)*) => {
        $(
            static $static_name: LazyLock<Calendar> =
                LazyLock::new(|| build(stringify!($fn_name), $kind, $epoch, $years));

            $(#[$doc])*
            pub fn $fn_name() -> &'static Calendar {
                &$static_name
            }
        )*

        /// Looks up a registry calendar by name.
        pub fn by_name(name: &str) -> Option<&'static Calendar> {
            match name {
                $(stringify!($fn_name) => Some($fn_name()),)*
                _ => None,
            }
        }

        /// Names of every registry calendar.
        pub const NAMES: &[&str] = &[$(stringify!($fn_name)),*];
    };
}

calendars! {
    /// Gregorian calendar over years 1 to 9999.
    civil, CIVIL => (SchemaKind::Gregorian, DayZero::NEW_STYLE, STANDARD_YEARS);
    /// Proleptic Gregorian calendar.
    gregorian, GREGORIAN => (SchemaKind::Gregorian, DayZero::NEW_STYLE, PROLEPTIC_YEARS);
    /// Proleptic Julian calendar.
    julian, JULIAN => (SchemaKind::Julian, DayZero::OLD_STYLE, PROLEPTIC_YEARS);
    /// Coptic calendar, epagomenal days in month 12.
    coptic, COPTIC => (SchemaKind::Coptic12, DayZero::COPTIC, STANDARD_YEARS);
    /// Ethiopic calendar, epagomenal days in month 12.
    ethiopic, ETHIOPIC => (SchemaKind::Coptic12, DayZero::ETHIOPIC, STANDARD_YEARS);
    egyptian, EGYPTIAN => (SchemaKind::Egyptian12, DayZero::EGYPTIAN, STANDARD_YEARS);
    armenian, ARMENIAN => (SchemaKind::Egyptian12, DayZero::ARMENIAN, STANDARD_YEARS);
    french_republican, FRENCH_REPUBLICAN =>
        (SchemaKind::FrenchRepublican12, DayZero::FRENCH_REPUBLICAN, STANDARD_YEARS);
    tabular_islamic, TABULAR_ISLAMIC =>
        (SchemaKind::TabularIslamic, DayZero::TABULAR_ISLAMIC, STANDARD_YEARS);
    tropicalia, TROPICALIA => (SchemaKind::Tropicalia, DayZero::NEW_STYLE, STANDARD_YEARS);
    world, WORLD => (SchemaKind::World, DayZero::SUNDAY_BEFORE_NEW_STYLE, STANDARD_YEARS);
    international_fixed, INTERNATIONAL_FIXED =>
        (SchemaKind::InternationalFixed, DayZero::SUNDAY_BEFORE_NEW_STYLE, STANDARD_YEARS);
    positivist, POSITIVIST => (SchemaKind::Positivist, DayZero::POSITIVIST, STANDARD_YEARS);
    /// Pax calendar; every year starts on a Sunday.
    pax, PAX => (SchemaKind::Pax, DayZero::SUNDAY_BEFORE_NEW_STYLE, STANDARD_YEARS);
    lunisolar, LUNISOLAR => (SchemaKind::Lunisolar, DayZero::NEW_STYLE, STANDARD_YEARS);
}
