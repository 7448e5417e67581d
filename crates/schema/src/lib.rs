//! Calendrical schemas for the kalends workspace.
//!
//! A schema is one calendar's rules expressed as pure, total functions over
//! integers: the length of years and months, leap rules, and the exact maps
//! between (year, month, day) or (year, day-of-year) fields and a count of
//! days since the calendar's own epoch. Schemas never validate; range checks
//! belong to a calendar scope.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`schema`] | The [`CalendricalSchema`] trait and [`SchemaProfile`] |
//! | [`parts`] | Field records: [`DateParts`], [`OrdinalParts`], [`MonthParts`] |
//! | [`kind`] | [`SchemaKind`], the closed list of built-in schemas |
//! | `gregorian`, `julian` | Twelve-month solar calendars |
//! | `epagomenal` | Coptic, Egyptian and French Republican layouts |
//! | `tabular_islamic`, `lunisolar` | Lunar and lunisolar calendars |
//! | `tropicalia`, `world`, `international_fixed`, `positivist`, `pax` | Reform calendars |

mod epagomenal;
mod gregorian;
mod international_fixed;
mod julian;
pub mod kind;
mod lunisolar;
pub mod parts;
mod pax;
mod positivist;
pub mod schema;
mod solar12;
mod tabular_islamic;
mod tropicalia;
mod world;

pub use epagomenal::EpagomenalSchema;
pub use gregorian::GregorianSchema;
pub use international_fixed::InternationalFixedSchema;
pub use julian::JulianSchema;
pub use kind::SchemaKind;
pub use lunisolar::LunisolarSchema;
pub use parts::{DateParts, MonthParts, OrdinalParts};
pub use pax::PaxSchema;
pub use positivist::PositivistSchema;
pub use schema::{CalendricalSchema, DEFAULT_SUPPORTED_YEARS, SchemaProfile};
pub use tabular_islamic::TabularIslamicSchema;
pub use tropicalia::TropicaliaSchema;
pub use world::WorldSchema;
