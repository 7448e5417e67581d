//! # kalends-calendar
//!
//! Generic calendar dates over the kalends engine.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["CalendarConfig (TOML)"] -->|".build()"| B["Calendar"]
//!     R["registry::civil() ..."] --> B
//!     B -->|".date(y, m, d)"| C["CalendarDate"]
//!     B -->|".month(y, m)"| M["CalendarMonth"]
//!     C -->|".plus_years() .plus_months()"| C
//!     C -->|".day_number()"| D["DayNumber"]
//!     D -->|"Calendar::date_from_day_number()"| C
//!     C -->|"date_sequence()"| S["Vec of CalendarDate"]
//! ```
//!
//! A [`Calendar`] owns a scope (schema, epoch, supported years) and the
//! rules for its arithmetic. Dates and months are small `Copy` values that
//! borrow their calendar and store a single integer count.
//!
//! ## Quick Start
//!
//! ```
//! use kalends_calendar::registry;
//! use kalends_daynumber::DayOfWeek;
//!
//! let civil = registry::civil();
//! let date = civil.date(2000, 2, 29).unwrap();
//! assert_eq!(date.day_of_week(), DayOfWeek::Tuesday);
//!
//! // Truncated by default: 2001-02-28.
//! let next_year = date.plus_years(1).unwrap();
//! assert_eq!(next_year.day(), 28);
//!
//! // The same day in the Julian calendar.
//! let julian = date.with_calendar(registry::julian()).unwrap();
//! assert_eq!((julian.month(), julian.day()), (2, 16));
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `calendar` | [`Calendar`]: scope, rules and constructors |
//! | `date` | [`CalendarDate`] |
//! | `month` | [`CalendarMonth`] |
//! | `sequence` | Date sequence generation |
//! | [`registry`] | Lazily-built well-known calendars |
//! | `config` | [`CalendarConfig`], read from TOML |
//! | `error` | Error types |

mod calendar;
mod config;
mod date;
mod error;
mod month;
pub mod registry;
mod sequence;

pub use calendar::Calendar;
pub use config::{CalendarConfig, Epoch, NamedEpoch};
pub use date::CalendarDate;
pub use error::ConfigError;
pub use month::CalendarMonth;
pub use sequence::date_sequence;
