//! # kalends-daynumber
//!
//! A calendar-agnostic linear day count.
//!
//! A [`DayNumber`] counts days from Monday, January 1st, 1 CE (proleptic
//! Gregorian). Every calendar stores its own "days since epoch" and converts
//! to and from a `DayNumber` by adding or subtracting its epoch, which makes
//! `DayNumber` the interchange type between unrelated calendars.
//!
//! ## Quick Start
//!
//! ```
//! use kalends_daynumber::{DayNumber, DayOfWeek, DayZero};
//!
//! assert_eq!(DayNumber::ZERO.day_of_week(), DayOfWeek::Monday);
//!
//! // First Sunday on or after the Julian epoch.
//! let sunday = DayZero::OLD_STYLE.next_or_same(DayOfWeek::Sunday).unwrap();
//! assert_eq!(sunday, DayZero::SUNDAY_BEFORE_NEW_STYLE);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `day_number` | The day count and its weekday adjusters |
//! | `day_of_week` | ISO-numbered weekday enum |
//! | `day_zero` | Well-known calendar epochs |
//! | `error` | Error types |

mod day_number;
mod day_of_week;
mod day_zero;
mod error;

pub use day_number::DayNumber;
pub use day_of_week::DayOfWeek;
pub use day_zero::DayZero;
pub use error::DayNumberError;
