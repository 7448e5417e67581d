//! Calendar scopes for the kalends workspace.
//!
//! A [`CalendarScope`] binds a [`CalendricalSchema`](kalends_schema::CalendricalSchema)
//! to an epoch and a supported range of years. It is the single place where
//! calendar fields and day counts are range-checked.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`segment`] | [`CalendricalSegment`]: supported years, months and days |
//! | [`scope`] | [`CalendarScope`]: validation and overflow checks |
//! | [`error`] | [`CalendarError`], shared by the arithmetic and façade crates |

pub mod error;
pub mod scope;
pub mod segment;

pub use error::CalendarError;
pub use scope::{CalendarScope, PROLEPTIC_YEARS, STANDARD_YEARS};
pub use segment::CalendricalSegment;
