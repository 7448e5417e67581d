//! Calendar-aware arithmetic for the kalends workspace.
//!
//! Adding years or months to a date can land on a day that does not exist,
//! e.g. February 29th plus one year, or the leap month of a lunisolar year
//! plus one year. Every addition is first computed "exactly": the result is
//! clamped to the nearest valid value and the amount cut off is reported as
//! a roundoff. An [`AdditionRule`] then decides how to resolve it.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`rule`] | [`AdditionRule`], [`AdditionRuleset`], [`AdditionOutcome`] |
//! | [`date_math`] | [`DateMath`]: arithmetic on dates and ordinal dates |
//! | [`month_math`] | [`MonthMath`]: arithmetic on calendar months |
//!
//! Schemas with a fixed month count use closed-form month indexing; the
//! others (leap-week and lunisolar schemas) defer to the schema.

pub mod date_math;
pub mod month_math;
pub mod rule;
mod strategy;

pub use date_math::DateMath;
pub use month_math::MonthMath;
pub use rule::{AdditionOutcome, AdditionRule, AdditionRuleset};
