//! Date sequence generation.

use kalends_scope::CalendarError;

use crate::date::CalendarDate;

/// Generates a contiguous sequence of dates.
///
/// Starting from `start`, produces exactly `n_days` consecutive dates by
/// repeatedly advancing to the next day. Month and year boundaries follow
/// the calendar's schema, including blank and epagomenal days.
///
/// # Errors
///
/// Returns [`CalendarError::DateOverflow`] if the sequence would run past
/// the calendar's last supported date.
///
/// # Example
///
/// ```
/// use kalends_calendar::{date_sequence, registry};
///
/// let start = registry::civil().date(2000, 12, 30).unwrap();
/// let dates = date_sequence(start, 4).unwrap();
/// assert_eq!(dates.len(), 4);
/// assert_eq!(dates[2].year(), 2001);
/// ```
pub fn date_sequence(
    start: CalendarDate<'_>,
    n_days: usize,
) -> Result<Vec<CalendarDate<'_>>, CalendarError> {
    if n_days == 0 {
        return Ok(Vec::new());
    }
    let max_days = start.calendar().scope().segment().max_days();
    // At least one: `start` itself is in range.
    let available = (i64::from(max_days) - i64::from(start.days_since_epoch()) + 1) as u64;
    if n_days as u64 > available {
        return Err(CalendarError::DateOverflow);
    }
    let mut dates = Vec::with_capacity(n_days);
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        current = current.next_day()?;
        dates.push(current);
    }
    Ok(dates)
}
