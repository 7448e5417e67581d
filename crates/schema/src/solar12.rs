//! Month layout shared by the Gregorian and Julian schemas.

/// Days in `month` for a January..December year.
pub(crate) const fn days_in_month(leap: bool, month: u8) -> u8 {
    match month {
        2 => 28 + leap as u8,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Days in the year before `month` starts.
///
/// Inspired by Neri-Schneider: branch-light for months after February.
pub(crate) const fn days_before_month(leap: bool, month: u8) -> u16 {
    if month < 3 {
        if month == 1 { 0 } else { 31 }
    } else {
        31 + 28 + leap as u16 + ((979 * (month as u32) - 2919) >> 5) as u16
    }
}

/// Month and day for a 1-based day of the year.
pub(crate) const fn month_day(leap: bool, day_of_year: u16) -> (u8, u8) {
    let correction = if day_of_year < 31 + 28 + leap as u16 {
        -1
    } else {
        !leap as i32
    };
    let month = ((12 * (day_of_year as i32 + correction) + 373) / 367) as u8;
    let day = (day_of_year - days_before_month(leap, month)) as u8;
    (month, day)
}
