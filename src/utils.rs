/// Common calendar helper functions.

/// Returns `true` if provided year is leap.
#[inline]
pub(crate) fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns number of days in specified month. A year of `0` means the year
/// is unspecified and February defaults to 29 days.
pub(crate) fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if year == 0 || is_leap_year(year) => 29,
        2 => 28,
        _ => panic!("Invalid month: {month}"),
    }
}

/// Returns number of days in the month before the specified one, sizing the
/// wrap-around modulus for month-boundary day-of-month intervals.
pub(crate) fn days_in_previous_month(year: i32, month: i32) -> i32 {
    if month == 1 {
        days_in_month(year - 1, 12)
    } else {
        days_in_month(year, month - 1)
    }
}
