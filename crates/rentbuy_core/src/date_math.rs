//! Calendar helpers for year-anniversary series.

use jiff::civil::Date;

/// Latest year jiff can represent
pub const MAX_YEAR: i16 = 9999;

#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

/// Move a date `years` years forward (or back, when negative).
///
/// The month and day are kept when the target year has that day. Feb 29 in a
/// target year without one becomes Mar 1: the leap day is day 60 of its year,
/// and day 60 of a common year is Mar 1.
///
/// `None` when the target year falls outside jiff's civil range.
pub fn add_years(d: Date, years: i16) -> Option<Date> {
    let target_year = d.year().checked_add(years)?;
    let date = if d.day() <= days_in_month(target_year, d.month()) {
        Date::new(target_year, d.month(), d.day())
    } else {
        Date::new(target_year, 3, 1)
    };
    date.ok()
}
