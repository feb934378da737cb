//! Derived age computation.
//!
//! Age is never stored. It is recomputed from the birth date every time a
//! user is read, so the value is always relative to the caller's "today".

use chrono::{Datelike, NaiveDate, Utc};

/// Whole years between `birth_date` and `today`.
///
/// The year difference is reduced by one when `today` falls strictly before
/// the anniversary in its own year, comparing month then day. A birthday on
/// `today` counts as already had.
///
/// Feb 29 birthdays are compared as month 2, day 29 with no adjustment, so in
/// non-leap years the anniversary is reached on Mar 1.
///
/// A birth date after `today` yields a negative age; callers that want to
/// reject that must do so at input validation.
///
/// # Examples
///
/// ```
/// use arukay_core::age_on;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// assert_eq!(age_on(NaiveDate::from_ymd_opt(2000, 6, 15).unwrap(), today), 24);
/// assert_eq!(age_on(NaiveDate::from_ymd_opt(2000, 6, 16).unwrap(), today), 23);
/// ```
#[must_use]
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birth_date.year();
    let before_anniversary = (today.month(), today.day()) < (birth_date.month(), birth_date.day());
    if before_anniversary { years - 1 } else { years }
}

/// Age as of the current UTC date.
#[must_use]
pub fn age_today(birth_date: NaiveDate) -> i32 {
    age_on(birth_date, Utc::now().date_naive())
}
