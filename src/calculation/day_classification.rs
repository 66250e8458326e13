//! Calendar classification of rental dates.
//!
//! This module answers two independent questions about any calendar date:
//! does it fall on a weekend, and is it an observed US holiday. The engine
//! recognizes two fixed holidays: Labor Day and Independence Day, the latter
//! with weekend-shift observance rules.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns true if the date falls on a Saturday or Sunday.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::is_weekend;
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2020, 7, 4).unwrap();
/// assert!(is_weekend(saturday));
///
/// // 2020-07-02 is a Thursday
/// let thursday = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// assert!(!is_weekend(thursday));
/// ```
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Returns true if the date falls on a Monday through Friday.
pub fn is_weekday(date: NaiveDate) -> bool {
    !is_weekend(date)
}

/// Returns true if the date is an observed US holiday.
///
/// Two holidays are recognized:
///
/// - **Labor Day**: the first Monday of September (a September Monday with
///   day-of-month 7 or less).
/// - **Independence Day (observed)**: July 4th when it falls on a weekday;
///   Friday July 3rd when July 4th falls on a Saturday; Monday July 5th when
///   July 4th falls on a Sunday.
///
/// The Independence Day rule is exact date-pattern matching, not distance
/// from July 4th: July 3rd is only ever a holiday when it is a Friday, and
/// July 5th only when it is a Monday. In a year where July 4th lands on a
/// Saturday, the 4th itself is a plain weekend day.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::is_observed_holiday;
/// use chrono::NaiveDate;
///
/// // 2020-07-04 is a Saturday, so the holiday shifts to Friday the 3rd
/// assert!(is_observed_holiday(NaiveDate::from_ymd_opt(2020, 7, 3).unwrap()));
/// assert!(!is_observed_holiday(NaiveDate::from_ymd_opt(2020, 7, 4).unwrap()));
///
/// // 2015-09-07 is the first Monday of September: Labor Day
/// assert!(is_observed_holiday(NaiveDate::from_ymd_opt(2015, 9, 7).unwrap()));
/// ```
pub fn is_observed_holiday(date: NaiveDate) -> bool {
    is_labor_day(date) || is_observed_independence_day(date)
}

/// The first Monday of September.
fn is_labor_day(date: NaiveDate) -> bool {
    date.month() == 9 && date.weekday() == Weekday::Mon && date.day() <= 7
}

/// July 4th on a weekday, or the Friday/Monday it shifts to when it falls on
/// a weekend.
fn is_observed_independence_day(date: NaiveDate) -> bool {
    if date.month() != 7 {
        return false;
    }
    match date.day() {
        4 => is_weekday(date),
        3 => date.weekday() == Weekday::Fri,
        5 => date.weekday() == Weekday::Mon,
        _ => false,
    }
}
