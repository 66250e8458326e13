//! Charge-day counting over the rental window.
//!
//! The rental window begins the day after checkout (the checkout date itself
//! is never charged) and runs for the full rental day count, so the due date
//! is the last date in the window and is included in the count.

use chrono::{Days, NaiveDate};

use crate::models::RentalPolicy;

use super::{is_observed_holiday, is_weekday, is_weekend};

/// Counts how many dates in the rental window are chargeable under a policy.
///
/// Iterates the `day_count` consecutive dates starting the day after
/// `checkout_date`. A date is excluded when any class it belongs to is
/// switched off by the policy:
///
/// ```text
/// excluded(d) = (weekday(d)          AND NOT charge_on_weekdays)
///            OR (weekend(d)          AND NOT charge_on_weekends)
///            OR (observed_holiday(d) AND NOT charge_on_holidays)
/// ```
///
/// Weekend and holiday status are evaluated independently: a date that is
/// both is excluded if either flag says so. Exclusions only ever subtract
/// days, so no precedence ordering is needed.
///
/// The caller guarantees `day_count > 0`; a zero count would simply produce
/// zero charge days.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::count_charge_days;
/// use rental_engine::models::RentalPolicy;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ladder = RentalPolicy {
///     name: "Ladder".to_string(),
///     daily_charge: Decimal::new(199, 2),
///     charge_on_weekdays: true,
///     charge_on_weekends: true,
///     charge_on_holidays: false,
/// };
///
/// // Checkout Thursday 2020-07-02; window is July 3-5. July 3rd is the
/// // observed Independence Day, July 4-5 are charged weekend days.
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// assert_eq!(count_charge_days(checkout, 3, &ladder), 2);
/// ```
pub fn count_charge_days(checkout_date: NaiveDate, day_count: u32, policy: &RentalPolicy) -> u32 {
    debug_assert!(day_count > 0, "day count validated at the boundary");

    (1..=u64::from(day_count))
        .map(|offset| checkout_date + Days::new(offset))
        .filter(|&date| is_chargeable(date, policy))
        .count() as u32
}

/// The date the tool is due back: checkout plus the full rental day count.
///
/// Always a plain calendar offset, never adjusted for weekends or holidays.
pub fn due_date(checkout_date: NaiveDate, day_count: u32) -> NaiveDate {
    checkout_date + Days::new(u64::from(day_count))
}

fn is_chargeable(date: NaiveDate, policy: &RentalPolicy) -> bool {
    let excluded = (is_weekday(date) && !policy.charge_on_weekdays)
        || (is_weekend(date) && !policy.charge_on_weekends)
        || (is_observed_holiday(date) && !policy.charge_on_holidays);
    !excluded
}
