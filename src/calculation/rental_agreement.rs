//! Rental agreement assembly.

use chrono::NaiveDate;

use crate::models::{RentalAgreement, Tool};

use super::{count_charge_days, discount_amount, due_date, final_charge, pre_discount_charge};

/// Calculates a complete rental agreement for a checkout.
///
/// This is the single entry point of the engine: it counts the chargeable
/// days under the tool's policy, derives the three charge amounts, and
/// assembles them with the pass-through fields into a fully populated,
/// immutable [`RentalAgreement`]. All fields are known at once, so this is a
/// plain factory function with no partial-construction states.
///
/// The caller has already validated `rental_day_count > 0` and
/// `discount_percent <= 100`; the function is total over those preconditions.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::calculate_rental_agreement;
/// use rental_engine::models::{RentalPolicy, Tool};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let ladder = Tool {
///     code: "LADW".to_string(),
///     brand: "Werner".to_string(),
///     policy: RentalPolicy {
///         name: "Ladder".to_string(),
///         daily_charge: Decimal::new(199, 2),
///         charge_on_weekdays: true,
///         charge_on_weekends: true,
///         charge_on_holidays: false,
///     },
/// };
///
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let agreement = calculate_rental_agreement(&ladder, 3, 10, checkout);
///
/// assert_eq!(agreement.charge_days, 2);
/// assert_eq!(agreement.final_charge.to_string(), "3.58");
/// ```
pub fn calculate_rental_agreement(
    tool: &Tool,
    rental_day_count: u32,
    discount_percent: u32,
    checkout_date: NaiveDate,
) -> RentalAgreement {
    debug_assert!(rental_day_count > 0, "day count validated at the boundary");
    debug_assert!(discount_percent <= 100, "discount validated at the boundary");

    let charge_days = count_charge_days(checkout_date, rental_day_count, &tool.policy);
    let pre_discount = pre_discount_charge(tool.policy.daily_charge, charge_days);
    let discount = discount_amount(pre_discount, discount_percent);

    RentalAgreement {
        tool_code: tool.code.clone(),
        tool_type: tool.policy.name.clone(),
        tool_brand: tool.brand.clone(),
        rental_days: rental_day_count,
        checkout_date,
        due_date: due_date(checkout_date, rental_day_count),
        daily_rental_charge: tool.policy.daily_charge,
        charge_days,
        pre_discount_charge: pre_discount,
        discount_percent,
        discount_amount: discount,
        final_charge: final_charge(pre_discount, discount),
    }
}
