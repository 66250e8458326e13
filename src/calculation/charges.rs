//! Currency arithmetic for rental charges.
//!
//! All amounts are exact decimals, never binary floating point. The only
//! rounding step in the whole pipeline is the discount amount, which rounds
//! half-up (midpoint away from zero) to the cent; every other operation is
//! exact. Outputs are normalized to exactly two decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

/// The charge before any discount: daily charge times charge days.
///
/// Exact multiplication; the day count is an integer so no rounding is
/// involved.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::pre_discount_charge;
/// use rust_decimal::Decimal;
///
/// let charge = pre_discount_charge(Decimal::new(149, 2), 3);
/// assert_eq!(charge.to_string(), "4.47");
/// ```
pub fn pre_discount_charge(daily_charge: Decimal, charge_days: u32) -> Decimal {
    rescaled(daily_charge * Decimal::from(charge_days))
}

/// The discount amount: pre-discount charge times the discount percent,
/// rounded half-up to the cent.
///
/// The division by 100 and the multiplication are exact decimal operations;
/// only the final rounding to two places can lose precision, and an exact
/// half-cent tie rounds away from zero.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::discount_amount;
/// use rust_decimal::Decimal;
///
/// // $2.99 at 50% is $1.495, which rounds up to $1.50
/// let discount = discount_amount(Decimal::new(299, 2), 50);
/// assert_eq!(discount.to_string(), "1.50");
/// ```
pub fn discount_amount(pre_discount: Decimal, discount_percent: u32) -> Decimal {
    debug_assert!(discount_percent <= 100, "discount validated at the boundary");

    let exact = pre_discount * Decimal::from(discount_percent) / Decimal::from(100);
    rescaled(exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

/// The final amount owed: pre-discount charge minus the discount amount.
///
/// Exact subtraction; both operands already carry two decimal places.
pub fn final_charge(pre_discount: Decimal, discount: Decimal) -> Decimal {
    rescaled(pre_discount - discount)
}

/// Normalizes an amount to exactly two decimal places.
fn rescaled(mut amount: Decimal) -> Decimal {
    amount.rescale(2);
    amount
}
