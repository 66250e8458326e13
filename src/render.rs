//! Text rendering of rental agreements.
//!
//! Formatting concerns (currency symbol, thousands separators, date pattern)
//! live entirely here, outside the calculation engine. The output is the
//! operator-facing receipt block, one `Title: value` line per field.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::RentalAgreement;

/// Renders a rental agreement as a block-text receipt.
///
/// # Example
///
/// ```
/// use rental_engine::calculation::calculate_rental_agreement;
/// use rental_engine::models::{RentalPolicy, Tool};
/// use rental_engine::render::render_agreement;
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
/// let receipt = render_agreement(&agreement);
///
/// assert!(receipt.contains("Tool code: LADW"));
/// assert!(receipt.contains("Final charge: $3.58"));
/// ```
pub fn render_agreement(agreement: &RentalAgreement) -> String {
    format!(
        "Tool code: {}\n\
         Tool type: {}\n\
         Tool brand: {}\n\
         Rental days: {}\n\
         Checkout date: {}\n\
         Due date: {}\n\
         Daily rental charge: {}\n\
         Charge days: {}\n\
         Pre-discount charge: {}\n\
         Discount percent: {}%\n\
         Discount amount: {}\n\
         Final charge: {}\n",
        agreement.tool_code,
        agreement.tool_type,
        agreement.tool_brand,
        agreement.rental_days,
        format_date(agreement.checkout_date),
        format_date(agreement.due_date),
        format_currency(agreement.daily_rental_charge),
        agreement.charge_days,
        format_currency(agreement.pre_discount_charge),
        agreement.discount_percent,
        format_currency(agreement.discount_amount),
        format_currency(agreement.final_charge),
    )
}

/// Formats an amount as US currency: `$` prefix, comma-grouped thousands,
/// exactly two decimal places, half-up rounded.
pub fn format_currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    let negative = rounded.is_sign_negative();
    let digits = rounded.abs().to_string();
    let (dollars, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, c) in dollars.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let dollars: String = grouped.chars().rev().collect();

    if negative {
        format!("-${}.{}", dollars, cents)
    } else {
        format!("${}.{}", dollars, cents)
    }
}

/// Formats a date as `MM/DD/YY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%m/%d/%y").to_string()
}
