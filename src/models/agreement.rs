//! The rental agreement result record.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A completed rental agreement.
///
/// This is a terminal snapshot: produced once per checkout by
/// [`calculate_rental_agreement`](crate::calculation::calculate_rental_agreement),
/// never mutated afterwards, and handed to rendering or reporting collaborators
/// as-is. All derived fields are computed before construction; the record
/// itself carries no logic.
///
/// All monetary fields are exact decimal currency values with exactly two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// The catalog code of the rented tool.
    pub tool_code: String,
    /// The display name of the tool kind (e.g., "Ladder").
    pub tool_type: String,
    /// The brand of the rented tool.
    pub tool_brand: String,
    /// The number of days the tool is rented for.
    pub rental_days: u32,
    /// The date the tool was checked out.
    pub checkout_date: NaiveDate,
    /// The date the tool is due back: checkout date plus rental days,
    /// independent of which days are chargeable.
    pub due_date: NaiveDate,
    /// The daily rental charge from the tool's policy.
    pub daily_rental_charge: Decimal,
    /// How many days in the rental window are chargeable under the policy.
    pub charge_days: u32,
    /// Daily charge times charge days, before any discount.
    pub pre_discount_charge: Decimal,
    /// The discount percent applied, 0-100.
    pub discount_percent: u32,
    /// The discount amount, rounded half-up to the cent.
    pub discount_amount: Decimal,
    /// The final amount owed: pre-discount charge minus discount amount.
    pub final_charge: Decimal,
}
