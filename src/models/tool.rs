//! Tool and rental policy models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The calendar charging policy for a kind of tool.
///
/// A policy is an open data record rather than a closed enumeration: any tool
/// may carry any combination of flags and any daily charge, and adding a new
/// kind of tool never touches calculation logic.
///
/// # Example
///
/// ```
/// use rental_engine::models::RentalPolicy;
/// use rust_decimal::Decimal;
///
/// let ladder = RentalPolicy {
///     name: "Ladder".to_string(),
///     daily_charge: Decimal::new(199, 2), // $1.99
///     charge_on_weekdays: true,
///     charge_on_weekends: true,
///     charge_on_holidays: false,
/// };
/// assert!(!ladder.charge_on_holidays);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalPolicy {
    /// The human-readable name of the tool kind (e.g., "Ladder").
    pub name: String,
    /// The daily rental charge in dollars, non-negative, 2 decimal places.
    pub daily_charge: Decimal,
    /// Whether weekdays (Monday-Friday) in the rental window are charged.
    pub charge_on_weekdays: bool,
    /// Whether weekend days in the rental window are charged.
    pub charge_on_weekends: bool,
    /// Whether observed holidays in the rental window are charged.
    pub charge_on_holidays: bool,
}

/// A rentable tool: a catalog code and brand paired with its charging policy.
///
/// Owned by the catalog; the calculation engine only ever reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The catalog code used to look the tool up (e.g., "LADW").
    pub code: String,
    /// The brand of this particular tool (e.g., "Werner").
    pub brand: String,
    /// The charging policy for this tool's kind.
    pub policy: RentalPolicy,
}
