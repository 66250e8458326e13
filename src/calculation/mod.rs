//! Calculation logic for the rental charge engine.
//!
//! This module contains the whole billing pipeline: calendar classification of
//! each date in the rental window (weekday, weekend, observed holiday),
//! charge-day counting under a tool's policy flags, the decimal currency
//! arithmetic for pre-discount, discount, and final charge amounts, and the
//! assembly of the final rental agreement record.
//!
//! Every function here is pure: same inputs, same outputs, no side effects.
//! Preconditions (positive day count, discount within 0-100) are enforced by
//! the caller before these functions run.

mod charge_days;
mod charges;
mod day_classification;
mod rental_agreement;

pub use charge_days::{count_charge_days, due_date};
pub use charges::{discount_amount, final_charge, pre_discount_charge};
pub use day_classification::{is_observed_holiday, is_weekday, is_weekend};
pub use rental_agreement::calculate_rental_agreement;
