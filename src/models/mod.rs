//! Core data models for the rental charge engine.
//!
//! This module contains all the domain values used throughout the engine.

mod agreement;
mod checkout;
mod tool;

pub use agreement::RentalAgreement;
pub use checkout::CheckoutRequest;
pub use tool::{RentalPolicy, Tool};
