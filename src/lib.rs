//! Charge calculation engine for a tool rental point of sale.
//!
//! This crate computes the billable outcome of renting a tool: which days in
//! the rental window are chargeable under the tool's calendar policy (weekday,
//! weekend and observed-holiday inclusion flags), and the amount owed after a
//! percentage discount, using exact decimal arithmetic throughout.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod catalog;
pub mod error;
pub mod models;
pub mod render;
