//! The raw checkout request and its boundary validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PosError, PosResult};

/// The raw inputs an operator supplies to check a tool out.
///
/// The counts are carried as signed integers exactly as received so that
/// out-of-range values can be rejected with a precise error instead of
/// failing at deserialization. Validation happens here, at the boundary;
/// the calculation engine never re-checks its preconditions.
///
/// # Example
///
/// ```
/// use rental_engine::models::CheckoutRequest;
/// use chrono::NaiveDate;
///
/// let request = CheckoutRequest {
///     tool_code: "LADW".to_string(),
///     rental_day_count: 3,
///     discount_percent: 10,
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
/// };
/// assert_eq!(request.validated_day_count().unwrap(), 3);
/// assert_eq!(request.validated_discount().unwrap(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The catalog code of the tool being rented.
    pub tool_code: String,
    /// The number of days the tool is rented for. Must be at least 1.
    pub rental_day_count: i64,
    /// The discount percent. Must be between 0 and 100 inclusive.
    pub discount_percent: i64,
    /// The date the tool is checked out. The checkout date itself is never
    /// charged; billing starts the following day.
    pub checkout_date: NaiveDate,
}

impl CheckoutRequest {
    /// Validates the rental day count, returning it as an unsigned count.
    ///
    /// # Errors
    ///
    /// Returns [`PosError::InvalidDayCount`] if the count is zero or negative.
    pub fn validated_day_count(&self) -> PosResult<u32> {
        u32::try_from(self.rental_day_count)
            .ok()
            .filter(|&count| count > 0)
            .ok_or(PosError::InvalidDayCount {
                day_count: self.rental_day_count,
            })
    }

    /// Validates the discount percent, returning it as an unsigned percent.
    ///
    /// # Errors
    ///
    /// Returns [`PosError::InvalidDiscount`] if the percent is outside 0-100.
    pub fn validated_discount(&self) -> PosResult<u32> {
        u32::try_from(self.discount_percent)
            .ok()
            .filter(|&percent| percent <= 100)
            .ok_or(PosError::InvalidDiscount {
                discount_percent: self.discount_percent,
            })
    }
}
