//! HTTP request handlers for the rental charge engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_rental_agreement;
use crate::models::{CheckoutRequest, RentalAgreement};
use crate::render::render_agreement;

use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/checkout/receipt", post(receipt_handler))
        .route("/tools", get(list_tools_handler))
        .with_state(state)
}

/// Handler for POST /checkout.
///
/// Accepts a checkout request and returns the calculated rental agreement
/// as JSON.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match perform_checkout(&state, &request, correlation_id) {
        Ok(agreement) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            Json(agreement),
        )
            .into_response(),
        Err(response) => response.into_response(),
    }
}

/// Handler for POST /checkout/receipt.
///
/// Same flow as `/checkout`, but renders the agreement as the plain-text
/// receipt block instead of JSON.
async fn receipt_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();

    let request = match parse_payload(payload, correlation_id) {
        Ok(request) => request,
        Err(response) => return response.into_response(),
    };

    match perform_checkout(&state, &request, correlation_id) {
        Ok(agreement) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_agreement(&agreement),
        )
            .into_response(),
        Err(response) => response.into_response(),
    }
}

/// Handler for GET /tools.
///
/// Returns every tool in the catalog, sorted by code.
async fn list_tools_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tools = state.catalog().catalog().tools();
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(tools.into_iter().cloned().collect::<Vec<_>>()),
    )
}

/// Converts a JSON extraction result into a checkout request, mapping
/// rejection kinds onto API errors.
fn parse_payload(
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<CheckoutRequest, ApiErrorResponse> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Body text carries the detailed serde error
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err(ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            })
        }
    }
}

/// Validates the request, resolves the tool, and runs the calculation engine.
fn perform_checkout(
    state: &AppState,
    request: &CheckoutRequest,
    correlation_id: Uuid,
) -> Result<RentalAgreement, ApiErrorResponse> {
    info!(
        correlation_id = %correlation_id,
        tool_code = %request.tool_code,
        "Processing checkout request"
    );

    let day_count = request.validated_day_count().inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected day count");
    })?;
    let discount_percent = request.validated_discount().inspect_err(|err| {
        warn!(correlation_id = %correlation_id, error = %err, "Rejected discount");
    })?;
    let tool = state
        .catalog()
        .find_tool(&request.tool_code)
        .inspect_err(|err| {
            warn!(correlation_id = %correlation_id, error = %err, "Tool lookup miss");
        })?;

    let start_time = Instant::now();
    let agreement =
        calculate_rental_agreement(tool, day_count, discount_percent, request.checkout_date);
    info!(
        correlation_id = %correlation_id,
        tool_code = %agreement.tool_code,
        charge_days = agreement.charge_days,
        final_charge = %agreement.final_charge,
        duration_us = start_time.elapsed().as_micros(),
        "Checkout completed successfully"
    );

    Ok(agreement)
}
