//! HTTP request handlers for the contribution room API.
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
use chrono::{Datelike, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{YearField, calculate_rights, validate_inputs};
use crate::config::ConfigLoader;
use crate::error::EngineError;
use crate::models::{AuditStep, AuditTrace, CalculationResult, EligibilityOutcome};
use crate::presentation::render_outcome;

use super::request::CalculationRequest;
use super::response::{ApiError, ApiErrorResponse, LimitsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/limits", get(limits_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a birth year and reference year and returns the calculated
/// contribution room.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracing
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    // Map JSON rejections to structured API errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    ApiError::malformed_json(body_text)
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Only an omitted reference year defaults to the current one; null is missing
    let birth = request.birth_field();
    let reference = request.reference_field(Utc::now().year());

    match perform_calculation(&birth, &reference, state.config()) {
        Ok(result) => {
            let total = result
                .outcome
                .rights()
                .map(|r| r.total.to_string())
                .unwrap_or_default();
            info!(
                correlation_id = %correlation_id,
                birth_year = result.birth_year,
                reference_year = result.reference_year,
                eligible = result.outcome.is_eligible(),
                total = %total,
                duration_us = result.audit_trace.duration_us,
                "Calculation completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for GET /limits endpoint.
///
/// Returns the program metadata and the annual limits table.
async fn limits_handler(State(state): State<AppState>) -> impl IntoResponse {
    let config = state.config();
    Json(LimitsResponse {
        program: config.program().clone(),
        limits: config.table().entries(),
    })
}

/// Validates the inputs and computes the contribution room.
fn perform_calculation(
    birth: &YearField,
    reference: &YearField,
    config: &ConfigLoader,
) -> Result<CalculationResult, EngineError> {
    let start_time = Instant::now();

    // Step 1: Validate inputs, collecting every failure
    let years = validate_inputs(birth, reference)?;
    let validation_step = AuditStep {
        step_number: 1,
        rule_id: "input_validation".to_string(),
        rule_name: "Input Validation".to_string(),
        input: serde_json::json!({
            "birth_year": years.birth_year(),
            "reference_year": years.reference_year()
        }),
        output: serde_json::json!({ "valid": true }),
        reasoning: format!(
            "Birth year {} and reference year {} are within accepted bounds",
            years.birth_year(),
            years.reference_year()
        ),
    };

    // Steps 2+: Eligibility and accumulation
    let calculation = calculate_rights(years, config.table(), 2);
    let outcome: EligibilityOutcome = calculation.outcome;

    // Render labels for the display locale
    let display = render_outcome(&outcome, config.currency_format());

    // Build audit trace
    let mut steps = vec![validation_step];
    steps.extend(calculation.audit_steps);

    let duration_us = start_time.elapsed().as_micros() as u64;

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        birth_year: years.birth_year(),
        reference_year: years.reference_year(),
        outcome,
        display,
        audit_trace: AuditTrace { steps, duration_us },
    })
}
