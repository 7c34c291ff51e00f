//! HTTP API module for the contribution room engine.
//!
//! This module provides the REST API endpoints for computing CELI
//! contribution room and listing the annual limits.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, YearInput};
pub use response::{ApiError, ApiErrorResponse, LimitsResponse};
pub use state::AppState;
