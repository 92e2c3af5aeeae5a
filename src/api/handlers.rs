//! HTTP request handlers for the ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    routing::{get, post, put},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{StatusOverride, apply_override, build_ledger, summarize};
use crate::error::EngineError;

use super::request::{HolidayToggleRequest, ImportRequest};
use super::response::{ApiError, ApiErrorResponse, ImportResponse, LedgerView, SummaryView};
use super::state::AppState;

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/ledgers", post(import_handler))
        .route("/ledgers/:id", get(ledger_handler).delete(delete_handler))
        .route("/ledgers/:id/summary", get(summary_handler))
        .route("/ledgers/:id/entries/:index/holiday", put(holiday_handler))
        .with_state(state)
}

/// Handler for POST /ledgers.
///
/// Builds a ledger from the submitted rows and stores it as a new session.
async fn import_handler(
    State(state): State<AppState>,
    payload: Result<Json<ImportRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ImportResponse>)> {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ledger import");

    let Json(request) = payload.map_err(|rejection| reject_json(rejection, correlation_id))?;

    let config = state.config().config();
    let built = build_ledger(&request.records, config);
    let summary = summarize(&built.ledger, config.rules());
    let entries = built.ledger.detail_rows();

    let session_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        session_id = %session_id,
        rows = request.records.len(),
        entries = entries.len(),
        net_balance_minutes = summary.net_balance_minutes,
        duration_us = built.audit_trace.duration_us,
        "Ledger imported"
    );

    state
        .sessions()
        .write()
        .await
        .insert(session_id, built.ledger);

    Ok((
        StatusCode::CREATED,
        Json(ImportResponse {
            session_id,
            imported_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            summary: summary.into(),
            entries,
            audit_trace: built.audit_trace,
        }),
    ))
}

/// Handler for GET /ledgers/:id.
async fn ledger_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<LedgerView>> {
    let sessions = state.sessions().read().await;
    let ledger = sessions.get(&id).ok_or_else(|| session_not_found(id))?;

    Ok(Json(LedgerView {
        session_id: id,
        summary: summarize(ledger, state.config().rules()).into(),
        entries: ledger.detail_rows(),
    }))
}

/// Handler for GET /ledgers/:id/summary.
async fn summary_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SummaryView>> {
    let sessions = state.sessions().read().await;
    let ledger = sessions.get(&id).ok_or_else(|| session_not_found(id))?;

    Ok(Json(summarize(ledger, state.config().rules()).into()))
}

/// Handler for PUT /ledgers/:id/entries/:index/holiday.
///
/// Applies the holiday toggle to one entry and returns the re-aggregated
/// summary.
async fn holiday_handler(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
    payload: Result<Json<HolidayToggleRequest>, JsonRejection>,
) -> ApiResult<Json<SummaryView>> {
    let correlation_id = Uuid::new_v4();
    let Json(request) = payload.map_err(|rejection| reject_json(rejection, correlation_id))?;

    let mut sessions = state.sessions().write().await;
    let ledger = sessions.get_mut(&id).ok_or_else(|| session_not_found(id))?;

    let message = StatusOverride::holiday(index, request.holiday);
    let summary = apply_override(ledger, message, state.config().config()).map_err(|err| {
        warn!(
            correlation_id = %correlation_id,
            session_id = %id,
            error = %err,
            "Holiday override rejected"
        );
        ApiErrorResponse::from(err)
    })?;

    info!(
        correlation_id = %correlation_id,
        session_id = %id,
        index,
        holiday = request.holiday,
        net_balance_minutes = summary.net_balance_minutes,
        "Holiday override applied"
    );

    Ok(Json(summary.into()))
}

/// Handler for DELETE /ledgers/:id.
async fn delete_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> ApiResult<StatusCode> {
    state
        .sessions()
        .write()
        .await
        .remove(&id)
        .ok_or_else(|| session_not_found(id))?;

    info!(session_id = %id, "Ledger session closed");
    Ok(StatusCode::NO_CONTENT)
}

fn session_not_found(id: Uuid) -> ApiErrorResponse {
    warn!(session_id = %id, "Ledger session not found");
    EngineError::SessionNotFound { id }.into()
}

/// Maps a JSON body rejection onto an API error.
fn reject_json(rejection: JsonRejection, correlation_id: Uuid) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}
