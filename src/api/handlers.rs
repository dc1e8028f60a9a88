//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.
//! Handlers stay thin: parse, log with a correlation id, call the
//! action, map the result.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::actions::attendance::{self, AttendanceInput};
use crate::actions::dashboard;
use crate::actions::ledger;
use crate::actions::payments::{self, PaymentInput};
use crate::actions::reports;
use crate::actions::sites::{self, SiteInput};
use crate::actions::workers::{self, WorkerInput};
use crate::error::PayrollResult;
use crate::models::ReportFilters;

use super::request::{
    ActivitiesQuery, DateQuery, LedgerQuery, MigrationQuery, MonthQuery, PaymentListQuery,
    RangeQuery, SiteListQuery, WorkerListQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/workers",
            get(list_workers_handler).post(create_worker_handler),
        )
        .route("/workers/migrate-legacy", post(migrate_legacy_handler))
        .route(
            "/workers/:id",
            get(get_worker_handler)
                .put(update_worker_handler)
                .delete(delete_worker_handler),
        )
        .route("/workers/:id/toggle-status", post(toggle_worker_handler))
        .route("/workers/:id/ledger", get(worker_ledger_handler))
        .route("/workers/:id/attendance", get(worker_attendance_handler))
        .route("/workers/:id/payments", get(worker_payments_handler))
        .route("/sites", get(list_sites_handler).post(create_site_handler))
        .route(
            "/sites/:id",
            get(get_site_handler)
                .put(update_site_handler)
                .delete(delete_site_handler),
        )
        .route("/sites/:id/toggle-status", post(toggle_site_handler))
        .route(
            "/attendance",
            get(attendance_by_date_handler).put(save_attendance_handler),
        )
        .route("/attendance/bulk", post(bulk_attendance_handler))
        .route("/attendance/summary", get(attendance_summary_handler))
        .route("/attendance/:id", delete(delete_attendance_handler))
        .route(
            "/payments",
            get(list_payments_handler).post(create_payment_handler),
        )
        .route("/payments/summary", get(payment_summary_handler))
        .route(
            "/payments/:id",
            axum::routing::put(update_payment_handler).delete(delete_payment_handler),
        )
        .route("/ledger/balances", get(balances_handler))
        .route("/dashboard/stats", get(dashboard_stats_handler))
        .route("/dashboard/activities", get(activities_handler))
        .route("/reports/employee", post(employee_report_handler))
        .route("/reports/filter-options", get(filter_options_handler))
        .with_state(state)
}

/// Unwraps a JSON body, mapping rejections to the error envelope.
fn parse_json<T>(
    payload: Result<Json<T>, JsonRejection>,
    correlation_id: Uuid,
) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
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

/// Maps an action result to a JSON response.
fn respond<T: Serialize>(correlation_id: Uuid, result: PayrollResult<T>) -> Response {
    match result {
        Ok(value) => (StatusCode::OK, Json(value)).into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Operation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Like [`respond`], but answers 204 on success.
fn respond_no_content(correlation_id: Uuid, result: PayrollResult<()>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Operation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

// ---------------------------------------------------------------------
// Workers
// ---------------------------------------------------------------------

async fn list_workers_handler(
    State(state): State<AppState>,
    Query(query): Query<WorkerListQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        workers::list_workers(state.store(), query.status),
    )
}

async fn get_worker_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, workers::get_worker(state.store(), id))
}

async fn create_worker_handler(
    State(state): State<AppState>,
    payload: Result<Json<WorkerInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };
    info!(correlation_id = %correlation_id, worker_name = %input.full_name, "Creating worker");
    respond(correlation_id, workers::create_worker(state.store(), input))
}

async fn update_worker_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<WorkerInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        workers::update_worker(state.store(), id, input),
    )
}

async fn delete_worker_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond_no_content(correlation_id, workers::delete_worker(state.store(), id))
}

async fn toggle_worker_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        workers::toggle_worker_status(state.store(), id),
    )
}

async fn migrate_legacy_handler(
    State(state): State<AppState>,
    Query(query): Query<MigrationQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let dry_run = query.dry_run.unwrap_or(false);
    info!(correlation_id = %correlation_id, dry_run, "Running legacy salary migration");
    let result = if query.rollback.unwrap_or(false) {
        workers::rollback_legacy_salaries(state.store(), dry_run)
    } else {
        workers::migrate_legacy_salaries(
            state.store(),
            state.config().legacy_working_days,
            dry_run,
        )
    };
    respond(correlation_id, result)
}

// ---------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------

async fn list_sites_handler(
    State(state): State<AppState>,
    Query(query): Query<SiteListQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        sites::list_sites(state.store(), query.active_only.unwrap_or(false)),
    )
}

async fn get_site_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, sites::get_site(state.store(), id))
}

async fn create_site_handler(
    State(state): State<AppState>,
    payload: Result<Json<SiteInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };
    respond(correlation_id, sites::create_site(state.store(), input))
}

async fn update_site_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<SiteInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };
    respond(correlation_id, sites::update_site(state.store(), id, input))
}

async fn delete_site_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond_no_content(correlation_id, sites::delete_site(state.store(), id))
}

async fn toggle_site_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, sites::toggle_site_status(state.store(), id))
}

// ---------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------

async fn attendance_by_date_handler(
    State(state): State<AppState>,
    Query(query): Query<DateQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        attendance::attendance_by_date(state.store(), query.date),
    )
}

async fn save_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AttendanceInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        attendance::save_attendance(state.store(), input),
    )
}

async fn bulk_attendance_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<AttendanceInput>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let inputs = match parse_json(payload, correlation_id) {
        Ok(inputs) => inputs,
        Err(err) => return err.into_response(),
    };
    info!(
        correlation_id = %correlation_id,
        records = inputs.len(),
        "Bulk saving attendance"
    );
    respond(
        correlation_id,
        attendance::bulk_save_attendance(state.store(), inputs),
    )
}

async fn attendance_summary_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        attendance::monthly_attendance_summary(state.store(), query.year, query.month),
    )
}

async fn delete_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond_no_content(
        correlation_id,
        attendance::delete_attendance(state.store(), id),
    )
}

// ---------------------------------------------------------------------
// Payments
// ---------------------------------------------------------------------

async fn list_payments_handler(
    State(state): State<AppState>,
    Query(query): Query<PaymentListQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        payments::list_payments(
            state.store(),
            query.worker_id,
            query.start_date,
            query.end_date,
        ),
    )
}

async fn create_payment_handler(
    State(state): State<AppState>,
    payload: Result<Json<PaymentInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };
    info!(
        correlation_id = %correlation_id,
        worker_id = %input.worker_id,
        amount = %input.amount,
        "Recording payment"
    );
    respond(
        correlation_id,
        payments::create_payment(state.store(), input),
    )
}

async fn update_payment_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    payload: Result<Json<PaymentInput>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let input = match parse_json(payload, correlation_id) {
        Ok(input) => input,
        Err(err) => return err.into_response(),
    };
    respond(
        correlation_id,
        payments::update_payment(state.store(), id, input),
    )
}

async fn delete_payment_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond_no_content(correlation_id, payments::delete_payment(state.store(), id))
}

async fn payment_summary_handler(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        payments::monthly_payment_summary(state.store(), query.year, query.month),
    )
}

// ---------------------------------------------------------------------
// Ledger
// ---------------------------------------------------------------------

async fn worker_ledger_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<LedgerQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, worker_id = %id, "Building worker ledger");
    respond(
        correlation_id,
        ledger::worker_ledger(
            state.store(),
            id,
            query.start_date,
            query.end_date,
            Utc::now().date_naive(),
        ),
    )
}

async fn worker_attendance_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<RangeQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        attendance::worker_attendance(state.store(), id, query.start_date, query.end_date),
    )
}

async fn worker_payments_handler(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, payments::worker_payments(state.store(), id))
}

async fn balances_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        ledger::all_worker_balances(state.store(), Utc::now().date_naive()),
    )
}

// ---------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------

async fn dashboard_stats_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(
        correlation_id,
        dashboard::dashboard_stats(state.store(), Utc::now().date_naive()),
    )
}

async fn activities_handler(
    State(state): State<AppState>,
    Query(query): Query<ActivitiesQuery>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let limit = query.limit.unwrap_or(state.config().activity_limit);
    respond(
        correlation_id,
        dashboard::recent_activities(state.store(), limit),
    )
}

// ---------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------

async fn employee_report_handler(
    State(state): State<AppState>,
    payload: Result<Json<ReportFilters>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let filters = match parse_json(payload, correlation_id) {
        Ok(filters) => filters,
        Err(err) => return err.into_response(),
    };
    info!(
        correlation_id = %correlation_id,
        start = %filters.start_date,
        end = %filters.end_date,
        "Generating employee report"
    );

    match reports::generate_employee_report(
        state.store(),
        state.renderer(),
        &filters,
        &state.config().company_name,
        Utc::now(),
    ) {
        Ok(report) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, report.content_type.clone()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", report.filename),
                ),
            ],
            report.data,
        )
            .into_response(),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Report generation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

async fn filter_options_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    respond(correlation_id, reports::report_filter_options(state.store()))
}
