//! Employee directory handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use validator::Validate;

use orghub_core::error::AppError;
use orghub_core::types::EmployeeId;

use crate::dto::request::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let employees = state.employee_service.list().await?;
    Ok(Json(serde_json::json!({ "data": employees })))
}

/// GET /api/employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let employee = state.employee_service.get(id).await?;
    Ok(Json(serde_json::json!({ "data": employee })))
}

/// POST /api/employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let employee = state.employee_service.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(serde_json::json!(employee))))
}

/// PUT /api/employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let employee = state.employee_service.update(id, req.into()).await?;
    Ok(Json(serde_json::json!(employee)))
}

/// DELETE /api/employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<EmployeeId>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.employee_service.delete(id).await?;
    Ok(Json(serde_json::json!({ "message": "Employee deleted" })))
}
