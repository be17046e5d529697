//! Department CRUD, listing, and hierarchy handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use validator::Validate;

use orghub_core::error::AppError;
use orghub_core::types::{DepartmentId, PageRequest, TenantId};
use orghub_service::RequestContext;
use orghub_store::DepartmentListParams;

use crate::dto::request::{
    CreateDepartmentRequest, DepartmentQuery, DirectoryMode, TenantQuery, UpdateDepartmentRequest,
};
use crate::dto::response::DepartmentWithPath;
use crate::error::ApiError;
use crate::state::AppState;

fn context(state: &AppState, tenant_id: Option<TenantId>) -> RequestContext {
    let tenant_id = tenant_id.unwrap_or(state.config.directory.default_tenant_id);
    RequestContext::system(tenant_id)
}

/// GET /api/departments
///
/// Dispatches on `mode`: `list` (default) runs the filter/sort/paginate
/// facade, `children` lists one level, `tree` builds the recursive view.
pub async fn list_departments(
    State(state): State<AppState>,
    Query(query): Query<DepartmentQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let ctx = context(&state, query.tenant_id);

    match query.mode {
        DirectoryMode::List => {
            let mut params = DepartmentListParams::for_tenant(ctx.tenant_id);
            params.q = query.q;
            params.status = query.status;
            params.parent_id = query.parent_id;
            params.head_id = query.head_id;
            params.valid_at = query.valid_at;
            params.page = PageRequest::new(
                query.page.unwrap_or(1),
                query.page_size.unwrap_or_else(|| PageRequest::default().page_size),
            );
            params.sort_by = query.sort_by.unwrap_or_default();
            params.sort_dir = query.sort_dir.unwrap_or_default();

            let page = state.department_service.list(&ctx, params).await?;
            Ok(Json(serde_json::json!(page)))
        }
        DirectoryMode::Children => {
            let children = state
                .hierarchy_service
                .get_children(&ctx, query.parent_id)
                .await?;
            Ok(Json(serde_json::json!({ "data": children })))
        }
        DirectoryMode::Tree => {
            let forest = state
                .hierarchy_service
                .get_tree(&ctx, query.root_id, query.depth)
                .await?;
            Ok(Json(serde_json::json!({ "data": forest })))
        }
    }
}

/// GET /api/departments/{id}
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
    Query(query): Query<TenantQuery>,
) -> Result<Json<DepartmentWithPath>, ApiError> {
    let ctx = context(&state, query.tenant_id);
    let department = state.department_service.get(&ctx, id).await?;
    let path = state.hierarchy_service.get_path(&ctx, id).await?;
    Ok(Json(DepartmentWithPath {
        data: department,
        path,
    }))
}

/// POST /api/departments
pub async fn create_department(
    State(state): State<AppState>,
    Query(query): Query<TenantQuery>,
    Json(req): Json<CreateDepartmentRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let ctx = context(&state, query.tenant_id);
    let input = req.into_input(ctx.tenant_id);
    let department = state.department_service.create(&ctx, input).await?;
    Ok((StatusCode::CREATED, Json(serde_json::json!(department))))
}

/// PUT /api/departments/{id}
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
    Query(query): Query<TenantQuery>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(format!("Invalid request: {e}")))?;

    let ctx = context(&state, query.tenant_id);
    let department = state
        .department_service
        .update(&ctx, id, req.into())
        .await?;
    Ok(Json(serde_json::json!(department)))
}

/// DELETE /api/departments/{id}
///
/// Soft delete: the record is archived, never removed.
pub async fn archive_department(
    State(state): State<AppState>,
    Path(id): Path<DepartmentId>,
    Query(query): Query<TenantQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let ctx = context(&state, query.tenant_id);
    let department = state.department_service.archive(&ctx, id).await?;
    Ok(Json(serde_json::json!(department)))
}
