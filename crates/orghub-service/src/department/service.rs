//! Department CRUD operations with tenant scoping.

use std::sync::Arc;

use tracing::info;

use orghub_core::config::directory::DirectoryConfig;
use orghub_core::types::{DepartmentId, Page};
use orghub_core::{AppError, AppResult};
use orghub_entity::department::{CreateDepartment, Department, DepartmentPatch};
use orghub_store::query::DepartmentListParams;
use orghub_store::DepartmentStore;

use crate::context::RequestContext;

/// Manages department CRUD and listing.
///
/// The service is the tenant-scoping boundary: callers never see a record
/// from another tenant, and a cross-tenant ID lookup reports not-found
/// rather than confirming the record exists.
#[derive(Debug, Clone)]
pub struct DepartmentService {
    /// Department store.
    store: Arc<DepartmentStore>,
    /// Directory settings (page-size cap, tree depth default).
    config: DirectoryConfig,
}

impl DepartmentService {
    /// Creates a new department service.
    pub fn new(store: Arc<DepartmentStore>, config: DirectoryConfig) -> Self {
        Self { store, config }
    }

    /// Creates a department in the caller's tenant.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        mut input: CreateDepartment,
    ) -> AppResult<Department> {
        input.tenant_id = ctx.tenant_id;
        if input.changed_by.is_none() {
            input.changed_by = Some(ctx.actor.clone());
        }
        self.store.create(input).await
    }

    /// Fetches a department by ID within the caller's tenant.
    pub async fn get(&self, ctx: &RequestContext, id: DepartmentId) -> AppResult<Department> {
        let department = self
            .store
            .get_by_id(id)
            .await?
            .filter(|d| d.tenant_id == ctx.tenant_id)
            .ok_or_else(|| AppError::not_found("Department not found"))?;
        Ok(department)
    }

    /// Applies a version-checked partial update within the caller's tenant.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: DepartmentId,
        mut patch: DepartmentPatch,
    ) -> AppResult<Department> {
        // Scope check first so cross-tenant IDs report not-found instead
        // of leaking a version conflict.
        self.get(ctx, id).await?;
        if patch.changed_by.is_none() {
            patch.changed_by = Some(ctx.actor.clone());
        }
        let updated = self.store.update(id, patch).await?;
        info!(
            tenant_id = %ctx.tenant_id,
            department_id = %id,
            version = updated.version,
            "Department updated"
        );
        Ok(updated)
    }

    /// Archives a department within the caller's tenant.
    pub async fn archive(&self, ctx: &RequestContext, id: DepartmentId) -> AppResult<Department> {
        self.get(ctx, id).await?;
        let archived = self.store.archive(id, &ctx.actor).await?;
        info!(
            tenant_id = %ctx.tenant_id,
            department_id = %id,
            "Department archived"
        );
        Ok(archived)
    }

    /// Lists departments with filters, sorting, and pagination.
    ///
    /// The tenant filter is forced to the caller's tenant and the page size
    /// is clamped to the configured cap.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        mut params: DepartmentListParams,
    ) -> AppResult<Page<Department>> {
        params.tenant_id = ctx.tenant_id;
        params.page = params.page.clamped(self.config.max_page_size);
        self.store.list(&params).await
    }
}
