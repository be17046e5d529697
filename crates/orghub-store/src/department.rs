//! In-memory department store: the authoritative owner of department
//! records.
//!
//! Every mutation runs its whole read-check-apply sequence under the
//! store's write lock, so the optimistic version check-and-set is atomic
//! even with multi-threaded callers. Readers only ever receive clones.

use chrono::Utc;
use serde_json::Map;
use tokio::sync::RwLock;
use tracing::info;

use orghub_core::types::{DepartmentId, Page, TenantId};
use orghub_core::{AppError, AppResult};
use orghub_entity::department::{
    AuditAction, CreateDepartment, Department, DepartmentPatch, DepartmentStatus,
    open_ended_valid_to,
};

use crate::audit;
use crate::query::{self, DepartmentListParams};

/// Actor recorded when a mutation carries no explicit actor.
pub const SYSTEM_ACTOR: &str = "system";

/// Behavioral switches for the department store.
#[derive(Debug, Clone)]
pub struct DepartmentStoreOptions {
    /// Whether an update that changes no fields still bumps the version and
    /// appends an empty-diff audit entry (the historical behavior).
    pub noop_updates_create_audit_entry: bool,
}

impl Default for DepartmentStoreOptions {
    fn default() -> Self {
        Self {
            noop_updates_create_audit_entry: true,
        }
    }
}

/// In-memory collection of department records.
#[derive(Debug)]
pub struct DepartmentStore {
    rows: RwLock<Vec<Department>>,
    options: DepartmentStoreOptions,
}

impl DepartmentStore {
    /// Create an empty store.
    pub fn new(options: DepartmentStoreOptions) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            options,
        }
    }

    /// Create a department.
    ///
    /// Defaults: status `ACTIVE`, `validFrom` today, `validTo` open-ended,
    /// code generated from the per-tenant sequence + name initials. The new
    /// record starts at version 1 with a single CREATE audit entry and is
    /// inserted at the head of the collection (most-recent-first ordering).
    pub async fn create(&self, input: CreateDepartment) -> AppResult<Department> {
        let name = input.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::validation("Department name is required"));
        }

        let mut rows = self.rows.write().await;

        if let Some(parent_id) = input.parent_department_id {
            ensure_parent_exists(&rows, input.tenant_id, parent_id)?;
        }

        let now = Utc::now();
        let code = match input.code.as_deref().map(str::trim) {
            Some(code) if !code.is_empty() => code.to_string(),
            _ => generate_code(&rows, input.tenant_id, &name),
        };
        let changed_by = input
            .changed_by
            .unwrap_or_else(|| SYSTEM_ACTOR.to_string());

        let mut department = Department {
            id: DepartmentId::new(),
            tenant_id: input.tenant_id,
            code,
            name,
            description: input.description,
            parent_department_id: input.parent_department_id,
            head_employee_id: input.head_employee_id,
            location_id: input.location_id,
            status: input.status.unwrap_or_default(),
            valid_from: input.valid_from.unwrap_or_else(|| now.date_naive()),
            valid_to: input.valid_to.unwrap_or_else(open_ended_valid_to),
            version: 1,
            created_at: now,
            updated_at: now,
            audit: Vec::new(),
        };

        let entry = audit::create_entry(&department, &changed_by)?;
        department.audit.push(entry);

        rows.insert(0, department.clone());
        info!(
            department_id = %department.id,
            code = %department.code,
            "Department created"
        );
        Ok(department)
    }

    /// Apply a version-checked partial update.
    ///
    /// Rejects with a version conflict when the patch carries a stale
    /// version, leaving the stored record untouched. Changing the parent is
    /// validated against the new parent's ancestor chain so the hierarchy
    /// can never form a cycle.
    pub async fn update(&self, id: DepartmentId, patch: DepartmentPatch) -> AppResult<Department> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::not_found("Department not found"))?;

        let current = &rows[index];
        if patch.version != current.version {
            return Err(AppError::version_conflict(format!(
                "Record is at version {}, caller supplied {}; re-fetch and retry",
                current.version, patch.version
            )));
        }

        if let Some(new_parent) = patch.parent_department_id
            && current.parent_department_id != Some(new_parent)
        {
            ensure_parent_exists(&rows, current.tenant_id, new_parent)?;
            if ancestor_chain(&rows, new_parent).contains(&id) {
                return Err(AppError::validation(
                    "Cannot set parent: the proposed parent is this department or one of its descendants",
                ));
            }
        }

        let mut updated = rows[index].clone();
        let mut old_values = Map::new();
        let mut new_values = Map::new();

        if let Some(name) = patch.name {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(AppError::validation("Department name cannot be empty"));
            }
            if name != updated.name {
                audit::record_change(&mut old_values, &mut new_values, "name", &updated.name, &name)?;
                updated.name = name;
            }
        }
        if let Some(description) = patch.description {
            let description = Some(description);
            if description != updated.description {
                audit::record_change(
                    &mut old_values,
                    &mut new_values,
                    "description",
                    &updated.description,
                    &description,
                )?;
                updated.description = description;
            }
        }
        if let Some(parent_id) = patch.parent_department_id {
            let parent_id = Some(parent_id);
            if parent_id != updated.parent_department_id {
                audit::record_change(
                    &mut old_values,
                    &mut new_values,
                    "parentDepartmentId",
                    &updated.parent_department_id,
                    &parent_id,
                )?;
                updated.parent_department_id = parent_id;
            }
        }
        if let Some(head_id) = patch.head_employee_id {
            let head_id = Some(head_id);
            if head_id != updated.head_employee_id {
                audit::record_change(
                    &mut old_values,
                    &mut new_values,
                    "headEmployeeId",
                    &updated.head_employee_id,
                    &head_id,
                )?;
                updated.head_employee_id = head_id;
            }
        }
        if let Some(location_id) = patch.location_id {
            let location_id = Some(location_id);
            if location_id != updated.location_id {
                audit::record_change(
                    &mut old_values,
                    &mut new_values,
                    "locationId",
                    &updated.location_id,
                    &location_id,
                )?;
                updated.location_id = location_id;
            }
        }
        if let Some(status) = patch.status
            && status != updated.status
        {
            audit::record_change(&mut old_values, &mut new_values, "status", &updated.status, &status)?;
            updated.status = status;
        }
        if let Some(valid_from) = patch.valid_from
            && valid_from != updated.valid_from
        {
            audit::record_change(
                &mut old_values,
                &mut new_values,
                "validFrom",
                &updated.valid_from,
                &valid_from,
            )?;
            updated.valid_from = valid_from;
        }
        if let Some(valid_to) = patch.valid_to
            && valid_to != updated.valid_to
        {
            audit::record_change(
                &mut old_values,
                &mut new_values,
                "validTo",
                &updated.valid_to,
                &valid_to,
            )?;
            updated.valid_to = valid_to;
        }

        if new_values.is_empty() && !self.options.noop_updates_create_audit_entry {
            return Ok(updated);
        }

        let now = Utc::now();
        let changed_by = patch
            .changed_by
            .unwrap_or_else(|| SYSTEM_ACTOR.to_string());
        updated.updated_at = now;
        updated.version += 1;
        updated.audit.push(audit::change_entry(
            AuditAction::Update,
            old_values,
            new_values,
            &changed_by,
            now,
        ));

        rows[index] = updated.clone();
        info!(department_id = %id, version = updated.version, "Department updated");
        Ok(updated)
    }

    /// Soft-delete a department.
    ///
    /// Always bumps the version and appends an ARCHIVE entry, even when the
    /// record is already archived (archival is deliberately not idempotent).
    pub async fn archive(&self, id: DepartmentId, changed_by: &str) -> AppResult<Department> {
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| AppError::not_found("Department not found"))?;

        let mut updated = rows[index].clone();
        let now = Utc::now();

        let mut old_values = Map::new();
        let mut new_values = Map::new();
        audit::record_change(
            &mut old_values,
            &mut new_values,
            "status",
            &updated.status,
            &DepartmentStatus::Archived,
        )?;

        updated.status = DepartmentStatus::Archived;
        updated.updated_at = now;
        updated.version += 1;
        updated.audit.push(audit::change_entry(
            AuditAction::Archive,
            old_values,
            new_values,
            changed_by,
            now,
        ));

        rows[index] = updated.clone();
        info!(department_id = %id, "Department archived");
        Ok(updated)
    }

    /// Fetch a department by ID.
    ///
    /// No tenant filter is applied at this layer; tenant scoping is the
    /// service's responsibility.
    pub async fn get_by_id(&self, id: DepartmentId) -> AppResult<Option<Department>> {
        Ok(self.rows.read().await.iter().find(|d| d.id == id).cloned())
    }

    /// Run the list facade over the current contents.
    pub async fn list(&self, params: &DepartmentListParams) -> AppResult<Page<Department>> {
        let rows = self.rows.read().await;
        Ok(query::run(&rows, params))
    }

    /// Snapshot of every record, in collection order (most recent first).
    pub async fn snapshot(&self) -> Vec<Department> {
        self.rows.read().await.clone()
    }

    /// Snapshot of one tenant's records, in collection order.
    pub async fn find_by_tenant(&self, tenant_id: TenantId) -> Vec<Department> {
        self.rows
            .read()
            .await
            .iter()
            .filter(|d| d.tenant_id == tenant_id)
            .cloned()
            .collect()
    }
}

/// The proposed parent must exist and belong to the same tenant.
fn ensure_parent_exists(
    rows: &[Department],
    tenant_id: TenantId,
    parent_id: DepartmentId,
) -> AppResult<()> {
    let found = rows
        .iter()
        .any(|d| d.id == parent_id && d.tenant_id == tenant_id);
    if found {
        Ok(())
    } else {
        Err(AppError::validation(
            "Parent department not found in this tenant",
        ))
    }
}

/// Walk `parent_department_id` links upward from `start`, inclusive.
///
/// The chain itself acts as the visited set, so a pre-existing cycle
/// terminates the walk instead of looping.
fn ancestor_chain(rows: &[Department], start: DepartmentId) -> Vec<DepartmentId> {
    let mut chain = Vec::new();
    let mut cursor = Some(start);
    while let Some(id) = cursor {
        if chain.contains(&id) {
            break;
        }
        chain.push(id);
        cursor = rows
            .iter()
            .find(|d| d.id == id)
            .and_then(|d| d.parent_department_id);
    }
    chain
}

fn generate_code(rows: &[Department], tenant_id: TenantId, name: &str) -> String {
    let initials = name_initials(name);
    let mut sequence = rows.iter().filter(|d| d.tenant_id == tenant_id).count() as u64 + 1;
    // Collisions are possible when callers supply explicit codes; advance
    // the sequence until the code is unused.
    loop {
        let code = format!("DEP-{sequence:04}{initials}");
        if !rows.iter().any(|d| d.code == code) {
            return code;
        }
        sequence += 1;
    }
}

fn name_initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
