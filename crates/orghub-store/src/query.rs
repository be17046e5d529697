//! Query/list facade: filtering, sorting, and pagination over a department
//! snapshot. Pure functions with no access to the store's lock, so they can
//! never cache or mutate anything.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use orghub_core::types::{DepartmentId, DepartmentSortKey, EmployeeId, Page, PageRequest,
    SortDirection, TenantId};
use orghub_entity::department::{Department, DepartmentStatus};

/// Parameters accepted by the department list operation.
///
/// All filters besides the tenant are optional and AND-combined.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentListParams {
    /// Tenant scope, always applied first.
    pub tenant_id: TenantId,
    /// Case-insensitive substring match on name, code, and description.
    #[serde(default)]
    pub q: Option<String>,
    /// Exact status match.
    #[serde(default)]
    pub status: Option<DepartmentStatus>,
    /// Exact parent match.
    #[serde(default)]
    pub parent_id: Option<DepartmentId>,
    /// Exact department-head match.
    #[serde(default)]
    pub head_id: Option<EmployeeId>,
    /// Keep only records whose `[validFrom, validTo]` window contains this
    /// date (inclusive both ends).
    #[serde(default)]
    pub valid_at: Option<NaiveDate>,
    /// Pagination (1-based).
    #[serde(flatten)]
    pub page: PageRequest,
    /// Sort key.
    #[serde(default)]
    pub sort_by: DepartmentSortKey,
    /// Sort direction.
    #[serde(default)]
    pub sort_dir: SortDirection,
}

impl DepartmentListParams {
    /// List parameters with only the tenant filter applied.
    pub fn for_tenant(tenant_id: TenantId) -> Self {
        Self {
            tenant_id,
            q: None,
            status: None,
            parent_id: None,
            head_id: None,
            valid_at: None,
            page: PageRequest::default(),
            sort_by: DepartmentSortKey::default(),
            sort_dir: SortDirection::default(),
        }
    }
}

/// Run the full filter + sort + paginate pipeline over a snapshot.
pub fn run(rows: &[Department], params: &DepartmentListParams) -> Page<Department> {
    let mut matched: Vec<&Department> = rows.iter().filter(|d| matches(d, params)).collect();
    sort(&mut matched, params.sort_by, params.sort_dir);

    let total = matched.len() as u64;
    let data: Vec<Department> = matched
        .into_iter()
        .skip(params.page.offset() as usize)
        .take(params.page.page_size as usize)
        .cloned()
        .collect();

    Page::new(data, total, &params.page)
}

fn matches(dept: &Department, params: &DepartmentListParams) -> bool {
    if dept.tenant_id != params.tenant_id {
        return false;
    }
    if let Some(q) = &params.q {
        let needle = q.to_lowercase();
        let description = dept.description.as_deref().unwrap_or_default();
        let hit = dept.name.to_lowercase().contains(&needle)
            || dept.code.to_lowercase().contains(&needle)
            || description.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    if let Some(status) = params.status
        && dept.status != status
    {
        return false;
    }
    if let Some(parent_id) = params.parent_id
        && dept.parent_department_id != Some(parent_id)
    {
        return false;
    }
    if let Some(head_id) = params.head_id
        && dept.head_employee_id != Some(head_id)
    {
        return false;
    }
    if let Some(valid_at) = params.valid_at
        && !dept.is_valid_at(valid_at)
    {
        return false;
    }
    true
}

fn sort(rows: &mut [&Department], key: DepartmentSortKey, direction: SortDirection) {
    // Vec::sort_by is stable, so equal keys keep insertion order.
    rows.sort_by(|a, b| {
        let ordering = match key {
            DepartmentSortKey::Name => a.name.cmp(&b.name),
            DepartmentSortKey::Code => a.code.cmp(&b.code),
            DepartmentSortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        direction.apply(ordering)
    });
}
