//! Directory service configuration.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::TenantId;

/// Behavioral settings for the department/employee directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryConfig {
    /// Tenant used when a request does not carry an explicit `tenantId`.
    ///
    /// Placeholder for tenant resolution from an authentication layer,
    /// which is out of scope.
    #[serde(default = "default_tenant")]
    pub default_tenant_id: TenantId,
    /// Upper bound applied to the `pageSize` list parameter.
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u64,
    /// Recursion depth used by tree views when the request omits `depth`.
    #[serde(default = "default_tree_depth")]
    pub default_tree_depth: u32,
    /// Whether an update that changes no fields still bumps the version and
    /// appends an empty-diff audit entry. Defaults to true, the historical
    /// behavior of the department store.
    #[serde(default = "default_true")]
    pub noop_updates_create_audit_entry: bool,
    /// Whether to seed demo departments and employees at startup.
    #[serde(default = "default_true")]
    pub seed_demo_data: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            default_tenant_id: default_tenant(),
            max_page_size: default_max_page_size(),
            default_tree_depth: default_tree_depth(),
            noop_updates_create_audit_entry: true,
            seed_demo_data: true,
        }
    }
}

fn default_tenant() -> TenantId {
    TenantId::from_uuid(Uuid::from_u128(1))
}

fn default_max_page_size() -> u64 {
    100
}

fn default_tree_depth() -> u32 {
    5
}

fn default_true() -> bool {
    true
}
