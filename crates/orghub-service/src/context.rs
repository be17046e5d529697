//! Request context carrying the tenant scope and acting principal.

use serde::{Deserialize, Serialize};

use orghub_core::types::TenantId;

/// Context for the current request.
///
/// Built by the HTTP layer and passed into service methods so that every
/// operation knows *which tenant* it acts within and *who* is acting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The tenant all reads and writes are scoped to.
    pub tenant_id: TenantId,
    /// The acting principal, recorded on audit entries.
    pub actor: String,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(tenant_id: TenantId, actor: impl Into<String>) -> Self {
        Self {
            tenant_id,
            actor: actor.into(),
        }
    }

    /// Context for unattributed requests; the actor falls back to `system`.
    pub fn system(tenant_id: TenantId) -> Self {
        Self::new(tenant_id, "system")
    }
}
