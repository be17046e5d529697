//! Audit log entry model embedded in each department record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use orghub_core::types::AuditEntryId;

/// The kind of mutation an audit entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditAction {
    /// Initial creation of the record.
    Create,
    /// A field-level update.
    Update,
    /// A standalone status transition.
    StatusChange,
    /// Terminal soft-delete.
    Archive,
}

/// One immutable record of a mutation.
///
/// `old_values`/`new_values` are partial snapshots holding only the fields
/// that changed. For CREATE entries, `new_values` is the full initial state
/// minus the audit list itself (to avoid self-reference).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    /// Unique entry identifier.
    pub id: AuditEntryId,
    /// The mutation kind.
    pub action: AuditAction,
    /// When the mutation happened.
    pub changed_at: DateTime<Utc>,
    /// Actor identifier; `"system"` when no actor was supplied.
    pub changed_by: String,
    /// Previous values of the changed fields.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub old_values: Map<String, Value>,
    /// New values of the changed fields.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub new_values: Map<String, Value>,
}
