//! Builders for the immutable audit entries appended on every mutation.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use orghub_core::AppResult;
use orghub_core::types::AuditEntryId;
use orghub_entity::department::{AuditAction, AuditLogEntry, Department};

/// Build the CREATE entry for a freshly created department.
///
/// `new_values` is a snapshot of the whole record with the audit list
/// removed, so the entry never references itself.
pub fn create_entry(department: &Department, changed_by: &str) -> AppResult<AuditLogEntry> {
    let mut snapshot = match serde_json::to_value(department)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    snapshot.remove("audit");

    Ok(AuditLogEntry {
        id: AuditEntryId::new(),
        action: AuditAction::Create,
        changed_at: department.created_at,
        changed_by: changed_by.to_string(),
        old_values: Map::new(),
        new_values: snapshot,
    })
}

/// Build an entry for a mutation that changed the fields collected in
/// `old_values`/`new_values`.
pub fn change_entry(
    action: AuditAction,
    old_values: Map<String, Value>,
    new_values: Map<String, Value>,
    changed_by: &str,
    changed_at: DateTime<Utc>,
) -> AuditLogEntry {
    AuditLogEntry {
        id: AuditEntryId::new(),
        action,
        changed_at,
        changed_by: changed_by.to_string(),
        old_values,
        new_values,
    }
}

/// Record one field transition into the parallel diff maps.
pub fn record_change<T: Serialize>(
    old_values: &mut Map<String, Value>,
    new_values: &mut Map<String, Value>,
    field: &str,
    old: &T,
    new: &T,
) -> AppResult<()> {
    old_values.insert(field.to_string(), serde_json::to_value(old)?);
    new_values.insert(field.to_string(), serde_json::to_value(new)?);
    Ok(())
}
