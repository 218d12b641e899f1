use serde::Serialize;
use tracing::info;
use uuid::Uuid;

/// A structured audit event for a state change.
///
/// Emitted through `tracing` so it lands in the same JSON log stream as the
/// per-request events from the audit middleware.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEvent {
    pub action: &'static str,
    pub resource_type: &'static str,
    pub resource_id: String,
    pub user_id: Option<Uuid>,
    pub details: Option<serde_json::Value>,
}

impl AuditEvent {
    pub fn new(action: &'static str, resource_type: &'static str, resource_id: impl ToString) -> Self {
        Self {
            action,
            resource_type,
            resource_id: resource_id.to_string(),
            user_id: None,
            details: None,
        }
    }

    pub fn by(mut self, user_id: Option<Uuid>) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn emit(&self) {
        let user = self
            .user_id
            .map_or_else(|| "anonymous".to_string(), |id| id.to_string());
        let details = self
            .details
            .as_ref()
            .map(|d| d.to_string())
            .unwrap_or_default();
        info!(
            audit.action = self.action,
            audit.resource_type = self.resource_type,
            audit.resource_id = %self.resource_id,
            audit.user_id = %user,
            audit.details = %details,
            "audit event"
        );
    }
}
