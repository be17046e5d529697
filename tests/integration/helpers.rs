//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use orghub_core::config::AppConfig;
use orghub_core::types::TenantId;
use orghub_service::{DepartmentService, EmployeeService, HierarchyService};
use orghub_store::{DepartmentStore, DepartmentStoreOptions, EmployeeStore};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The default tenant requests fall back to
    pub tenant_id: TenantId,
}

impl TestApp {
    /// Create a new test application with empty stores (no demo seed).
    pub fn new() -> Self {
        let config = AppConfig::default();

        let department_store = Arc::new(DepartmentStore::new(DepartmentStoreOptions {
            noop_updates_create_audit_entry: config.directory.noop_updates_create_audit_entry,
        }));
        let employee_store = Arc::new(EmployeeStore::new());

        let app_state = orghub_api::state::AppState {
            config: Arc::new(config.clone()),
            department_service: Arc::new(DepartmentService::new(
                Arc::clone(&department_store),
                config.directory.clone(),
            )),
            hierarchy_service: Arc::new(HierarchyService::new(
                Arc::clone(&department_store),
                config.directory.clone(),
            )),
            employee_service: Arc::new(EmployeeService::new(employee_store)),
        };

        let router = orghub_api::router::build_router(app_state);

        Self {
            router,
            tenant_id: config.directory.default_tenant_id,
        }
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a department and return its parsed record.
    pub async fn create_department(&self, body: Value) -> Value {
        let response = self.request("POST", "/api/departments", Some(body)).await;
        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create failed: {:?}",
            response.body
        );
        response.body
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
