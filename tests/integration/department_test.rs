//! Department CRUD, versioning, and listing over HTTP.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_department_starts_at_version_one() {
    let app = TestApp::new();

    let dept = app
        .create_department(json!({
            "name": "Engineering",
            "description": "Product engineering"
        }))
        .await;

    assert_eq!(dept["version"], 1);
    assert_eq!(dept["status"], "ACTIVE");
    assert_eq!(dept["validTo"], "9999-12-31");
    assert_eq!(dept["audit"].as_array().expect("audit").len(), 1);
    assert_eq!(dept["audit"][0]["action"], "CREATE");
    assert_eq!(dept["audit"][0]["changedBy"], "system");

    let code = dept["code"].as_str().expect("code");
    assert!(code.starts_with("DEP-0001"), "unexpected code {code}");
}

#[tokio::test]
async fn test_create_rejects_empty_name() {
    let app = TestApp::new();

    let response = app
        .request("POST", "/api/departments", Some(json!({ "name": "" })))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_get_returns_record_with_ancestor_path() {
    let app = TestApp::new();

    let parent = app.create_department(json!({ "name": "Engineering" })).await;
    let child = app
        .create_department(json!({
            "name": "Platform",
            "parentDepartmentId": parent["id"]
        }))
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/departments/{}", child["id"].as_str().expect("id")),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["name"], "Platform");
    let path = response.body["path"].as_array().expect("path");
    assert_eq!(path.len(), 2);
    assert_eq!(path[0]["name"], "Engineering");
    assert_eq!(path[1]["name"], "Platform");
}

#[tokio::test]
async fn test_get_unknown_department_is_404() {
    let app = TestApp::new();

    let response = app
        .request(
            "GET",
            "/api/departments/00000000-0000-0000-0000-0000000000aa",
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_update_bumps_version_and_records_diff() {
    let app = TestApp::new();

    let dept = app.create_department(json!({ "name": "Sales" })).await;
    let id = dept["id"].as_str().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/departments/{id}"),
            Some(json!({
                "version": 1,
                "name": "Global Sales",
                "changedBy": "alice"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["version"], 2);
    assert_eq!(response.body["name"], "Global Sales");

    let entry = &response.body["audit"][1];
    assert_eq!(entry["action"], "UPDATE");
    assert_eq!(entry["changedBy"], "alice");
    assert_eq!(entry["oldValues"]["name"], "Sales");
    assert_eq!(entry["newValues"]["name"], "Global Sales");
}

#[tokio::test]
async fn test_stale_version_is_rejected_with_409() {
    let app = TestApp::new();

    let dept = app.create_department(json!({ "name": "Finance" })).await;
    let id = dept["id"].as_str().expect("id").to_string();

    let first = app
        .request(
            "PUT",
            &format!("/api/departments/{id}"),
            Some(json!({ "version": 1, "name": "Corporate Finance" })),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);

    let stale = app
        .request(
            "PUT",
            &format!("/api/departments/{id}"),
            Some(json!({ "version": 1, "name": "Should not apply" })),
        )
        .await;
    assert_eq!(stale.status, StatusCode::CONFLICT);
    assert_eq!(stale.body["error"], "VERSION_MISMATCH");

    // The stored record is untouched by the rejected write.
    let current = app
        .request("GET", &format!("/api/departments/{id}"), None)
        .await;
    assert_eq!(current.body["data"]["name"], "Corporate Finance");
    assert_eq!(current.body["data"]["version"], 2);
}

#[tokio::test]
async fn test_noop_update_still_appends_audit_entry() {
    let app = TestApp::new();

    let dept = app.create_department(json!({ "name": "Legal" })).await;
    let id = dept["id"].as_str().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/departments/{id}"),
            Some(json!({ "version": 1, "name": "Legal" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["version"], 2);
    let entry = &response.body["audit"][1];
    assert_eq!(entry["action"], "UPDATE");
    assert!(entry.get("oldValues").is_none() || entry["oldValues"].as_object().expect("map").is_empty());
}

#[tokio::test]
async fn test_delete_archives_instead_of_removing() {
    let app = TestApp::new();

    let dept = app.create_department(json!({ "name": "Ops" })).await;
    let id = dept["id"].as_str().expect("id").to_string();

    let response = app
        .request("DELETE", &format!("/api/departments/{id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ARCHIVED");
    assert_eq!(response.body["version"], 2);
    let entry = &response.body["audit"][1];
    assert_eq!(entry["action"], "ARCHIVE");
    assert_eq!(entry["oldValues"]["status"], "ACTIVE");
    assert_eq!(entry["newValues"]["status"], "ARCHIVED");

    // Still retrievable after archival.
    let current = app
        .request("GET", &format!("/api/departments/{id}"), None)
        .await;
    assert_eq!(current.status, StatusCode::OK);
    assert_eq!(current.body["data"]["status"], "ARCHIVED");
}

#[tokio::test]
async fn test_list_applies_filters_and_pagination() {
    let app = TestApp::new();

    for i in 1..=5 {
        app.create_department(json!({ "name": format!("Team {i:02}") }))
            .await;
    }
    let archived = app.create_department(json!({ "name": "Old Guard" })).await;
    app.request(
        "DELETE",
        &format!(
            "/api/departments/{}",
            archived["id"].as_str().expect("id")
        ),
        None,
    )
    .await;

    let response = app
        .request("GET", "/api/departments?status=ACTIVE&page=1&pageSize=3", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 5);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["pageSize"], 3);
    assert_eq!(response.body["data"].as_array().expect("data").len(), 3);

    let filtered = app
        .request("GET", "/api/departments?q=team%2002", None)
        .await;
    assert_eq!(filtered.body["total"], 1);
    assert_eq!(filtered.body["data"][0]["name"], "Team 02");
}

#[tokio::test]
async fn test_list_sorts_by_name_descending() {
    let app = TestApp::new();

    app.create_department(json!({ "name": "Alpha" })).await;
    app.create_department(json!({ "name": "Zulu" })).await;
    app.create_department(json!({ "name": "Mike" })).await;

    let response = app
        .request("GET", "/api/departments?sortBy=name&sortDir=desc", None)
        .await;
    let names: Vec<&str> = response.body["data"]
        .as_array()
        .expect("data")
        .iter()
        .map(|d| d["name"].as_str().expect("name"))
        .collect();
    assert_eq!(names, vec!["Zulu", "Mike", "Alpha"]);
}

#[tokio::test]
async fn test_tenant_query_param_isolates_records() {
    let app = TestApp::new();

    let dept = app.create_department(json!({ "name": "Engineering" })).await;
    let id = dept["id"].as_str().expect("id");

    // Same ID through a different tenant scope reports not-found.
    let other_tenant = "9e107d9d-3721-4b44-8c3f-2f5f39a1c0de";
    let response = app
        .request(
            "GET",
            &format!("/api/departments/{id}?tenantId={other_tenant}"),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let listing = app
        .request(
            "GET",
            &format!("/api/departments?tenantId={other_tenant}"),
            None,
        )
        .await;
    assert_eq!(listing.body["total"], 0);
}

#[tokio::test]
async fn test_health_endpoint_reports_ok() {
    let app = TestApp::new();

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}
