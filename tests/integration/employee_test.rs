//! Employee directory CRUD over HTTP.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

fn sample_employee() -> serde_json::Value {
    json!({
        "nik": "EMP-0001",
        "name": "Ada Lovelace",
        "positionCode": "ENG2",
        "positionName": "Software Engineer",
        "department": "Engineering",
        "email": "ada@example.com"
    })
}

#[tokio::test]
async fn test_create_and_list_employees() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/api/employees", Some(sample_employee()))
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["status"], "active");
    assert_eq!(created.body["nik"], "EMP-0001");

    let listing = app.request("GET", "/api/employees", None).await;
    assert_eq!(listing.status, StatusCode::OK);
    assert_eq!(listing.body["data"].as_array().expect("data").len(), 1);
}

#[tokio::test]
async fn test_create_rejects_invalid_email() {
    let app = TestApp::new();

    let mut body = sample_employee();
    body["email"] = json!("not-an-email");
    let response = app.request("POST", "/api/employees", Some(body)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_update_is_last_write_wins() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/api/employees", Some(sample_employee()))
        .await;
    let id = created.body["id"].as_str().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/employees/{id}"),
            Some(json!({ "positionCode": "ENG3", "positionName": "Senior Software Engineer" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["positionCode"], "ENG3");
    // Untouched fields survive the merge.
    assert_eq!(response.body["name"], "Ada Lovelace");
}

#[tokio::test]
async fn test_delete_removes_the_record() {
    let app = TestApp::new();

    let created = app
        .request("POST", "/api/employees", Some(sample_employee()))
        .await;
    let id = created.body["id"].as_str().expect("id").to_string();

    let deleted = app
        .request("DELETE", &format!("/api/employees/{id}"), None)
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let missing = app
        .request("GET", &format!("/api/employees/{id}"), None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    let again = app
        .request("DELETE", &format!("/api/employees/{id}"), None)
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
}
