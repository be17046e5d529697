//! Hierarchy views (children, tree) and cycle prevention over HTTP.

use http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

/// Builds A -> B -> C plus a second root D; returns the four records.
async fn build_org(app: &TestApp) -> (Value, Value, Value, Value) {
    let a = app.create_department(json!({ "name": "A" })).await;
    let b = app
        .create_department(json!({ "name": "B", "parentDepartmentId": a["id"] }))
        .await;
    let c = app
        .create_department(json!({ "name": "C", "parentDepartmentId": b["id"] }))
        .await;
    let d = app.create_department(json!({ "name": "D" })).await;
    (a, b, c, d)
}

#[tokio::test]
async fn test_children_mode_lists_one_level() {
    let app = TestApp::new();
    let (a, b, _, _) = build_org(&app).await;

    // Without a parent, children mode returns the roots.
    let roots = app
        .request("GET", "/api/departments?mode=children", None)
        .await;
    assert_eq!(roots.status, StatusCode::OK);
    let mut names: Vec<&str> = roots.body["data"]
        .as_array()
        .expect("data")
        .iter()
        .map(|d| d["name"].as_str().expect("name"))
        .collect();
    names.sort();
    assert_eq!(names, vec!["A", "D"]);

    let children = app
        .request(
            "GET",
            &format!(
                "/api/departments?mode=children&parentId={}",
                a["id"].as_str().expect("id")
            ),
            None,
        )
        .await;
    let data = children.body["data"].as_array().expect("data");
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], b["name"]);
}

#[tokio::test]
async fn test_tree_mode_respects_depth() {
    let app = TestApp::new();
    build_org(&app).await;

    let bounded = app
        .request("GET", "/api/departments?mode=tree&depth=2", None)
        .await;
    assert_eq!(bounded.status, StatusCode::OK);
    let forest = bounded.body["data"].as_array().expect("forest");
    let a = forest
        .iter()
        .find(|n| n["name"] == "A")
        .expect("root A");
    assert_eq!(a["children"][0]["name"], "B");
    assert!(a["children"][0]["children"].as_array().expect("children").is_empty());

    // Default depth (5) reaches the full chain.
    let full = app.request("GET", "/api/departments?mode=tree", None).await;
    let forest = full.body["data"].as_array().expect("forest");
    let a = forest
        .iter()
        .find(|n| n["name"] == "A")
        .expect("root A");
    assert_eq!(a["children"][0]["children"][0]["name"], "C");
}

#[tokio::test]
async fn test_tree_mode_with_explicit_root() {
    let app = TestApp::new();
    let (_, b, _, _) = build_org(&app).await;

    let response = app
        .request(
            "GET",
            &format!(
                "/api/departments?mode=tree&rootId={}",
                b["id"].as_str().expect("id")
            ),
            None,
        )
        .await;
    let forest = response.body["data"].as_array().expect("forest");
    assert_eq!(forest.len(), 1);
    assert_eq!(forest[0]["name"], "B");
    assert_eq!(forest[0]["children"][0]["name"], "C");
}

#[tokio::test]
async fn test_reparenting_onto_descendant_is_rejected() {
    let app = TestApp::new();
    let (a, _, c, _) = build_org(&app).await;

    // A -> B -> C, so making C the parent of A would close a cycle.
    let response = app
        .request(
            "PUT",
            &format!("/api/departments/{}", a["id"].as_str().expect("id")),
            Some(json!({ "version": 1, "parentDepartmentId": c["id"] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_department_cannot_become_its_own_parent() {
    let app = TestApp::new();
    let dept = app.create_department(json!({ "name": "Loner" })).await;
    let id = dept["id"].as_str().expect("id");

    let response = app
        .request(
            "PUT",
            &format!("/api/departments/{id}"),
            Some(json!({ "version": 1, "parentDepartmentId": id })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_reparenting_within_a_branch_is_allowed() {
    let app = TestApp::new();
    let (a, _, c, _) = build_org(&app).await;

    // Moving C directly under A shortens the chain but keeps it acyclic.
    let response = app
        .request(
            "PUT",
            &format!("/api/departments/{}", c["id"].as_str().expect("id")),
            Some(json!({ "version": 1, "parentDepartmentId": a["id"] })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["parentDepartmentId"], a["id"]);
    let entry = &response.body["audit"][1];
    assert_eq!(entry["newValues"]["parentDepartmentId"], a["id"]);
}
