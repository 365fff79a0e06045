//! HTTP client behavior: auth headers, endpoint shapes and the write path

use crate::common::{TEST_TOKEN, grant_body, stack};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn requests_carry_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/permissions/role/employee"))
        .and(header("authorization", format!("Bearer {}", TEST_TOKEN)))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant_body(&["task_view"])))
        .expect(1)
        .mount(&server)
        .await;

    let (cache, _) = stack(&server);
    assert!(cache.role_permissions("employee").await.contains("task_view"));
}

#[tokio::test]
async fn update_posts_expected_body_and_invalidates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/permissions/role"))
        .and(body_json(json!({
            "role": "manager",
            "permissionNames": ["task_view", "task_update"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/permissions/role/manager"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(grant_body(&["task_view", "task_update"])),
        )
        .expect(2)
        .mount(&server)
        .await;

    let (cache, _) = stack(&server);

    cache.role_permissions("manager").await;
    cache
        .update_role_permissions(
            "manager",
            &["task_view".to_string(), "task_update".to_string()],
        )
        .await
        .expect("update succeeds");
    // Invalidation forces the second GET.
    assert!(cache.role_permissions("manager").await.contains("task_update"));
}

#[tokio::test]
async fn update_failure_surfaces_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/permissions/role"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "insufficient privileges"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (cache, _) = stack(&server);

    let err = cache
        .update_role_permissions("manager", &["task_view".to_string()])
        .await
        .unwrap_err();
    assert!(err.to_string().contains("insufficient privileges"));
}

#[tokio::test]
async fn catalog_decodes_full_permission_records() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/permissions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "permissions": [{
                "id": "perm-1",
                "name": "task_update",
                "description": "Edit existing tasks",
                "roles": ["admin", "manager"]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (cache, _) = stack(&server);

    let catalog = cache.all_permissions().await;
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, "perm-1");
    assert_eq!(catalog[0].description, "Edit existing tasks");
    assert_eq!(catalog[0].roles, vec!["admin", "manager"]);
}
