//! Tests for Agent Queue Operations

use super::*;
use crate::auth::Credentials;
use crate::client::{ClientConfig, TaskAgentClient};
use crate::error::ApiError;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> TaskAgentClient {
    TaskAgentClient::builder(Credentials::personal_access_token("test-pat"))
        .config(ClientConfig::default().with_organization_url(server.uri()))
        .build()
        .unwrap()
}

fn queue_for_pool(pool_id: u32, name: &str) -> TaskAgentQueue {
    TaskAgentQueue {
        name: Some(name.to_string()),
        pool: Some(TaskAgentPoolReference {
            id: PoolId::new(pool_id),
            name: None,
            is_hosted: None,
        }),
        ..TaskAgentQueue::default()
    }
}

/// Verify add_agent_queue posts the queue body and parses the created record.
///
/// The request body must contain only the fields the caller set: the service
/// rejects bodies carrying a queue id.
#[tokio::test]
async fn test_add_agent_queue() {
    let mock_server = MockServer::start().await;

    let created_json = serde_json::json!({
        "id": 42,
        "name": "Default",
        "pool": { "id": 9, "name": "Default", "isHosted": false },
        "projectId": "9d7a1d08-8c6a-4f8c-bc9f-1f0c2a9c2a10"
    });

    Mock::given(method("POST"))
        .and(path("/my-project/_apis/distributedtask/queues"))
        .and(query_param("authorizePipelines", "false"))
        .and(query_param("api-version", "7.1-preview.1"))
        .and(body_json(serde_json::json!({
            "name": "Default",
            "pool": { "id": 9 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(created_json))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let created = client
        .add_agent_queue("my-project", &queue_for_pool(9, "Default"), false)
        .await
        .unwrap();

    assert_eq!(created.id, Some(QueueId::new(42)));
    assert_eq!(created.name.as_deref(), Some("Default"));
    assert_eq!(created.pool.unwrap().id, PoolId::new(9));
}

/// Verify the authorizePipelines flag is forwarded when enabled.
#[tokio::test]
async fn test_add_agent_queue_authorize_pipelines() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/my-project/_apis/distributedtask/queues"))
        .and(query_param("authorizePipelines", "true"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "id": 7 })),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let created = client
        .add_agent_queue("my-project", &queue_for_pool(9, "Default"), true)
        .await
        .unwrap();

    assert_eq!(created.id, Some(QueueId::new(7)));
}

/// Verify a rejected queue body surfaces as InvalidRequest with the body text.
#[tokio::test]
async fn test_add_agent_queue_invalid_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/my-project/_apis/distributedtask/queues"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string("queue name already in use"),
        )
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client
        .add_agent_queue("my-project", &queue_for_pool(9, "Default"), false)
        .await
        .unwrap_err();

    match error {
        ApiError::InvalidRequest { message } => {
            assert_eq!(message, "queue name already in use");
        }
        other => panic!("expected InvalidRequest, got {:?}", other),
    }
}

/// Verify get_agent_queue parses the queue and its pool reference.
#[tokio::test]
async fn test_get_agent_queue() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/my-project/_apis/distributedtask/queues/42"))
        .and(query_param("api-version", "7.1-preview.1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "name": "Default",
            "pool": { "id": 9, "name": "Default", "isHosted": false }
        })))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let queue = client
        .get_agent_queue("my-project", QueueId::new(42))
        .await
        .unwrap();

    assert_eq!(queue.id, Some(QueueId::new(42)));
    let pool = queue.pool.expect("queue must reference its pool");
    assert_eq!(pool.id, PoolId::new(9));
    assert_eq!(pool.is_hosted, Some(false));
}

/// Verify a deleted or never-created queue maps to NotFound.
#[tokio::test]
async fn test_get_agent_queue_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/my-project/_apis/distributedtask/queues/42"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client
        .get_agent_queue("my-project", QueueId::new(42))
        .await
        .unwrap_err();

    assert!(error.is_not_found());
}

/// Verify delete_agent_queue succeeds on a 2xx response with no body.
#[tokio::test]
async fn test_delete_agent_queue() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/my-project/_apis/distributedtask/queues/42"))
        .and(query_param("api-version", "7.1-preview.1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    client
        .delete_agent_queue("my-project", QueueId::new(42))
        .await
        .unwrap();
}

/// Verify 403 on delete maps to AuthorizationFailed.
#[tokio::test]
async fn test_delete_agent_queue_forbidden() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/my-project/_apis/distributedtask/queues/42"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = test_client(&mock_server);
    let error = client
        .delete_agent_queue("my-project", QueueId::new(42))
        .await
        .unwrap_err();

    assert!(matches!(error, ApiError::AuthorizationFailed));
}

/// Verify the create body omits unset fields entirely.
#[test]
fn test_queue_serialization_skips_unset_fields() {
    let body = serde_json::to_value(queue_for_pool(9, "Default")).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "name": "Default", "pool": { "id": 9 } })
    );
}
