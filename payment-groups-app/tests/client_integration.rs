//! Integration tests for the client SDK against a live server.
//!
//! Each test starts the full HTTP stack on an ephemeral port, backed by an
//! in-memory SQLite repository.

use payment_groups_client::{ClientError, PaymentGroupsClient};
use payment_groups_hex::{PaymentService, inbound::HttpServer};
use payment_groups_repo::SqliteRepo;
use payment_groups_types::{CreatePaymentGroupRequest, PaymentGroupId, UpdatePaymentGroupRequest};
use tokio::net::TcpListener;

/// Helper to start a server and return its base URL.
async fn spawn_server() -> String {
    let repo = SqliteRepo::new("sqlite::memory:").await.unwrap();
    let router = HttpServer::new(PaymentService::new(repo)).router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

#[tokio::test]
async fn test_health() {
    let client = PaymentGroupsClient::new(spawn_server().await);

    assert!(client.health().await.unwrap());
}

#[tokio::test]
async fn test_group_lifecycle() {
    let client = PaymentGroupsClient::new(spawn_server().await);

    let created = client
        .create_group(&CreatePaymentGroupRequest {
            name: "Payroll".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let fetched = client.get_group(created.id).await.unwrap();
    assert_eq!(fetched, Some(created.clone()));

    let updated = client
        .update_group(
            created.id,
            &UpdatePaymentGroupRequest {
                name: None,
                description: Some("Monthly salaries".to_string()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.name, "Payroll");
    assert_eq!(updated.description.as_deref(), Some("Monthly salaries"));

    assert_eq!(client.list_groups().await.unwrap().len(), 1);

    assert!(client.remove_group(created.id).await.unwrap());
    assert!(!client.remove_group(created.id).await.unwrap());
    assert_eq!(client.get_group(created.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_missing_group_maps_to_none_and_false() {
    let client = PaymentGroupsClient::new(spawn_server().await);
    let missing = PaymentGroupId::new(99);

    assert_eq!(client.get_group(missing).await.unwrap(), None);
    assert_eq!(
        client
            .update_group(missing, &UpdatePaymentGroupRequest::default())
            .await
            .unwrap(),
        None
    );
    assert!(!client.remove_group(missing).await.unwrap());
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let base_url = spawn_server().await;
    let client = PaymentGroupsClient::new(format!("{}/unknown-prefix", base_url));

    let result = client.list_groups().await;

    assert!(matches!(result, Err(ClientError::Api { status: 404, .. })));
}
