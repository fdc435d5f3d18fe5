//! Client example walking through the payment group lifecycle against a running server.
//!
//! Run with: cargo run -p payment-groups-app --example client_example --no-default-features --features sqlite

use payment_groups_client::PaymentGroupsClient;
use payment_groups_hex::{PaymentService, inbound::HttpServer};
use payment_groups_repo::build_repo;
use payment_groups_types::{CreatePaymentGroupRequest, UpdatePaymentGroupRequest};
use std::net::SocketAddr;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("payment_groups.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("Starting server on {addr}...");
    println!("   Database: {db_url}");

    let repo = build_repo(&db_url).await?;
    let router = HttpServer::new(PaymentService::new(repo)).router();

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router.into_make_service()).await {
            eprintln!("server error: {e}");
        }
    });

    let client = PaymentGroupsClient::new(format!("http://{addr}"));

    println!("\nHealth: {}", client.health().await?);

    let payroll = client
        .create_group(&CreatePaymentGroupRequest {
            name: "Payroll".to_string(),
            description: Some("Monthly salaries".to_string()),
        })
        .await?;
    let vendors = client
        .create_group(&CreatePaymentGroupRequest {
            name: "Vendors".to_string(),
            description: None,
        })
        .await?;
    println!("Created groups {} and {}", payroll.id, vendors.id);

    let renamed = client
        .update_group(
            vendors.id,
            &UpdatePaymentGroupRequest {
                name: Some("Suppliers".to_string()),
                description: None,
            },
        )
        .await?;
    println!("Updated: {:?}", renamed);

    for group in client.list_groups().await? {
        println!("  #{} {}", group.id, group.name);
    }

    let removed = client.remove_group(payroll.id).await?;
    println!("Removed group {}: {}", payroll.id, removed);
    println!("Lookup after removal: {:?}", client.get_group(payroll.id).await?);

    Ok(())
}
