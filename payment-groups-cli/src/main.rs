//! Payment Groups CLI
//!
//! Command-line interface for the Payment Groups API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use payment_groups_client::PaymentGroupsClient;
use payment_groups_types::{
    CreatePaymentGroupRequest, PaymentGroupId, UpdatePaymentGroupRequest,
};

#[derive(Parser)]
#[command(name = "payment-groups")]
#[command(author, version, about = "Payment Groups API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payment Groups API
    #[arg(
        long,
        env = "PAYMENT_GROUPS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment group operations
    Group {
        #[command(subcommand)]
        action: GroupCommands,
    },
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum GroupCommands {
    /// List all payment groups
    List,
    /// Get a payment group
    Get {
        /// Payment group ID
        id: PaymentGroupId,
    },
    /// Create a payment group
    Create {
        /// Group name
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update a payment group
    Update {
        /// Payment group ID
        id: PaymentGroupId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a payment group
    Delete {
        /// Payment group ID
        id: PaymentGroupId,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentGroupsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Group { action } => match action {
            GroupCommands::List => {
                let groups = client.list_groups().await?;
                println!("{}", serde_json::to_string_pretty(&groups)?);
            }
            GroupCommands::Get { id } => match client.get_group(id).await? {
                Some(group) => println!("{}", serde_json::to_string_pretty(&group)?),
                None => anyhow::bail!("Payment group {} not found", id),
            },
            GroupCommands::Create { name, description } => {
                let group = client
                    .create_group(&CreatePaymentGroupRequest { name, description })
                    .await?;
                println!("{}", serde_json::to_string_pretty(&group)?);
            }
            GroupCommands::Update {
                id,
                name,
                description,
            } => {
                let req = UpdatePaymentGroupRequest { name, description };
                match client.update_group(id, &req).await? {
                    Some(group) => println!("{}", serde_json::to_string_pretty(&group)?),
                    None => anyhow::bail!("Payment group {} not found", id),
                }
            }
            GroupCommands::Delete { id } => {
                if client.remove_group(id).await? {
                    println!("✓ Payment group {} deleted", id);
                } else {
                    anyhow::bail!("Payment group {} not found", id);
                }
            }
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_update_command() {
        let cli = Cli::try_parse_from([
            "payment-groups",
            "group",
            "update",
            "7",
            "--name",
            "Suppliers",
        ])
        .unwrap();

        match cli.command {
            Commands::Group {
                action:
                    GroupCommands::Update {
                        id,
                        name,
                        description,
                    },
            } => {
                assert_eq!(id, PaymentGroupId::new(7));
                assert_eq!(name.as_deref(), Some("Suppliers"));
                assert_eq!(description, None);
            }
            _ => panic!("expected group update"),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["payment-groups", "group", "get", "abc"]).is_err());
    }
}
