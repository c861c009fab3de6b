//! Custom Property Update Example
//!
//! Looks up a node URI with a single-value query, then sets a custom
//! property on that node.
//!
//! Run with: cargo run --example custom_property_update

use serde_json::json;
use swis_rs::{Client, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swis_rs=debug")),
        )
        .init();

    // config.json next to the binary wins over the built-in defaults
    let config = Config::load("config.json").unwrap_or_else(|_| {
        tracing::warn!("Failed to load config.json, using defaults");
        Config::new("localhost", "admin", "").with_insecure_skip_verify(true)
    });
    let client = Client::new(config)?;

    let uri: String = client
        .query_one_as(
            "SELECT Uri FROM Orion.Nodes WHERE NodeID = @nodeID",
            &json!({"nodeID": 1}),
        )
        .await?;

    // Custom property names are case-insensitive on the server
    client
        .set_custom_property(&uri, "Site_Name", "Serenity Valley")
        .await?;

    println!("✅ Site_Name updated on {}", uri);
    Ok(())
}
