//! Simple Query Example
//!
//! Runs a parameterized SWQL query, including an `IN @list` parameter, and
//! decodes the rows into a typed struct.
//!
//! Run with: cargo run --example simple_query

use serde::Deserialize;
use serde_json::json;
use swis_rs::{Client, Config};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Deserialize)]
struct Node {
    #[serde(rename = "Caption")]
    caption: String,
    #[serde(rename = "IPAddress")]
    ip_address: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("swis_rs=debug")),
        )
        .with_target(false)
        .init();

    // Self-signed certificates are the norm on Orion servers
    let config = Config::new("localhost", "admin", "").with_insecure_skip_verify(true);
    let client = Client::new(config)?;

    let query = r#"
        SELECT
            Caption
            ,IPAddress
        FROM Orion.Nodes
        WHERE Vendor = @vendor
        AND Status IN @statuses
    "#;

    // Sequences expand the IN clause
    let parameters = json!({
        "vendor": "Cisco",
        "statuses": [1, 2, 3],
    });

    let nodes: Vec<Node> = client.query_as(query, &parameters).await?;

    for node in &nodes {
        println!(
            "Working with node [{}] on IP address [{}]...",
            node.caption, node.ip_address
        );
    }

    Ok(())
}
