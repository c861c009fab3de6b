//! SWIS Client Library
//!
//! Async HTTP client for the SolarWinds Information Service JSON API.
//!
//! ```rust,no_run
//! use swis_rs::{Client, Config};
//!
//! # async fn example() -> swis_rs::Result<()> {
//! let client = Client::new(Config::new("orion.example.net", "admin", "secret"))?;
//! let _uri = client
//!     .query_one(
//!         "SELECT Uri FROM Orion.Nodes WHERE NodeID = @id",
//!         &serde_json::json!({"id": 1}),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod cancel;
mod client;
mod custom_properties;
mod entity;
mod ncm;
mod query;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use cancel::cancellable;
pub use client::Client;
pub use swis_core::{endpoints, Config, CustomPropertyDefinition};
pub use tokio_util::sync::CancellationToken;
pub use transport::{Credentials, HttpMethod, HttpTransport, Transport, TransportRequest, TransportResponse};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("failed to marshal request: {0}")]
    Encoding(#[source] serde_json::Error),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request cancelled")]
    Cancelled,

    #[error("swis failure message [status: {status}]:\n{message}")]
    Server { status: u16, message: String },

    #[error("could not unmarshal the result: {0}")]
    Decoding(#[source] serde_json::Error),

    #[error("unexpected result shape: {0}")]
    UnexpectedShape(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to {operation}: {source}")]
    Operation {
        operation: &'static str,
        #[source]
        source: Box<ClientError>,
    },
}

impl ClientError {
    /// Wrap with the name of the failing operation
    pub(crate) fn context(self, operation: &'static str) -> Self {
        ClientError::Operation {
            operation,
            source: Box::new(self),
        }
    }

    /// The innermost error, past any operation wrappers
    pub fn root(&self) -> &ClientError {
        let mut err = self;
        while let ClientError::Operation { source, .. } = err {
            err = &**source;
        }
        err
    }

    /// Outermost operation name, if any
    pub fn operation(&self) -> Option<&'static str> {
        match self {
            ClientError::Operation { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// HTTP status of a remote service failure
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            ClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), ClientError::Cancelled)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self.root(), ClientError::Transport(e) if e.is_timeout())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
