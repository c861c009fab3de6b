//! HTTP transport seam.
//!
//! A [`Transport`] performs exactly one round trip and hands back the status
//! and the fully drained body. Interpreting the status is left to the client.

use crate::{ClientError, Result};
use std::fmt;
use std::time::Duration;
use swis_core::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

/// Basic-auth credentials sent on every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
pub struct TransportRequest<'a> {
    pub method: HttpMethod,
    pub url: String,
    /// Already-encoded JSON body
    pub body: Option<Vec<u8>>,
    pub credentials: &'a Credentials,
}

impl TransportRequest<'_> {
    /// GET and any request carrying a body are sent as JSON; a bare DELETE has no content type
    pub fn content_type(&self) -> Option<&'static str> {
        if self.method == HttpMethod::Get || self.body.is_some() {
            Some("application/json")
        } else {
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: TransportRequest<'_>) -> Result<TransportResponse>;
}

/// reqwest-backed transport with a capped idle pool per host
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Build the reqwest client from the TLS, pool and timeout settings in `config`
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure_skip_verify)
            .pool_max_idle_per_host(config.max_idle_per_host);

        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        if config.insecure_skip_verify {
            tracing::warn!(host = %config.host, "TLS certificate verification disabled");
        }

        Ok(Self {
            client: builder.build().map_err(builder_error)?,
        })
    }
}

fn builder_error(err: reqwest::Error) -> ClientError {
    ClientError::Config(format!("failed to build HTTP client: {}", err))
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: TransportRequest<'_>) -> Result<TransportResponse> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url).basic_auth(
            &request.credentials.username,
            Some(&request.credentials.password),
        );

        if let Some(content_type) = request.content_type() {
            builder = builder.header(reqwest::header::CONTENT_TYPE, content_type);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(ClientError::Transport)?;
        let status = response.status().as_u16();

        // Drain the body on every path so the connection goes back to the pool
        let body = response.bytes().await.map_err(ClientError::Transport)?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}
