use crate::transport::{
    Credentials, HttpMethod, HttpTransport, Transport, TransportRequest, TransportResponse,
};
use crate::{ClientError, Result};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use swis_core::Config;

/// SWIS JSON API client
///
/// Cheap to clone and safe to share across tasks: the address and credentials
/// are fixed at construction and the transport pool is shared.
#[derive(Clone)]
pub struct Client {
    base_url: String,
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl Client {
    /// Create a new client with its own HTTP connection pool
    pub fn new(config: Config) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client that sends through an existing transport
    pub fn with_transport(config: Config, transport: Arc<dyn Transport>) -> Result<Self> {
        config
            .validate()
            .map_err(|e| ClientError::Config(e.to_string()))?;

        let base_url = config.base_url();
        tracing::info!(base_url = %base_url, "SWIS client created");

        Ok(Self {
            base_url,
            credentials: Credentials {
                username: config.username,
                password: config.password,
            },
            transport,
        })
    }

    /// Address every endpoint path is joined to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Account the client authenticates as
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<Vec<u8>> {
        let body = serde_json::to_vec(body).map_err(ClientError::Encoding)?;
        self.send(HttpMethod::Post, endpoint, Some(body)).await
    }

    pub(crate) async fn get_json(&self, endpoint: &str) -> Result<Vec<u8>> {
        self.send(HttpMethod::Get, endpoint, None).await
    }

    pub(crate) async fn delete_request(&self, endpoint: &str) -> Result<Vec<u8>> {
        self.send(HttpMethod::Delete, endpoint, None).await
    }

    async fn send(
        &self,
        method: HttpMethod,
        endpoint: &str,
        body: Option<Vec<u8>>,
    ) -> Result<Vec<u8>> {
        let request = TransportRequest {
            method,
            url: format!("{}{}", self.base_url, endpoint),
            body,
            credentials: &self.credentials,
        };

        let start = Instant::now();
        let TransportResponse { status, body } = self.transport.execute(request).await?;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        if status >= 400 {
            let message = String::from_utf8_lossy(&body).into_owned();
            tracing::warn!(
                %method,
                endpoint,
                status,
                elapsed_ms,
                "SWIS request failed"
            );
            return Err(ClientError::Server { status, message });
        }

        tracing::debug!(%method, endpoint, status, elapsed_ms, bytes = body.len(), "SWIS request");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{client_with, RecordingTransport};
    use serde::ser::Error as _;

    struct Unencodable;

    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = CapturedLogs;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> std::result::Result<S::Ok, S::Error> {
            Err(S::Error::custom("value cannot be encoded"))
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = Config::new("", "admin", "secret");
        assert!(matches!(Client::new(config.clone()), Err(ClientError::Config(_))));

        config.host = "orion".to_string();
        assert!(Client::new(config).is_ok());
    }

    #[test]
    fn test_client_creation_logs_no_credentials() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .finish();

        let transport = RecordingTransport::new();
        tracing::subscriber::with_default(subscriber, || {
            Client::with_transport(
                Config::new("orion", "netadmin", "hunter2"),
                Arc::new(transport.clone()),
            )
            .unwrap();
        });

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("SWIS client created"), "missing event in {:?}", output);
        assert!(output.contains("orion:17778"));
        assert!(!output.contains("netadmin"), "username leaked: {:?}", output);
        assert!(!output.contains("hunter2"), "password leaked: {:?}", output);
    }

    #[tokio::test]
    async fn test_post_json_sends_encoded_body_with_credentials() {
        let transport = RecordingTransport::new();
        transport.respond(200, "{}");
        let client = client_with(&transport);

        client
            .post_json("Create/Orion.Nodes", &serde_json::json!({"Caption": "sw1"}))
            .await
            .unwrap();

        let sent = transport.single_request();
        assert_eq!(sent.method, HttpMethod::Post);
        assert_eq!(
            sent.url,
            "https://orion:17778/SolarWinds/InformationService/v3/Json/Create/Orion.Nodes"
        );
        assert_eq!(sent.body_json(), serde_json::json!({"Caption": "sw1"}));
        assert_eq!(sent.credentials.username, "admin");
        assert_eq!(sent.credentials.password, "secret");
    }

    #[tokio::test]
    async fn test_get_and_delete_send_no_body() {
        let transport = RecordingTransport::new();
        transport.respond(200, "{}");
        transport.respond(200, "");
        let client = client_with(&transport);

        client.get_json("swis://orion/Orion/Orion.Nodes/NodeID=1").await.unwrap();
        client.delete_request("swis://orion/Orion/Orion.Nodes/NodeID=1").await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(requests[1].method, HttpMethod::Delete);
        assert!(requests.iter().all(|r| r.body.is_none()));
    }

    #[tokio::test]
    async fn test_error_status_becomes_server_error() {
        let transport = RecordingTransport::new();
        for status in [400u16, 401, 404, 500, 503] {
            transport.respond(status, &format!("failure {}", status));
        }
        let client = client_with(&transport);

        for status in [400u16, 401, 404, 500, 503] {
            let err = client.get_json("Anything").await.unwrap_err();
            match err {
                ClientError::Server {
                    status: got,
                    message,
                } => {
                    assert_eq!(got, status);
                    assert_eq!(message, format!("failure {}", status));
                }
                other => panic!("expected server error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_status_below_400_is_success() {
        let transport = RecordingTransport::new();
        transport.respond(204, "");
        transport.respond(302, "moved");
        let client = client_with(&transport);

        assert_eq!(client.get_json("a").await.unwrap(), b"");
        assert_eq!(client.get_json("b").await.unwrap(), b"moved");
    }

    #[tokio::test]
    async fn test_encoding_error_before_any_request() {
        let transport = RecordingTransport::new();
        let client = client_with(&transport);

        let err = client.post_json("Query", &Unencodable).await.unwrap_err();
        assert!(matches!(err, ClientError::Encoding(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_calls_leave_client_unchanged() {
        let transport = RecordingTransport::new();
        for _ in 0..64 {
            transport.respond(200, r#"{"results":[]}"#);
        }
        let client = Arc::new(client_with(&transport));
        let base_url = client.base_url().to_string();

        let tasks: Vec<_> = (0..64)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move {
                    client
                        .query("SELECT NodeID FROM Orion.Nodes WHERE NodeID = @id", &serde_json::json!({"id": i}))
                        .await
                })
            })
            .collect();

        for result in futures::future::join_all(tasks).await {
            result.unwrap().unwrap();
        }

        assert_eq!(client.base_url(), base_url);
        assert_eq!(client.username(), "admin");
        assert_eq!(transport.requests().len(), 64);
        assert!(transport
            .requests()
            .iter()
            .all(|r| r.credentials.username == "admin" && r.credentials.password == "secret"));
    }
}
