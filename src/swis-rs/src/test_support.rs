//! In-memory transport for unit tests

use crate::transport::{Credentials, HttpMethod, Transport, TransportRequest, TransportResponse};
use crate::{Client, Result};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use swis_core::Config;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub body: Option<Vec<u8>>,
    pub credentials: Credentials,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8(self.body.clone().expect("request has no body")).unwrap()
    }

    pub fn body_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body_text()).unwrap()
    }

    /// Endpoint path relative to the test client's base address
    pub fn endpoint(&self) -> &str {
        self.url
            .strip_prefix(BASE_URL)
            .expect("request outside the test base address")
    }
}

const BASE_URL: &str = "https://orion:17778/SolarWinds/InformationService/v3/Json/";

#[derive(Default)]
struct Inner {
    requests: Vec<RecordedRequest>,
    responses: VecDeque<TransportResponse>,
}

/// Records every request and answers from a queue of canned responses
#[derive(Clone, Default)]
pub struct RecordingTransport {
    inner: Arc<Mutex<Inner>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.inner
            .lock()
            .unwrap()
            .responses
            .push_back(TransportResponse {
                status,
                body: body.as_bytes().to_vec(),
            });
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn execute(&self, request: TransportRequest<'_>) -> Result<TransportResponse> {
        let mut inner = self.inner.lock().unwrap();
        inner.requests.push(RecordedRequest {
            method: request.method,
            url: request.url,
            body: request.body,
            credentials: request.credentials.clone(),
        });
        Ok(inner
            .responses
            .pop_front()
            .expect("no response queued for request"))
    }
}

pub fn client_with(transport: &RecordingTransport) -> Client {
    Client::with_transport(
        Config::new("orion", "admin", "secret"),
        Arc::new(transport.clone()),
    )
    .unwrap()
}
