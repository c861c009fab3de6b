use crate::{Client, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use swis_core::endpoints;
use swis_core::models::BulkDeleteRequest;

impl Client {
    /// Create an entity of type `entity`; the service answers with the new URI
    pub async fn create<B: Serialize + ?Sized>(&self, entity: &str, body: &B) -> Result<Vec<u8>> {
        self.post_json(&endpoints::create(entity), body)
            .await
            .map_err(|e| e.context("create"))
    }

    /// Read every property of the entity at `uri`
    pub async fn read(&self, uri: &str) -> Result<Vec<u8>> {
        self.get_json(uri).await.map_err(|e| e.context("read"))
    }

    /// Overwrite properties of the entity at `uri`
    pub async fn update(&self, uri: &str, properties: &Map<String, Value>) -> Result<Vec<u8>> {
        self.post_json(uri, properties)
            .await
            .map_err(|e| e.context("update"))
    }

    /// Delete the entity at `uri`
    pub async fn delete(&self, uri: &str) -> Result<Vec<u8>> {
        self.delete_request(uri)
            .await
            .map_err(|e| e.context("delete"))
    }

    /// Delete many entities in one request
    pub async fn bulk_delete<S: AsRef<str>>(&self, uris: &[S]) -> Result<Vec<u8>> {
        let request = BulkDeleteRequest {
            uris: uris.iter().map(|uri| uri.as_ref()).collect(),
        };
        self.post_json(endpoints::BULK_DELETE, &request)
            .await
            .map_err(|e| e.context("bulk delete"))
    }

    /// Invoke verb `verb` on entity type `entity`. `body` is the verb's
    /// argument list, usually a JSON array.
    pub async fn invoke<B: Serialize + ?Sized>(
        &self,
        entity: &str,
        verb: &str,
        body: &B,
    ) -> Result<Vec<u8>> {
        self.post_json(&endpoints::invoke(entity, verb), body)
            .await
            .map_err(|e| e.context("invoke"))
    }
}
