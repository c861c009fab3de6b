//! Network Configuration Manager verbs.

use crate::{Client, Result};
use swis_core::endpoints;
use swis_core::models::RemoveNcmNodesRequest;
use uuid::Uuid;

impl Client {
    /// Stop NCM from managing the given nodes
    pub async fn remove_ncm_nodes(&self, node_ids: &[Uuid]) -> Result<()> {
        let request = RemoveNcmNodesRequest { node_ids };
        tracing::debug!(count = node_ids.len(), "Removing NCM nodes");

        self.post_json(
            &endpoints::invoke(endpoints::NCM_NODES_ENTITY, "RemoveNodes"),
            &request,
        )
        .await
        .map_err(|e| e.context("remove the NCM nodes"))?;
        Ok(())
    }
}
