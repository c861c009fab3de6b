use crate::{Client, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use swis_core::endpoints;
use swis_core::models::{BulkUpdateRequest, CustomPropertyDefinition, PropertyUpdate};

impl Client {
    /// Set one custom property on the entity at `uri`
    pub async fn set_custom_property<V: Serialize + ?Sized>(
        &self,
        uri: &str,
        name: &str,
        value: &V,
    ) -> Result<()> {
        let property = PropertyUpdate { name, value };
        self.post_json(&endpoints::custom_properties(uri), &property)
            .await
            .map_err(|e| e.context("update custom property"))?;
        Ok(())
    }

    /// Set several custom properties on one entity
    pub async fn set_custom_properties(
        &self,
        uri: &str,
        properties: &Map<String, Value>,
    ) -> Result<()> {
        self.post_json(&endpoints::custom_properties(uri), properties)
            .await
            .map_err(|e| e.context("update custom properties"))?;
        Ok(())
    }

    /// Set the same custom property value on many entities in one request
    pub async fn bulk_set_custom_property<S: AsRef<str>, V: Serialize + ?Sized>(
        &self,
        uris: &[S],
        name: &str,
        value: &V,
    ) -> Result<()> {
        let request = BulkUpdateRequest {
            uris: uris
                .iter()
                .map(|uri| endpoints::custom_properties(uri.as_ref()))
                .collect(),
            properties: PropertyUpdate { name, value },
        };

        self.post_json(endpoints::BULK_UPDATE, &request)
            .await
            .map_err(|e| e.context("post bulk update"))?;
        Ok(())
    }

    /// Declare a new custom property on `entity` (e.g. `Orion.NodesCustomProperties`).
    ///
    /// `value_type` is the SWIS type name; `string` properties get size 400.
    pub async fn create_custom_property(
        &self,
        entity: &str,
        value_type: &str,
        name: &str,
        description: &str,
    ) -> Result<()> {
        let definition = CustomPropertyDefinition::new(name, description, value_type);
        tracing::debug!(
            entity,
            name,
            value_type,
            size = definition.size(),
            "Creating custom property"
        );

        self.post_json(&endpoints::invoke(entity, "CreateCustomProperty"), &definition)
            .await
            .map_err(|e| e.context("create custom property"))?;
        Ok(())
    }
}
