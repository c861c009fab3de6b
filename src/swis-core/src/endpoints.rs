//! Endpoint paths, relative to [`Config::base_url`](crate::Config::base_url).

pub const QUERY: &str = "Query";
pub const BULK_UPDATE: &str = "BulkUpdate";
pub const BULK_DELETE: &str = "BulkDelete";

/// Suffix addressing the custom-property bag of an entity URI
pub const CUSTOM_PROPERTIES_SUFFIX: &str = "/CustomProperties";

pub const NCM_NODES_ENTITY: &str = "Cirrus.Nodes";

/// `Create/{entity}`
pub fn create(entity: &str) -> String {
    format!("Create/{}", entity)
}

/// `Invoke/{entity}/{verb}`
pub fn invoke(entity: &str, verb: &str) -> String {
    format!("Invoke/{}/{}", entity, verb)
}

/// `{uri}/CustomProperties`
pub fn custom_properties(uri: &str) -> String {
    format!("{}{}", uri, CUSTOM_PROPERTIES_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(create("Orion.Nodes"), "Create/Orion.Nodes");
        assert_eq!(
            invoke("Orion.NodesCustomProperties", "CreateCustomProperty"),
            "Invoke/Orion.NodesCustomProperties/CreateCustomProperty"
        );
        assert_eq!(
            custom_properties("swis://orion/Orion/Orion.Nodes/NodeID=1"),
            "swis://orion/Orion/Orion.Nodes/NodeID=1/CustomProperties"
        );
    }
}
