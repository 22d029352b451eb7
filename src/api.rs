use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const LOAD_MAPPINGS_PATH: &str = "/api/beta/load_mappings";

/// Body of a `load_mappings` call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MappingsRequest {
    pub minecraft_version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mcp_version: Option<String>,
    pub targets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MappingsResponse {
    /// Server side computation time in milliseconds
    pub response_time: u64,
    /// Target name to serialized mapping file
    pub serialized_mappings: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_body_shape() {
        let request = MappingsRequest {
            minecraft_version: "1.13".into(),
            mcp_version: Some("snapshot_nodoc_20180925".into()),
            targets: vec!["obf2mcp".into()],
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "minecraft_version": "1.13",
                "mcp_version": "snapshot_nodoc_20180925",
                "targets": ["obf2mcp"],
            })
        );
    }

    #[test]
    fn request_without_mcp_version() {
        let request = MappingsRequest {
            minecraft_version: "1.13".into(),
            mcp_version: None,
            targets: vec!["spigot2srg".into()],
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("mcp_version").is_none());
    }

    #[test]
    fn response_ignores_unknown_keys() {
        let response: MappingsResponse = serde_json::from_value(json!({
            "response_time": 42,
            "serialized_mappings": {"obf2mcp": "CL: a net/minecraft/Test\n"},
            "server": "dev",
        }))
        .unwrap();
        assert_eq!(response.response_time, 42);
        assert_eq!(
            response.serialized_mappings["obf2mcp"],
            "CL: a net/minecraft/Test\n"
        );
    }

    #[test]
    fn response_requires_both_keys() {
        assert!(serde_json::from_value::<MappingsResponse>(json!({"response_time": 1})).is_err());
        assert!(
            serde_json::from_value::<MappingsResponse>(json!({"serialized_mappings": {}})).is_err()
        );
    }
}
