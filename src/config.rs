use std::{fs, io, path::{Path, PathBuf}};

use serde::{Deserialize, Serialize};

use crate::{
    api::MappingsRequest,
    mcp::{InvalidMcpVersion, McpVersionSpec},
    target::{TargetError, TargetMapping},
};

pub const TARGETS: [&str; 5] = [
    "spigot2srg",
    "spigot2srg-onlyobf",
    "spigot2mcp",
    "obf2mcp",
    "mcp2obf",
];
pub const BASE_URL: &str = "http://localhost:8000";
pub const MCP_VERSION: &str = "snapshot_nodoc_20180925";
pub const MINECRAFT_VERSION: &str = "1.13";
pub const OUT_DIR: &str = "out";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file {0:?}")]
    Io(PathBuf, #[source] io::Error),

    #[error("could not parse config file {0:?}")]
    TomlParse(PathBuf, #[source] toml::de::Error),

    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    McpVersion(#[from] InvalidMcpVersion),

    #[error("no targets requested")]
    NoTargets,

    #[error("target {0} needs an MCP version but none is configured")]
    McpVersionRequired(TargetMapping),
}

/// Everything a load run needs. `Default` is the built-in configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub minecraft_version: String,
    pub mcp_version: Option<String>,
    pub targets: Vec<String>,
    pub out_dir: PathBuf,
    /// Request timeout in seconds (None = wait indefinitely).
    pub timeout_secs: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            minecraft_version: MINECRAFT_VERSION.to_string(),
            mcp_version: Some(MCP_VERSION.to_string()),
            targets: TARGETS.iter().map(|t| t.to_string()).collect(),
            out_dir: PathBuf::from(OUT_DIR),
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Load a TOML config file; keys it leaves out keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        toml::from_str(&contents).map_err(|e| ConfigError::TomlParse(path.to_path_buf(), e))
    }

    /// Parses every target and the MCP version, and checks that an MCP version
    /// is present when one is needed.
    pub fn validate(&self) -> Result<Vec<TargetMapping>, ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }

        let targets = self
            .targets
            .iter()
            .map(|t| t.parse::<TargetMapping>())
            .collect::<Result<Vec<_>, _>>()?;

        match &self.mcp_version {
            Some(mcp_version) => {
                mcp_version.parse::<McpVersionSpec>()?;
            }
            None => {
                if let Some(target) = targets.iter().find(|t| t.needs_mcp_version()) {
                    return Err(ConfigError::McpVersionRequired(*target));
                }
            }
        }

        Ok(targets)
    }

    pub fn request(&self) -> MappingsRequest {
        MappingsRequest {
            minecraft_version: self.minecraft_version.clone(),
            mcp_version: self.mcp_version.clone(),
            targets: self.targets.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.targets.len(), 5);
        assert_eq!(config.validate().unwrap().len(), 5);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
            minecraft_version = "1.12.2"
            targets = ["obf2mcp"]
            "#,
        )
        .unwrap();
        assert_eq!(config.minecraft_version, "1.12.2");
        assert_eq!(config.targets, vec!["obf2mcp".to_string()]);
        assert_eq!(config.mcp_version.as_deref(), Some(MCP_VERSION));
        assert_eq!(config.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn mcp_version_required_for_mcp_targets() {
        let config = Config {
            mcp_version: None,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::McpVersionRequired(t)) if t.to_string() == "spigot2mcp"
        ));

        let config = Config {
            mcp_version: None,
            targets: vec!["spigot2srg".into()],
            ..Config::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_target_is_rejected() {
        let config = Config {
            targets: vec!["obf2yarn".into()],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Target(_))));
    }

    #[test]
    fn mcp_version_is_checked() {
        for good in ["snapshot_nodoc_20180925", "stable_39"] {
            let config = Config {
                mcp_version: Some(good.into()),
                ..Config::default()
            };
            assert!(config.validate().is_ok(), "{good} should be accepted");
        }

        let config = Config {
            mcp_version: Some("garbage".into()),
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::McpVersion(InvalidMcpVersion(v))) if v == "garbage"
        ));
    }

    #[test]
    fn empty_targets_rejected() {
        let config = Config {
            targets: vec![],
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::NoTargets)));
    }

    #[test]
    fn request_from_config() {
        let request = Config::default().request();
        assert_eq!(request.minecraft_version, "1.13");
        assert_eq!(request.mcp_version.as_deref(), Some("snapshot_nodoc_20180925"));
        assert_eq!(request.targets[0], "spigot2srg");
    }
}
