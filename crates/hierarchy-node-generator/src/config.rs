//! Configuration for HierarchyNode generation
//!
//! Every field has a default matching the stock Unity layout, so an empty
//! `hierarchy-node.toml` (or none at all) produces the standard output.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// File name looked up in the working directory when no config path is given
pub const CONFIG_FILE_NAME: &str = "hierarchy-node.toml";

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

/// Settings that shape the generated scripts and where they are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Namespace wrapping the generated node classes
    pub namespace: String,

    /// Namespace of the runtime support library (`NodeBase`, `NodeChildrenBase`)
    pub base_namespace: String,

    /// Engine namespace; single-level types from it are emitted unqualified
    pub engine_namespace: String,

    /// Component every node carries implicitly; never exposed as a property
    pub hierarchy_component: String,

    /// Directory the generated scripts are written to
    pub output_directory: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            namespace: "HierarchyNode.Generated".to_string(),
            base_namespace: "HierarchyNode.Base".to_string(),
            engine_namespace: "UnityEngine".to_string(),
            hierarchy_component: "Transform".to_string(),
            output_directory: PathBuf::from("Assets/HierarchyNode/Scripts/Generated"),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file {:?}: {}", path.as_ref(), e)))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::ParseError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `hierarchy-node.toml` from `dir` if present, defaults otherwise
    pub fn discover<P: AsRef<Path>>(dir: P) -> Result<Self, ConfigError> {
        let candidate = dir.as_ref().join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            log::debug!("Using configuration from {}", candidate.display());
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("namespace", &self.namespace),
            ("base_namespace", &self.base_namespace),
            ("engine_namespace", &self.engine_namespace),
        ] {
            if !is_valid_csharp_namespace(value) {
                return Err(ConfigError::InvalidValue(format!(
                    "{} '{}' is not a valid C# namespace",
                    field, value
                )));
            }
        }

        if !is_valid_csharp_identifier(&self.hierarchy_component) {
            return Err(ConfigError::InvalidValue(format!(
                "hierarchy_component '{}' is not a valid C# identifier",
                self.hierarchy_component
            )));
        }

        if self.output_directory.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue(
                "output_directory cannot be empty".to_string()
            ));
        }

        Ok(())
    }
}

/// Check if a string is a valid C# identifier
pub fn is_valid_csharp_identifier(name: &str) -> bool {
    static IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    IDENTIFIER
        .get_or_init(|| {
            Regex::new(r"^[\p{L}\p{Nl}_][\p{L}\p{Nl}\p{Mn}\p{Mc}\p{Nd}\p{Pc}\p{Cf}]*$")
                .expect("identifier pattern is valid")
        })
        .is_match(name)
}

/// Check if a string is a dotted sequence of C# identifiers
pub fn is_valid_csharp_namespace(name: &str) -> bool {
    name.split('.').all(is_valid_csharp_identifier)
}
