//! Error handling for HierarchyNode generation
//!
//! The generator itself never fails; these errors cover the boundary around it:
//! reading scene snapshots, resolving the selection, loading configuration and
//! writing generated scripts.

use thiserror::Error;
use std::path::PathBuf;

/// Main error type for HierarchyNode operations
#[derive(Error, Debug)]
pub enum HierarchyNodeError {
    /// Scene snapshot could not be read or understood
    #[error("Scene error: {message}")]
    Scene {
        message: String,
        file: Option<PathBuf>,
    },

    /// A selection path or filter did not resolve to any object
    #[error("Selection error: {message}")]
    Selection {
        message: String,
        path: Option<String>,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        field: Option<String>,
    },

    /// Writing a generated script failed
    #[error("Output error: {message}")]
    Output {
        message: String,
        path: Option<PathBuf>,
    },

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic errors
    #[error("Error: {0}")]
    Generic(#[from] anyhow::Error),
}

impl HierarchyNodeError {
    /// Create a scene error for a specific snapshot file
    pub fn scene_with_file<S: Into<String>>(message: S, file: PathBuf) -> Self {
        Self::Scene {
            message: message.into(),
            file: Some(file),
        }
    }

    /// Create a new selection error
    pub fn selection<S: Into<String>>(message: S) -> Self {
        Self::Selection {
            message: message.into(),
            path: None,
        }
    }

    /// Create a selection error naming the unresolved hierarchy path
    pub fn selection_with_path<S: Into<String>, P: Into<String>>(message: S, path: P) -> Self {
        Self::Selection {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            field: None,
        }
    }

    /// Create a configuration error with field information
    pub fn configuration_with_field<S: Into<String>, F: Into<String>>(message: S, field: F) -> Self {
        Self::Configuration {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create an output error for the file that could not be written
    pub fn output_with_path<S: Into<String>>(message: S, path: PathBuf) -> Self {
        Self::Output {
            message: message.into(),
            path: Some(path),
        }
    }
}

/// Result type for HierarchyNode operations
pub type HierarchyNodeResult<T> = Result<T, HierarchyNodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HierarchyNodeError::selection_with_path("no object at path", "Player/Arm");
        assert_eq!(err.to_string(), "Selection error: no object at path");

        match err {
            HierarchyNodeError::Selection { path, .. } => assert_eq!(path.as_deref(), Some("Player/Arm")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: HierarchyNodeError = io.into();
        assert!(matches!(err, HierarchyNodeError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
