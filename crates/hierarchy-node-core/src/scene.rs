//! Scene graph input model
//!
//! The generator reads a scene hierarchy through the [`SceneNode`] trait: a
//! display name, the type names of the attached components and the ordered
//! children. [`SceneObject`] is the serde snapshot of a Unity GameObject that
//! implements it, and [`SceneSnapshot`] holds the scene roots loaded from a
//! JSON or YAML file.

use crate::error::{HierarchyNodeError, HierarchyNodeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read-only view of one node of a scene hierarchy
pub trait SceneNode {
    /// Display name as shown in the editor hierarchy
    fn name(&self) -> &str;

    /// Fully qualified type names of the attached components, in attachment order
    fn component_types(&self) -> Vec<&str>;

    /// Direct children, in hierarchy order
    fn children(&self) -> Vec<&Self>;
}

/// Snapshot of a GameObject and its transform subtree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneObject {
    #[serde(default)]
    pub name: String,
    /// Component type names; `null` marks a missing script
    #[serde(default)]
    pub components: Vec<Option<String>>,
    #[serde(default)]
    pub children: Vec<SceneObject>,
}

impl SceneObject {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            components: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Attach a component by fully qualified type name
    pub fn with_component<S: Into<String>>(mut self, type_name: S) -> Self {
        self.components.push(Some(type_name.into()));
        self
    }

    /// Attach a component slot whose script could not be loaded
    pub fn with_missing_component(mut self) -> Self {
        self.components.push(None);
        self
    }

    pub fn with_child(mut self, child: SceneObject) -> Self {
        self.children.push(child);
        self
    }

    /// Resolve a `/`-separated path relative to this object, the way
    /// `Transform.Find` does: each segment picks the first direct child with
    /// exactly that name.
    pub fn find(&self, path: &str) -> Option<&SceneObject> {
        let mut current = self;
        for segment in path.split('/') {
            current = current.children.iter().find(|c| c.name == segment)?;
        }
        Some(current)
    }

    /// Number of objects in this subtree, including this one
    pub fn object_count(&self) -> usize {
        1 + self.children.iter().map(SceneObject::object_count).sum::<usize>()
    }
}

impl SceneNode for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn component_types(&self) -> Vec<&str> {
        self.components.iter().flatten().map(String::as_str).collect()
    }

    fn children(&self) -> Vec<&Self> {
        self.children.iter().collect()
    }
}

/// A scene's root objects, as exported from the editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Scene name, informational only
    #[serde(default)]
    pub scene: Option<String>,
    #[serde(default)]
    pub roots: Vec<SceneObject>,
}

impl SceneSnapshot {
    /// Load a snapshot, choosing the format from the file extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> HierarchyNodeResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            HierarchyNodeError::scene_with_file(format!("Failed to read snapshot: {}", e), path.to_path_buf())
        })?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let snapshot = match extension.as_deref() {
            Some("json") => Self::from_json_str(&content)?,
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content)?,
            _ => {
                return Err(HierarchyNodeError::scene_with_file(
                    "Unsupported snapshot format, expected .json, .yaml or .yml",
                    path.to_path_buf(),
                ))
            }
        };

        log::debug!(
            "Loaded snapshot {} with {} root objects",
            path.display(),
            snapshot.roots.len()
        );
        Ok(snapshot)
    }

    pub fn from_json_str(content: &str) -> HierarchyNodeResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> HierarchyNodeResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Resolve a hierarchy path such as `Player/Body/LeftArm`; the first
    /// segment names a root object.
    pub fn find(&self, path: &str) -> Option<&SceneObject> {
        let (root_name, rest) = match path.split_once('/') {
            Some((root, rest)) => (root, Some(rest)),
            None => (path, None),
        };

        let root = self.roots.iter().find(|r| r.name == root_name)?;
        match rest {
            Some(rest) => root.find(rest),
            None => Some(root),
        }
    }

    /// Every object in the scene paired with its hierarchy path, depth first
    pub fn objects_with_paths(&self) -> Vec<(String, &SceneObject)> {
        let mut objects = Vec::new();
        for root in &self.roots {
            collect_paths(root, root.name.clone(), &mut objects);
        }
        objects
    }
}

fn collect_paths<'a>(object: &'a SceneObject, path: String, out: &mut Vec<(String, &'a SceneObject)>) {
    out.push((path.clone(), object));
    for child in &object.children {
        collect_paths(child, format!("{}/{}", path, child.name), out);
    }
}
