//! NodeInfo tree: the sanitized, generator-side view of a scene hierarchy

use crate::config::GeneratorConfig;
use crate::naming::{fix_name, normalize_component_type};
use hierarchy_node_core::SceneNode;
use serde::Serialize;
use std::collections::BTreeSet;

/// One hierarchy node, named and ready to render
#[derive(Debug, Clone, Serialize)]
pub struct NodeInfo {
    /// Display name as found in the scene, used for runtime `Find` lookups
    pub original_name: String,
    /// Sanitized identifier, used for property names
    pub name: String,
    /// Class name prefix; `name` or `name + "Child"` on a parent clash
    pub class_name: String,
    /// Sorted, deduplicated component type names
    pub components: Vec<String>,
    /// Children, deduplicated by `name` with the first occurrence kept
    pub child_nodes: Vec<NodeInfo>,
}

/// Identity is the sanitized name. Siblings that sanitize alike are the
/// same node as far as the generated code is concerned.
impl PartialEq for NodeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for NodeInfo {}

impl NodeInfo {
    /// Build the tree rooted at `root`
    pub fn build<N: SceneNode>(root: &N, config: &GeneratorConfig) -> Self {
        Self::build_with_parent(root, None, config)
    }

    fn build_with_parent<N: SceneNode>(node: &N, parent_class_name: Option<&str>, config: &GeneratorConfig) -> Self {
        let original_name = node.name().to_string();
        let name = fix_name(&original_name);
        let class_name = if parent_class_name == Some(name.as_str()) {
            format!("{}Child", name)
        } else {
            name.clone()
        };

        let mut child_nodes: Vec<NodeInfo> = Vec::new();
        for child in node.children() {
            let info = Self::build_with_parent(child, Some(&class_name), config);
            if child_nodes.contains(&info) {
                // First wins; later siblings are unreachable from the children holder.
                log::warn!(
                    "Skipping '{}' under '{}': another child already sanitizes to '{}'",
                    info.original_name, original_name, info.name
                );
                continue;
            }
            child_nodes.push(info);
        }

        let components = collect_components(node, config);
        log::debug!(
            "Node '{}' -> {} ({} components, {} children)",
            original_name, class_name, components.len(), child_nodes.len()
        );

        Self {
            original_name,
            name,
            class_name,
            components,
            child_nodes,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.child_nodes.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.child_nodes.iter().map(NodeInfo::node_count).sum::<usize>()
    }
}

fn collect_components<N: SceneNode>(node: &N, config: &GeneratorConfig) -> Vec<String> {
    node.component_types()
        .into_iter()
        .map(|type_name| normalize_component_type(type_name, &config.engine_namespace))
        .filter(|type_name| *type_name != config.hierarchy_component)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
