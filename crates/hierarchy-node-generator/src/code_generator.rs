//! Rendering of NodeInfo trees into C# source
//!
//! Rendering is top-down text assembly: each node's text embeds its already
//! rendered children, indented one level per nesting step. Branch nodes
//! derive from `NodeBase<TChildren>` and are followed by their children
//! holder; leaves derive from `EmptyChildrenNodeBase`.

use crate::config::GeneratorConfig;
use crate::naming::{component_property_name, escape_string_literal};
use crate::node_info::NodeInfo;
use crate::templates::*;
use std::collections::HashMap;

/// Renders node scripts for one configuration
pub struct CodeGenerator {
    config: GeneratorConfig,
}

impl CodeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Render the complete node script for the tree rooted at `root`
    pub fn render_script(&self, root: &NodeInfo) -> String {
        let mut vars = self.namespace_variables();
        vars.insert("body", add_indent(&self.render_node(root)));
        render_template(SCRIPT_TEMPLATE, &vars)
    }

    /// Render the `MonoBehaviour` that lazily wraps its own transform in the
    /// root node class named `file_name`
    pub fn render_component_script(&self, file_name: &str, root: &NodeInfo) -> String {
        let mut vars = self.namespace_variables();
        vars.insert("file_name", file_name.to_string());
        vars.insert("class_name", root.class_name.clone());
        render_template(COMPONENT_SCRIPT_TEMPLATE, &vars)
    }

    /// Render one node class, its nested child classes and its children holder
    pub fn render_node(&self, node: &NodeInfo) -> String {
        let properties = if node.components.is_empty() {
            String::new()
        } else {
            format!("\n\n{}", add_indent(&self.render_node_properties(node)))
        };

        let mut vars = HashMap::new();
        vars.insert("class_name", node.class_name.clone());
        vars.insert("properties", properties);

        if node.is_leaf() {
            return render_template(EMPTY_CHILDREN_NODE_TEMPLATE, &vars);
        }

        let child_classes: Vec<String> = node
            .child_nodes
            .iter()
            .map(|child| self.render_node(child))
            .collect();

        vars.insert("child_classes", add_indent(&child_classes.join("\n\n")));
        vars.insert("children_holder", self.render_node_children(node));
        render_template(NODE_TEMPLATE, &vars)
    }

    /// Cached accessors for the node's components, separated by blank lines
    pub fn render_node_properties(&self, node: &NodeInfo) -> String {
        node.components
            .iter()
            .map(|component_type| {
                let mut vars = HashMap::new();
                vars.insert("component_type", component_type.clone());
                vars.insert("property_name", component_property_name(component_type).to_string());
                render_template(NODE_PROPERTY_TEMPLATE, &vars)
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// The `{ClassName}NodeChildren` holder with one accessor per child
    pub fn render_node_children(&self, node: &NodeInfo) -> String {
        let properties = node
            .child_nodes
            .iter()
            .map(|child| {
                let mut vars = HashMap::new();
                vars.insert("parent_class_name", node.class_name.clone());
                vars.insert("child_class_name", child.class_name.clone());
                vars.insert("child_name", child.name.clone());
                vars.insert("child_path", escape_string_literal(&child.original_name));
                render_template(NODE_CHILD_PROPERTY_TEMPLATE, &vars)
            })
            .collect::<Vec<_>>()
            .join("\n\n");

        let mut vars = HashMap::new();
        vars.insert("class_name", node.class_name.clone());
        vars.insert("properties", add_indent(&properties));
        render_template(NODE_CHILDREN_TEMPLATE, &vars)
    }

    fn namespace_variables(&self) -> HashMap<&'static str, String> {
        let mut vars = HashMap::new();
        vars.insert("engine_namespace", self.config.engine_namespace.clone());
        vars.insert("base_namespace", self.config.base_namespace.clone());
        vars.insert("namespace", self.config.namespace.clone());
        vars
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
