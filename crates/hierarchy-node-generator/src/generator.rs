//! HierarchyNode generator: scene object in, C# scripts out

use crate::code_generator::CodeGenerator;
use crate::config::GeneratorConfig;
use crate::node_info::NodeInfo;
use hierarchy_node_core::SceneNode;

/// Scripts generated for one root object
#[derive(Debug, Clone)]
pub struct GeneratedHierarchyNode {
    /// `{RootName}Node`; also the root class name and the script file stem
    pub file_name: String,
    /// Node class hierarchy
    pub script: String,
    /// `{RootName}NodeComponent` behaviour wrapping the root node
    pub component_script: String,
    /// Tree the scripts were rendered from
    pub root: NodeInfo,
}

impl GeneratedHierarchyNode {
    pub fn script_file_name(&self) -> String {
        format!("{}.cs", self.file_name)
    }

    pub fn component_script_file_name(&self) -> String {
        format!("{}Component.cs", self.file_name)
    }
}

/// Generates node scripts from scene hierarchies
pub struct HierarchyNodeGenerator {
    config: GeneratorConfig,
    code_generator: CodeGenerator,
}

impl HierarchyNodeGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            code_generator: CodeGenerator::new(config.clone()),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build the NodeInfo tree for `root` without rendering it
    pub fn node_info<N: SceneNode>(&self, root: &N) -> NodeInfo {
        NodeInfo::build(root, &self.config)
    }

    /// Generate both scripts for `root`. Pure: the same hierarchy always
    /// yields byte-identical output.
    pub fn generate<N: SceneNode>(&self, root: &N) -> GeneratedHierarchyNode {
        let root = self.node_info(root);
        let file_name = format!("{}Node", root.name);

        log::debug!(
            "Generating {} from '{}' ({} nodes)",
            file_name,
            root.original_name,
            root.node_count()
        );

        let script = self.code_generator.render_script(&root);
        let component_script = self.code_generator.render_component_script(&file_name, &root);

        GeneratedHierarchyNode {
            file_name,
            script,
            component_script,
            root,
        }
    }
}

impl Default for HierarchyNodeGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}
