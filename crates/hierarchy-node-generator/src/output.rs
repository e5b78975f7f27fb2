//! Writing generated scripts to the output directory

use crate::generator::GeneratedHierarchyNode;
use crate::support::SupportScript;
use anyhow::Context;
use hierarchy_node_core::{HierarchyNodeError, HierarchyNodeResult};
use std::fs;
use std::path::{Path, PathBuf};

/// Writes scripts into one directory, creating it on first use.
/// Existing files are overwritten.
pub struct ScriptWriter {
    output_dir: PathBuf,
}

impl ScriptWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write the node script and, when `with_component` is set, the component
    /// script. Returns the written paths in order.
    pub fn write_generated(
        &self,
        generated: &GeneratedHierarchyNode,
        with_component: bool,
    ) -> HierarchyNodeResult<Vec<PathBuf>> {
        self.ensure_output_dir()?;

        let mut written = vec![self.write_file(&generated.script_file_name(), &generated.script)?];
        if with_component {
            written.push(self.write_file(
                &generated.component_script_file_name(),
                &generated.component_script,
            )?);
        }

        Ok(written)
    }

    /// Write the runtime support library
    pub fn write_support(&self, scripts: &[SupportScript]) -> HierarchyNodeResult<Vec<PathBuf>> {
        self.ensure_output_dir()?;

        scripts
            .iter()
            .map(|script| self.write_file(script.file_name, &script.content))
            .collect()
    }

    fn ensure_output_dir(&self) -> HierarchyNodeResult<()> {
        if self.output_dir.is_dir() {
            return Ok(());
        }

        fs::create_dir_all(&self.output_dir)
            .with_context(|| format!("Failed to create output directory: {}", self.output_dir.display()))
            .map_err(|e| HierarchyNodeError::output_with_path(format!("{:#}", e), self.output_dir.clone()))?;

        log::info!("Created output directory {}", self.output_dir.display());
        Ok(())
    }

    fn write_file(&self, file_name: &str, content: &str) -> HierarchyNodeResult<PathBuf> {
        let path = self.output_dir.join(file_name);

        fs::write(&path, content)
            .with_context(|| format!("Failed to write script: {}", path.display()))
            .map_err(|e| HierarchyNodeError::output_with_path(format!("{:#}", e), path.clone()))?;

        log::info!("Write to {}", path.display());
        Ok(path)
    }
}
