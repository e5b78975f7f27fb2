//! HierarchyNode code generation
//!
//! Turns a scene object's transform hierarchy into C# wrapper classes: one
//! class per node, nested the way the hierarchy is, with cached accessors for
//! attached components and for children looked up by name.
//!
//! The pipeline is three pure steps that can be used on their own:
//! [`fix_name`] sanitizes names, [`NodeInfo::build`] walks the hierarchy and
//! [`CodeGenerator`] renders the tree. [`HierarchyNodeGenerator`] runs all
//! three, and [`ScriptWriter`] puts the result on disk.

pub mod config;
pub mod naming;
pub mod node_info;
pub mod templates;
pub mod code_generator;
pub mod generator;
pub mod support;
pub mod output;

pub use config::*;
pub use naming::{fix_name, normalize_component_type};
pub use node_info::*;
pub use code_generator::*;
pub use generator::*;
pub use support::*;
pub use output::*;

#[cfg(test)]
mod tests;
