//! Core types for HierarchyNode code generation
//!
//! Provides the scene graph input model read by the generator and the error
//! types shared by the generator and the command-line front end.

pub mod error;
pub mod scene;


pub use error::*;
pub use scene::*;
