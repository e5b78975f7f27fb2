//! Picking objects out of a scene snapshot
//!
//! Stands in for the editor selection: explicit hierarchy paths, a regular
//! expression over hierarchy paths, or every root object when neither is given.

use clap::Args;
use hierarchy_node_core::{HierarchyNodeError, HierarchyNodeResult, SceneObject, SceneSnapshot};
use regex::Regex;
use std::path::PathBuf;

/// Snapshot and selection arguments shared by `generate` and `inspect`
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Scene snapshot file (.json, .yaml or .yml)
    pub snapshot: PathBuf,

    /// Hierarchy path of an object to select, e.g. `Player/Body` (repeatable)
    #[arg(short, long = "select", value_name = "PATH")]
    pub select: Vec<String>,

    /// Select every object whose hierarchy path matches this regular expression
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<String>,
}

/// A selected object with the hierarchy path it was found at
pub struct SelectedObject<'a> {
    pub path: String,
    pub object: &'a SceneObject,
}

/// Resolve the selection against `snapshot`. Explicit paths come first in the
/// order given, then filter matches in hierarchy order; duplicates are dropped.
pub fn select_objects<'a>(
    snapshot: &'a SceneSnapshot,
    paths: &[String],
    filter: Option<&str>,
) -> HierarchyNodeResult<Vec<SelectedObject<'a>>> {
    if paths.is_empty() && filter.is_none() {
        return Ok(snapshot
            .roots
            .iter()
            .map(|root| SelectedObject {
                path: root.name.clone(),
                object: root,
            })
            .collect());
    }

    let mut selected: Vec<SelectedObject<'a>> = Vec::new();

    for path in paths {
        let object = snapshot.find(path).ok_or_else(|| {
            HierarchyNodeError::selection_with_path(format!("No object at '{}'", path), path.clone())
        })?;
        push_unique(&mut selected, path.clone(), object);
    }

    if let Some(pattern) = filter {
        let regex = Regex::new(pattern).map_err(|e| {
            HierarchyNodeError::selection(format!("Invalid filter '{}': {}", pattern, e))
        })?;

        for (path, object) in snapshot.objects_with_paths() {
            if regex.is_match(&path) {
                push_unique(&mut selected, path, object);
            }
        }
    }

    if selected.is_empty() {
        return Err(HierarchyNodeError::selection("Selection matched no objects"));
    }

    Ok(selected)
}

fn push_unique<'a>(selected: &mut Vec<SelectedObject<'a>>, path: String, object: &'a SceneObject) {
    if selected.iter().any(|s| s.path == path) {
        log::debug!("'{}' selected more than once", path);
        return;
    }
    selected.push(SelectedObject { path, object });
}
