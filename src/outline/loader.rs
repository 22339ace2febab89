use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Error, Result};
use crate::outline::types::OutlineNode;

/// An outline read from disk together with the name it is displayed under.
#[derive(Debug, Clone)]
pub struct LoadedOutline {
    pub name: String,
    pub root: OutlineNode,
}

// On-disk shape of one outline entry. Layers are optional and derived from
// nesting depth when absent.
#[derive(Debug, Deserialize)]
struct OutlineEntry {
    #[serde(default)]
    title: String,
    #[serde(default)]
    note: String,
    #[serde(default)]
    layer: Option<usize>,
    #[serde(default, alias = "child")]
    children: Vec<OutlineEntry>,
}

impl OutlineEntry {
    fn into_node(self, depth: usize) -> Result<OutlineNode> {
        if let Some(layer) = self.layer {
            if layer != depth {
                return Err(Error::MalformedTree {
                    title: self.title,
                    expected: depth,
                    found: layer,
                });
            }
        }

        let children = self
            .children
            .into_iter()
            .map(|child| child.into_node(depth + 1))
            .collect::<Result<Vec<_>>>()?;

        Ok(OutlineNode {
            title: self.title,
            note: self.note,
            layer: depth,
            children,
        })
    }
}

/// Loads JSON outline documents into [`OutlineNode`] trees.
pub struct OutlineLoader;

impl OutlineLoader {
    pub fn load_file(&self, path: &Path) -> Result<LoadedOutline> {
        let content = fs::read_to_string(path).map_err(|e| Error::OutlineLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "outline".to_string());

        let root = self.parse_str(&content).map_err(|e| match e {
            Error::OutlineLoad { reason, .. } => Error::OutlineLoad {
                path: path.to_path_buf(),
                reason,
            },
            other => other,
        })?;

        debug!(path = %path.display(), nodes = root.node_count(), "loaded outline");
        Ok(LoadedOutline { name, root })
    }

    /// Parses a JSON outline. The top-level object is the document root.
    pub fn parse_str(&self, json: &str) -> Result<OutlineNode> {
        let entry: OutlineEntry = serde_json::from_str(json).map_err(|e| Error::OutlineLoad {
            path: PathBuf::from("<string>"),
            reason: e.to_string(),
        })?;
        entry.into_node(0)
    }

    /// Loads every path in order, stopping at the first failure.
    pub fn load_all<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<LoadedOutline>> {
        paths.iter().map(|p| self.load_file(p.as_ref())).collect()
    }
}
