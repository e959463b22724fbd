//! Tree wrapper and read-only traversal helpers
//!
//! The export pipeline never mutates a map; everything here borrows.

use crate::{MapNode, ModelError, NodeId, Result};
use std::collections::HashSet;

/// A complete mind map: one root node plus derived queries.
#[derive(Debug, Clone, PartialEq)]
pub struct MindMap {
    root: MapNode,
}

/// An entry of the summary listing: nodes at depth 0 and 1 only.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry<'a> {
    pub depth: usize,
    pub text: &'a str,
}

impl MindMap {
    pub fn new(root: MapNode) -> Self {
        Self { root }
    }

    /// Parse a map from the editor's JSON wire format
    pub fn from_json(json: &str) -> Result<Self> {
        let root: MapNode = serde_json::from_str(json)?;
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &MapNode {
        &self.root
    }

    /// Pre-order depth-first traversal yielding `(depth, node)`
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: vec![(0, &self.root)],
        }
    }

    /// Reject maps with duplicate node ids.
    ///
    /// Cycles cannot occur: children are owned values.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashSet<&NodeId> = HashSet::new();
        for (_, node) in self.iter() {
            if !seen.insert(&node.id) {
                return Err(ModelError::DuplicateId(node.id.clone()));
            }
        }
        Ok(())
    }

    /// Total number of nodes
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Maximum depth (root = 0)
    pub fn depth(&self) -> usize {
        self.iter().map(|(d, _)| d).max().unwrap_or(0)
    }

    /// Distinct citation sources in pre-order encounter order.
    ///
    /// Deduplicated by exact string equality; the first occurrence
    /// determines the position in the references list.
    pub fn sources(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for (_, node) in self.iter() {
            if let Some(src) = node.source_url.as_deref() {
                if seen.insert(src) {
                    out.push(src);
                }
            }
        }
        out
    }

    /// Nodes at depth 0 and 1 in pre-order, for the summary page
    pub fn outline(&self) -> Vec<OutlineEntry<'_>> {
        self.iter()
            .filter(|(depth, _)| *depth <= 1)
            .map(|(depth, node)| OutlineEntry {
                depth,
                text: &node.text,
            })
            .collect()
    }
}

/// Pre-order iterator over `(depth, &MapNode)`
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a MapNode)>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a MapNode);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push children reversed so array order pops first
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}
