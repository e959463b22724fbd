//! Mind-map node types and the editor wire format
//!
//! Nodes arrive as JSON from the map editor with camelCase field names.
//! The `kind` tag is purely presentational: it selects bullet glyph,
//! color, and font weight, and has no effect on layout structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque node identifier, unique within a tree.
///
/// The editor supplies arbitrary strings; programmatic construction can
/// mint UUID-backed ids via [`NodeId::random`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Create a NodeId from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mint a fresh random id
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Presentation tag on a mind-map node.
///
/// Unknown wire values land on [`NodeKind::Other`] and render with the
/// default style rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Main,
    History,
    #[default]
    Data,
    Context,
    Date,
    Important,
    #[serde(other)]
    Other,
}

impl NodeKind {
    /// Whether this kind renders with heading weight
    pub fn is_heading(&self) -> bool {
        matches!(self, NodeKind::Main)
    }
}

/// A single node of the mind-map tree.
///
/// Children are owned values in rendering order; the tree is acyclic by
/// construction. `text` may contain embedded newlines, treated as
/// paragraph breaks by the renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapNode {
    pub id: NodeId,
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    #[serde(default)]
    pub children: Vec<MapNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl MapNode {
    /// Create a leaf node with the given kind and text
    pub fn new(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            id: NodeId::random(),
            text: text.into(),
            kind,
            children: Vec::new(),
            image_url: None,
            source_url: None,
        }
    }

    /// Attach a child, returning self for chained construction
    pub fn with_child(mut self, child: MapNode) -> Self {
        self.children.push(child);
        self
    }

    /// Set the image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Set the citation source
    pub fn with_source(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_editor_json() {
        let json = r#"{
            "id": "root-1",
            "text": "Revolução Industrial",
            "type": "main",
            "children": [
                {"id": "c1", "text": "Fato", "type": "data", "sourceUrl": "https://a.example"},
                {"id": "c2", "text": "Imagem", "type": "history", "imageUrl": "https://img.example/x.png"}
            ]
        }"#;

        let node: MapNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Main);
        assert_eq!(node.children.len(), 2);
        assert_eq!(node.children[0].source_url.as_deref(), Some("https://a.example"));
        assert_eq!(node.children[1].image_url.as_deref(), Some("https://img.example/x.png"));
    }

    #[test]
    fn unknown_kind_falls_back() {
        let json = r#"{"id": "n", "text": "x", "type": "banana"}"#;
        let node: MapNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Other);
    }

    #[test]
    fn missing_kind_defaults_to_data() {
        let json = r#"{"id": "n", "text": "x"}"#;
        let node: MapNode = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind, NodeKind::Data);
        assert!(node.children.is_empty());
    }

    #[test]
    fn only_main_is_heading() {
        assert!(NodeKind::Main.is_heading());
        assert!(!NodeKind::Important.is_heading());
        assert!(!NodeKind::Other.is_heading());
    }
}
