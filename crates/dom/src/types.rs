//! Core node types
//!
//! Key design principles:
//! 1. Use u32 for indices (4 bytes vs 8 bytes pointer)
//! 2. Identity is the index, never the contents
//! 3. Use SmallVec for child lists (most nodes have few children)

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::HashMap;

/// Node identifier (index into arena)
/// u32 allows 4 billion nodes, enough for any webpage
pub type NodeId = u32;

/// Node type matching DOM specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeType {
    Element = 1,
    Attribute = 2,
    Text = 3,
    CdataSection = 4,
    EntityReference = 5,
    Entity = 6,
    ProcessingInstruction = 7,
    Comment = 8,
    Document = 9,
    DocumentType = 10,
    DocumentFragment = 11,
    Notation = 12,
}

impl NodeType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(NodeType::Element),
            2 => Some(NodeType::Attribute),
            3 => Some(NodeType::Text),
            4 => Some(NodeType::CdataSection),
            5 => Some(NodeType::EntityReference),
            6 => Some(NodeType::Entity),
            7 => Some(NodeType::ProcessingInstruction),
            8 => Some(NodeType::Comment),
            9 => Some(NodeType::Document),
            10 => Some(NodeType::DocumentType),
            11 => Some(NodeType::DocumentFragment),
            12 => Some(NodeType::Notation),
            _ => None,
        }
    }

    /// Human-readable name, used in error messages
    pub fn name(self) -> &'static str {
        match self {
            NodeType::Element => "element",
            NodeType::Attribute => "attribute",
            NodeType::Text => "text",
            NodeType::CdataSection => "cdata-section",
            NodeType::EntityReference => "entity-reference",
            NodeType::Entity => "entity",
            NodeType::ProcessingInstruction => "processing-instruction",
            NodeType::Comment => "comment",
            NodeType::Document => "document",
            NodeType::DocumentType => "document-type",
            NodeType::DocumentFragment => "document-fragment",
            NodeType::Notation => "notation",
        }
    }
}

/// The main DOM tree node structure
///
/// Design philosophy:
/// - Small fixed-size fields first (better packing)
/// - Use indices instead of pointers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomNode {
    /// Arena index, assigned by `DomArena::add_node`
    pub node_id: NodeId,
    /// Backend id from CDP (0 for nodes created locally)
    pub backend_node_id: u32,
    pub node_type: NodeType,

    pub parent_id: Option<NodeId>,
    pub children_ids: SmallVec<[NodeId; 4]>, // Most nodes have <4 children

    pub node_name: String,
    pub node_value: String,
    pub attributes: HashMap<String, String>,
}

impl DomNode {
    /// Create a new node with required fields
    pub fn new(node_type: NodeType, node_name: impl Into<String>) -> Self {
        Self {
            node_id: 0,
            backend_node_id: 0,
            node_type,
            parent_id: None,
            children_ids: SmallVec::new(),
            node_name: node_name.into(),
            node_value: String::new(),
            attributes: HashMap::new(),
        }
    }

    /// Create an element node
    pub fn element(tag: impl Into<String>) -> Self {
        Self::new(NodeType::Element, tag)
    }

    /// Create a text node
    pub fn text(value: impl Into<String>) -> Self {
        let mut node = Self::new(NodeType::Text, "#text");
        node.node_value = value.into();
        node
    }

    /// Builder-style attribute setter, handy for fixtures
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Get tag name for element nodes
    pub fn tag_name(&self) -> Option<&str> {
        if self.node_type == NodeType::Element {
            Some(&self.node_name)
        } else {
            None
        }
    }

    /// Check if node is an element
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if node is text
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Case-insensitive tag comparison; false for non-elements
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_name()
            .is_some_and(|name| name.eq_ignore_ascii_case(tag))
    }

    /// Get attribute value
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_tag_ignores_case() {
        let node = DomNode::element("SELECT");
        assert!(node.has_tag("select"));
        assert!(!DomNode::text("select").has_tag("select"));
    }

    #[test]
    fn test_attr_accessors() {
        let node = DomNode::element("div").with_attr("id", "main");
        assert_eq!(node.id(), Some("main"));
        assert_eq!(node.attr("name"), None);
        assert!(node.has_attr("id"));
    }

    #[test]
    fn test_node_type_roundtrip() {
        assert_eq!(NodeType::from_u8(9), Some(NodeType::Document));
        assert_eq!(NodeType::from_u8(0), None);
        assert_eq!(NodeType::Comment.name(), "comment");
    }

    #[test]
    fn test_node_json_snapshot() {
        let mut node = DomNode::element("ul").with_attr("class", "menu");
        node.node_id = 3;
        node.parent_id = Some(1);
        node.children_ids.extend([4, 7]);

        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["node_type"], "Element");
        assert_eq!(json["children_ids"], serde_json::json!([4, 7]));
        assert_eq!(json["attributes"]["class"], "menu");

        let restored: DomNode = serde_json::from_value(json).unwrap();
        assert_eq!(restored.node_id, 3);
        assert_eq!(restored.parent_id, Some(1));
        assert_eq!(restored.children_ids.as_slice(), &[4, 7]);
        assert_eq!(restored.attr("class"), Some("menu"));
        assert!(restored.has_tag("UL"));
    }
}
