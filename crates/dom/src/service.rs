//! DOM Service - builds an arena from CDP-shaped JSON
//!
//! Input is the `DOM.getDocument` response format. Only the structural
//! fields are read: ids, node type, name, value, attributes and children.

use crate::arena::DomArena;
use crate::error::{DomError, Result};
use crate::types::*;
use serde_json::Value;
use std::collections::HashMap;

/// Configuration for DOM service
#[derive(Debug, Clone)]
pub struct DomServiceConfig {
    /// Deepest nesting accepted before giving up
    pub max_depth: usize,
    /// Drop text nodes that contain only whitespace
    pub skip_whitespace_text: bool,
}

impl Default for DomServiceConfig {
    fn default() -> Self {
        Self {
            max_depth: 512,
            skip_whitespace_text: true,
        }
    }
}

/// Main DOM service
pub struct DomService {
    config: DomServiceConfig,
    arena: DomArena,
}

impl DomService {
    /// Create new DOM service with default config
    pub fn new() -> Self {
        Self::with_config(DomServiceConfig::default())
    }

    /// Create DOM service with custom config
    pub fn with_config(config: DomServiceConfig) -> Self {
        Self {
            config,
            arena: DomArena::new(),
        }
    }

    /// Get reference to internal arena
    pub fn arena(&self) -> &DomArena {
        &self.arena
    }

    /// Get mutable reference to internal arena
    pub fn arena_mut(&mut self) -> &mut DomArena {
        &mut self.arena
    }

    /// Hand the arena over to the caller
    pub fn into_arena(self) -> DomArena {
        self.arena
    }

    /// Parse a CDP response given as a JSON string
    pub fn parse_cdp_str(&mut self, json: &str) -> Result<NodeId> {
        let value: Value = serde_json::from_str(json)?;
        self.parse_cdp_dom_tree(&value)
    }

    /// Parse CDP DOM tree response and build arena
    ///
    /// Input format matches CDP's DOM.getDocument response:
    /// ```json
    /// {
    ///   "root": {
    ///     "nodeId": 1,
    ///     "backendNodeId": 1,
    ///     "nodeType": 9,
    ///     "nodeName": "#document",
    ///     "children": [...]
    ///   }
    /// }
    /// ```
    pub fn parse_cdp_dom_tree(&mut self, cdp_response: &Value) -> Result<NodeId> {
        let root = cdp_response
            .get("root")
            .ok_or_else(|| DomError::CdpError("Missing 'root' in CDP response".to_string()))?;

        self.arena.clear();
        let root_id = self
            .parse_node(root, None, 0)?
            .ok_or_else(|| DomError::CdpError("Root node was skipped".to_string()))?;
        self.arena.set_root(root_id)?;

        tracing::debug!("Parsed CDP tree with {} nodes", self.arena.len());
        Ok(root_id)
    }

    /// Recursively parse a CDP node; `None` when the node is skipped
    fn parse_node(
        &mut self,
        cdp_node: &Value,
        parent_id: Option<NodeId>,
        depth: usize,
    ) -> Result<Option<NodeId>> {
        if depth > self.config.max_depth {
            return Err(DomError::MaxDepthExceeded {
                current: depth,
                max: self.config.max_depth,
            });
        }

        let backend_node_id = cdp_node["backendNodeId"]
            .as_u64()
            .ok_or_else(|| DomError::CdpError("Missing backendNodeId".to_string()))?;
        let backend_node_id = u32::try_from(backend_node_id).map_err(|_| {
            DomError::CdpError(format!("backendNodeId {} out of range", backend_node_id))
        })?;

        let node_type_val = cdp_node["nodeType"]
            .as_u64()
            .ok_or_else(|| DomError::CdpError("Missing nodeType".to_string()))?;
        let node_type_val = u8::try_from(node_type_val).map_err(|_| {
            DomError::CdpError(format!("nodeType {} out of range", node_type_val))
        })?;

        let node_type =
            NodeType::from_u8(node_type_val).ok_or_else(|| DomError::InvalidNodeType {
                expected: "valid NodeType".to_string(),
                actual: format!("{}", node_type_val),
            })?;

        let node_name = cdp_node["nodeName"].as_str().unwrap_or("").to_string();
        let node_value = cdp_node["nodeValue"].as_str().unwrap_or("").to_string();

        if node_type == NodeType::Text
            && self.config.skip_whitespace_text
            && node_value.trim().is_empty()
        {
            return Ok(None);
        }

        // Attributes arrive as a flat [name, value, name, value, ...] list
        let mut attributes = HashMap::new();
        if let Some(attrs) = cdp_node["attributes"].as_array() {
            for pair in attrs.chunks_exact(2) {
                if let (Some(key), Some(value)) = (pair[0].as_str(), pair[1].as_str()) {
                    attributes.insert(key.to_string(), value.to_string());
                }
            }
        }

        let mut node = DomNode::new(node_type, node_name);
        node.backend_node_id = backend_node_id;
        node.node_value = node_value;
        node.attributes = attributes;
        node.parent_id = parent_id;

        let current_node_id = self.arena.add_node(node);

        if let Some(children) = cdp_node["children"].as_array() {
            let mut child_ids = smallvec::SmallVec::new();

            for child in children {
                if let Some(child_id) = self.parse_node(child, Some(current_node_id), depth + 1)? {
                    child_ids.push(child_id);
                }
            }

            self.arena.get_mut(current_node_id)?.children_ids = child_ids;
        }

        Ok(Some(current_node_id))
    }
}

impl Default for DomService {
    fn default() -> Self {
        Self::new()
    }
}
