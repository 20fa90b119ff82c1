//! Capability handles - the type filter of a collection
//!
//! A capability is a `Copy` handle around a `NodeId` that can only be
//! obtained by asking a node whether it implements that capability. The
//! traversal engine calls [`Capability::from_node`] on every candidate
//! instead of inspecting types at runtime.
//!
//! Handles compare by `NodeId`, which is node identity.

use dom::utils::{collapse_whitespace, get_text_content};
use dom::{DomArena, DomNode, NodeId};
use std::fmt;

/// Tags counted as form controls ("listed elements")
const FORM_CONTROL_TAGS: &[&str] = &[
    "button", "fieldset", "input", "object", "output", "select", "textarea",
];

/// A node capability usable as a collection item type
pub trait Capability: Copy + Eq + fmt::Debug {
    /// Type test: `Some` when `node` implements this capability
    fn from_node(id: NodeId, node: &DomNode) -> Option<Self>;

    /// Handle of the underlying node
    fn node_id(self) -> NodeId;

    /// Widen to the base element capability
    fn element(self) -> Element {
        Element(self.node_id())
    }

    /// Look the node up and run the type test
    fn cast(arena: &DomArena, id: NodeId) -> Option<Self> {
        arena.get(id).ok().and_then(|node| Self::from_node(id, node))
    }
}

/// Any element node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element(NodeId);

impl Capability for Element {
    fn from_node(id: NodeId, node: &DomNode) -> Option<Self> {
        node.is_element().then_some(Element(id))
    }

    fn node_id(self) -> NodeId {
        self.0
    }

    fn element(self) -> Element {
        self
    }
}

impl Element {
    /// The node behind this handle, if it still exists
    pub fn node(self, arena: &DomArena) -> Option<&DomNode> {
        arena.get(self.0).ok()
    }

    pub fn tag_name(self, arena: &DomArena) -> Option<&str> {
        self.node(arena).and_then(DomNode::tag_name)
    }

    /// ASCII case-insensitive tag test
    pub fn has_tag(self, arena: &DomArena, tag: &str) -> bool {
        self.node(arena).is_some_and(|node| node.has_tag(tag))
    }

    /// The `id` attribute
    pub fn id(self, arena: &DomArena) -> Option<&str> {
        self.node(arena).and_then(DomNode::id)
    }

    /// Generic named attribute
    pub fn attr<'a>(self, arena: &'a DomArena, name: &str) -> Option<&'a str> {
        self.node(arena).and_then(|node| node.attr(name))
    }

    pub fn has_attr(self, arena: &DomArena, name: &str) -> bool {
        self.node(arena).is_some_and(|node| node.has_attr(name))
    }

    /// Whitespace-separated class list contains `class`
    pub fn has_class(self, arena: &DomArena, class: &str) -> bool {
        self.attr(arena, "class")
            .is_some_and(|classes| classes.split_ascii_whitespace().any(|c| c == class))
    }

    /// Concatenated descendant text, trimmed; empty for a missing node
    pub fn text_content(self, arena: &DomArena) -> String {
        get_text_content(arena, self.0).unwrap_or_default()
    }
}

/// A form-associated control (`button`, `fieldset`, `input`, `object`,
/// `output`, `select`, `textarea`). Image inputs are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FormControl(NodeId);

impl Capability for FormControl {
    fn from_node(id: NodeId, node: &DomNode) -> Option<Self> {
        let tag = node.tag_name()?;
        if !FORM_CONTROL_TAGS.iter().any(|t| tag.eq_ignore_ascii_case(t)) {
            return None;
        }
        let image_input = tag.eq_ignore_ascii_case("input")
            && node
                .attr("type")
                .is_some_and(|kind| kind.eq_ignore_ascii_case("image"));
        (!image_input).then_some(FormControl(id))
    }

    fn node_id(self) -> NodeId {
        self.0
    }
}

impl FormControl {
    /// The `name` attribute
    pub fn name(self, arena: &DomArena) -> Option<&str> {
        self.element().attr(arena, "name")
    }

    pub fn is_disabled(self, arena: &DomArena) -> bool {
        self.element().has_attr(arena, "disabled")
    }
}

/// An `option` element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OptionElement(NodeId);

impl Capability for OptionElement {
    fn from_node(id: NodeId, node: &DomNode) -> Option<Self> {
        node.has_tag("option").then_some(OptionElement(id))
    }

    fn node_id(self) -> NodeId {
        self.0
    }
}

impl OptionElement {
    /// The `value` attribute, falling back to the option's text
    pub fn value(self, arena: &DomArena) -> String {
        match self.element().attr(arena, "value") {
            Some(value) => value.to_string(),
            None => self.text(arena),
        }
    }

    /// Text with whitespace collapsed
    pub fn text(self, arena: &DomArena) -> String {
        collapse_whitespace(&self.element().text_content(arena))
    }

    /// The `label` attribute, falling back to the option's text
    pub fn label(self, arena: &DomArena) -> String {
        match self.element().attr(arena, "label") {
            Some(label) => label.to_string(),
            None => self.text(arena),
        }
    }

    pub fn is_selected(self, arena: &DomArena) -> bool {
        self.element().has_attr(arena, "selected")
    }

    pub fn is_disabled(self, arena: &DomArena) -> bool {
        self.element().has_attr(arena, "disabled")
    }
}
