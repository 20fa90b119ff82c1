//! Tree fixtures shared by the unit tests

use dom::{DomArena, DomNode, NodeId};

/// Create an element with attributes and append it to `parent`
pub fn element(arena: &mut DomArena, parent: NodeId, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let node = attrs
        .iter()
        .fold(DomNode::element(tag), |node, (name, value)| {
            node.with_attr(*name, *value)
        });
    let id = arena.add_node(node);
    arena.append_child(parent, id).unwrap();
    id
}

/// Route `tracing` output through the test harness
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

pub struct Fixture {
    pub arena: DomArena,
    pub root: NodeId,
}

impl Fixture {
    /// ```text
    /// body
    /// ├── div#a
    /// ├── span[name=a]
    /// └── p
    /// ```
    pub fn flat() -> Self {
        let mut arena = DomArena::new();
        let root = arena.create_element("body");
        element(&mut arena, root, "div", &[("id", "a")]);
        element(&mut arena, root, "span", &[("name", "a")]);
        element(&mut arena, root, "p", &[]);
        Self { arena, root }
    }

    /// ```text
    /// body
    /// ├── div#outer
    /// │   └── span[name=inner]
    /// │       └── b
    /// └── p
    ///     └── i#inner
    /// ```
    pub fn nested() -> Self {
        let mut arena = DomArena::new();
        let root = arena.create_element("body");
        let div = element(&mut arena, root, "div", &[("id", "outer")]);
        let span = element(&mut arena, div, "span", &[("name", "inner")]);
        element(&mut arena, span, "b", &[]);
        let p = element(&mut arena, root, "p", &[]);
        element(&mut arena, p, "i", &[("id", "inner")]);
        Self { arena, root }
    }

    /// The n-th child of the root
    pub fn child(&self, n: usize) -> NodeId {
        self.arena.get(self.root).unwrap().children_ids[n]
    }
}
