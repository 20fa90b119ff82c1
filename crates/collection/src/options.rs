//! Options of a `select` element

use crate::capability::{Capability, OptionElement};
use crate::collection::{Collection, Items, Key};
use dom::{DomArena, NodeId};

/// Live list of a select's options
///
/// Includes `option` children of the select and of its `optgroup`
/// children; options nested any deeper are not part of the list.
#[derive(Debug, Clone)]
pub struct OptionsCollection {
    select: NodeId,
    inner: Collection<OptionElement>,
}

impl OptionsCollection {
    pub fn new(select: NodeId) -> Self {
        let inner = Collection::<OptionElement>::new(select)
            .filter(move |arena, option| is_listed(arena, select, option));
        Self { select, inner }
    }

    /// The owning select element
    pub fn select(&self) -> NodeId {
        self.select
    }

    pub fn length(&self, arena: &DomArena) -> usize {
        self.inner.length(arena)
    }

    pub fn at(&self, arena: &DomArena, index: usize) -> Option<OptionElement> {
        self.inner.at(arena, index)
    }

    pub fn named(&self, arena: &DomArena, key: &str) -> Option<OptionElement> {
        self.inner.named(arena, key)
    }

    pub fn index_of(&self, arena: &DomArena, item: OptionElement) -> Option<usize> {
        self.inner.index_of(arena, item)
    }

    pub fn get<'k>(&self, arena: &DomArena, key: impl Into<Key<'k>>) -> Option<OptionElement> {
        self.inner.get(arena, key)
    }

    pub fn iter<'a>(&'a self, arena: &'a DomArena) -> Items<'a, OptionElement> {
        self.inner.iter(arena)
    }

    /// Options currently carrying the `selected` attribute
    pub fn selected<'a>(&'a self, arena: &'a DomArena) -> impl Iterator<Item = OptionElement> + 'a {
        self.iter(arena).filter(move |option| option.is_selected(arena))
    }
}

fn is_listed(arena: &DomArena, select: NodeId, option: OptionElement) -> bool {
    let Ok(node) = arena.get(option.node_id()) else {
        return false;
    };
    match node.parent_id {
        Some(parent) if parent == select => true,
        Some(parent) => arena
            .get(parent)
            .is_ok_and(|group| group.has_tag("optgroup") && group.parent_id == Some(select)),
        None => false,
    }
}
