//! Collection wrapper
//!
//! Positional and named access over either a fixed sequence or a live
//! traversal descriptor. A live collection stores only `(root, recursive,
//! predicate)`; every accessor walks the tree again, so results always
//! reflect the arena passed to that call.
//!
//! Cost: `length`, `named` and `index_of` are O(subtree) per call, `at(i)`
//! stops after `i + 1` matches. Nothing is cached.

use crate::capability::{Capability, Element};
use crate::traversal::{traverse, Predicate, Traversal};
use dom::{DomArena, NodeId};
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;
use std::slice;

/// Indexer key: position or id/name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key<'k> {
    Index(usize),
    Name(&'k str),
}

impl From<usize> for Key<'_> {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'k> From<&'k str> for Key<'k> {
    fn from(name: &'k str) -> Self {
        Key::Name(name)
    }
}

enum Source<T> {
    Static(Rc<[T]>),
    Live {
        root: NodeId,
        recursive: bool,
        predicate: Option<Rc<Predicate<T>>>,
    },
}

impl<T> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Static(items) => Source::Static(Rc::clone(items)),
            Source::Live {
                root,
                recursive,
                predicate,
            } => Source::Live {
                root: *root,
                recursive: *recursive,
                predicate: predicate.clone(),
            },
        }
    }
}

/// A view of nodes implementing `T`
///
/// Cloning is cheap and yields a collection over the same source.
pub struct Collection<T> {
    source: Source<T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.source {
            Source::Static(items) => f.debug_tuple("Collection::Static").field(items).finish(),
            Source::Live {
                root,
                recursive,
                predicate,
            } => f
                .debug_struct("Collection::Live")
                .field("root", root)
                .field("recursive", recursive)
                .field("filtered", &predicate.is_some())
                .finish(),
        }
    }
}

impl<T: Capability> Collection<T> {
    /// Live collection over the whole subtree of `root`, unfiltered
    ///
    /// Use [`recursive`](Self::recursive) and [`filter`](Self::filter) to
    /// narrow it. `root` is held as a handle only.
    pub fn new(root: NodeId) -> Self {
        tracing::trace!("Live collection over node {}", root);
        Self {
            source: Source::Live {
                root,
                recursive: true,
                predicate: None,
            },
        }
    }

    /// Collection over a fixed sequence, in the given order
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let items: Rc<[T]> = items.into_iter().collect();
        tracing::trace!("Static collection of {} items", items.len());
        Self {
            source: Source::Static(items),
        }
    }

    /// Descend below direct children (default `true`). No effect on a
    /// static collection.
    pub fn recursive(mut self, recursive: bool) -> Self {
        if let Source::Live { recursive: r, .. } = &mut self.source {
            *r = recursive;
        }
        self
    }

    /// Keep only items for which `predicate` holds, replacing any earlier
    /// predicate. No effect on a static collection.
    pub fn filter<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&DomArena, T) -> bool + 'static,
    {
        if let Source::Live { predicate: p, .. } = &mut self.source {
            *p = Some(Rc::new(predicate));
        }
        self
    }

    /// Root handle of a live collection
    pub fn root(&self) -> Option<NodeId> {
        match &self.source {
            Source::Static(_) => None,
            Source::Live { root, .. } => Some(*root),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.source, Source::Live { .. })
    }

    /// Fresh sequence of the current matches
    ///
    /// The arena is borrowed for the life of the iterator, so the tree
    /// cannot change under it.
    pub fn iter<'a>(&'a self, arena: &'a DomArena) -> Items<'a, T> {
        let inner = match &self.source {
            Source::Static(items) => ItemsInner::Static(items.iter()),
            Source::Live {
                root,
                recursive,
                predicate,
            } => ItemsInner::Live(traverse(arena, *root, *recursive, predicate.as_deref())),
        };
        Items { inner }
    }

    /// Same sequence, widened to the base element capability
    pub fn elements<'a>(&'a self, arena: &'a DomArena) -> impl Iterator<Item = Element> + 'a {
        self.iter(arena).map(Capability::element)
    }

    /// Number of current matches
    pub fn length(&self, arena: &DomArena) -> usize {
        self.iter(arena).count()
    }

    pub fn is_empty(&self, arena: &DomArena) -> bool {
        self.iter(arena).next().is_none()
    }

    /// Item at zero-based `index`, `None` when out of range
    pub fn at(&self, arena: &DomArena, index: usize) -> Option<T> {
        self.iter(arena).nth(index)
    }

    /// First item whose `id` is `key`; failing that, first item whose
    /// `name` attribute is `key`. An empty key matches nothing.
    pub fn named(&self, arena: &DomArena, key: &str) -> Option<T> {
        if key.is_empty() {
            return None;
        }
        self.iter(arena)
            .find(|item| item.element().id(arena) == Some(key))
            .or_else(|| {
                self.iter(arena)
                    .find(|item| item.element().attr(arena, "name") == Some(key))
            })
    }

    /// Position of `item` by identity, `None` when not currently present
    pub fn index_of(&self, arena: &DomArena, item: T) -> Option<usize> {
        self.iter(arena).position(|candidate| candidate == item)
    }

    pub fn contains(&self, arena: &DomArena, item: T) -> bool {
        self.index_of(arena, item).is_some()
    }

    /// Combined indexer: `get(&arena, 2usize)` or `get(&arena, "name")`
    pub fn get<'k>(&self, arena: &DomArena, key: impl Into<Key<'k>>) -> Option<T> {
        match key.into() {
            Key::Index(index) => self.at(arena, index),
            Key::Name(name) => self.named(arena, name),
        }
    }

    /// Pair the collection with a tree for argument-free access
    pub fn bind<'a>(&'a self, arena: &'a DomArena) -> Bound<'a, T> {
        Bound {
            collection: self,
            arena,
        }
    }
}

/// Iterator returned by [`Collection::iter`]
pub struct Items<'a, T> {
    inner: ItemsInner<'a, T>,
}

enum ItemsInner<'a, T> {
    Static(slice::Iter<'a, T>),
    Live(Traversal<'a, T>),
}

impl<T: Capability> Iterator for Items<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match &mut self.inner {
            ItemsInner::Static(items) => items.next().copied(),
            ItemsInner::Live(traversal) => traversal.next(),
        }
    }
}

impl<T: Capability> FusedIterator for Items<'_, T> {}

/// A collection borrowed together with the tree it reads
pub struct Bound<'a, T> {
    collection: &'a Collection<T>,
    arena: &'a DomArena,
}

impl<T> Clone for Bound<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Bound<'_, T> {}

impl<'a, T: Capability> Bound<'a, T> {
    pub fn length(self) -> usize {
        self.collection.length(self.arena)
    }

    pub fn at(self, index: usize) -> Option<T> {
        self.collection.at(self.arena, index)
    }

    pub fn named(self, key: &str) -> Option<T> {
        self.collection.named(self.arena, key)
    }

    pub fn index_of(self, item: T) -> Option<usize> {
        self.collection.index_of(self.arena, item)
    }

    pub fn get<'k>(self, key: impl Into<Key<'k>>) -> Option<T> {
        self.collection.get(self.arena, key)
    }

    pub fn iter(self) -> Items<'a, T> {
        self.collection.iter(self.arena)
    }
}

impl<'a, T: Capability> IntoIterator for Bound<'a, T> {
    type Item = T;
    type IntoIter = Items<'a, T>;

    fn into_iter(self) -> Items<'a, T> {
        self.iter()
    }
}
