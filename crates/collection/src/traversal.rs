//! Traversal engine
//!
//! Lazy document-order walk below a root, yielding the nodes that pass a
//! capability filter and an optional predicate.
//!
//! ```text
//! stack: [children(root).iter(), children(c0).iter(), ...]
//!          ↑ bottom                ↑ top = deepest open level
//! ```
//!
//! Each `next()` pulls one child from the top iterator, pushes that child's
//! own children (recursive mode only) and yields it if it matches. Because
//! the child is yielded before its children are pulled, parents always come
//! before their descendants.

use crate::capability::Capability;
use dom::{DomArena, NodeId};
use smallvec::{smallvec, SmallVec};
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::slice;

/// Extra filter applied after the capability test
pub type Predicate<T> = dyn Fn(&DomArena, T) -> bool;

/// Lazy pre-order sequence of `T` below a root
pub struct Traversal<'a, T> {
    arena: &'a DomArena,
    stack: SmallVec<[slice::Iter<'a, NodeId>; 8]>,
    recursive: bool,
    predicate: Option<&'a Predicate<T>>,
    _item: PhantomData<T>,
}

/// Start a traversal of `root`'s children (and their subtrees when
/// `recursive`). `root` itself is never yielded.
pub fn traverse<'a, T: Capability>(
    arena: &'a DomArena,
    root: NodeId,
    recursive: bool,
    predicate: Option<&'a Predicate<T>>,
) -> Traversal<'a, T> {
    let stack = match arena.get(root) {
        Ok(node) => smallvec![node.children_ids.iter()],
        Err(_) => {
            tracing::warn!("Traversal root {} is not in the arena", root);
            SmallVec::new()
        }
    };

    Traversal {
        arena,
        stack,
        recursive,
        predicate,
        _item: PhantomData,
    }
}

impl<'a, T: Capability> Iterator for Traversal<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let arena = self.arena;

        loop {
            let Some(&child_id) = self.stack.last_mut()?.next() else {
                self.stack.pop();
                continue;
            };

            let Ok(child) = arena.get(child_id) else {
                tracing::warn!("Skipping dangling child {} during traversal", child_id);
                continue;
            };

            if self.recursive && !child.children_ids.is_empty() {
                self.stack.push(child.children_ids.iter());
            }

            let Some(item) = T::from_node(child_id, child) else {
                continue;
            };
            if self.predicate.map_or(true, |predicate| predicate(arena, item)) {
                return Some(item);
            }
        }
    }
}

impl<T: Capability> FusedIterator for Traversal<'_, T> {}
