//! `HtmlCollection` - the element-typed live collection
//!
//! Thin composition over `Collection<Element>` plus the usual producers:
//! element children, descendants, tag-name and class-name queries.

use crate::capability::Element;
use crate::collection::{Collection, Items, Key};
use dom::{DomArena, NodeId};

#[derive(Debug, Clone)]
pub struct HtmlCollection {
    inner: Collection<Element>,
}

impl HtmlCollection {
    /// Element children of `root`
    pub fn children(root: NodeId) -> Self {
        Collection::<Element>::new(root).recursive(false).into()
    }

    /// All elements below `root`, in document order
    pub fn descendants(root: NodeId) -> Self {
        Collection::<Element>::new(root).into()
    }

    /// Descendant elements with the given tag (ASCII case-insensitive);
    /// `*` matches every element
    pub fn by_tag_name(root: NodeId, tag: &str) -> Self {
        if tag == "*" {
            return Self::descendants(root);
        }
        let tag = tag.to_string();
        Collection::<Element>::new(root)
            .filter(move |arena, el| el.has_tag(arena, &tag))
            .into()
    }

    /// Descendant elements carrying every class in the whitespace-separated
    /// `class_names`; an empty list matches nothing
    pub fn by_class_name(root: NodeId, class_names: &str) -> Self {
        let classes: Vec<String> = class_names
            .split_ascii_whitespace()
            .map(str::to_string)
            .collect();
        if classes.is_empty() {
            return Self::from_elements(Vec::new());
        }
        Collection::<Element>::new(root)
            .filter(move |arena, el| classes.iter().all(|class| el.has_class(arena, class)))
            .into()
    }

    /// Fixed list of elements
    pub fn from_elements(elements: impl IntoIterator<Item = Element>) -> Self {
        Collection::from_items(elements).into()
    }

    pub fn length(&self, arena: &DomArena) -> usize {
        self.inner.length(arena)
    }

    pub fn at(&self, arena: &DomArena, index: usize) -> Option<Element> {
        self.inner.at(arena, index)
    }

    pub fn named(&self, arena: &DomArena, key: &str) -> Option<Element> {
        self.inner.named(arena, key)
    }

    pub fn index_of(&self, arena: &DomArena, item: Element) -> Option<usize> {
        self.inner.index_of(arena, item)
    }

    pub fn get<'k>(&self, arena: &DomArena, key: impl Into<Key<'k>>) -> Option<Element> {
        self.inner.get(arena, key)
    }

    pub fn iter<'a>(&'a self, arena: &'a DomArena) -> Items<'a, Element> {
        self.inner.iter(arena)
    }

    /// The underlying generic collection
    pub fn as_collection(&self) -> &Collection<Element> {
        &self.inner
    }
}

impl From<Collection<Element>> for HtmlCollection {
    fn from(inner: Collection<Element>) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::Capability;
    use crate::test_support::{element, Fixture};

    fn tags(arena: &DomArena, collection: &HtmlCollection) -> Vec<String> {
        collection
            .iter(arena)
            .filter_map(|el| el.tag_name(arena).map(str::to_string))
            .collect()
    }

    #[test]
    fn test_children_vs_descendants() {
        let fx = Fixture::nested();
        let children = HtmlCollection::children(fx.root);
        let all = HtmlCollection::descendants(fx.root);

        assert_eq!(tags(&fx.arena, &children), vec!["div", "p"]);
        assert_eq!(all.length(&fx.arena), 5);
        // Depth-1 only
        for i in 0..children.length(&fx.arena) {
            let el = children.at(&fx.arena, i).unwrap();
            let parent = fx.arena.get(el.node_id()).unwrap().parent_id;
            assert_eq!(parent, Some(fx.root));
        }
    }

    #[test]
    fn test_by_tag_name() {
        let mut fx = Fixture::nested();
        let spans = HtmlCollection::by_tag_name(fx.root, "SPAN");
        assert_eq!(spans.length(&fx.arena), 1);

        let p = fx.child(1);
        element(&mut fx.arena, p, "span", &[]);
        assert_eq!(spans.length(&fx.arena), 2);

        let all = HtmlCollection::by_tag_name(fx.root, "*");
        assert_eq!(all.length(&fx.arena), 6);
    }

    #[test]
    fn test_by_class_name() {
        let mut arena = DomArena::new();
        let root = arena.create_element("body");
        let both = element(&mut arena, root, "div", &[("class", "card active")]);
        element(&mut arena, root, "div", &[("class", "card")]);

        let active = HtmlCollection::by_class_name(root, " active card ");
        let items: Vec<_> = active.iter(&arena).collect();
        assert_eq!(items, vec![Element::cast(&arena, both).unwrap()]);

        assert_eq!(HtmlCollection::by_class_name(root, "  ").length(&arena), 0);
    }

    #[test]
    fn test_named_and_get() {
        let fx = Fixture::flat();
        let all = HtmlCollection::descendants(fx.root);
        let div = Element::cast(&fx.arena, fx.child(0)).unwrap();
        assert_eq!(all.named(&fx.arena, "a"), Some(div));
        assert_eq!(all.get(&fx.arena, 0usize), Some(div));
        assert_eq!(all.index_of(&fx.arena, div), Some(0));
        assert!(all.as_collection().is_live());
    }
}
