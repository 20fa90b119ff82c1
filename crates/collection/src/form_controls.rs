//! Form controls of a form element

use crate::capability::{Capability, Element, FormControl};
use crate::collection::{Collection, Items, Key};
use crate::html_collection::HtmlCollection;
use dom::{DomArena, NodeId};

/// Live list of the controls below a form, in document order
///
/// Same contract as [`Collection`], typed as [`FormControl`]. Also readable
/// as a plain element collection through [`as_html_collection`].
///
/// [`as_html_collection`]: FormControlsCollection::as_html_collection
#[derive(Debug, Clone)]
pub struct FormControlsCollection {
    form: NodeId,
    inner: Collection<FormControl>,
}

impl FormControlsCollection {
    pub fn new(form: NodeId) -> Self {
        Self {
            form,
            inner: Collection::new(form),
        }
    }

    /// The form this collection is rooted at
    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn length(&self, arena: &DomArena) -> usize {
        self.inner.length(arena)
    }

    pub fn at(&self, arena: &DomArena, index: usize) -> Option<FormControl> {
        self.inner.at(arena, index)
    }

    pub fn named(&self, arena: &DomArena, key: &str) -> Option<FormControl> {
        self.inner.named(arena, key)
    }

    pub fn index_of(&self, arena: &DomArena, item: FormControl) -> Option<usize> {
        self.inner.index_of(arena, item)
    }

    pub fn get<'k>(&self, arena: &DomArena, key: impl Into<Key<'k>>) -> Option<FormControl> {
        self.inner.get(arena, key)
    }

    pub fn iter<'a>(&'a self, arena: &'a DomArena) -> Items<'a, FormControl> {
        self.inner.iter(arena)
    }

    /// The same controls as base elements
    pub fn elements<'a>(&'a self, arena: &'a DomArena) -> impl Iterator<Item = Element> + 'a {
        self.inner.elements(arena)
    }

    /// Element-typed view over the same live sequence
    pub fn as_html_collection(&self) -> HtmlCollection {
        Collection::<Element>::new(self.form)
            .filter(|arena, el| FormControl::cast(arena, el.node_id()).is_some())
            .into()
    }
}

impl From<&FormControlsCollection> for HtmlCollection {
    fn from(controls: &FormControlsCollection) -> Self {
        controls.as_html_collection()
    }
}
