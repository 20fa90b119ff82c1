//! Live DOM collections
//!
//! A collection remembers *where* to look (a root handle, whether to
//! descend, an optional predicate) and never *what* it found. Each call
//! borrows the tree, walks it again and answers from the current state.
//!
//! ```text
//! Collection<T> ──iter(&arena)──► Traversal<T> ──► T (Copy handle)
//!      │                              │
//!      │                      Capability::from_node (type filter)
//!      ▼
//! HtmlCollection / FormControlsCollection / OptionsCollection
//! ```
//!
//! ```
//! use dom::DomArena;
//! use live_collection::{Capability, Collection, Element};
//!
//! let mut arena = DomArena::new();
//! let body = arena.create_element("body");
//! let all = Collection::<Element>::new(body);
//! assert_eq!(all.length(&arena), 0);
//!
//! let div = arena.create_element("div");
//! arena.append_child(body, div).unwrap();
//! assert_eq!(all.at(&arena, 0).map(|el| el.node_id()), Some(div));
//! ```

pub mod capability;
pub mod collection;
pub mod form_controls;
pub mod html_collection;
pub mod options;
pub mod select;
pub mod traversal;

#[cfg(test)]
mod test_support;

pub use capability::{Capability, Element, FormControl, OptionElement};
pub use collection::{Bound, Collection, Items, Key};
pub use form_controls::FormControlsCollection;
pub use html_collection::HtmlCollection;
pub use options::OptionsCollection;
pub use select::SelectControl;
pub use traversal::{traverse, Predicate, Traversal};
