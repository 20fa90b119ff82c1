//! Select control - selection state on top of an options collection
//!
//! The selected index is not stored anywhere: it is the position of the
//! selected option in the live options list, looked up on every call.

use crate::capability::{Capability, Element, OptionElement};
use crate::options::OptionsCollection;
use dom::{DomArena, DomError, NodeId, Result};

/// A `select` element
#[derive(Debug, Clone)]
pub struct SelectControl {
    select: Element,
    options: OptionsCollection,
}

impl SelectControl {
    /// Wrap `id`, which must be a `select` element
    pub fn new(arena: &DomArena, id: NodeId) -> Result<Self> {
        let node = arena.get(id)?;
        if !node.has_tag("select") {
            return Err(DomError::InvalidNodeType {
                expected: "select".to_string(),
                actual: node
                    .tag_name()
                    .unwrap_or_else(|| node.node_type.name())
                    .to_string(),
            });
        }
        Ok(Self {
            select: Element::from_node(id, node).ok_or(DomError::NodeNotFound(id))?,
            options: OptionsCollection::new(id),
        })
    }

    pub fn element(&self) -> Element {
        self.select
    }

    /// Live options list
    pub fn options(&self) -> &OptionsCollection {
        &self.options
    }

    pub fn is_multiple(&self, arena: &DomArena) -> bool {
        self.select.has_attr(arena, "multiple")
    }

    /// First option marked `selected`
    pub fn selected_option(&self, arena: &DomArena) -> Option<OptionElement> {
        self.options.selected(arena).next()
    }

    /// Position of the selected option, `-1` when nothing is selected
    pub fn selected_index(&self, arena: &DomArena) -> i32 {
        self.selected_option(arena)
            .and_then(|option| self.options.index_of(arena, option))
            .map_or(-1, |index| index as i32)
    }

    /// Select the option at `index`. A single select deselects every other
    /// option; a `multiple` select adds to its selection. An out-of-range
    /// index clears the selection in both modes.
    pub fn set_selected_index(&self, arena: &mut DomArena, index: i32) -> Result<()> {
        let options: Vec<OptionElement> = self.options.iter(arena).collect();
        let target = usize::try_from(index)
            .ok()
            .and_then(|index| options.get(index).copied());

        if target.is_none() || !self.is_multiple(arena) {
            for option in &options {
                if Some(*option) != target {
                    arena.remove_attribute(option.node_id(), "selected")?;
                }
            }
        }
        if let Some(option) = target {
            arena.set_attribute(option.node_id(), "selected", "")?;
        }

        tracing::debug!(
            "Select {} selected index set to {}",
            self.select.node_id(),
            index
        );
        Ok(())
    }

    /// Value of the selected option, empty when none
    pub fn value(&self, arena: &DomArena) -> String {
        self.selected_option(arena)
            .map(|option| option.value(arena))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::element;

    fn select(attrs: &[(&str, &str)]) -> (DomArena, NodeId) {
        let mut arena = DomArena::new();
        let root = arena.create_element("form");
        let select = element(&mut arena, root, "select", attrs);
        element(&mut arena, select, "option", &[("value", "us"), ("disabled", "")]);
        element(&mut arena, select, "option", &[("value", "uk")]);
        element(&mut arena, select, "option", &[("value", "de")]);
        (arena, select)
    }

    #[test]
    fn test_rejects_non_select() {
        let mut arena = DomArena::new();
        let div = arena.create_element("div");
        let text = arena.create_text("x");

        assert!(matches!(
            SelectControl::new(&arena, div),
            Err(DomError::InvalidNodeType { .. })
        ));
        assert!(matches!(
            SelectControl::new(&arena, text),
            Err(DomError::InvalidNodeType { .. })
        ));
        assert!(matches!(
            SelectControl::new(&arena, 77),
            Err(DomError::NodeNotFound(77))
        ));
    }

    #[test]
    fn test_nothing_marked_selected() {
        let cases: [&[(&str, &str)]; 3] = [&[], &[("multiple", "")], &[("size", "4")]];
        for attrs in cases {
            let (arena, id) = select(attrs);
            let control = SelectControl::new(&arena, id).unwrap();
            assert_eq!(control.selected_option(&arena), None);
            assert_eq!(control.selected_index(&arena), -1);
            assert_eq!(control.value(&arena), "");
        }
    }

    #[test]
    fn test_marked_option_wins() {
        let (mut arena, id) = select(&[]);
        let control = SelectControl::new(&arena, id).unwrap();
        let de = control.options().at(&arena, 2).unwrap();
        arena.set_attribute(de.node_id(), "selected", "").unwrap();

        assert_eq!(control.selected_option(&arena), Some(de));
        assert_eq!(control.selected_index(&arena), 2);
        assert_eq!(control.value(&arena), "de");
    }

    #[test]
    fn test_set_selected_index() {
        let (mut arena, id) = select(&[]);
        let control = SelectControl::new(&arena, id).unwrap();

        control.set_selected_index(&mut arena, 2).unwrap();
        assert_eq!(control.selected_index(&arena), 2);
        assert_eq!(control.value(&arena), "de");
        assert_eq!(control.options().selected(&arena).count(), 1);

        control.set_selected_index(&mut arena, 1).unwrap();
        assert_eq!(control.selected_index(&arena), 1);
        assert_eq!(control.options().selected(&arena).count(), 1);
    }

    #[test]
    fn test_clear_single_select() {
        let (mut arena, id) = select(&[]);
        let control = SelectControl::new(&arena, id).unwrap();
        control.set_selected_index(&mut arena, 2).unwrap();

        control.set_selected_index(&mut arena, -1).unwrap();
        assert_eq!(control.selected_index(&arena), -1);
        assert_eq!(control.value(&arena), "");
        assert_eq!(control.options().selected(&arena).count(), 0);

        control.set_selected_index(&mut arena, 1).unwrap();
        control.set_selected_index(&mut arena, 3).unwrap();
        assert_eq!(control.selected_index(&arena), -1);
    }

    #[test]
    fn test_multiple_select_accumulates() {
        let (mut arena, id) = select(&[("multiple", "")]);
        let control = SelectControl::new(&arena, id).unwrap();

        control.set_selected_index(&mut arena, 0).unwrap();
        control.set_selected_index(&mut arena, 2).unwrap();
        assert_eq!(control.options().selected(&arena).count(), 2);
        // First selected option in document order
        assert_eq!(control.selected_index(&arena), 0);
        assert_eq!(control.value(&arena), "us");

        control.set_selected_index(&mut arena, -1).unwrap();
        assert_eq!(control.options().selected(&arena).count(), 0);
    }

    #[test]
    fn test_selected_index_follows_tree() {
        let (mut arena, id) = select(&[("multiple", "")]);
        let control = SelectControl::new(&arena, id).unwrap();
        control.set_selected_index(&mut arena, 2).unwrap();
        assert_eq!(control.selected_index(&arena), 2);

        // Removing an earlier option shifts the index without any refresh
        let first = control.options().at(&arena, 0).unwrap();
        arena.remove_child(id, first.node_id()).unwrap();
        assert_eq!(control.selected_index(&arena), 1);

        control.set_selected_index(&mut arena, -1).unwrap();
        assert_eq!(control.selected_index(&arena), -1);
    }
}
