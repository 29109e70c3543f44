//! Selection state and notification types.
//!
//! Selection holds data values, never view objects, so it survives recycling:
//! an item scrolled out and realized again gets its selected visual restored
//! from this state. Equality over `D` is `PartialEq`; hosts wanting identity
//! semantics wrap their data in a pointer-comparing newtype.

use std::any::Any;

/// Selection behavior of a collection view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Selection is disabled.
    #[default]
    None,
    /// At most one item; tapping the selected item deselects it.
    Single,
    /// Exactly-one semantics: tapping the selected item keeps it selected.
    SingleAlways,
    /// Any number of items.
    Multiple,
}

/// Ordered, uniqueness-enforced list of selected data values.
#[derive(Debug, Clone)]
pub struct SelectionList<D> {
    items: Vec<D>,
}

impl<D: PartialEq> Default for SelectionList<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: PartialEq> SelectionList<D> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether the value is selected.
    pub fn contains(&self, item: &D) -> bool {
        self.items.contains(item)
    }

    /// Appends a value; duplicates are rejected. Returns whether it was added.
    pub fn add(&mut self, item: D) -> bool {
        if self.items.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes a value. Returns whether it was present.
    pub fn remove(&mut self, item: &D) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(slot) => {
                self.items.remove(slot);
                true
            }
            None => false,
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The selected values in selection order.
    pub fn as_slice(&self) -> &[D] {
        &self.items
    }

    /// Iterates the selected values in selection order.
    pub fn iter(&self) -> impl Iterator<Item = &D> {
        self.items.iter()
    }
}

impl<D: PartialEq + Clone> SelectionList<D> {
    /// Snapshot of the selected values.
    pub fn to_vec(&self) -> Vec<D> {
        self.items.clone()
    }
}

/// Payload of the `selection_changed` signal: before and after snapshots.
///
/// For single-selection transitions each side holds zero or one value.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionChangedEvent<D> {
    /// Selection before the change, in selection order.
    pub previous: Vec<D>,
    /// Selection after the change, in selection order.
    pub current: Vec<D>,
}

/// A host command bound to selection changes.
///
/// When bound on the view, the command runs before the `selection_changed`
/// signal, gated by [`can_execute`](Self::can_execute), with the view's
/// configured parameter.
pub trait SelectionCommand: Send + Sync {
    /// Whether the command may run for the given parameter.
    fn can_execute(&self, parameter: Option<&(dyn Any + Send + Sync)>) -> bool {
        let _ = parameter;
        true
    }

    /// Runs the command.
    fn execute(&mut self, parameter: Option<&(dyn Any + Send + Sync)>);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_preserves_order_and_uniqueness() {
        let mut list = SelectionList::new();
        assert!(list.add("b"));
        assert!(list.add("a"));
        assert!(!list.add("b"));
        assert_eq!(list.as_slice(), &["b", "a"]);
        assert_eq!(list.len(), 2);
        assert!(list.contains(&"a"));
    }

    #[test]
    fn test_list_remove() {
        let mut list = SelectionList::new();
        list.add(1);
        list.add(2);
        list.add(3);

        assert!(list.remove(&2));
        assert!(!list.remove(&2));
        assert_eq!(list.as_slice(), &[1, 3]);

        list.clear();
        assert!(list.is_empty());
    }

    #[test]
    fn test_default_mode_is_none() {
        assert_eq!(SelectionMode::default(), SelectionMode::None);
    }
}
