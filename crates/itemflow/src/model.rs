//! Data models backing a collection view.
//!
//! [`ItemsModel`] is the user-facing data source contract: an ordered
//! collection of items of type `D`, optionally partitioned into groups where
//! each group carries its own context object (also of type `D`; it becomes
//! the binding context of the group's header and footer items).
//!
//! Two ready-made implementations are provided:
//!
//! - [`VecModel`]: a flat list.
//! - [`GroupedModel`]: a list of [`GroupSection`]s.
//!
//! Models use interior mutability so hosts can share them with the view via
//! `Arc` and mutate in place; after mutating, notify the view through
//! [`CollectionView::source_changed`](crate::CollectionView::source_changed).

use parking_lot::RwLock;

/// The data source contract consumed by the collection view.
///
/// The default grouping methods describe a flat, ungrouped source; grouped
/// models override all four. `item(i)` must enumerate the same elements as
/// the per-group accessors, flattened in group order.
pub trait ItemsModel<D>: Send + Sync {
    /// Total number of data items (across all groups, if grouped).
    fn count(&self) -> usize;

    /// The item at the given flat position.
    fn item(&self, index: usize) -> Option<D>;

    /// Number of groups; zero for flat sources.
    fn group_count(&self) -> usize {
        0
    }

    /// The context object of the given group.
    fn group(&self, _group: usize) -> Option<D> {
        None
    }

    /// Number of items in the given group.
    fn items_in_group(&self, _group: usize) -> usize {
        0
    }

    /// The item at the given position within a group.
    fn item_in_group(&self, _group: usize, _index: usize) -> Option<D> {
        None
    }
}

/// A flat, vector-backed items model.
///
/// # Example
///
/// ```
/// use itemflow::{ItemsModel, VecModel};
///
/// let model = VecModel::new(vec!["apple", "banana", "cherry"]);
/// assert_eq!(model.count(), 3);
/// assert_eq!(model.item(1), Some("banana"));
/// ```
pub struct VecModel<D> {
    items: RwLock<Vec<D>>,
}

impl<D: Clone + Send + Sync + 'static> VecModel<D> {
    /// Creates a model over the given items.
    pub fn new(items: Vec<D>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    /// Appends an item.
    pub fn push(&self, item: D) {
        self.items.write().push(item);
    }

    /// Inserts an item at the given position.
    pub fn insert(&self, index: usize, item: D) {
        self.items.write().insert(index, item);
    }

    /// Removes and returns the item at the given position, if any.
    pub fn remove(&self, index: usize) -> Option<D> {
        let mut items = self.items.write();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Replaces the whole item list.
    pub fn set_items(&self, items: Vec<D>) {
        *self.items.write() = items;
    }
}

impl<D: Clone + Send + Sync + 'static> ItemsModel<D> for VecModel<D> {
    fn count(&self) -> usize {
        self.items.read().len()
    }

    fn item(&self, index: usize) -> Option<D> {
        self.items.read().get(index).cloned()
    }
}

/// One group of a [`GroupedModel`]: a context object plus member items.
#[derive(Debug, Clone)]
pub struct GroupSection<D> {
    /// The group's own data object; binding context of its header/footer.
    pub context: D,
    /// The group's member items.
    pub items: Vec<D>,
}

impl<D> GroupSection<D> {
    /// Creates a group section.
    pub fn new(context: D, items: Vec<D>) -> Self {
        Self { context, items }
    }
}

/// A grouped items model backed by a vector of sections.
///
/// # Example
///
/// ```
/// use itemflow::{GroupSection, GroupedModel, ItemsModel};
///
/// let model = GroupedModel::new(vec![
///     GroupSection::new("fruit", vec!["apple", "banana"]),
///     GroupSection::new("veg", vec!["carrot"]),
/// ]);
/// assert_eq!(model.group_count(), 2);
/// assert_eq!(model.count(), 3);
/// assert_eq!(model.item(2), Some("carrot"));
/// assert_eq!(model.group(1), Some("veg"));
/// ```
pub struct GroupedModel<D> {
    groups: RwLock<Vec<GroupSection<D>>>,
}

impl<D: Clone + Send + Sync + 'static> GroupedModel<D> {
    /// Creates a model over the given sections.
    pub fn new(groups: Vec<GroupSection<D>>) -> Self {
        Self {
            groups: RwLock::new(groups),
        }
    }

    /// Appends a group section.
    pub fn push_group(&self, group: GroupSection<D>) {
        self.groups.write().push(group);
    }

    /// Replaces all sections.
    pub fn set_groups(&self, groups: Vec<GroupSection<D>>) {
        *self.groups.write() = groups;
    }

    /// Removes and returns the item at a position within a group, if any.
    pub fn remove_item(&self, group: usize, index: usize) -> Option<D> {
        let mut groups = self.groups.write();
        let section = groups.get_mut(group)?;
        if index < section.items.len() {
            Some(section.items.remove(index))
        } else {
            None
        }
    }
}

impl<D: Clone + Send + Sync + 'static> ItemsModel<D> for GroupedModel<D> {
    fn count(&self) -> usize {
        self.groups.read().iter().map(|g| g.items.len()).sum()
    }

    fn item(&self, index: usize) -> Option<D> {
        let groups = self.groups.read();
        let mut remaining = index;
        for group in groups.iter() {
            if remaining < group.items.len() {
                return Some(group.items[remaining].clone());
            }
            remaining -= group.items.len();
        }
        None
    }

    fn group_count(&self) -> usize {
        self.groups.read().len()
    }

    fn group(&self, group: usize) -> Option<D> {
        self.groups.read().get(group).map(|g| g.context.clone())
    }

    fn items_in_group(&self, group: usize) -> usize {
        self.groups.read().get(group).map_or(0, |g| g.items.len())
    }

    fn item_in_group(&self, group: usize, index: usize) -> Option<D> {
        self.groups.read().get(group)?.items.get(index).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_model_basics() {
        let model = VecModel::new(vec![1, 2, 3]);
        assert_eq!(model.count(), 3);
        assert_eq!(model.item(0), Some(1));
        assert_eq!(model.item(3), None);

        model.push(4);
        assert_eq!(model.count(), 4);

        assert_eq!(model.remove(0), Some(1));
        assert_eq!(model.item(0), Some(2));
        assert_eq!(model.remove(10), None);
    }

    #[test]
    fn test_grouped_model_flattening() {
        let model = GroupedModel::new(vec![
            GroupSection::new("a", vec!["a0", "a1"]),
            GroupSection::new("b", vec![]),
            GroupSection::new("c", vec!["c0"]),
        ]);

        assert_eq!(model.count(), 3);
        assert_eq!(model.group_count(), 3);
        assert_eq!(model.item(0), Some("a0"));
        assert_eq!(model.item(1), Some("a1"));
        assert_eq!(model.item(2), Some("c0"));
        assert_eq!(model.item(3), None);

        assert_eq!(model.items_in_group(1), 0);
        assert_eq!(model.item_in_group(2, 0), Some("c0"));
        assert_eq!(model.item_in_group(2, 1), None);
        assert_eq!(model.group(0), Some("a"));
    }

    #[test]
    fn test_grouped_model_remove_item() {
        let model = GroupedModel::new(vec![GroupSection::new(0, vec![10, 11])]);
        assert_eq!(model.remove_item(0, 0), Some(10));
        assert_eq!(model.count(), 1);
        assert_eq!(model.remove_item(0, 5), None);
        assert_eq!(model.remove_item(3, 0), None);
    }
}
