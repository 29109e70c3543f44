//! Item source adapter.
//!
//! [`SourceAdapter`] flattens an [`ItemsModel`] into the single index space
//! the layout and realization engine consume. The space interleaves the
//! optional header singleton, group boundary slots and the optional footer
//! singleton with the data items:
//!
//! ```text
//! [header?] [GH g0] items(g0).. [GF g0?] [GH g1] .. [footer?]     (grouped)
//! [header?] item0 item1 ..                          [footer?]     (flat)
//! ```
//!
//! Group footers occupy slots only while a group-footer template is installed;
//! installing or removing one renumbers every position after the first group.
//!
//! [`CollectionChange`] describes a mutation of the underlying model, reported
//! to the view through [`CollectionView::source_changed`](crate::CollectionView::source_changed).

use std::sync::Arc;

use crate::model::ItemsModel;

/// A change to the underlying items model.
///
/// `Remove` carries the removed data objects so the selection manager can
/// evict them; the other variants need no payload because the view re-reads
/// the model when it relayouts.
#[derive(Debug, Clone)]
pub enum CollectionChange<D> {
    /// Items were inserted.
    Add,
    /// Items were removed; carries the removed data objects.
    Remove {
        /// The data objects no longer present in the model.
        items: Vec<D>,
    },
    /// Items were replaced in place.
    Replace,
    /// Items were reordered.
    Move,
    /// The model was rebuilt wholesale.
    Reset,
}

/// What kind of slot a flattened position denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    /// The header singleton.
    Header,
    /// The footer singleton.
    Footer,
    /// A group-header boundary slot.
    GroupHeader,
    /// A group-footer boundary slot.
    GroupFooter,
    /// A plain data item.
    Item,
}

/// Flattens an [`ItemsModel`] into the index space consumed by layouts.
///
/// The adapter is rebuilt from the view's current templates and grouping mode
/// whenever the layout is reinitialized; its flags mirror which singleton and
/// boundary slots currently exist.
pub struct SourceAdapter<D> {
    model: Arc<dyn ItemsModel<D>>,
    grouped: bool,
    has_group_footers: bool,
    has_header: bool,
    has_footer: bool,
}

impl<D: Clone + Send + Sync + 'static> SourceAdapter<D> {
    /// Wraps a model with all singleton and boundary slots disabled.
    pub fn new(model: Arc<dyn ItemsModel<D>>) -> Self {
        Self {
            model,
            grouped: false,
            has_group_footers: false,
            has_header: false,
            has_footer: false,
        }
    }

    /// The wrapped model.
    pub fn model(&self) -> &Arc<dyn ItemsModel<D>> {
        &self.model
    }

    /// Whether group boundary slots are interleaved.
    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    /// Enables or disables group boundary slots.
    pub fn set_grouped(&mut self, grouped: bool) {
        self.grouped = grouped;
    }

    /// Whether each group run ends with a group-footer slot.
    pub fn has_group_footers(&self) -> bool {
        self.has_group_footers
    }

    /// Enables or disables group-footer slots.
    pub fn set_has_group_footers(&mut self, has: bool) {
        self.has_group_footers = has;
    }

    /// Whether position 0 is the header singleton.
    pub fn has_header(&self) -> bool {
        self.has_header
    }

    /// Claims or releases position 0 for the header singleton.
    pub fn set_has_header(&mut self, has: bool) {
        self.has_header = has;
    }

    /// Whether the last position is the footer singleton.
    pub fn has_footer(&self) -> bool {
        self.has_footer
    }

    /// Claims or releases the last position for the footer singleton.
    pub fn set_has_footer(&mut self, has: bool) {
        self.has_footer = has;
    }

    /// Total number of flattened positions.
    pub fn count(&self) -> usize {
        let mut count = self.model.count();
        if self.grouped {
            let groups = self.model.group_count();
            count += groups;
            if self.has_group_footers {
                count += groups;
            }
        }
        if self.has_header {
            count += 1;
        }
        if self.has_footer {
            count += 1;
        }
        count
    }

    /// Length of one group's run of slots, boundaries included.
    fn group_run_len(&self, group: usize) -> usize {
        let boundaries = if self.has_group_footers { 2 } else { 1 };
        boundaries + self.model.items_in_group(group)
    }

    /// Classifies a flattened position.
    ///
    /// `Item` and the boundary kinds carry no payload; pair this with
    /// [`get_item`](Self::get_item) and [`group_parent`](Self::group_parent)
    /// to fetch the data objects.
    pub fn slot_kind(&self, index: usize) -> Option<SlotKind> {
        let count = self.count();
        if index >= count {
            return None;
        }
        if self.has_header && index == 0 {
            return Some(SlotKind::Header);
        }
        if self.has_footer && index == count - 1 {
            return Some(SlotKind::Footer);
        }
        if !self.grouped {
            return Some(SlotKind::Item);
        }

        let mut offset = index - usize::from(self.has_header);
        for group in 0..self.model.group_count() {
            let run = self.group_run_len(group);
            if offset < run {
                return Some(if offset == 0 {
                    SlotKind::GroupHeader
                } else if self.has_group_footers && offset == run - 1 {
                    SlotKind::GroupFooter
                } else {
                    SlotKind::Item
                });
            }
            offset -= run;
        }
        None
    }

    /// Whether the position is a group-header boundary slot.
    pub fn is_group_header(&self, index: usize) -> bool {
        self.slot_kind(index) == Some(SlotKind::GroupHeader)
    }

    /// Whether the position is a group-footer boundary slot.
    pub fn is_group_footer(&self, index: usize) -> bool {
        self.slot_kind(index) == Some(SlotKind::GroupFooter)
    }

    /// The data object at a flattened position.
    ///
    /// Boundary slots yield their group's context object. Header and footer
    /// positions yield `None`; the view binds singletons itself.
    pub fn get_item(&self, index: usize) -> Option<D> {
        match self.slot_kind(index)? {
            SlotKind::Header | SlotKind::Footer => None,
            SlotKind::GroupHeader | SlotKind::GroupFooter => {
                let (group, _) = self.locate_in_group(index)?;
                self.model.group(group)
            }
            SlotKind::Item => {
                if !self.grouped {
                    return self.model.item(index - usize::from(self.has_header));
                }
                let (group, item) = self.locate_in_group(index)?;
                self.model.item_in_group(group, item?)
            }
        }
    }

    /// The enclosing group's context object for any position within a group
    /// run. `None` for flat sources and singleton positions.
    pub fn group_parent(&self, index: usize) -> Option<D> {
        let (group, _) = self.locate_in_group(index)?;
        self.model.group(group)
    }

    /// Resolves a grouped position to `(group, item-within-group)`.
    ///
    /// Boundary slots resolve with `None` as the item component.
    fn locate_in_group(&self, index: usize) -> Option<(usize, Option<usize>)> {
        if !self.grouped {
            return None;
        }
        match self.slot_kind(index)? {
            SlotKind::Header | SlotKind::Footer => return None,
            _ => {}
        }

        let mut offset = index - usize::from(self.has_header);
        for group in 0..self.model.group_count() {
            let run = self.group_run_len(group);
            if offset < run {
                let item = if offset == 0 || (self.has_group_footers && offset == run - 1) {
                    None
                } else {
                    Some(offset - 1)
                };
                return Some((group, item));
            }
            offset -= run;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupSection, GroupedModel, VecModel};

    fn flat(items: Vec<i32>) -> SourceAdapter<i32> {
        SourceAdapter::new(Arc::new(VecModel::new(items)))
    }

    fn grouped() -> SourceAdapter<i32> {
        // Group contexts are 100/200; items 1,2,3 and 4.
        let model = GroupedModel::new(vec![
            GroupSection::new(100, vec![1, 2, 3]),
            GroupSection::new(200, vec![4]),
        ]);
        let mut adapter = SourceAdapter::new(Arc::new(model));
        adapter.set_grouped(true);
        adapter
    }

    #[test]
    fn test_flat_count_and_items() {
        let adapter = flat(vec![10, 20, 30]);
        assert_eq!(adapter.count(), 3);
        assert_eq!(adapter.get_item(0), Some(10));
        assert_eq!(adapter.get_item(2), Some(30));
        assert_eq!(adapter.get_item(3), None);
        assert_eq!(adapter.slot_kind(1), Some(SlotKind::Item));
        assert_eq!(adapter.group_parent(0), None);
    }

    #[test]
    fn test_flat_header_footer_offsets() {
        let mut adapter = flat(vec![10, 20]);
        adapter.set_has_header(true);
        adapter.set_has_footer(true);

        assert_eq!(adapter.count(), 4);
        assert_eq!(adapter.slot_kind(0), Some(SlotKind::Header));
        assert_eq!(adapter.slot_kind(3), Some(SlotKind::Footer));
        assert_eq!(adapter.get_item(0), None);
        assert_eq!(adapter.get_item(1), Some(10));
        assert_eq!(adapter.get_item(2), Some(20));
        assert_eq!(adapter.get_item(3), None);

        adapter.set_has_header(false);
        assert_eq!(adapter.count(), 3);
        assert_eq!(adapter.get_item(0), Some(10));
    }

    #[test]
    fn test_grouped_without_footers() {
        let adapter = grouped();

        // [GH 100] 1 2 3 [GH 200] 4
        assert_eq!(adapter.count(), 6);
        assert_eq!(adapter.slot_kind(0), Some(SlotKind::GroupHeader));
        assert_eq!(adapter.get_item(0), Some(100));
        assert_eq!(adapter.get_item(1), Some(1));
        assert_eq!(adapter.get_item(3), Some(3));
        assert_eq!(adapter.slot_kind(4), Some(SlotKind::GroupHeader));
        assert_eq!(adapter.get_item(4), Some(200));
        assert_eq!(adapter.get_item(5), Some(4));
        assert_eq!(adapter.get_item(6), None);

        assert!(adapter.is_group_header(0));
        assert!(!adapter.is_group_footer(3));
        assert_eq!(adapter.group_parent(2), Some(100));
        assert_eq!(adapter.group_parent(5), Some(200));
    }

    #[test]
    fn test_grouped_with_footers_renumbers() {
        let mut adapter = grouped();
        adapter.set_has_group_footers(true);

        // [GH 100] 1 2 3 [GF 100] [GH 200] 4 [GF 200]
        assert_eq!(adapter.count(), 8);
        assert_eq!(adapter.slot_kind(4), Some(SlotKind::GroupFooter));
        assert_eq!(adapter.get_item(4), Some(100));
        assert_eq!(adapter.slot_kind(5), Some(SlotKind::GroupHeader));
        assert_eq!(adapter.get_item(6), Some(4));
        assert!(adapter.is_group_footer(7));
        assert_eq!(adapter.group_parent(7), Some(200));
    }

    #[test]
    fn test_grouped_with_header_and_footer_singletons() {
        let mut adapter = grouped();
        adapter.set_has_group_footers(true);
        adapter.set_has_header(true);
        adapter.set_has_footer(true);

        // [H] [GH 100] 1 2 3 [GF 100] [GH 200] 4 [GF 200] [F]
        assert_eq!(adapter.count(), 10);
        assert_eq!(adapter.slot_kind(0), Some(SlotKind::Header));
        assert!(adapter.is_group_header(1));
        assert_eq!(adapter.get_item(2), Some(1));
        assert!(adapter.is_group_footer(5));
        assert!(adapter.is_group_header(6));
        assert_eq!(adapter.get_item(7), Some(4));
        assert_eq!(adapter.slot_kind(9), Some(SlotKind::Footer));
        assert_eq!(adapter.group_parent(0), None);
        assert_eq!(adapter.group_parent(9), None);
    }

    #[test]
    fn test_empty_group_is_two_adjacent_boundaries() {
        let model = GroupedModel::new(vec![
            GroupSection::new(100, vec![]),
            GroupSection::new(200, vec![7]),
        ]);
        let mut adapter = SourceAdapter::new(Arc::new(model));
        adapter.set_grouped(true);
        adapter.set_has_group_footers(true);

        // [GH 100] [GF 100] [GH 200] 7 [GF 200]
        assert_eq!(adapter.count(), 5);
        assert!(adapter.is_group_header(0));
        assert!(adapter.is_group_footer(1));
        assert!(adapter.is_group_header(2));
        assert_eq!(adapter.get_item(3), Some(7));
    }
}
