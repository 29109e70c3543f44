//! Bounded recycle pools for group boundary items.
//!
//! Group headers and footers churn as groups scroll past, so unrealized ones
//! are parked here instead of being destroyed. The two caches share one
//! capacity; a push that would exceed it is rejected and the caller destroys
//! the item instead. Pool membership is by [`ItemKey`], the items themselves
//! stay resident in the arena, hidden.

use crate::item::{ItemArena, ItemKey};
use crate::template::Template;

/// Combined capacity of the header and footer caches.
pub const MAX_POOLED_ITEMS: usize = 20;

/// Recycle caches for group-header and group-footer items.
#[derive(Debug, Default)]
pub struct RecyclePool {
    group_headers: Vec<ItemKey>,
    group_footers: Vec<ItemKey>,
}

impl RecyclePool {
    /// Creates empty pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of pooled items across both caches.
    pub fn len(&self) -> usize {
        self.group_headers.len() + self.group_footers.len()
    }

    /// Whether both caches are empty.
    pub fn is_empty(&self) -> bool {
        self.group_headers.is_empty() && self.group_footers.is_empty()
    }

    /// Tries to park a group boundary item.
    ///
    /// Returns `false` without touching the item when it cannot be cached:
    /// no template identity to match on later, not a group boundary item, or
    /// the combined capacity is reached. On success the item is hidden and
    /// its index reset to unassigned.
    pub fn push<D>(&mut self, arena: &mut ItemArena<D>, key: ItemKey) -> bool {
        let Some(item) = arena.get_mut(key) else {
            return false;
        };
        if item.template().is_none() || self.len() >= MAX_POOLED_ITEMS {
            tracing::trace!(
                target: "itemflow::pool",
                pooled = self.len(),
                "rejecting recycle push"
            );
            return false;
        }

        let cache = if item.is_group_header() {
            &mut self.group_headers
        } else if item.is_group_footer() {
            &mut self.group_footers
        } else {
            return false;
        };

        item.hide();
        item.index = None;
        cache.push(key);
        true
    }

    /// Pops a cached item created by the given template, if one exists.
    ///
    /// `header` selects the group-header cache, otherwise the footer cache.
    /// The first template match wins and is made visible again.
    pub fn pop<D>(
        &mut self,
        arena: &mut ItemArena<D>,
        template: &Template<D>,
        header: bool,
    ) -> Option<ItemKey> {
        let cache = if header {
            &mut self.group_headers
        } else {
            &mut self.group_footers
        };

        let slot = cache
            .iter()
            .position(|&key| arena.get(key).and_then(|item| item.template()) == Some(template.id()))?;
        let key = cache.remove(slot);
        if let Some(item) = arena.get_mut(key) {
            item.show();
        }
        Some(key)
    }

    /// Destroys every pooled item and empties both caches.
    pub fn clear<D>(&mut self, arena: &mut ItemArena<D>) {
        for key in self.group_headers.drain(..).chain(self.group_footers.drain(..)) {
            arena.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ViewItem;

    fn group_header(template: &Template<i32>) -> ViewItem<i32> {
        let mut item = ViewItem::new();
        item.is_group_header = true;
        item.template = Some(template.id());
        item
    }

    fn group_footer(template: &Template<i32>) -> ViewItem<i32> {
        let mut item = ViewItem::new();
        item.is_group_footer = true;
        item.template = Some(template.id());
        item
    }

    #[test]
    fn test_push_hides_and_unassigns() {
        let template = Template::new(|_| Some(ViewItem::new()));
        let mut arena = ItemArena::new();
        let mut pool = RecyclePool::new();

        let mut item = group_header(&template);
        item.index = Some(5);
        let key = arena.insert(item);

        assert!(pool.push(&mut arena, key));
        assert_eq!(pool.len(), 1);
        let item = arena.get(key).unwrap();
        assert!(!item.is_visible());
        assert_eq!(item.index(), None);
    }

    #[test]
    fn test_push_rejects_without_template() {
        let mut arena = ItemArena::<i32>::new();
        let mut pool = RecyclePool::new();

        let mut item = ViewItem::new();
        item.is_group_header = true;
        let key = arena.insert(item);

        assert!(!pool.push(&mut arena, key));
        assert!(pool.is_empty());
        // Rejected items are untouched; the caller destroys them.
        assert!(arena.get(key).unwrap().is_visible());
    }

    #[test]
    fn test_push_rejects_plain_items() {
        let template = Template::new(|_: &i32| Some(ViewItem::new()));
        let mut arena = ItemArena::<i32>::new();
        let mut pool = RecyclePool::new();

        let mut item = ViewItem::new();
        item.template = Some(template.id());
        let key = arena.insert(item);

        assert!(!pool.push(&mut arena, key));
    }

    #[test]
    fn test_push_rejects_beyond_capacity() {
        let template = Template::new(|_| Some(ViewItem::new()));
        let mut arena = ItemArena::new();
        let mut pool = RecyclePool::new();

        // Fill the combined cap across both caches.
        for i in 0..MAX_POOLED_ITEMS {
            let item = if i % 2 == 0 {
                group_header(&template)
            } else {
                group_footer(&template)
            };
            let key = arena.insert(item);
            assert!(pool.push(&mut arena, key));
        }
        assert_eq!(pool.len(), MAX_POOLED_ITEMS);

        let overflow = arena.insert(group_header(&template));
        assert!(!pool.push(&mut arena, overflow));
        assert_eq!(pool.len(), MAX_POOLED_ITEMS);
    }

    #[test]
    fn test_pop_matches_template_identity() {
        let red = Template::new(|_| Some(ViewItem::new()));
        let blue = Template::new(|_| Some(ViewItem::new()));
        let mut arena = ItemArena::new();
        let mut pool = RecyclePool::new();

        let red_key = arena.insert(group_header(&red));
        let blue_key = arena.insert(group_header(&blue));
        pool.push(&mut arena, red_key);
        pool.push(&mut arena, blue_key);

        // A third template misses both.
        let green = Template::new(|_| Some(ViewItem::new()));
        assert_eq!(pool.pop(&mut arena, &green, true), None);

        let popped = pool.pop(&mut arena, &blue, true).unwrap();
        assert_eq!(popped, blue_key);
        assert!(arena.get(popped).unwrap().is_visible());
        assert_eq!(pool.len(), 1);

        // Header cache does not serve footer requests.
        assert_eq!(pool.pop(&mut arena, &red, false), None);
        assert_eq!(pool.pop(&mut arena, &red, true), Some(red_key));
    }

    #[test]
    fn test_clear_destroys_pooled_items() {
        let template = Template::new(|_| Some(ViewItem::new()));
        let mut arena = ItemArena::new();
        let mut pool = RecyclePool::new();

        let header = arena.insert(group_header(&template));
        let footer = arena.insert(group_footer(&template));
        pool.push(&mut arena, header);
        pool.push(&mut arena, footer);

        pool.clear(&mut arena);
        assert!(pool.is_empty());
        assert!(!arena.contains(header));
        assert!(!arena.contains(footer));
    }
}
