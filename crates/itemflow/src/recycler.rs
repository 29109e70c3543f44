//! The base realize/unrealize collaborator for plain items.
//!
//! Group boundary items are handled by the view's own pools; everything else
//! (the bulk of the scrolling churn) goes through an [`ItemRecycler`]. Hosts
//! with exotic caching needs implement the trait; [`PoolRecycler`] is the
//! stock implementation with a bounded template-keyed cache.

use crate::item::{ItemArena, ItemKey};
use crate::pool::MAX_POOLED_ITEMS;
use crate::template::ItemTemplate;

/// Realizes and unrealizes plain (non-boundary, non-singleton) items.
pub trait ItemRecycler<D> {
    /// Produces a bound, visible item for the given index and context,
    /// reusing a cached item when possible. `None` means the template factory
    /// could not produce an item.
    fn realize_item(
        &mut self,
        arena: &mut ItemArena<D>,
        template: &ItemTemplate<D>,
        index: usize,
        context: &D,
    ) -> Option<ItemKey>;

    /// Retires an item, caching it when `recycle` is set and the cache
    /// accepts it, destroying it otherwise.
    fn unrealize_item(&mut self, arena: &mut ItemArena<D>, key: ItemKey, recycle: bool);

    /// Destroys every cached item.
    fn clear_cache(&mut self, arena: &mut ItemArena<D>);
}

/// Stock recycler: a single bounded cache keyed by template identity.
#[derive(Debug, Default)]
pub struct PoolRecycler {
    cache: Vec<ItemKey>,
}

impl PoolRecycler {
    /// Creates a recycler with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached items.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl<D: Clone> ItemRecycler<D> for PoolRecycler {
    fn realize_item(
        &mut self,
        arena: &mut ItemArena<D>,
        template: &ItemTemplate<D>,
        index: usize,
        context: &D,
    ) -> Option<ItemKey> {
        let template = template.resolve(context);

        let pooled = self.cache.iter().position(|&key| {
            arena.get(key).and_then(|item| item.template()) == Some(template.id())
        });
        let key = match pooled {
            Some(slot) => {
                let key = self.cache.remove(slot);
                tracing::trace!(target: "itemflow::recycler", index, "reusing cached item");
                key
            }
            None => {
                let mut item = template.create(context)?;
                item.template = Some(template.id());
                arena.insert(item)
            }
        };

        if let Some(item) = arena.get_mut(key) {
            item.index = Some(index);
            item.context = Some(context.clone());
            item.attached = true;
            item.show();
        }
        Some(key)
    }

    fn unrealize_item(&mut self, arena: &mut ItemArena<D>, key: ItemKey, recycle: bool) {
        let can_cache = recycle
            && self.cache.len() < MAX_POOLED_ITEMS
            && arena.get(key).is_some_and(|item| item.template().is_some());
        if !can_cache {
            arena.remove(key);
            return;
        }

        if let Some(item) = arena.get_mut(key) {
            item.index = None;
            item.context = None;
            item.group_parent = None;
            item.attached = false;
            item.pressed = false;
            item.selected = false;
            item.enabled = true;
            item.update_state();
            item.hide();
        }
        self.cache.push(key);
    }

    fn clear_cache(&mut self, arena: &mut ItemArena<D>) {
        for key in self.cache.drain(..) {
            arena.remove(key);
        }
    }
}
