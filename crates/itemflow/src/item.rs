//! Realized view items and the arena that owns them.
//!
//! A [`ViewItem`] is the live view object bound to one logical index of the
//! item source: its binding context, template identity, category flags and
//! visual state. Items live in an [`ItemArena`] (the stand-in for the scroll
//! content container); an [`ItemKey`] is an item's stable reference identity,
//! used by the recycle pools, header/footer singletons and hosts alike. Two
//! keys compare equal iff they denote the same live item.

use slotmap::{SlotMap, new_key_type};

use crate::template::TemplateId;

new_key_type! {
    /// Stable identity of a realized item within its [`ItemArena`].
    pub struct ItemKey;
}

/// Derived visual state of a view item.
///
/// Recomputed by [`ViewItem::update_state`] from the enabled/pressed/selected
/// flags; hosts read it when painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemState {
    /// Default state.
    #[default]
    Normal,
    /// Item is disabled and ignores interaction.
    Disabled,
    /// Item is currently pressed.
    Pressed,
    /// Item is selected.
    Selected,
}

/// A live view object bound to one logical index.
///
/// Category flags are mutually exclusive in practice: an item is a header or
/// footer singleton, a group header, a group footer, or a plain item.
#[derive(Debug)]
pub struct ViewItem<D> {
    /// Logical index within the item source; `None` while pooled/unassigned.
    pub(crate) index: Option<usize>,
    /// Identity of the template that created this item.
    pub(crate) template: Option<TemplateId>,
    /// The data object this item currently displays.
    pub(crate) context: Option<D>,
    /// The enclosing group's data object, when grouping is active.
    pub(crate) group_parent: Option<D>,
    /// Whether the item is attached to an owning view.
    pub(crate) attached: bool,

    pub(crate) is_header: bool,
    pub(crate) is_footer: bool,
    pub(crate) is_group_header: bool,
    pub(crate) is_group_footer: bool,

    pub(crate) visible: bool,
    pub(crate) selectable: bool,
    pub(crate) selected: bool,
    pub(crate) pressed: bool,
    pub(crate) enabled: bool,
    state: ItemState,
}

impl<D> Default for ViewItem<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ViewItem<D> {
    /// Creates a fresh, visible, unbound view item.
    pub fn new() -> Self {
        Self {
            index: None,
            template: None,
            context: None,
            group_parent: None,
            attached: false,
            is_header: false,
            is_footer: false,
            is_group_header: false,
            is_group_footer: false,
            visible: true,
            selectable: true,
            selected: false,
            pressed: false,
            enabled: true,
            state: ItemState::Normal,
        }
    }

    /// Logical index, or `None` while unassigned (pooled).
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Identity of the creating template, the recycle cache key.
    pub fn template(&self) -> Option<TemplateId> {
        self.template
    }

    /// The binding context currently displayed.
    pub fn context(&self) -> Option<&D> {
        self.context.as_ref()
    }

    /// The enclosing group's data object, when grouped.
    pub fn group_parent(&self) -> Option<&D> {
        self.group_parent.as_ref()
    }

    /// Whether this item is attached to an owning view.
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether this is the header singleton.
    pub fn is_header(&self) -> bool {
        self.is_header
    }

    /// Whether this is the footer singleton.
    pub fn is_footer(&self) -> bool {
        self.is_footer
    }

    /// Whether this is a group-header boundary item.
    pub fn is_group_header(&self) -> bool {
        self.is_group_header
    }

    /// Whether this is a group-footer boundary item.
    pub fn is_group_footer(&self) -> bool {
        self.is_group_footer
    }

    /// Whether the item is currently shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the item can be selected.
    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    /// Whether the item carries the selected visual flag.
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the item is pressed.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether the item is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The derived visual state, as of the last [`update_state`](Self::update_state).
    pub fn state(&self) -> ItemState {
        self.state
    }

    /// Makes the item visible.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hides the item without destroying it.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Recomputes the derived visual state from the current flags.
    ///
    /// Precedence: disabled > pressed > selected > normal.
    pub fn update_state(&mut self) {
        self.state = if !self.enabled {
            ItemState::Disabled
        } else if self.pressed {
            ItemState::Pressed
        } else if self.selected {
            ItemState::Selected
        } else {
            ItemState::Normal
        };
    }

    fn is_singleton(&self) -> bool {
        self.is_header || self.is_footer
    }
}

/// Owning container for realized items.
///
/// The arena is the engine's rendition of the scroll content container: every
/// realized item (visible, pooled or singleton) lives here until destroyed.
#[derive(Debug)]
pub struct ItemArena<D> {
    items: SlotMap<ItemKey, ViewItem<D>>,
}

impl<D> Default for ItemArena<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> ItemArena<D> {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }

    /// Adds an item, returning its key.
    pub fn insert(&mut self, item: ViewItem<D>) -> ItemKey {
        self.items.insert(item)
    }

    /// Destroys an item, returning it if it was live.
    pub fn remove(&mut self, key: ItemKey) -> Option<ViewItem<D>> {
        self.items.remove(key)
    }

    /// Whether the key denotes a live item.
    pub fn contains(&self, key: ItemKey) -> bool {
        self.items.contains_key(key)
    }

    /// Borrow an item.
    pub fn get(&self, key: ItemKey) -> Option<&ViewItem<D>> {
        self.items.get(key)
    }

    /// Mutably borrow an item.
    pub fn get_mut(&mut self, key: ItemKey) -> Option<&mut ViewItem<D>> {
        self.items.get_mut(key)
    }

    /// Number of live items (visible, pooled and singletons combined).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the arena holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all live items.
    pub fn iter(&self) -> impl Iterator<Item = (ItemKey, &ViewItem<D>)> {
        self.items.iter()
    }

    /// Iterates mutably over all live items.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ItemKey, &mut ViewItem<D>)> {
        self.items.iter_mut()
    }

    /// Iterates mutably over realized non-singleton items that have a
    /// binding context, which is the set the selection manager reconciles.
    pub(crate) fn iter_selectable_mut(
        &mut self,
    ) -> impl Iterator<Item = (ItemKey, &mut ViewItem<D>)> {
        self.items
            .iter_mut()
            .filter(|(_, item)| !item.is_singleton() && item.context.is_some())
    }

    /// Destroys every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
