//! The collection view: realization engine, selection manager and scroll
//! resolver in one orchestrating object.
//!
//! [`CollectionView`] is headless. The host implements [`ScrollContainer`]
//! and [`ItemsLayout`], drives the view with `realize_item`/`unrealize_item`
//! as indices enter and leave the viewport, and forwards its scroll and
//! resize callbacks to [`on_scrolling`](CollectionView::on_scrolling) and
//! [`on_relayout`](CollectionView::on_relayout). Configuration goes through
//! explicit setters; every structural setter synchronously reinitializes the
//! layout, which is also the point where scrolls requested too early are
//! replayed.

use std::any::Any;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::item::{ItemArena, ItemKey, ViewItem};
use crate::layout::{Direction, ItemsLayout, LayoutEnv};
use crate::model::ItemsModel;
use crate::pool::RecyclePool;
use crate::recycler::{ItemRecycler, PoolRecycler};
use crate::scroll::{PendingScroll, ScrollAlign, ScrollContainer, resolve_aligned_offset};
use crate::selection::{SelectionChangedEvent, SelectionCommand, SelectionList, SelectionMode};
use crate::signal::Signal;
use crate::source::{CollectionChange, SourceAdapter};
use crate::template::ItemTemplate;

/// A virtualizing collection view over an [`ItemsModel`].
pub struct CollectionView<D> {
    model: Option<Arc<dyn ItemsModel<D>>>,
    adapter: Option<SourceAdapter<D>>,
    layout: Option<Box<dyn ItemsLayout>>,
    container: Box<dyn ScrollContainer>,
    recycler: Box<dyn ItemRecycler<D>>,

    item_template: Option<ItemTemplate<D>>,
    group_header_template: Option<ItemTemplate<D>>,
    group_footer_template: Option<ItemTemplate<D>>,
    grouped: bool,
    direction: Direction,

    arena: ItemArena<D>,
    pool: RecyclePool,
    header: Option<ItemKey>,
    footer: Option<ItemKey>,

    selection_mode: SelectionMode,
    selected_item: Option<D>,
    selected_items: SelectionList<D>,
    suppress_selection_events: bool,
    command: Option<Box<dyn SelectionCommand>>,
    command_parameter: Option<Arc<dyn Any + Send + Sync>>,

    pending: PendingScroll,
    needs_reinit: bool,
    measured: bool,

    /// Raised after every non-suppressed selection change, following the
    /// bound command.
    pub selection_changed: Signal<SelectionChangedEvent<D>>,
}

impl<D: Clone + PartialEq + Send + Sync + 'static> CollectionView<D> {
    /// Creates a view driving the given scroll container, with the stock
    /// [`PoolRecycler`] for plain items.
    pub fn new(container: Box<dyn ScrollContainer>) -> Self {
        Self::with_recycler(container, Box::new(PoolRecycler::new()))
    }

    /// Creates a view with a custom plain-item recycler.
    pub fn with_recycler(
        container: Box<dyn ScrollContainer>,
        recycler: Box<dyn ItemRecycler<D>>,
    ) -> Self {
        Self {
            model: None,
            adapter: None,
            layout: None,
            container,
            recycler,
            item_template: None,
            group_header_template: None,
            group_footer_template: None,
            grouped: false,
            direction: Direction::default(),
            arena: ItemArena::new(),
            pool: RecyclePool::new(),
            header: None,
            footer: None,
            selection_mode: SelectionMode::default(),
            selected_item: None,
            selected_items: SelectionList::new(),
            suppress_selection_events: false,
            command: None,
            command_parameter: None,
            pending: PendingScroll::new(),
            needs_reinit: false,
            measured: false,
            selection_changed: Signal::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of flattened positions, or 0 before a source is attached.
    pub fn count(&self) -> usize {
        self.adapter.as_ref().map_or(0, SourceAdapter::count)
    }

    /// The current selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// The single-selection value.
    pub fn selected_item(&self) -> Option<&D> {
        self.selected_item.as_ref()
    }

    /// The multi-selection list.
    pub fn selected_items(&self) -> &SelectionList<D> {
        &self.selected_items
    }

    /// Scroll orientation.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether group boundary items are produced.
    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    /// The header singleton's key, if a header is installed.
    pub fn header(&self) -> Option<ItemKey> {
        self.header
    }

    /// The footer singleton's key, if a footer is installed.
    pub fn footer(&self) -> Option<ItemKey> {
        self.footer
    }

    /// Borrows a live item.
    pub fn item(&self, key: ItemKey) -> Option<&ViewItem<D>> {
        self.arena.get(key)
    }

    /// Iterates all live items, pooled and singleton ones included.
    pub fn items(&self) -> impl Iterator<Item = (ItemKey, &ViewItem<D>)> {
        self.arena.iter()
    }

    /// Number of pooled group boundary items.
    pub fn pooled(&self) -> usize {
        self.pool.len()
    }

    // ========================================================================
    // Configuration
    // ========================================================================

    /// Attaches or detaches the data source.
    ///
    /// The adapter is rebuilt from scratch; `None` detaches it entirely.
    pub fn set_source(&mut self, source: Option<Arc<dyn ItemsModel<D>>>) {
        self.model = source;
        self.adapter = self.model.clone().map(SourceAdapter::new);
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Attaches or detaches the items layout.
    pub fn set_layout(&mut self, layout: Option<Box<dyn ItemsLayout>>) {
        self.layout = layout;
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Installs the template for plain items.
    pub fn set_item_template(&mut self, template: Option<ItemTemplate<D>>) {
        self.item_template = template;
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Installs the group-header template.
    pub fn set_group_header_template(&mut self, template: Option<ItemTemplate<D>>) {
        self.group_header_template = template;
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Installs the group-footer template. Group footers occupy positions
    /// only while one is installed.
    pub fn set_group_footer_template(&mut self, template: Option<ItemTemplate<D>>) {
        self.group_footer_template = template;
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Toggles grouping.
    pub fn set_grouped(&mut self, grouped: bool) {
        self.grouped = grouped;
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Sets the scroll orientation.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Installs or removes the header singleton. A previous header is
    /// destroyed.
    pub fn set_header(&mut self, header: Option<ViewItem<D>>) {
        if let Some(old) = self.header.take() {
            self.arena.remove(old);
        }
        if let Some(mut item) = header {
            item.is_header = true;
            self.header = Some(self.arena.insert(item));
        }
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Installs or removes the footer singleton. A previous footer is
    /// destroyed.
    pub fn set_footer(&mut self, footer: Option<ViewItem<D>>) {
        if let Some(old) = self.footer.take() {
            self.arena.remove(old);
        }
        if let Some(mut item) = footer {
            item.is_footer = true;
            self.footer = Some(self.arena.insert(item));
        }
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Binds a command invoked on every non-suppressed selection change.
    pub fn set_selection_command(&mut self, command: Option<Box<dyn SelectionCommand>>) {
        self.command = command;
    }

    /// Sets the parameter passed to the bound selection command.
    pub fn set_selection_command_parameter(
        &mut self,
        parameter: Option<Arc<dyn Any + Send + Sync>>,
    ) {
        self.command_parameter = parameter;
    }

    // ========================================================================
    // Realization
    // ========================================================================

    /// Produces a visible item for the given flattened position.
    ///
    /// Singletons are shown and returned as-is; group boundary items come
    /// from the recycle pools or fresh from their template; plain items go
    /// through the base recycler. All non-singleton paths end by applying the
    /// current selection state to the item.
    pub fn realize_item(&mut self, index: usize) -> Result<ItemKey> {
        let adapter = self.adapter.as_ref().ok_or(Error::NoSource)?;
        let count = adapter.count();
        if index >= count {
            return Err(Error::out_of_bounds(index, count));
        }

        if index == 0 {
            if let Some(key) = self.header {
                if let Some(item) = self.arena.get_mut(key) {
                    item.index = Some(0);
                    item.show();
                }
                return Ok(key);
            }
        }
        if index == count - 1 {
            if let Some(key) = self.footer {
                if let Some(item) = self.arena.get_mut(key) {
                    item.index = Some(index);
                    item.show();
                }
                return Ok(key);
            }
        }

        let grouped = self.grouped;
        let is_group_header = grouped && adapter.is_group_header(index);
        let is_group_footer = grouped && adapter.is_group_footer(index);

        if is_group_header || is_group_footer {
            let context = adapter
                .get_item(index)
                .ok_or_else(|| Error::realize_failed(index))?;
            let group_parent = adapter.group_parent(index);
            let template_source = if is_group_header {
                self.group_header_template.as_ref()
            } else {
                self.group_footer_template.as_ref()
            };
            let template = template_source
                .ok_or(Error::NoItemTemplate)?
                .resolve(&context);

            let key = match self.pool.pop(&mut self.arena, &template, is_group_header) {
                Some(key) => {
                    tracing::trace!(target: "itemflow::view", index, "reusing pooled group item");
                    key
                }
                None => {
                    let mut item = template
                        .create(&context)
                        .ok_or_else(|| Error::realize_failed(index))?;
                    item.template = Some(template.id());
                    item.is_group_header = is_group_header;
                    item.is_group_footer = is_group_footer;
                    self.arena.insert(item)
                }
            };
            if let Some(item) = self.arena.get_mut(key) {
                item.index = Some(index);
                item.attached = true;
                item.group_parent = group_parent;
                item.context = Some(context);
                item.show();
            }
            self.apply_selection_visual(key);
            return Ok(key);
        }

        let context = adapter
            .get_item(index)
            .ok_or_else(|| Error::realize_failed(index))?;
        let group_parent = if grouped {
            adapter.group_parent(index)
        } else {
            None
        };
        let template = self.item_template.as_ref().ok_or(Error::NoItemTemplate)?;
        let key = self
            .recycler
            .realize_item(&mut self.arena, template, index, &context)
            .ok_or_else(|| Error::realize_failed(index))?;
        if let Some(item) = self.arena.get_mut(key) {
            item.group_parent = group_parent;
        }
        self.apply_selection_visual(key);
        Ok(key)
    }

    /// Retires an item that left the viewport.
    ///
    /// Singletons are merely hidden. Group boundary items are reset and
    /// pooled; a rejected push, or `recycle = false`, destroys them. Plain
    /// items go back through the base recycler.
    pub fn unrealize_item(&mut self, key: ItemKey, recycle: bool) {
        let Some(item) = self.arena.get_mut(key) else {
            return;
        };

        if item.is_header() || item.is_footer() {
            item.hide();
            return;
        }

        if item.is_group_header() || item.is_group_footer() {
            item.index = None;
            item.attached = false;
            item.context = None;
            item.group_parent = None;
            item.pressed = false;
            item.selected = false;
            item.enabled = true;
            item.update_state();
            if !recycle || !self.pool.push(&mut self.arena, key) {
                self.arena.remove(key);
            }
            return;
        }

        self.recycler.unrealize_item(&mut self.arena, key, recycle);
    }

    fn apply_selection_visual(&mut self, key: ItemKey) {
        let mode = self.selection_mode;
        let Some(item) = self.arena.get_mut(key) else {
            return;
        };
        match mode {
            SelectionMode::None => {
                item.selectable = false;
            }
            SelectionMode::Single | SelectionMode::SingleAlways => {
                let want = match &self.selected_item {
                    Some(selected) => item.context.as_ref() == Some(selected),
                    None => false,
                };
                if item.selectable && item.selected != want {
                    item.selected = want;
                    item.update_state();
                }
            }
            SelectionMode::Multiple => {
                let want = item
                    .context
                    .as_ref()
                    .is_some_and(|context| self.selected_items.contains(context));
                if item.selectable && item.selected != want {
                    item.selected = want;
                    item.update_state();
                }
            }
        }
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Sets (or clears) the single-selection value.
    ///
    /// A no-op when unchanged. Visuals of realized items are reconciled
    /// before the selection-changed notification fires.
    pub fn set_selected_item(&mut self, item: Option<D>) {
        if self.selected_item == item {
            return;
        }
        let previous: Vec<D> = self.selected_item.take().into_iter().collect();
        let current: Vec<D> = item.iter().cloned().collect();
        self.selected_item = item;
        self.sync_selection_visuals();
        self.raise_selection_changed(previous, current);
    }

    /// Replaces the multi-selection wholesale.
    ///
    /// Duplicates in the new list are dropped. Exactly one selection-changed
    /// event fires per call, carrying before and after snapshots.
    pub fn update_selected_items(&mut self, items: Vec<D>) {
        let previous = self.selected_items.to_vec();
        self.suppress_selection_events = true;
        self.selected_items.clear();
        for item in items {
            self.selected_items.add(item);
        }
        self.suppress_selection_events = false;
        let current = self.selected_items.to_vec();
        self.sync_selection_visuals();
        self.raise_selection_changed(previous, current);
    }

    /// Alias of [`update_selected_items`](Self::update_selected_items).
    pub fn set_selected_items(&mut self, items: Vec<D>) {
        self.update_selected_items(items);
    }

    /// Selects one value under the current mode.
    ///
    /// No-op in `None` mode; single modes route through
    /// [`set_selected_item`](Self::set_selected_item).
    pub fn select(&mut self, item: D) {
        match self.selection_mode {
            SelectionMode::None => {}
            SelectionMode::Single | SelectionMode::SingleAlways => {
                self.set_selected_item(Some(item));
            }
            SelectionMode::Multiple => {
                if self.selected_items.contains(&item) {
                    return;
                }
                let previous = self.selected_items.to_vec();
                self.selected_items.add(item);
                let current = self.selected_items.to_vec();
                self.sync_selection_visuals();
                self.raise_selection_changed(previous, current);
            }
        }
    }

    /// Deselects one value under the current mode.
    ///
    /// `SingleAlways` keeps its exactly-one semantics and ignores the call.
    pub fn deselect(&mut self, item: &D) {
        match self.selection_mode {
            SelectionMode::None | SelectionMode::SingleAlways => {}
            SelectionMode::Single => {
                if self.selected_item.as_ref() == Some(item) {
                    self.set_selected_item(None);
                }
            }
            SelectionMode::Multiple => {
                if !self.selected_items.contains(item) {
                    return;
                }
                let previous = self.selected_items.to_vec();
                self.selected_items.remove(item);
                let current = self.selected_items.to_vec();
                self.sync_selection_visuals();
                self.raise_selection_changed(previous, current);
            }
        }
    }

    /// Switches the selection mode.
    ///
    /// The selection-changed event fires only when the effective selection
    /// (empty for `None`, the 0/1-element single set, the live multi list)
    /// actually differs between the two modes.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        if self.selection_mode == mode {
            return;
        }
        let previous = self.effective_selection();
        self.selection_mode = mode;
        let current = self.effective_selection();
        self.sync_selection_visuals();
        if previous != current {
            self.raise_selection_changed(previous, current);
        }
    }

    fn effective_selection(&self) -> Vec<D> {
        match self.selection_mode {
            SelectionMode::None => Vec::new(),
            SelectionMode::Single | SelectionMode::SingleAlways => {
                self.selected_item.iter().cloned().collect()
            }
            SelectionMode::Multiple => self.selected_items.to_vec(),
        }
    }

    /// Reconciles the selected flag of every realized non-singleton item
    /// with the current selection state, touching only items whose flag
    /// actually changes.
    fn sync_selection_visuals(&mut self) {
        let mode = self.selection_mode;
        for (_, item) in self.arena.iter_selectable_mut() {
            if !item.selectable {
                continue;
            }
            let want = match mode {
                SelectionMode::None => false,
                SelectionMode::Single | SelectionMode::SingleAlways => {
                    match &self.selected_item {
                        Some(selected) => item.context.as_ref() == Some(selected),
                        None => false,
                    }
                }
                SelectionMode::Multiple => item
                    .context
                    .as_ref()
                    .is_some_and(|context| self.selected_items.contains(context)),
            };
            if item.selected != want {
                item.selected = want;
                item.update_state();
            }
        }
    }

    fn raise_selection_changed(&mut self, previous: Vec<D>, current: Vec<D>) {
        if self.suppress_selection_events {
            return;
        }
        if let Some(command) = self.command.as_mut() {
            let parameter = self.command_parameter.as_deref();
            if command.can_execute(parameter) {
                command.execute(parameter);
            }
        }
        tracing::trace!(
            target: "itemflow::view",
            previous = previous.len(),
            current = current.len(),
            "selection changed"
        );
        self.selection_changed.emit(SelectionChangedEvent { previous, current });
    }

    // ========================================================================
    // Source changes
    // ========================================================================

    /// Reacts to a mutation of the attached model.
    ///
    /// `Remove` evicts the removed values from the selection: the single
    /// selection is cleared silently, the multi selection raises one
    /// consolidated selection-changed event. All change kinds end in a full
    /// layout reinitialization.
    pub fn source_changed(&mut self, change: &CollectionChange<D>) {
        if let CollectionChange::Remove { items } = change {
            if self
                .selected_item
                .as_ref()
                .is_some_and(|selected| items.contains(selected))
            {
                self.selected_item = None;
            }
            let previous = self.selected_items.to_vec();
            let mut evicted = false;
            for item in items {
                evicted |= self.selected_items.remove(item);
            }
            self.sync_selection_visuals();
            if evicted {
                let current = self.selected_items.to_vec();
                self.raise_selection_changed(previous, current);
            }
        }
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    /// Rebuilds everything after an opaque bulk change to the model.
    ///
    /// The selection is cleared without raising events.
    pub fn notify_data_set_changed(&mut self) {
        self.selected_item = None;
        self.selected_items.clear();
        self.sync_selection_visuals();
        self.needs_reinit = true;
        self.reinitialize_layout();
    }

    // ========================================================================
    // Scrolling
    // ========================================================================

    /// Scrolls to an absolute position along the scroll axis.
    ///
    /// Queued for replay when the source is missing or the layout is not
    /// initialized yet; a newer queued request overwrites an older one.
    pub fn scroll_to(&mut self, position: f32, animate: bool) -> Result<()> {
        if self.layout.is_none() {
            return Err(Error::NoLayout);
        }
        if self.adapter.is_none() || self.needs_reinit || !self.measured {
            self.pending.set_position(position, animate);
            tracing::debug!(target: "itemflow::view", position, "scroll deferred until layout ready");
            return Ok(());
        }
        self.container.scroll_to(position, animate);
        Ok(())
    }

    /// Scrolls so the item at `index` lands per the alignment policy.
    ///
    /// Deferred like [`scroll_to`](Self::scroll_to) when the view is not
    /// ready. `Nearest` with the item adequately in view does not scroll.
    pub fn scroll_to_index(&mut self, index: usize, animate: bool, align: ScrollAlign) -> Result<()> {
        let layout = self.layout.as_ref().ok_or(Error::NoLayout)?;
        if self.adapter.is_none() || self.needs_reinit || !self.measured {
            self.pending.set_index(index, animate, align);
            tracing::debug!(target: "itemflow::view", index, "scroll-to-index deferred until layout ready");
            return Ok(());
        }

        let count = self.adapter.as_ref().map_or(0, SourceAdapter::count);
        if index >= count {
            return Err(Error::out_of_bounds(index, count));
        }

        let item_pos = self.axis_component(layout.item_position(index));
        let item_extent = self.axis_component(layout.item_size(index));
        let current = self.axis_component(self.container.scroll_position());
        let viewport = self.axis_component(self.container.viewport_size());

        if let Some(target) = resolve_aligned_offset(align, item_pos, item_extent, current, viewport)
        {
            self.container.scroll_to(target, animate);
        }
        Ok(())
    }

    /// Scrolls to an index with the default policy: animated, start-aligned.
    pub fn scroll_to_index_default(&mut self, index: usize) -> Result<()> {
        self.scroll_to_index(index, true, ScrollAlign::Start)
    }

    /// Snaps a prospective scroll destination to a layout-preferred position.
    pub fn adjust_scroll_target(&self, raw: f32) -> f32 {
        self.layout.as_ref().map_or(raw, |layout| layout.snap_position(raw))
    }

    /// Scrolls, without animation, so a child rect given by its leading edge
    /// and extent along the scroll axis becomes visible. Returns whether a
    /// scroll was issued.
    pub fn ensure_child_visible(&mut self, leading: f32, extent: f32) -> bool {
        let current = self.axis_component(self.container.scroll_position());
        let viewport = self.axis_component(self.container.viewport_size());

        if leading + extent <= current {
            self.container.scroll_to(leading, false);
            true
        } else if leading >= current + viewport {
            self.container.scroll_to(leading + extent - viewport, false);
            true
        } else {
            false
        }
    }

    fn axis_component(&self, pair: (f32, f32)) -> f32 {
        match self.direction {
            Direction::Horizontal => pair.0,
            Direction::Vertical => pair.1,
        }
    }

    // ========================================================================
    // Layout lifecycle
    // ========================================================================

    /// Host callback: the view was measured (or resized).
    pub fn on_relayout(&mut self, size: (f32, f32)) {
        tracing::debug!(target: "itemflow::view", width = size.0, height = size.1, "view measured");
        self.measured = true;
        if self.needs_reinit {
            self.reinitialize_layout();
        }
    }

    /// Host callback: the container scrolled to `position` along the scroll
    /// axis. Lazily initializes the layout first when needed.
    pub fn on_scrolling(&mut self, position: f32) {
        if self.needs_reinit {
            self.reinitialize_layout();
        }
        if self.needs_reinit {
            return;
        }
        if let Some(layout) = self.layout.as_mut() {
            layout.request_layout(position, false);
        }
    }

    /// Rebuilds adapter flags, caches and layout state, then replays any
    /// pending scroll requests (absolute before index) and publishes the new
    /// content extent.
    ///
    /// Does nothing until source, layout, item template and a measured
    /// viewport are all present.
    fn reinitialize_layout(&mut self) {
        if self.adapter.is_none()
            || self.layout.is_none()
            || self.item_template.is_none()
            || !self.measured
        {
            return;
        }

        if self.needs_reinit {
            let grouped = self.grouped;
            let has_group_footers = grouped && self.group_footer_template.is_some();
            let has_header = self.header.is_some();
            let has_footer = self.footer.is_some();
            if let Some(adapter) = self.adapter.as_mut() {
                adapter.set_grouped(grouped);
                adapter.set_has_group_footers(has_group_footers);
                adapter.set_has_header(has_header);
                adapter.set_has_footer(has_footer);
            }

            self.pool.clear(&mut self.arena);
            self.recycler.clear_cache(&mut self.arena);
            let stale: Vec<ItemKey> = self
                .arena
                .iter()
                .filter(|(_, item)| !item.is_header() && !item.is_footer())
                .map(|(key, _)| key)
                .collect();
            for key in stale {
                self.arena.remove(key);
            }

            let env = LayoutEnv {
                item_count: self.adapter.as_ref().map_or(0, SourceAdapter::count),
                viewport: self.container.viewport_size(),
                direction: self.direction,
            };
            if let Some(layout) = self.layout.as_mut() {
                layout.clear();
                layout.initialize(&env);
            }
            self.needs_reinit = false;
            tracing::debug!(
                target: "itemflow::view",
                item_count = env.item_count,
                "layout reinitialized"
            );
        }

        if let Some(layout) = self.layout.as_mut() {
            layout.request_layout(0.0, true);
        }

        if let Some((position, animate)) = self.pending.take_position() {
            tracing::debug!(target: "itemflow::view", position, "replaying pending scroll");
            if let Err(err) = self.scroll_to(position, animate) {
                tracing::warn!(target: "itemflow::view", %err, "pending scroll replay failed");
            }
        }
        if let Some((index, animate, align)) = self.pending.take_index() {
            tracing::debug!(target: "itemflow::view", index, "replaying pending scroll-to-index");
            if let Err(err) = self.scroll_to_index(index, animate, align) {
                tracing::warn!(target: "itemflow::view", %err, "pending scroll replay failed");
            }
        }

        let extent = self.layout.as_ref().map_or(0.0, |layout| layout.layout_extent());
        self.container.set_content_extent(extent);
    }
}

impl<D> Drop for CollectionView<D> {
    fn drop(&mut self) {
        self.pool.clear(&mut self.arena);
        self.arena.clear();
    }
}
