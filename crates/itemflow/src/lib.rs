//! A headless recycler/collection-view engine.
//!
//! itemflow virtualizes a large data collection behind a scrolling viewport:
//! it realizes items as their indices become visible, parks scrolled-out
//! items in bounded recycle pools keyed by template identity, keeps a
//! selection of data values that survives recycling, and resolves
//! scroll-to-index requests against the layout's geometry, deferring them
//! until the layout is ready.
//!
//! The crate owns no window, renderer or event loop. The host implements
//! three collaborator traits and forwards its callbacks:
//!
//! - [`ItemsLayout`] answers item geometry and the content extent.
//! - [`ScrollContainer`] performs the actual scrolling.
//! - [`ItemRecycler`] realizes plain items ([`PoolRecycler`] is the stock
//!   implementation).
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use itemflow::{CollectionView, ItemTemplate, ScrollContainer, VecModel, ViewItem};
//!
//! struct Host;
//! impl ScrollContainer for Host {
//!     fn scroll_to(&mut self, _position: f32, _animate: bool) {}
//!     fn scroll_position(&self) -> (f32, f32) {
//!         (0.0, 0.0)
//!     }
//!     fn viewport_size(&self) -> (f32, f32) {
//!         (360.0, 640.0)
//!     }
//!     fn set_content_extent(&mut self, _extent: f32) {}
//! }
//!
//! let mut view = CollectionView::new(Box::new(Host));
//! view.set_item_template(Some(ItemTemplate::from_factory(|_: &String| {
//!     Some(ViewItem::new())
//! })));
//! view.set_source(Some(Arc::new(VecModel::new(vec![
//!     "first".to_string(),
//!     "second".to_string(),
//! ]))));
//! view.on_relayout((360.0, 640.0));
//! let key = view.realize_item(0)?;
//! view.unrealize_item(key, true);
//! # Ok::<(), itemflow::Error>(())
//! ```

pub mod error;
pub mod item;
pub mod layout;
pub mod model;
pub mod pool;
pub mod recycler;
pub mod scroll;
pub mod selection;
pub mod signal;
pub mod source;
pub mod template;
pub mod view;

pub use error::{Error, Result};
pub use item::{ItemArena, ItemKey, ItemState, ViewItem};
pub use layout::{Direction, ItemsLayout, LayoutEnv, StyleKey};
pub use model::{GroupSection, GroupedModel, ItemsModel, VecModel};
pub use pool::{MAX_POOLED_ITEMS, RecyclePool};
pub use recycler::{ItemRecycler, PoolRecycler};
pub use scroll::{PendingScroll, ScrollAlign, ScrollContainer, resolve_aligned_offset};
pub use selection::{SelectionChangedEvent, SelectionCommand, SelectionList, SelectionMode};
pub use signal::{ConnectionId, Signal};
pub use source::{CollectionChange, SlotKind, SourceAdapter};
pub use template::{ItemFactory, ItemTemplate, Template, TemplateId};
pub use view::CollectionView;
