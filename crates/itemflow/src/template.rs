//! Item templates.
//!
//! A [`Template`] pairs a stable identity with a factory closure that builds
//! a bound [`ViewItem`] from a data context. The identity is the cache key for
//! recycle-pool reuse: a pooled item may only be rebound by the template that
//! created it.
//!
//! [`ItemTemplate`] is either a single template or a selector closure that
//! picks a template per data context (e.g. one group-header template for
//! collapsed groups, another for expanded ones).

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::item::ViewItem;

static NEXT_TEMPLATE_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identity of a template, used as the recycle-pool cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TemplateId(u64);

impl TemplateId {
    fn next() -> Self {
        Self(NEXT_TEMPLATE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Type alias for a view-item factory function.
///
/// Returning `None` means the template could not produce an item for the
/// given context; realization treats that as a fatal error.
pub type ItemFactory<D> = Arc<dyn Fn(&D) -> Option<ViewItem<D>> + Send + Sync>;

/// A view-item template: identity plus factory.
pub struct Template<D> {
    id: TemplateId,
    create: ItemFactory<D>,
}

impl<D> Clone for Template<D> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            create: self.create.clone(),
        }
    }
}

impl<D> fmt::Debug for Template<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Template").field("id", &self.id).finish()
    }
}

impl<D> Template<D> {
    /// Creates a template from a factory closure.
    pub fn new<F>(create: F) -> Self
    where
        F: Fn(&D) -> Option<ViewItem<D>> + Send + Sync + 'static,
    {
        Self {
            id: TemplateId::next(),
            create: Arc::new(create),
        }
    }

    /// The template's stable identity.
    pub fn id(&self) -> TemplateId {
        self.id
    }

    /// Runs the factory for the given context.
    pub fn create(&self, context: &D) -> Option<ViewItem<D>> {
        (self.create)(context)
    }
}

/// Type alias for a template-selector function.
pub type TemplateSelector<D> = Arc<dyn Fn(&D) -> Template<D> + Send + Sync>;

/// A template source: one fixed template, or a per-context selector.
pub enum ItemTemplate<D> {
    /// Every context uses the same template.
    Static(Template<D>),
    /// A selector chooses the template from the data context.
    Selector(TemplateSelector<D>),
}

impl<D> Clone for ItemTemplate<D> {
    fn clone(&self) -> Self {
        match self {
            Self::Static(template) => Self::Static(template.clone()),
            Self::Selector(selector) => Self::Selector(selector.clone()),
        }
    }
}

impl<D> fmt::Debug for ItemTemplate<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(template) => f.debug_tuple("Static").field(template).finish(),
            Self::Selector(_) => f.write_str("Selector(..)"),
        }
    }
}

impl<D> ItemTemplate<D> {
    /// Creates a static template source from a factory closure.
    pub fn from_factory<F>(create: F) -> Self
    where
        F: Fn(&D) -> Option<ViewItem<D>> + Send + Sync + 'static,
    {
        Self::Static(Template::new(create))
    }

    /// Creates a selector template source.
    pub fn with_selector<F>(select: F) -> Self
    where
        F: Fn(&D) -> Template<D> + Send + Sync + 'static,
    {
        Self::Selector(Arc::new(select))
    }

    /// Resolves the concrete template for a data context.
    pub fn resolve(&self, context: &D) -> Template<D> {
        match self {
            Self::Static(template) => template.clone(),
            Self::Selector(select) => select(context),
        }
    }
}

impl<D> From<Template<D>> for ItemTemplate<D> {
    fn from(template: Template<D>) -> Self {
        Self::Static(template)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_ids_are_unique() {
        let a = Template::<i32>::new(|_| Some(ViewItem::new()));
        let b = Template::<i32>::new(|_| Some(ViewItem::new()));
        assert_ne!(a.id(), b.id());
        assert_eq!(a.id(), a.clone().id());
    }

    #[test]
    fn test_static_resolve() {
        let template = Template::<i32>::new(|_| Some(ViewItem::new()));
        let id = template.id();
        let source = ItemTemplate::Static(template);
        assert_eq!(source.resolve(&1).id(), id);
        assert_eq!(source.resolve(&2).id(), id);
    }

    #[test]
    fn test_selector_resolve() {
        let even = Template::<i32>::new(|_| Some(ViewItem::new()));
        let odd = Template::<i32>::new(|_| Some(ViewItem::new()));
        let (even_id, odd_id) = (even.id(), odd.id());

        let source = ItemTemplate::with_selector(move |n: &i32| {
            if n % 2 == 0 { even.clone() } else { odd.clone() }
        });

        assert_eq!(source.resolve(&4).id(), even_id);
        assert_eq!(source.resolve(&3).id(), odd_id);
    }

    #[test]
    fn test_factory_may_produce_nothing() {
        let template = Template::<i32>::new(|&n| if n < 0 { None } else { Some(ViewItem::new()) });
        assert!(template.create(&1).is_some());
        assert!(template.create(&-1).is_none());
    }
}
