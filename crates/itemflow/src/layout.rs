//! The items-layout collaborator contract.
//!
//! Concrete layout algorithms (linear lists, grids, custom arrangements) live
//! in the host; the engine only needs positions, sizes and the total extent.
//! [`StyleKey`] tags the layout family so hosts can vary item styling without
//! downcasting the trait object.

/// Scroll/layout orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Items flow top to bottom; the layout extent is a height.
    #[default]
    Vertical,
    /// Items flow left to right; the layout extent is a width.
    Horizontal,
}

/// Layout family tag, used by hosts for per-family item styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleKey {
    /// One item per row or column.
    Linear,
    /// Multiple items per row or column.
    Grid,
    /// Anything else.
    Custom,
}

/// Everything a layout needs to (re)initialize.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEnv {
    /// Number of flattened positions, singletons and boundaries included.
    pub item_count: usize,
    /// Viewport size as `(width, height)`.
    pub viewport: (f32, f32),
    /// Scroll orientation.
    pub direction: Direction,
}

/// Positions items along the scroll axis.
///
/// The engine calls [`initialize`](Self::initialize) after every structural
/// change (new source, new templates, grouping toggled, viewport measured)
/// and [`request_layout`](Self::request_layout) on every scroll frame.
/// Position and size queries must answer for any index the adapter exposes;
/// the engine never queries outside `[0, item_count)`.
pub trait ItemsLayout {
    /// Rebuilds internal state for the given environment.
    fn initialize(&mut self, env: &LayoutEnv);

    /// Discards all layout state.
    fn clear(&mut self);

    /// Lays out around the given scroll position.
    ///
    /// `force` requests a full pass even if the position is unchanged.
    fn request_layout(&mut self, position: f32, force: bool);

    /// Top-left corner of the item at `index`, as `(x, y)`.
    fn item_position(&self, index: usize) -> (f32, f32);

    /// Size of the item at `index`, as `(width, height)`.
    fn item_size(&self, index: usize) -> (f32, f32);

    /// Total content extent along the scroll axis.
    fn layout_extent(&self) -> f32;

    /// Snaps a prospective scroll destination (e.g. a flick target) to a
    /// layout-preferred position. The default keeps the raw target.
    fn snap_position(&self, raw: f32) -> f32 {
        raw
    }

    /// The layout family tag.
    fn style_key(&self) -> StyleKey {
        StyleKey::Custom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinimalLayout;

    impl ItemsLayout for MinimalLayout {
        fn initialize(&mut self, _env: &LayoutEnv) {}
        fn clear(&mut self) {}
        fn request_layout(&mut self, _position: f32, _force: bool) {}
        fn item_position(&self, _index: usize) -> (f32, f32) {
            (0.0, 0.0)
        }
        fn item_size(&self, _index: usize) -> (f32, f32) {
            (0.0, 0.0)
        }
        fn layout_extent(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_trait_defaults() {
        let layout = MinimalLayout;
        assert_eq!(layout.snap_position(123.5), 123.5);
        assert_eq!(layout.style_key(), StyleKey::Custom);
    }

    #[test]
    fn test_direction_default_is_vertical() {
        assert_eq!(Direction::default(), Direction::Vertical);
    }
}
