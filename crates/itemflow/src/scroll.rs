//! Scroll-to resolution.
//!
//! The alignment math lives in [`resolve_aligned_offset`], a pure function
//! over scalars along the scroll axis; [`CollectionView`](crate::CollectionView)
//! feeds it the layout's item geometry and the container's current position.
//! [`PendingScroll`] holds requests that arrive before the layout is ready,
//! replayed once after initialization.

/// How a scroll-to-index target aligns within the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    /// Minimal movement: scroll only when the item sits outside the viewport
    /// by more than one item extent of slack.
    #[default]
    Nearest,
    /// Item's leading edge at the viewport's leading edge.
    Start,
    /// Item centered in the viewport.
    Center,
    /// Item's trailing edge at the viewport's trailing edge.
    End,
}

/// Host-side scrollable container the view drives.
pub trait ScrollContainer {
    /// Scrolls the content to an absolute position along the scroll axis.
    fn scroll_to(&mut self, position: f32, animate: bool);

    /// Current scroll offset as `(x, y)`.
    fn scroll_position(&self) -> (f32, f32);

    /// Viewport size as `(width, height)`.
    fn viewport_size(&self) -> (f32, f32);

    /// Publishes the content extent along the scroll axis after relayout.
    fn set_content_extent(&mut self, extent: f32);
}

/// Computes the scroll target for an aligned scroll-to-index request.
///
/// All scalars are measured along the scroll axis: `item_pos` is the item's
/// leading edge, `item_extent` its size, `current` the present scroll offset
/// and `viewport` the viewport extent. Returns `None` when no scrolling is
/// warranted (`Nearest` with the item already in view, slack of one item
/// extent on either side).
pub fn resolve_aligned_offset(
    align: ScrollAlign,
    item_pos: f32,
    item_extent: f32,
    current: f32,
    viewport: f32,
) -> Option<f32> {
    match align {
        ScrollAlign::Start => Some(item_pos),
        ScrollAlign::Center => Some(item_pos - viewport / 2.0 + item_extent / 2.0),
        ScrollAlign::End => Some(item_pos - viewport + item_extent),
        ScrollAlign::Nearest => {
            if item_pos < current - item_extent {
                Some(item_pos)
            } else if item_pos >= current + viewport + item_extent {
                Some(item_pos - viewport + item_extent)
            } else {
                None
            }
        }
    }
}

/// Scroll requests queued until the layout initializes.
///
/// At most one absolute and one index request are held; a newer request of
/// the same kind overwrites the older one. Replay drains both, absolute
/// first, so the index request wins when both are present.
#[derive(Debug, Default)]
pub struct PendingScroll {
    position: Option<(f32, bool)>,
    index: Option<(usize, bool, ScrollAlign)>,
}

impl PendingScroll {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues (or overwrites) the absolute request.
    pub fn set_position(&mut self, position: f32, animate: bool) {
        self.position = Some((position, animate));
    }

    /// Queues (or overwrites) the index request.
    pub fn set_index(&mut self, index: usize, animate: bool, align: ScrollAlign) {
        self.index = Some((index, animate, align));
    }

    /// Takes the absolute request, leaving the queue slot empty.
    pub fn take_position(&mut self) -> Option<(f32, bool)> {
        self.position.take()
    }

    /// Takes the index request, leaving the queue slot empty.
    pub fn take_index(&mut self) -> Option<(usize, bool, ScrollAlign)> {
        self.index.take()
    }

    /// Whether no request is queued.
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.index.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Item of extent 20 at position 160; viewport 100, scrolled to 40.
    const ITEM_POS: f32 = 160.0;
    const ITEM: f32 = 20.0;
    const CUR: f32 = 40.0;
    const VIEW: f32 = 100.0;

    #[test]
    fn test_explicit_alignments() {
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::Start, ITEM_POS, ITEM, CUR, VIEW),
            Some(160.0)
        );
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::Center, ITEM_POS, ITEM, CUR, VIEW),
            Some(120.0)
        );
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::End, ITEM_POS, ITEM, CUR, VIEW),
            Some(80.0)
        );
    }

    #[test]
    fn test_nearest_in_view_is_noop() {
        // Item at 100 with viewport [40, 140): inside, no scroll.
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::Nearest, 100.0, ITEM, CUR, VIEW),
            None
        );
        // Slack: an item one extent before the viewport still counts as near.
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::Nearest, 20.0, ITEM, CUR, VIEW),
            None
        );
        // Exactly at the far slack threshold scrolls.
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::Nearest, CUR + VIEW + ITEM, ITEM, CUR, VIEW),
            Some(CUR + VIEW + ITEM - VIEW + ITEM)
        );
    }

    #[test]
    fn test_nearest_far_before_aligns_to_start() {
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::Nearest, 10.0, ITEM, CUR, VIEW),
            Some(10.0)
        );
    }

    #[test]
    fn test_nearest_far_after_aligns_to_end() {
        assert_eq!(
            resolve_aligned_offset(ScrollAlign::Nearest, 300.0, ITEM, CUR, VIEW),
            Some(220.0)
        );
    }

    #[test]
    fn test_pending_last_wins_and_drains() {
        let mut pending = PendingScroll::new();
        assert!(pending.is_empty());

        pending.set_position(10.0, false);
        pending.set_position(30.0, true);
        pending.set_index(2, false, ScrollAlign::Start);
        pending.set_index(7, true, ScrollAlign::End);
        assert!(!pending.is_empty());

        assert_eq!(pending.take_position(), Some((30.0, true)));
        assert_eq!(pending.take_index(), Some((7, true, ScrollAlign::End)));
        assert!(pending.is_empty());
        assert_eq!(pending.take_position(), None);
    }
}
