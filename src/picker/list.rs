//! Scrollable list capability consumed by pickers.
//!
//! A picker never talks to a concrete widget. It needs a list that knows
//! which slot is centered, can jump or animate to a slot, and accepts raw
//! scroll deltas from gesture sources. `VirtualList` is an in-memory
//! implementation with uniform item sizes, usable headless and in tests.

use std::time::Duration;

/// Number of items an animated scroll actually travels; longer jumps
/// teleport to this distance from the target first.
pub const ANIMATION_WINDOW: usize = 20;

/// A slot currently laid out in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleItem {
    /// Slot index in the list
    pub index: usize,
    /// Distance from the viewport center to the item center, in pixels
    pub offset: f32,
    /// Main-axis size of the item, in pixels
    pub size: f32,
}

/// The capability a picker needs from its host list.
#[allow(async_fn_in_trait)]
pub trait ScrollableList {
    /// Number of slots the list allocates
    fn item_count(&self) -> usize;

    /// Change the slot count, clamping the centered slot into range
    fn set_item_count(&mut self, count: usize);

    /// Slot currently closest to the viewport center
    fn center_item_index(&self) -> usize;

    /// Pixel offset of the centered slot from the exact center
    fn center_item_scroll_offset(&self) -> f32;

    /// Slots currently intersecting the viewport
    fn visible_items(&self) -> Vec<VisibleItem>;

    /// Whether an animated scroll is running
    fn is_scroll_in_progress(&self) -> bool;

    /// Jump to a slot without animation
    fn scroll_to_item(&mut self, index: usize, offset: f32);

    /// Animate to a slot, resolving when the animation finishes.
    ///
    /// Dropping the future abandons the animation wherever it got to.
    async fn animate_scroll_to_item(&mut self, index: usize, offset: f32);

    /// Apply a raw scroll delta and return the part that was consumed
    fn dispatch_raw_delta(&mut self, delta: f32) -> f32;
}

/// In-memory list with uniformly sized slots.
#[derive(Debug, Clone)]
pub struct VirtualList {
    item_count: usize,
    center: usize,
    scroll_offset: f32,
    item_size: f32,
    spacing: f32,
    viewport: f32,
    frame: Duration,
    scrolling: bool,
}

impl VirtualList {
    /// Create a list with unit-sized items, a five item viewport and
    /// animations that advance one item per scheduler yield.
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            center: 0,
            scroll_offset: 0.0,
            item_size: 1.0,
            spacing: 0.0,
            viewport: 5.0,
            frame: Duration::ZERO,
            scrolling: false,
        }
    }

    pub fn with_item_size(mut self, item_size: f32, spacing: f32) -> Self {
        self.item_size = item_size.max(f32::EPSILON);
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn with_viewport(mut self, viewport: f32) -> Self {
        self.viewport = viewport.max(0.0);
        self
    }

    /// Time each animation frame waits before moving one more item
    pub fn with_frame_duration(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    fn stride(&self) -> f64 {
        f64::from(self.item_size + self.spacing)
    }

    fn last_index(&self) -> usize {
        self.item_count.saturating_sub(1)
    }
}

/// Clears the in-progress flag however the animation ends.
struct Animation<'a> {
    list: &'a mut VirtualList,
    target: usize,
}

impl Drop for Animation<'_> {
    fn drop(&mut self) {
        if self.list.center != self.target {
            crate::log::log(&format!(
                "Animation to item {} abandoned at item {}",
                self.target, self.list.center
            ));
        }
        self.list.scrolling = false;
    }
}

async fn pause(frame: Duration) {
    if frame.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(frame).await;
    }
}

impl ScrollableList for VirtualList {
    fn item_count(&self) -> usize {
        self.item_count
    }

    fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        if self.center > self.last_index() {
            self.center = self.last_index();
            self.scroll_offset = 0.0;
        }
    }

    fn center_item_index(&self) -> usize {
        self.center
    }

    fn center_item_scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn visible_items(&self) -> Vec<VisibleItem> {
        if self.item_count == 0 {
            return vec![];
        }

        let stride = self.stride() as f32;
        let half_viewport = self.viewport / 2.0;
        let reach = (half_viewport / stride).ceil() as usize + 1;
        let first = self.center.saturating_sub(reach);
        let last = (self.center + reach).min(self.last_index());

        (first..=last)
            .filter_map(|index| {
                let slots = index as f32 - self.center as f32;
                let offset = slots * stride - self.scroll_offset;
                let visible = offset.abs() - self.item_size / 2.0 < half_viewport;
                visible.then_some(VisibleItem {
                    index,
                    offset,
                    size: self.item_size,
                })
            })
            .collect()
    }

    fn is_scroll_in_progress(&self) -> bool {
        self.scrolling
    }

    fn scroll_to_item(&mut self, index: usize, offset: f32) {
        self.center = index.min(self.last_index());
        self.scroll_offset = offset;
    }

    async fn animate_scroll_to_item(&mut self, index: usize, offset: f32) {
        let target = index.min(self.last_index());
        let frame = self.frame;
        let animation = Animation { list: self, target };
        animation.list.scrolling = true;

        let distance = target.abs_diff(animation.list.center);
        if distance > ANIMATION_WINDOW {
            animation.list.center = if target > animation.list.center {
                target - ANIMATION_WINDOW
            } else {
                target + ANIMATION_WINDOW
            };
        }

        while animation.list.center != target {
            if target > animation.list.center {
                animation.list.center += 1;
            } else {
                animation.list.center -= 1;
            }
            animation.list.scroll_offset = 0.0;
            pause(frame).await;
        }
        animation.list.scroll_offset = offset;
    }

    fn dispatch_raw_delta(&mut self, delta: f32) -> f32 {
        if self.item_count == 0 {
            return 0.0;
        }

        let stride = self.stride();
        let position = self.center as f64 * stride + f64::from(self.scroll_offset);
        let max = self.last_index() as f64 * stride;
        let next = (position + f64::from(delta)).clamp(0.0, max);

        self.center = ((next / stride).round() as usize).min(self.last_index());
        self.scroll_offset = (next - self.center as f64 * stride) as f32;

        (next - position) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_delta_moves_center() {
        let mut list = VirtualList::new(10).with_item_size(10.0, 0.0);

        assert_eq!(list.dispatch_raw_delta(24.0), 24.0);
        assert_eq!(list.center_item_index(), 2);
        assert!((list.center_item_scroll_offset() - 4.0).abs() < 1e-4);

        // Past the halfway point the next item becomes the center
        list.dispatch_raw_delta(2.0);
        assert_eq!(list.center_item_index(), 3);
        assert!((list.center_item_scroll_offset() + 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_raw_delta_stops_at_edges() {
        let mut list = VirtualList::new(3).with_item_size(10.0, 0.0);

        assert_eq!(list.dispatch_raw_delta(-5.0), 0.0);
        assert_eq!(list.dispatch_raw_delta(100.0), 20.0);
        assert_eq!(list.center_item_index(), 2);
    }

    #[test]
    fn test_shrinking_clamps_center() {
        let mut list = VirtualList::new(31);
        list.scroll_to_item(30, 0.0);

        list.set_item_count(28);
        assert_eq!(list.center_item_index(), 27);
    }

    #[test]
    fn test_visible_items_surround_center() {
        let mut list = VirtualList::new(100).with_viewport(3.0);
        list.scroll_to_item(50, 0.0);

        let indices: Vec<usize> = list.visible_items().iter().map(|i| i.index).collect();
        assert_eq!(indices, vec![49, 50, 51]);
    }

    #[tokio::test]
    async fn test_animate_reaches_target() {
        let mut list = VirtualList::new(100);
        list.scroll_to_item(10, 0.0);

        list.animate_scroll_to_item(14, 0.0).await;
        assert_eq!(list.center_item_index(), 14);
        assert!(!list.is_scroll_in_progress());
    }

    #[tokio::test]
    async fn test_long_animation_teleports_close_to_target() {
        let mut list = VirtualList::new(1_000);

        list.animate_scroll_to_item(900, 0.0).await;
        assert_eq!(list.center_item_index(), 900);
    }

    #[tokio::test]
    async fn test_dropped_animation_is_abandoned_silently() {
        let mut list = VirtualList::new(100);

        {
            let animation = list.animate_scroll_to_item(10, 0.0);
            let mut animation = std::pin::pin!(animation);
            // Poll once so the first step happens, then drop the future
            let _ = futures::poll!(animation.as_mut());
        }

        assert!(!list.is_scroll_in_progress());
        assert!(list.center_item_index() < 10);
    }
}
