//! Region-based hit testing for picker groups.
//!
//! Pickers register the regions they occupy after layout, and pointer input
//! is resolved against this registry to find the picker a tap or scroll
//! belongs to.
//!
//! # Example
//!
//! ```ignore
//! registry.clear();
//! group.register_regions(&mut registry, viewport);
//!
//! match registry.handle_tap(x, y) {
//!     PickerAction::Select(index) => { group.handle_tap(index); }
//!     _ => {}
//! }
//! ```

use crate::geometry::Rect;

/// What a pointer event at some position should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerAction {
    /// Nothing under the pointer handles the event
    #[default]
    None,
    /// Make the picker at this index the active one
    Select(usize),
    /// Scroll the picker at this index
    Scroll(usize),
}

/// An interactive region that can respond to pointer events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    /// The bounds of this interactive region
    pub bounds: Rect,

    /// Action to dispatch on tap (None = not tappable)
    pub on_tap: Option<PickerAction>,

    /// Action to dispatch on scroll (None = not scrollable)
    pub on_scroll: Option<PickerAction>,

    /// Priority for overlapping regions (higher = checked first)
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new tappable region
    pub fn tappable(id: &'static str, bounds: Rect, action: PickerAction) -> Self {
        Self {
            id,
            bounds,
            on_tap: Some(action),
            on_scroll: None,
            priority: 0,
        }
    }

    /// Create a new scrollable region
    pub fn scrollable(id: &'static str, bounds: Rect, action: PickerAction) -> Self {
        Self {
            id,
            bounds,
            on_tap: None,
            on_scroll: Some(action),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt after every layout.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call before each layout)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    fn resolve<F>(&self, x: f32, y: f32, pick: F) -> PickerAction
    where
        F: Fn(&InteractiveRegion) -> Option<PickerAction>,
    {
        self.regions
            .iter()
            .filter(|r| r.contains(x, y))
            .filter_map(|r| pick(r).map(|action| (r.priority, action)))
            .max_by_key(|(priority, _)| *priority)
            .map(|(_, action)| action)
            .unwrap_or_default()
    }

    /// Find the action for a tap at (x, y), from the highest-priority region
    /// that contains the point and handles taps.
    pub fn handle_tap(&self, x: f32, y: f32) -> PickerAction {
        self.resolve(x, y, |r| r.on_tap)
    }

    /// Find the action for a scroll at (x, y)
    pub fn handle_scroll(&self, x: f32, y: f32) -> PickerAction {
        self.resolve(x, y, |r| r.on_scroll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_ordering() {
        let mut registry = InteractionRegistry::new();

        registry.register(
            InteractiveRegion::scrollable(
                "picker_1",
                Rect::new(0.0, 0.0, 50.0, 100.0),
                PickerAction::Scroll(1),
            )
            .with_priority(0),
        );
        registry.register(
            InteractiveRegion::scrollable(
                "group",
                Rect::new(0.0, 0.0, 200.0, 100.0),
                PickerAction::Scroll(0),
            )
            .with_priority(10),
        );

        assert_eq!(registry.handle_scroll(10.0, 10.0), PickerAction::Scroll(0));
        assert_eq!(registry.handle_scroll(150.0, 10.0), PickerAction::Scroll(0));
        assert_eq!(registry.handle_scroll(250.0, 10.0), PickerAction::None);
    }

    #[test]
    fn test_tap_ignores_scroll_only_regions() {
        let mut registry = InteractionRegistry::new();
        registry.register(InteractiveRegion::scrollable(
            "scroll",
            Rect::new(0.0, 0.0, 100.0, 100.0),
            PickerAction::Scroll(0),
        ));
        registry.register(InteractiveRegion::tappable(
            "tap",
            Rect::new(50.0, 0.0, 50.0, 100.0),
            PickerAction::Select(1),
        ));

        assert_eq!(registry.handle_tap(10.0, 10.0), PickerAction::None);
        assert_eq!(registry.handle_tap(60.0, 10.0), PickerAction::Select(1));
    }
}
