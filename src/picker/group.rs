//! Picker groups: several pickers side by side with one of them active.
//!
//! Only the active picker is editable; the others are read-only and only
//! react to taps that select them. With touch exploration enabled, every
//! scroll over the group goes to the active picker wherever it started.

use crate::geometry::Rect;
use crate::interaction::{InteractionRegistry, InteractiveRegion, PickerAction};

use super::list::{ScrollableList, VirtualList};
use super::saved::SavedPickerGroupState;
use super::state::PickerState;

/// Which picker in a group is active.
///
/// An index outside the group means no picker is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerGroupState {
    pub selected_index: usize,
}

impl PickerGroupState {
    pub const NONE: usize = usize::MAX;

    pub fn new(selected_index: usize) -> Self {
        Self { selected_index }
    }

    pub fn none() -> Self {
        Self::new(Self::NONE)
    }

    /// The active index for a group of `count` pickers
    pub fn active(&self, count: usize) -> Option<usize> {
        (self.selected_index < count).then_some(self.selected_index)
    }
}

impl Default for PickerGroupState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Per-picker presentation settings.
#[derive(Debug, Clone, Default)]
pub struct PickerItemConfig {
    /// Spoken description of the picker
    pub content_description: Option<String>,
    /// Label shown above the picker while it is read-only
    pub read_only_label: Option<String>,
    /// Width the picker occupies in the group row, in pixels
    pub width: f32,
}

impl PickerItemConfig {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    pub fn with_content_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }

    pub fn with_read_only_label(mut self, label: impl Into<String>) -> Self {
        self.read_only_label = Some(label.into());
        self
    }
}

#[derive(Debug)]
pub struct PickerGroupItem<L = VirtualList> {
    pub state: PickerState<L>,
    pub config: PickerItemConfig,
}

impl<L> PickerGroupItem<L> {
    pub fn new(state: PickerState<L>, config: PickerItemConfig) -> Self {
        Self { state, config }
    }
}

/// Outcome of changing the active picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<usize>,
    pub current: Option<usize>,
}

impl SelectionChange {
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Notifications raised by group input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupEvent {
    /// The picker at this index was selected by the user
    Selected(usize),
}

#[derive(Debug)]
pub struct PickerGroup<L = VirtualList> {
    items: Vec<PickerGroupItem<L>>,
    state: PickerGroupState,
    /// Horizontal gap between adjacent pickers, in pixels
    pub spacing: f32,
    /// Center the active picker instead of the whole row
    pub auto_center: bool,
    /// Route all scroll input to the active picker
    pub touch_exploration: bool,
}

impl<L: ScrollableList> PickerGroup<L> {
    pub fn new(items: Vec<PickerGroupItem<L>>, state: PickerGroupState) -> Self {
        Self {
            items,
            state,
            spacing: 0.0,
            auto_center: true,
            touch_exploration: false,
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_auto_center(mut self, auto_center: bool) -> Self {
        self.auto_center = auto_center;
        self
    }

    pub fn with_touch_exploration(mut self, touch_exploration: bool) -> Self {
        self.touch_exploration = touch_exploration;
        self
    }

    pub fn items(&self) -> &[PickerGroupItem<L>] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&PickerGroupItem<L>> {
        self.items.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut PickerGroupItem<L>> {
        self.items.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn state(&self) -> PickerGroupState {
        self.state
    }

    /// Index of the active picker, if any
    pub fn active(&self) -> Option<usize> {
        self.state.active(self.items.len())
    }

    pub fn active_picker_mut(&mut self) -> Option<&mut PickerState<L>> {
        let active = self.active()?;
        self.items.get_mut(active).map(|item| &mut item.state)
    }

    pub fn is_read_only(&self, index: usize) -> bool {
        self.active() != Some(index)
    }

    /// Make `index` the active picker. The previously active picker snaps
    /// to its selected option, since it can't finish a scroll while read-only.
    pub fn select(&mut self, index: usize) -> SelectionChange {
        let previous = self.active();
        self.state = PickerGroupState::new(index);
        let current = self.active();

        let change = SelectionChange { previous, current };
        if change.changed() {
            if let Some(previous) = previous {
                self.items[previous].state.snap_to_selected();
            }
            crate::log::log_event(&format!(
                "Picker group selection {:?} -> {:?}",
                previous, current
            ));
        }
        change
    }

    /// Leave every picker read-only
    pub fn clear_selection(&mut self) -> SelectionChange {
        self.select(PickerGroupState::NONE)
    }

    /// Handle a tap on the picker at `index`.
    ///
    /// Tapping a read-only picker selects it. With touch exploration every
    /// tap selects and reports, including taps on the active picker.
    pub fn handle_tap(&mut self, index: usize) -> Option<GroupEvent> {
        if index >= self.items.len() {
            return None;
        }
        if !self.touch_exploration && self.active() == Some(index) {
            return None;
        }
        self.select(index);
        Some(GroupEvent::Selected(index))
    }

    /// Route a raw scroll delta that started over the picker at `origin`.
    ///
    /// Returns the picker that received the delta and how much it consumed.
    pub fn route_scroll(&mut self, origin: Option<usize>, delta: f32) -> Option<(usize, f32)> {
        let active = self.active()?;
        let target = if self.touch_exploration {
            active
        } else {
            origin.filter(|&origin| origin == active)?
        };
        let consumed = self.items[target].state.scroll_by(delta);
        Some((target, consumed))
    }

    /// Send rotary ticks to the active picker
    pub async fn rotate_active(&mut self, steps: i64) -> Option<usize> {
        let active = self.active()?;
        self.items[active].state.animate_scroll_by_items(steps).await;
        Some(active)
    }

    /// Bounds of every picker inside `viewport`.
    ///
    /// With auto-centering and an active picker, the row is shifted so the
    /// active picker's center lines up with the viewport center. Otherwise
    /// the row as a whole is centered.
    pub fn layout(&self, viewport: Rect) -> Vec<Rect> {
        let mut lefts = Vec::with_capacity(self.items.len());
        let mut cursor = 0.0;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                cursor += self.spacing;
            }
            lefts.push(cursor);
            cursor += item.config.width;
        }
        let total = cursor;

        let start = match self.active() {
            Some(active) if self.auto_center => {
                let active_center = lefts[active] + self.items[active].config.width / 2.0;
                viewport.center().x - active_center
            }
            _ => viewport.x + (viewport.width - total) / 2.0,
        };

        self.items
            .iter()
            .zip(lefts)
            .map(|(item, left)| Rect::new(start + left, viewport.y, item.config.width, viewport.height))
            .collect()
    }

    /// Register tap and scroll regions for the current layout
    pub fn register_regions(&self, registry: &mut InteractionRegistry, viewport: Rect) {
        let active = self.active();

        for (i, bounds) in self.layout(viewport).into_iter().enumerate() {
            registry.register(InteractiveRegion::tappable("picker", bounds, PickerAction::Select(i)));
            if !self.touch_exploration && active == Some(i) {
                registry.register(InteractiveRegion::scrollable("picker", bounds, PickerAction::Scroll(i)));
            }
        }

        if let (true, Some(active)) = (self.touch_exploration, active) {
            registry.register(
                InteractiveRegion::scrollable("picker_group", viewport, PickerAction::Scroll(active))
                    .with_priority(10),
            );
        }
    }

    pub fn save(&self) -> SavedPickerGroupState {
        self.state.into()
    }

    /// Restore the active index without touching the pickers
    pub fn restore(&mut self, saved: SavedPickerGroupState) {
        self.state = saved.into();
    }
}
