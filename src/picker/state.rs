//! Picker state: maps a (possibly repeating) list of slots onto a finite set
//! of options.
//!
//! With `repeat_items` the host list is given `LARGE_NUMBER_OF_ITEMS` slots and
//! the options repeat around it, which reads as an endless wheel. Without it
//! the list has exactly one slot per option and its edges are hard stops.

use crate::error::{PickerError, PickerResult};

use super::list::{ScrollableList, VirtualList};

/// Slot count used when options repeat.
pub const LARGE_NUMBER_OF_ITEMS: usize = 100_000_000;

/// Exclusive upper bound on the number of options, so that a repeating
/// picker always has at least three full repeats of its options.
pub const MAX_OPTIONS: usize = LARGE_NUMBER_OF_ITEMS / 3;

fn verify_number_of_options(count: usize) -> PickerResult<()> {
    if count == 0 || count >= MAX_OPTIONS {
        return Err(PickerError::InvalidOptionCount {
            count,
            ceiling: MAX_OPTIONS - 1,
        });
    }
    Ok(())
}

/// Slot/option mapping, independent of any list.
///
/// Every transition returns a new value, so the arithmetic can be tested on
/// its own and the owning `PickerState` only has to swap it in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerIndex {
    number_of_options: usize,
    /// Always within `0..number_of_options`
    options_offset: usize,
    repeat_items: bool,
}

impl PickerIndex {
    pub fn new(number_of_options: usize, repeat_items: bool) -> PickerResult<Self> {
        verify_number_of_options(number_of_options)?;
        Ok(Self {
            number_of_options,
            options_offset: 0,
            repeat_items,
        })
    }

    pub fn number_of_options(&self) -> usize {
        self.number_of_options
    }

    pub fn options_offset(&self) -> usize {
        self.options_offset
    }

    pub fn repeat_items(&self) -> bool {
        self.repeat_items
    }

    /// Number of slots the host list should allocate
    pub fn number_of_items(&self) -> usize {
        if self.repeat_items {
            LARGE_NUMBER_OF_ITEMS
        } else {
            self.number_of_options
        }
    }

    /// Option shown by a slot
    pub fn option_at(&self, item: usize) -> usize {
        (item % self.number_of_options + self.options_offset) % self.number_of_options
    }

    /// Slot to center when a picker is created with `selected` showing.
    ///
    /// Repeating pickers start in the middle of the slot space so they can
    /// travel a long way in either direction.
    pub fn initial_item(&self, selected: usize) -> usize {
        if self.repeat_items {
            let repeats = LARGE_NUMBER_OF_ITEMS / self.number_of_options;
            self.number_of_options * (repeats / 2) + selected
        } else {
            selected
        }
    }

    /// Slot to move to so that `target` is centered, taking the shorter way
    /// around when options repeat. Equal distances go backward, unless that
    /// would leave the slot space.
    pub fn closest_item(&self, center: usize, target: usize) -> usize {
        if !self.repeat_items {
            return target;
        }

        let n = self.number_of_options;
        let selected = self.option_at(center);
        let steps_prev = (selected + n - target) % n;
        let steps_next = (target + n - selected) % n;

        // Near either end of the slot space only one way fits. Options
        // never exceed a third of the slots, so at least one always does.
        let fits_prev = steps_prev <= center;
        let fits_next = center + steps_next < LARGE_NUMBER_OF_ITEMS;

        if fits_prev && (steps_prev <= steps_next || !fits_next) {
            center - steps_prev
        } else {
            center + steps_next
        }
    }

    /// The mapping after changing the option count while `center` stays put.
    ///
    /// The option at `center` becomes `min(previous option, new_count - 1)`.
    /// Bounded pickers keep a zero offset; their host list is clamped instead.
    pub fn resized(self, center: usize, new_count: usize) -> PickerResult<Self> {
        verify_number_of_options(new_count)?;

        let keep = self.option_at(center).min(new_count - 1);
        let options_offset = if self.repeat_items {
            (keep + new_count - center % new_count) % new_count
        } else {
            0
        };

        Ok(Self {
            number_of_options: new_count,
            options_offset,
            repeat_items: self.repeat_items,
        })
    }
}

/// State of a single picker bound to its host list.
#[derive(Debug)]
pub struct PickerState<L = VirtualList> {
    index: PickerIndex,
    list: L,
}

impl PickerState<VirtualList> {
    /// Create a picker backed by an in-memory list.
    pub fn new(
        number_of_options: usize,
        initially_selected: usize,
        repeat_items: bool,
    ) -> PickerResult<Self> {
        let index = PickerIndex::new(number_of_options, repeat_items)?;
        let list = VirtualList::new(index.number_of_items());
        Self::with_list(list, number_of_options, initially_selected, repeat_items)
    }
}

impl<L: ScrollableList> PickerState<L> {
    /// Create a picker on top of a host list. The list is resized to the
    /// picker's slot count and centered on `initially_selected`.
    pub fn with_list(
        mut list: L,
        number_of_options: usize,
        initially_selected: usize,
        repeat_items: bool,
    ) -> PickerResult<Self> {
        let index = PickerIndex::new(number_of_options, repeat_items)?;
        if initially_selected >= number_of_options {
            return Err(PickerError::OptionOutOfRange {
                option: initially_selected,
                count: number_of_options,
            });
        }

        list.set_item_count(index.number_of_items());
        list.scroll_to_item(index.initial_item(initially_selected), 0.0);

        Ok(Self { index, list })
    }

    pub fn index(&self) -> PickerIndex {
        self.index
    }

    pub fn number_of_options(&self) -> usize {
        self.index.number_of_options()
    }

    pub fn number_of_items(&self) -> usize {
        self.index.number_of_items()
    }

    pub fn repeat_items(&self) -> bool {
        self.index.repeat_items()
    }

    /// Option shown by a given slot
    pub fn option_at_item(&self, item: usize) -> usize {
        self.index.option_at(item)
    }

    /// Option at the centered slot
    pub fn selected_option(&self) -> usize {
        self.index.option_at(self.list.center_item_index())
    }

    pub fn is_scroll_in_progress(&self) -> bool {
        self.list.is_scroll_in_progress()
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    /// Change the number of options, keeping the selection as close as
    /// possible: it becomes `min(selected, new_count - 1)`.
    pub fn set_number_of_options(&mut self, new_count: usize) -> PickerResult<()> {
        let previous = self.selected_option();
        let index = self.index.resized(self.list.center_item_index(), new_count)?;

        if !index.repeat_items() {
            self.list.set_item_count(new_count);
        }
        self.index = index;

        crate::log::log(&format!(
            "Picker resized to {} options, selection {} -> {}",
            new_count,
            previous,
            self.selected_option()
        ));
        Ok(())
    }

    fn verify_option(&self, option: usize) -> PickerResult<()> {
        if option >= self.number_of_options() {
            return Err(PickerError::OptionOutOfRange {
                option,
                count: self.number_of_options(),
            });
        }
        Ok(())
    }

    /// Center `option` immediately
    pub fn scroll_to_option(&mut self, option: usize) -> PickerResult<()> {
        self.verify_option(option)?;
        let item = self.index.closest_item(self.list.center_item_index(), option);
        self.list.scroll_to_item(item, 0.0);
        Ok(())
    }

    /// Animate until `option` is centered, taking the shorter way around
    pub async fn animate_scroll_to_option(&mut self, option: usize) -> PickerResult<()> {
        self.verify_option(option)?;
        let item = self.index.closest_item(self.list.center_item_index(), option);
        self.list.animate_scroll_to_item(item, 0.0).await;
        Ok(())
    }

    /// Animate by a number of slots (rotary ticks); stops at the list edges
    pub async fn animate_scroll_by_items(&mut self, steps: i64) {
        let last = self.list.item_count().saturating_sub(1) as i64;
        let center = self.list.center_item_index() as i64;
        let target = (center + steps).clamp(0, last) as usize;
        self.list.animate_scroll_to_item(target, 0.0).await;
    }

    /// Forward a raw gesture delta to the list, returning the consumed part
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        self.list.dispatch_raw_delta(delta)
    }

    /// Drop any partial scroll offset so the selected option sits exactly
    /// in the center.
    pub fn snap_to_selected(&mut self) {
        let center = self.list.center_item_index();
        let item = self.index.closest_item(center, self.selected_option());
        self.list.scroll_to_item(item, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_option_counts() {
        assert!(matches!(
            PickerState::new(0, 0, true),
            Err(PickerError::InvalidOptionCount { count: 0, .. })
        ));
        assert!(matches!(
            PickerIndex::new(MAX_OPTIONS, true),
            Err(PickerError::InvalidOptionCount { .. })
        ));
        assert!(PickerIndex::new(MAX_OPTIONS - 1, true).is_ok());
    }

    #[test]
    fn test_rejects_initial_selection_out_of_range() {
        assert!(matches!(
            PickerState::new(5, 5, false),
            Err(PickerError::OptionOutOfRange { option: 5, count: 5 })
        ));
    }

    #[test]
    fn test_number_of_items() {
        assert_eq!(PickerState::new(24, 0, true).unwrap().number_of_items(), LARGE_NUMBER_OF_ITEMS);
        assert_eq!(PickerState::new(24, 0, false).unwrap().number_of_items(), 24);
    }

    #[test]
    fn test_initial_selection() {
        let state = PickerState::new(60, 42, true).unwrap();
        assert_eq!(state.selected_option(), 42);

        let state = PickerState::new(60, 42, false).unwrap();
        assert_eq!(state.selected_option(), 42);
        assert_eq!(state.list().center_item_index(), 42);
    }

    #[test]
    fn test_selected_option_always_in_range() {
        for n in [1, 2, 3, 7, 12, 24, 31, 60, 1000] {
            let index = PickerIndex::new(n, true).unwrap();
            let index = index.resized(12_345, (n / 2).max(1)).unwrap();
            for item in (0..5_000).chain(LARGE_NUMBER_OF_ITEMS - 100..LARGE_NUMBER_OF_ITEMS) {
                assert!(index.option_at(item) < index.number_of_options());
            }
        }
    }

    #[test]
    fn test_closest_path_is_never_longer_than_half() {
        for n in 1..=16 {
            let index = PickerIndex::new(n, true).unwrap();
            let center = index.initial_item(0);
            for selected in 0..n {
                for target in 0..n {
                    let from = center + selected;
                    let to = index.closest_item(from, target);
                    assert_eq!(index.option_at(to), target);

                    let steps = from.abs_diff(to);
                    assert!(steps <= n / 2, "n={n} selected={selected} target={target}");

                    let forward = (target + n - selected) % n;
                    let backward = (selected + n - target) % n;
                    if forward == backward {
                        assert!(to <= from, "ties go backward");
                    } else {
                        assert_eq!(steps, forward.min(backward));
                    }
                }
            }
        }
    }

    #[test]
    fn test_closest_path_tie_goes_backward() {
        let index = PickerIndex::new(10, true).unwrap();
        let center = index.initial_item(0);
        assert_eq!(index.closest_item(center, 5), center - 5);
    }

    #[test]
    fn test_closest_path_stays_inside_slot_space() {
        let index = PickerIndex::new(10, true).unwrap();
        // Backward would pass slot 0
        assert_eq!(index.closest_item(0, 9), 9);
        assert_eq!(index.closest_item(3, 5), 5);

        let last = LARGE_NUMBER_OF_ITEMS - 1;
        let selected = index.option_at(last);
        let target = (selected + 1) % 10;
        assert_eq!(index.closest_item(last, target), last - 9);
    }

    #[test]
    fn test_scroll_to_option_after_fling_to_start() {
        let mut state = PickerState::new(10, 5, true).unwrap();
        state.scroll_by(-1e12);
        assert_eq!(state.list().center_item_index(), 0);

        state.scroll_to_option(9).unwrap();
        assert_eq!(state.selected_option(), 9);
    }

    #[test]
    fn test_scroll_to_option_after_fling_to_end() {
        let mut state = PickerState::new(7, 0, true).unwrap();
        state.scroll_by(1e12);
        assert_eq!(state.list().center_item_index(), LARGE_NUMBER_OF_ITEMS - 1);

        state.scroll_to_option(2).unwrap();
        assert_eq!(state.selected_option(), 2);
    }

    #[tokio::test]
    async fn test_animate_to_option_after_fling_to_end() {
        let mut state = PickerState::new(7, 0, true).unwrap();
        state.scroll_by(1e12);

        state.animate_scroll_to_option(2).await.unwrap();
        assert_eq!(state.selected_option(), 2);
        assert!(!state.is_scroll_in_progress());
    }

    #[test]
    fn test_bounded_target_is_the_option() {
        let index = PickerIndex::new(10, false).unwrap();
        assert_eq!(index.closest_item(9, 0), 0);
    }

    #[test]
    fn test_scroll_to_option_wraps_the_short_way() {
        let mut state = PickerState::new(24, 23, true).unwrap();
        let center = state.list().center_item_index();

        state.scroll_to_option(1).unwrap();
        assert_eq!(state.selected_option(), 1);
        assert_eq!(state.list().center_item_index(), center + 2);
    }

    #[test]
    fn test_scroll_to_option_rejects_out_of_range() {
        let mut state = PickerState::new(12, 0, true).unwrap();
        assert!(matches!(
            state.scroll_to_option(12),
            Err(PickerError::OptionOutOfRange { option: 12, count: 12 })
        ));
    }

    #[tokio::test]
    async fn test_rotary_steps_move_selection() {
        let mut state = PickerState::new(15, 5, true).unwrap();

        state.animate_scroll_by_items(1).await;
        assert_eq!(state.selected_option(), 6);

        state.scroll_to_option(5).unwrap();
        state.animate_scroll_by_items(2).await;
        assert_eq!(state.selected_option(), 7);

        state.scroll_to_option(5).unwrap();
        state.animate_scroll_by_items(-1).await;
        assert_eq!(state.selected_option(), 4);

        state.scroll_to_option(5).unwrap();
        state.animate_scroll_by_items(-2).await;
        assert_eq!(state.selected_option(), 3);
    }

    #[tokio::test]
    async fn test_animate_scroll_to_option() {
        let mut state = PickerState::new(60, 58, true).unwrap();
        let center = state.list().center_item_index();

        state.animate_scroll_to_option(3).await.unwrap();
        assert_eq!(state.selected_option(), 3);
        assert_eq!(state.list().center_item_index(), center + 5);
        assert!(!state.is_scroll_in_progress());
    }

    #[tokio::test]
    async fn test_bounded_rotary_stops_at_edge() {
        let mut state = PickerState::new(5, 3, false).unwrap();
        state.animate_scroll_by_items(10).await;
        assert_eq!(state.selected_option(), 4);
    }

    #[test]
    fn test_resize_keeps_min_of_selection() {
        for repeat_items in [true, false] {
            for (from, to, selected) in [(31, 28, 30), (31, 28, 12), (28, 31, 27), (12, 1, 7), (1, 12, 0)] {
                let mut state = PickerState::new(from, selected, repeat_items).unwrap();
                state.set_number_of_options(to).unwrap();
                assert_eq!(state.number_of_options(), to);
                assert_eq!(
                    state.selected_option(),
                    selected.min(to - 1),
                    "{from} -> {to}, selected {selected}, repeat {repeat_items}"
                );
            }
        }
    }

    #[test]
    fn test_resize_after_scrolling() {
        let mut state = PickerState::new(31, 0, true).unwrap();
        state.scroll_to_option(29).unwrap();
        state.set_number_of_options(28).unwrap();
        assert_eq!(state.selected_option(), 27);

        // Neighbouring slots continue the sequence
        let center = state.list().center_item_index();
        assert_eq!(state.option_at_item(center + 1), 0);
        assert_eq!(state.option_at_item(center - 1), 26);
    }

    #[test]
    fn test_resize_rejects_invalid_count() {
        let mut state = PickerState::new(12, 4, true).unwrap();
        assert!(state.set_number_of_options(0).is_err());
        assert_eq!(state.number_of_options(), 12);
        assert_eq!(state.selected_option(), 4);
    }

    #[test]
    fn test_snap_to_selected_clears_offset() {
        let mut state = PickerState::new(12, 4, true).unwrap();
        state.scroll_by(0.3);
        assert!(state.list().center_item_scroll_offset() > 0.0);

        state.snap_to_selected();
        assert_eq!(state.selected_option(), 4);
        assert_eq!(state.list().center_item_scroll_offset(), 0.0);
    }
}
