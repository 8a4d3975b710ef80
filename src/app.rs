use serde::{Deserialize, Serialize};

use dialkit::config::{Config, ProgressShape};
use dialkit::geometry::Rect;
use dialkit::interaction::InteractionRegistry;
use dialkit::picker::{
    ANIMATION_WINDOW, GroupEvent, PickerGroup, PickerGroupItem, PickerGroupState, PickerItemConfig,
    PickerSemantics, PickerState, SavedPickerGroupState, SavedPickerState, ScrollableList,
    SemanticsAction, VirtualList, VisibleItem,
};
use dialkit::progress::{EdgeFade, ProgressIndicatorSegment};
use dialkit::scroll::RotaryAccumulator;
use dialkit::theme::{ACCENT_CORAL, ACCENT_GOLD, ACCENT_LIGHT_BLUE, ACCENT_MINT};
use dialkit::{DialkitError, PickerError};

use crate::events::Action;

pub const HOUR: usize = 0;
pub const MINUTE: usize = 1;
pub const MONTH: usize = 2;
pub const DAY: usize = 3;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Days in each month of a non-leap year
const DAYS_IN_MONTH: [usize; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Picker width in terminal columns
const PICKER_WIDTH: f32 = 7.0;

/// Host list for the terminal.
///
/// Animations are driven by the render loop: `animate_scroll_to_item`
/// records the target and returns, and every tick moves one row closer.
/// The returned future therefore resolves before the scroll ends; callers
/// that need completion watch `is_scroll_in_progress` from the tick.
#[derive(Debug, Clone)]
pub struct TerminalList {
    list: VirtualList,
    target: Option<usize>,
}

impl TerminalList {
    pub fn new(rows: u16) -> Self {
        Self {
            list: VirtualList::new(0).with_viewport(f32::from(rows)),
            target: None,
        }
    }

    /// Move one row towards the animation target. Returns false when idle.
    pub fn advance_frame(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let center = self.list.center_item_index();
        let next = if target > center {
            center + 1
        } else if target < center {
            center - 1
        } else {
            center
        };
        self.list.scroll_to_item(next, 0.0);
        if next == target {
            self.target = None;
        }
        true
    }
}

impl ScrollableList for TerminalList {
    fn item_count(&self) -> usize {
        self.list.item_count()
    }

    fn set_item_count(&mut self, count: usize) {
        self.list.set_item_count(count);
        self.target = self.target.map(|t| t.min(count.saturating_sub(1)));
    }

    fn center_item_index(&self) -> usize {
        self.list.center_item_index()
    }

    fn center_item_scroll_offset(&self) -> f32 {
        self.list.center_item_scroll_offset()
    }

    fn visible_items(&self) -> Vec<VisibleItem> {
        self.list.visible_items()
    }

    fn is_scroll_in_progress(&self) -> bool {
        self.target.is_some()
    }

    fn scroll_to_item(&mut self, index: usize, offset: f32) {
        self.target = None;
        self.list.scroll_to_item(index, offset);
    }

    async fn animate_scroll_to_item(&mut self, index: usize, _offset: f32) {
        let target = index.min(self.list.item_count().saturating_sub(1));
        let center = self.list.center_item_index();
        if target.abs_diff(center) > ANIMATION_WINDOW {
            let start = if target > center {
                target - ANIMATION_WINDOW
            } else {
                target + ANIMATION_WINDOW
            };
            self.list.scroll_to_item(start, 0.0);
        }
        self.target = Some(target);
    }

    fn dispatch_raw_delta(&mut self, delta: f32) -> f32 {
        self.target = None;
        self.list.dispatch_raw_delta(delta)
    }
}

/// What the sample app persists between runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedSession {
    pub pickers: Vec<SavedPickerState>,
    pub group: SavedPickerGroupState,
}

/// Label for an option of one of the demo pickers
pub fn option_label(picker: usize, option: usize) -> String {
    match picker {
        HOUR | MINUTE => format!("{:02}", option),
        MONTH => MONTHS.get(option).copied().unwrap_or("?").to_string(),
        _ => format!("{}", option + 1),
    }
}

/// Spoken description for an option of one of the demo pickers
pub fn option_description(picker: usize, option: usize) -> String {
    match picker {
        HOUR => format!("{} hours", option),
        MINUTE => format!("{} minutes", option),
        MONTH => MONTHS.get(option).copied().unwrap_or("?").to_string(),
        _ => format!("day {}", option + 1),
    }
}

fn demo_items(
    config: &Config,
    rows: u16,
    initial: [usize; 4],
) -> Result<Vec<PickerGroupItem<TerminalList>>, PickerError> {
    let repeat_items = config.picker.repeat_items;
    let pickers = [
        (24, "Hour", "Hours"),
        (60, "Min", "Minutes"),
        (12, "Month", "Month"),
        (DAYS_IN_MONTH[initial[MONTH]], "Day", "Day of month"),
    ];

    pickers
        .iter()
        .zip(initial)
        .map(|(&(options, label, description), selected)| {
            let state = PickerState::with_list(
                TerminalList::new(rows),
                options,
                selected.min(options - 1),
                repeat_items,
            )?;
            let config = PickerItemConfig::new(PICKER_WIDTH)
                .with_read_only_label(label)
                .with_content_description(description);
            Ok(PickerGroupItem::new(state, config))
        })
        .collect()
}

/// Main application state
pub struct App {
    pub config: Config,
    pub group: PickerGroup<TerminalList>,
    pub segments: Vec<ProgressIndicatorSegment>,
    /// Overall progress, in `[0, 1]`
    pub progress: f32,
    pub shape: ProgressShape,
    pub fade: EdgeFade,
    pub rotary: RotaryAccumulator,
    /// Interactive regions registered during render
    pub interactions: InteractionRegistry,
    /// Status line shown under the pickers
    pub status: String,
    pub show_help: bool,
    /// A jump to the current time is still scrolling
    pub pending_jump: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, rows: u16) -> Result<Self, DialkitError> {
        let now = chrono::Local::now();
        let initial = {
            use chrono::{Datelike, Timelike};
            [
                now.hour() as usize,
                now.minute() as usize,
                now.month0() as usize,
                now.day0() as usize,
            ]
        };

        let items = demo_items(&config, rows, initial)?;
        let group = PickerGroup::new(items, PickerGroupState::new(HOUR))
            .with_spacing(2.0)
            .with_auto_center(config.picker.auto_center)
            .with_touch_exploration(config.picker.touch_exploration);

        let palette = [ACCENT_MINT, ACCENT_LIGHT_BLUE, ACCENT_GOLD, ACCENT_CORAL];
        let segments = config
            .progress
            .segments
            .iter()
            .enumerate()
            .map(|(i, &weight)| ProgressIndicatorSegment::new(weight, palette[i % palette.len()]))
            .collect();

        let fade = config.picker.edge_fade()?;
        let rotary = RotaryAccumulator::new(
            std::time::Duration::from_millis(200),
            config.picker.rotary_threshold,
        );

        Ok(Self {
            shape: config.progress.shape,
            config,
            group,
            segments,
            progress: 0.4,
            fade,
            rotary,
            interactions: InteractionRegistry::new(),
            status: String::new(),
            show_help: false,
            pending_jump: false,
            should_quit: false,
        })
    }

    /// Rebuild pickers from a saved session, ignoring sessions that don't
    /// fit the demo layout.
    pub fn restore(&mut self, session: SavedSession, rows: u16) -> Result<(), PickerError> {
        if session.pickers.len() != self.group.len() {
            return Err(PickerError::InvalidSavedState(format!(
                "expected {} pickers, found {}",
                self.group.len(),
                session.pickers.len()
            )));
        }
        if session
            .pickers
            .iter()
            .any(|saved| saved.repeat_items != self.config.picker.repeat_items)
        {
            return Err(PickerError::InvalidSavedState(
                "repeat mode differs from configuration".to_string(),
            ));
        }

        let states = session
            .pickers
            .into_iter()
            .map(|saved| PickerState::restore_with_list(TerminalList::new(rows), saved))
            .collect::<Result<Vec<_>, _>>()?;
        for (i, state) in states.into_iter().enumerate() {
            if let Some(item) = self.group.item_mut(i) {
                item.state = state;
            }
        }
        self.group.restore(session.group);
        self.sync_day_count()?;
        Ok(())
    }

    pub fn save(&self) -> SavedSession {
        SavedSession {
            pickers: self.group.items().iter().map(|item| item.state.save()).collect(),
            group: self.group.save(),
        }
    }

    /// Keep the day picker in step with the selected month
    pub fn sync_day_count(&mut self) -> Result<(), PickerError> {
        let month = match self.group.item(MONTH) {
            Some(item) => item.state.selected_option(),
            None => return Ok(()),
        };
        let days = DAYS_IN_MONTH[month % DAYS_IN_MONTH.len()];

        if let Some(day) = self.group.item_mut(DAY) {
            if day.state.number_of_options() != days {
                day.state.set_number_of_options(days)?;
            }
        }
        Ok(())
    }

    /// Advance picker animations by one frame
    pub fn on_tick(&mut self) -> Result<(), PickerError> {
        let mut month_moved = false;
        for i in 0..self.group.len() {
            if let Some(item) = self.group.item_mut(i) {
                if item.state.list_mut().advance_frame() && i == MONTH {
                    month_moved = true;
                }
            }
        }
        if month_moved {
            self.sync_day_count()?;
        }

        if self.pending_jump && !self.is_scrolling(&[HOUR, MINUTE]) {
            self.pending_jump = false;
            self.status = format!(
                "Jumped to {}:{}",
                self.selected_label(HOUR),
                self.selected_label(MINUTE)
            );
        }
        Ok(())
    }

    fn is_scrolling(&self, pickers: &[usize]) -> bool {
        pickers.iter().any(|&picker| {
            self.group
                .item(picker)
                .is_some_and(|item| item.state.is_scroll_in_progress())
        })
    }

    pub fn selected_label(&self, picker: usize) -> String {
        self.group
            .item(picker)
            .map(|item| option_label(picker, item.state.selected_option()))
            .unwrap_or_default()
    }

    /// Describe the active picker the way a screen reader would
    pub fn describe_active(&self) -> Option<String> {
        let active = self.group.active()?;
        let item = self.group.item(active)?;
        let semantics = PickerSemantics::describe(&item.state, |option| {
            option_description(active, option)
        });
        let name = item.config.content_description.clone().unwrap_or_default();
        Some(match semantics.content_description {
            Some(description) => format!("{}: {}", name, description),
            None => format!("{}: scrolling", name),
        })
    }

    /// Picker viewport in cell coordinates, for layout and hit testing
    pub fn picker_viewport(area: ratatui::layout::Rect) -> Rect {
        Rect::new(
            f32::from(area.x),
            f32::from(area.y),
            f32::from(area.width),
            f32::from(area.height),
        )
    }

    /// Re-register interactive regions for the current picker layout
    pub fn register_picker_regions(&mut self, viewport: Rect) {
        self.interactions.clear();
        self.group.register_regions(&mut self.interactions, viewport);
    }

    /// Apply an action to the app state
    pub async fn dispatch(&mut self, action: Action) -> Result<(), DialkitError> {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::SelectPicker(index) => {
                self.group.select(index);
                self.status = self.describe_active().unwrap_or_default();
            }
            Action::SelectNext | Action::SelectPrev => {
                let len = self.group.len();
                if len > 0 {
                    let current = self.group.active().unwrap_or(0);
                    let next = if matches!(action, Action::SelectNext) {
                        (current + 1) % len
                    } else {
                        (current + len - 1) % len
                    };
                    self.group.select(next);
                    self.status = self.describe_active().unwrap_or_default();
                }
            }
            Action::Rotate(steps) => {
                self.group.rotate_active(steps).await;
            }
            Action::TapPicker(index) => {
                if let Some(GroupEvent::Selected(index)) = self.group.handle_tap(index) {
                    self.status = format!(
                        "Selected {}",
                        self.group
                            .item(index)
                            .and_then(|item| item.config.content_description.clone())
                            .unwrap_or_default()
                    );
                }
            }
            Action::Scroll { origin, delta } => {
                if let Some(steps) = self.rotary.accumulate(delta) {
                    self.group.route_scroll(origin, steps as f32);
                    self.sync_day_count()?;
                }
            }
            Action::ToggleTouchExploration => {
                self.group.touch_exploration = !self.group.touch_exploration;
                self.status = format!(
                    "Touch exploration {}",
                    if self.group.touch_exploration { "on" } else { "off" }
                );
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::ToggleAutoCenter => {
                self.group.auto_center = !self.group.auto_center;
            }
            Action::ToggleShape => {
                self.shape = self.shape.toggled();
            }
            Action::AdjustProgress(delta) => {
                self.progress = (self.progress + delta).clamp(0.0, 1.0);
            }
            Action::Describe => {
                self.status = self.describe_active().unwrap_or_else(|| "No picker selected".to_string());
            }
            Action::JumpToNow => {
                use chrono::Timelike;
                let now = chrono::Local::now();
                let targets = [(HOUR, now.hour() as usize), (MINUTE, now.minute() as usize)];
                let mut started = false;
                for (picker, option) in targets {
                    if let Some(item) = self.group.item_mut(picker) {
                        dialkit::picker::perform(
                            &mut item.state,
                            SemanticsAction::ScrollToIndex(option),
                            || started = true,
                        )
                        .await?;
                    }
                }
                // The scrolls finish on later ticks; `on_tick` announces them
                if started {
                    self.pending_jump = true;
                    self.status = "Jumping to now".to_string();
                }
            }
        }
        Ok(())
    }
}
