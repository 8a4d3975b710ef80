//! Picker group component.
//!
//! The active picker shows every option that fits, faded towards the top
//! and bottom edges. Inactive pickers are read-only and show their label
//! above the selected option.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
};

use dialkit::picker::ScrollableList;
use dialkit::theme::{ACCENT_GOLD, BACKGROUND, TEXT_DIM, TEXT_WHITE};

use crate::app::{App, option_label};

/// Render the picker row and register its interactive regions.
pub fn render_picker_group(frame: &mut Frame, area: Rect, app: &mut App) {
    let viewport = App::picker_viewport(area);
    app.register_picker_regions(viewport);

    let bounds = app.group.layout(viewport);
    for (i, picker_bounds) in bounds.into_iter().enumerate() {
        let left = picker_bounds.x.max(viewport.x);
        let right = picker_bounds.right().min(viewport.right());
        if right - left < 1.0 {
            continue;
        }
        let cell = Rect::new(left.round() as u16, area.y, (right - left).round() as u16, area.height);

        let lines = if app.group.is_read_only(i) {
            read_only_lines(app, i, area.height)
        } else {
            active_lines(app, i, area.height)
        };
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), cell);
    }
}

fn read_only_lines(app: &App, picker: usize, height: u16) -> Vec<Line<'static>> {
    let mid = usize::from(height / 2);
    let mut lines = vec![Line::raw(""); usize::from(height)];

    let Some(item) = app.group.item(picker) else {
        return lines;
    };
    let label = item.config.read_only_label.clone().unwrap_or_default();

    if mid > 0 {
        lines[mid - 1] = Line::styled(label, Style::new().fg(TEXT_DIM.into()));
    }
    if mid < lines.len() {
        lines[mid] = Line::styled(
            option_label(picker, item.state.selected_option()),
            Style::new().fg(TEXT_WHITE.into()),
        );
    }
    lines
}

fn active_lines(app: &App, picker: usize, height: u16) -> Vec<Line<'static>> {
    let rows = usize::from(height);
    let mut lines = vec![Line::raw(""); rows];

    let Some(item) = app.group.item(picker) else {
        return lines;
    };
    let state = &item.state;
    let list = state.list();
    let center = list.center_item_index();
    let mid = f32::from(height / 2);

    for visible in list.visible_items() {
        let row = (mid + visible.offset).round();
        if row < 0.0 || row >= f32::from(height) {
            continue;
        }
        let row = row as usize;
        let base = if visible.index == center { ACCENT_GOLD } else { TEXT_WHITE };
        let y_fraction = (row as f32 + 0.5) / f32::from(height.max(1));
        let color = app.fade.apply(base, BACKGROUND, y_fraction);

        let mut style = Style::new().fg(color.into());
        if visible.index == center {
            style = style.bold();
        }
        lines[row] = Line::styled(option_label(picker, state.option_at_item(visible.index)), style);
    }
    lines
}
