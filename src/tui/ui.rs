use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use dialkit::config::ProgressShape;
use dialkit::theme::{ACCENT_CORAL, ACCENT_GOLD, ACCENT_LIGHT_BLUE, ACCENT_MINT, TEXT_DIM, TEXT_WHITE};

use crate::app::{App, DAY, HOUR, MINUTE, MONTH};

use super::components::{
    render_help_popup, render_picker_group, render_progress_indicator, render_separator,
};

pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main vertical layout: logo, content, status, hotkeys
    let main_layout = Layout::vertical([
        Constraint::Length(2), // Logo + spacing
        Constraint::Min(0),    // Content
        Constraint::Length(1), // Status
        Constraint::Length(1), // Hotkeys
    ])
    .split(area);

    render_logo(frame, main_layout[0]);

    // Horizontal split: pickers | separator | progress
    let content_layout = Layout::horizontal([
        Constraint::Percentage(55),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .split(main_layout[1]);

    render_picker_group(frame, content_layout[0], app);
    render_separator(frame, content_layout[1]);
    render_progress_indicator(frame, content_layout[2], app);

    render_status(frame, main_layout[2], app);
    render_hotkeys(frame, main_layout[3], app);

    if app.show_help {
        render_help_popup(frame, area);
    }
}

fn render_logo(frame: &mut Frame, area: Rect) {
    let colors = [ACCENT_CORAL, ACCENT_GOLD, ACCENT_LIGHT_BLUE, ACCENT_MINT];
    let logo = "dialkit";
    let padding = (area.width.saturating_sub(logo.len() as u16)) / 2;

    let mut spans = vec![Span::raw(" ".repeat(padding as usize))];
    spans.extend(logo.chars().enumerate().map(|(i, c)| {
        Span::styled(c.to_string(), Style::new().fg(colors[i % colors.len()].into()).bold())
    }));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status(frame: &mut Frame, area: Rect, app: &App) {
    let date = format!(
        "{}:{}  {} {}",
        app.selected_label(HOUR),
        app.selected_label(MINUTE),
        app.selected_label(DAY),
        app.selected_label(MONTH),
    );

    let line = Line::from(vec![
        Span::styled(format!(" {} ", date), Style::new().fg(TEXT_WHITE.into()).bold()),
        Span::styled(app.status.clone(), Style::new().fg(TEXT_DIM.into())),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_hotkeys(frame: &mut Frame, area: Rect, app: &App) {
    let key = |k: &'static str| Span::styled(k, Style::new().fg(TEXT_WHITE.into()));
    let text = |t: &'static str| Span::styled(t, Style::new().fg(TEXT_DIM.into()));
    let toggle = |label: &'static str, on: bool| {
        let color = if on { ACCENT_MINT } else { TEXT_DIM };
        Span::styled(label, Style::new().fg(color.into()))
    };

    let shape = match app.shape {
        ProgressShape::Circular => "circle",
        ProgressShape::Square => "square",
    };

    let line = Line::from(vec![
        Span::raw(" "),
        key("←/→"),
        text(" picker  "),
        key("↑/↓"),
        text(" rotate  "),
        key("t"),
        text(" "),
        toggle("touch", app.group.touch_exploration),
        text("  "),
        key("a"),
        text(" "),
        toggle("center", app.group.auto_center),
        text("  "),
        key("s"),
        Span::styled(format!(" {}  ", shape), Style::new().fg(TEXT_DIM.into())),
        key("+/-"),
        text(" progress  "),
        key("?"),
        text(" help  "),
        key("q"),
        text(" quit"),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
