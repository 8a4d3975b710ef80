//! Help popup component.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use dialkit::theme::{ACCENT_LIGHT_BLUE, TEXT_DIM, TEXT_WHITE};

const BINDINGS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Pickers",
        &[
            ("←/→ Tab", "Previous / next picker"),
            ("1-9", "Select picker"),
            ("↑/↓", "Rotate active picker"),
            ("PgUp/PgDn", "Rotate by 10"),
            ("wheel", "Scroll picker under pointer"),
            ("click", "Select picker"),
            ("n", "Jump to current time"),
            ("d", "Describe selection"),
        ],
    ),
    (
        "Modes",
        &[
            ("t", "Toggle touch exploration"),
            ("a", "Toggle auto-center"),
        ],
    ),
    (
        "Progress",
        &[
            ("+/-", "Change progress"),
            ("s", "Circular / square track"),
        ],
    ),
];

/// Render the help popup with keyboard shortcuts.
pub fn render_help_popup(frame: &mut Frame, area: Rect) {
    let popup_width = 46u16;
    let popup_height = 23u16;
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        x,
        y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    frame.render_widget(Clear, popup_area);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::new().fg(TEXT_WHITE.into()).bold(),
        )),
        Line::raw(""),
    ];

    for (section, bindings) in BINDINGS {
        lines.push(Line::styled(
            section,
            Style::new().fg(ACCENT_LIGHT_BLUE.into()).bold(),
        ));
        for (key, description) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<11}", key), Style::new().fg(TEXT_WHITE.into())),
                Span::styled(*description, Style::new().fg(TEXT_DIM.into())),
            ]));
        }
        lines.push(Line::raw(""));
    }

    lines.push(Line::styled(
        "Press ? or Esc to close",
        Style::new().fg(TEXT_DIM.into()),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::new().fg(TEXT_DIM.into()));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}
