//! Separator components.

use ratatui::{Frame, layout::Rect, style::Style, text::Line, widgets::Paragraph};

use dialkit::theme::TEXT_DIM;

/// Render a vertical separator (│ characters).
pub fn render_separator(frame: &mut Frame, area: Rect) {
    let separator: Vec<Line> = (0..area.height)
        .map(|_| Line::styled("│", Style::new().fg(TEXT_DIM.into())))
        .collect();
    frame.render_widget(Paragraph::new(separator), area);
}
