use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text::fit_width;

const NORMAL_HINTS: &str = "a add  \u{23CE} rename  x complete  d delete  e edit  ? help  q quit";
const EDIT_HINTS: &str = "J/K move  \u{23CE} rename  d delete  e done";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(msg) = &app.status_message {
        Line::from(Span::styled(
            fit_width(&format!(" {}", msg), width),
            Style::default().fg(app.theme.green).bg(bg),
        ))
    } else if app.show_key_hints {
        let hints = match app.mode {
            Mode::Normal => NORMAL_HINTS,
            Mode::Edit => EDIT_HINTS,
        };
        Line::from(Span::styled(
            fit_width(&format!(" {}", hints), width),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
