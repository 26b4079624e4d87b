use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text::{display_width, fit_width};

/// Render the todo items, one per row, scrolled to keep the cursor visible
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.store.is_empty() {
        let empty = Paragraph::new(" No items. Press a to add one.")
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    let height = area.height as usize;
    let width = area.width as usize;
    app.clamp_scroll(height);

    let handle = app.mode == Mode::Edit;
    let lines: Vec<Line> = app
        .store
        .items()
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(i, item)| {
            let is_cursor = i == app.cursor;
            let bg = if is_cursor {
                app.theme.selection_bg
            } else {
                app.theme.background
            };

            let mut spans: Vec<Span> = Vec::new();
            let marker = if is_cursor { "\u{258E}" } else { " " };
            spans.push(Span::styled(
                marker,
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            spans.push(Span::styled(
                format!("{:>3}  ", i + 1),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            if handle {
                spans.push(Span::styled(
                    "\u{2261} ",
                    Style::default().fg(app.theme.dim).bg(bg),
                ));
            }

            let used: usize = spans.iter().map(|s| display_width(&s.content)).sum();
            let text = fit_width(item, width.saturating_sub(used + 1));
            let text_style = if is_cursor {
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.text).bg(bg)
            };
            let text_width = display_width(&text);
            spans.push(Span::styled(text, text_style));

            // Pad cursor line
            if is_cursor && used + text_width < width {
                spans.push(Span::styled(
                    " ".repeat(width - used - text_width),
                    Style::default().bg(bg),
                ));
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
