use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::text::{display_width, fit_width};

/// Render the title row and the separator below it
pub fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let count = app.store.count();
    let mut right: Vec<Span> = Vec::new();
    if app.mode == Mode::Edit {
        right.push(Span::styled(
            " EDIT ",
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        right.push(Span::styled(" ", Style::default().bg(bg)));
    }
    right.push(Span::styled(
        format!("{} item{} ", count, if count == 1 { "" } else { "s" }),
        Style::default().fg(app.theme.dim).bg(bg),
    ));
    let right_width: usize = right.iter().map(|s| display_width(&s.content)).sum();

    let title = fit_width(&app.title, width.saturating_sub(right_width + 2));
    let mut spans = vec![Span::styled(
        format!(" {}", title),
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let left_width = display_width(&title) + 1;
    if left_width + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - left_width - right_width),
            Style::default().bg(bg),
        ));
        spans.extend(right);
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn title_with_count() {
        let app = app_with_items(&["Buy milk", "Walk dog"]);
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        let first = output.lines().next().unwrap();
        assert!(first.starts_with(" Todo List"));
        assert!(first.ends_with("2 items"));
        assert!(!first.contains("EDIT"));
    }

    #[test]
    fn title_singular_and_edit_badge() {
        let mut app = app_with_items(&["Buy milk"]);
        app.mode = Mode::Edit;
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        assert!(output.contains("EDIT"));
        assert!(output.contains("1 item"));
        assert!(!output.contains("1 items"));
    }

    #[test]
    fn custom_title() {
        let mut app = app_with_items(&[]);
        app.title = "Groceries".into();
        let output = render_to_string(TERM_W, 2, |frame, area| {
            render_title_bar(frame, &app, area);
        });
        assert!(output.starts_with(" Groceries"));
        assert!(output.contains("0 items"));
    }
}
