use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::App;
use crate::util::text::{col_at, display_width};

/// Render the add/rename dialog centered over the list
pub fn render_prompt_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(prompt) = &app.prompt else {
        return;
    };

    let bg = app.theme.background;
    let border_style = Style::default().fg(app.theme.highlight).bg(bg);
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let input_style = Style::default().fg(app.theme.text_bright).bg(bg);
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);
    let error_style = Style::default().fg(app.theme.red).bg(bg);

    let popup_w: u16 = 50.min(area.width.saturating_sub(2)).max(10);
    let popup_h: u16 = 5;
    let popup = Rect {
        x: area.x + area.width.saturating_sub(popup_w) / 2,
        y: area.y + area.height.saturating_sub(popup_h) / 3,
        width: popup_w.min(area.width),
        height: popup_h.min(area.height),
    };

    // Inner width minus the "> " prefix and room for the cursor
    let avail = (popup.width as usize).saturating_sub(2 + 2 + 1);
    let (visible, cursor_col) = visible_window(&prompt.buffer, prompt.cursor, avail);

    let lines = vec![
        Line::from(vec![
            Span::styled("> ", dim_style),
            Span::styled(visible, input_style),
        ]),
        match &prompt.error {
            Some(err) => Line::from(Span::styled(err.clone(), error_style)),
            None => Line::from(""),
        },
        Line::from(Span::styled("Enter save  Esc cancel", dim_style)),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", prompt.title()), title_style))
        .style(Style::default().bg(bg));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    let cursor_x = popup.x + 1 + 2 + cursor_col as u16;
    if cursor_x < popup.x + popup.width.saturating_sub(1) && popup.height > 1 {
        frame.set_cursor_position((cursor_x, popup.y + 1));
    }
}

/// The slice of `buffer` to show so the cursor stays within `avail` cells,
/// and the cursor's column inside that slice.
fn visible_window(buffer: &str, cursor: usize, avail: usize) -> (String, usize) {
    let cursor_col = col_at(buffer, cursor);
    let skip_cols = cursor_col.saturating_sub(avail);

    let mut skipped = 0;
    let mut start = 0;
    for (i, g) in buffer.grapheme_indices(true) {
        if skipped >= skip_cols {
            start = i;
            break;
        }
        skipped += display_width(g);
        start = i + g.len();
    }

    let mut shown = String::new();
    let mut used = 0;
    for g in buffer[start..].graphemes(true) {
        let w = display_width(g);
        if used + w > avail {
            break;
        }
        used += w;
        shown.push_str(g);
    }
    (shown, cursor_col - skipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::prompt::Prompt;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn prompt_add_empty() {
        let mut app = app_with_items(&[]);
        app.prompt = Some(Prompt::add());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_prompt_popup(frame, &app, area);
        });
        assert!(output.contains("New Item"));
        assert!(output.contains("Enter save  Esc cancel"));
    }

    #[test]
    fn prompt_rename_shows_text_and_error() {
        let mut app = app_with_items(&["Walk dog"]);
        let mut prompt = Prompt::rename(0, "Walk dog");
        prompt.error = Some("item text cannot be blank".into());
        app.prompt = Some(prompt);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_prompt_popup(frame, &app, area);
        });
        assert!(output.contains("Rename Item"));
        assert!(output.contains("> Walk dog"));
        assert!(output.contains("item text cannot be blank"));
    }

    #[test]
    fn window_fits_short_text() {
        assert_eq!(visible_window("milk", 4, 20), ("milk".to_string(), 4));
        assert_eq!(visible_window("milk", 1, 20), ("milk".to_string(), 1));
    }

    #[test]
    fn window_follows_cursor_at_end() {
        let (shown, col) = visible_window("abcdefghij", 10, 4);
        assert_eq!(shown, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn window_wide_chars() {
        let (shown, col) = visible_window("牛奶咖啡", 12, 4);
        assert_eq!(shown, "咖啡");
        assert_eq!(col, 4);
    }
}
