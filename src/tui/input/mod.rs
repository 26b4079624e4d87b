mod actions;
mod edit;
mod normal;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};
use super::prompt::PromptOutcome;

use actions::submit_prompt;
use edit::handle_edit;
use normal::handle_normal;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    // An open dialog intercepts all input
    if let Some(prompt) = &mut app.prompt {
        if let PromptOutcome::Finished(answer) = prompt.handle_key(key) {
            submit_prompt(app, answer);
        }
        return;
    }

    // Help overlay: any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Normal => handle_normal(app, key),
        Mode::Edit => handle_edit(app, key),
    }
    app.sync_changes();
}

/// Handle a bracketed paste. Only an open dialog accepts text.
pub fn handle_paste(app: &mut App, text: &str) {
    if let Some(prompt) = &mut app.prompt {
        prompt.insert_str(text);
    }
}

/// Report shifted letters as uppercase chars, whatever the terminal sends
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}

/// Cursor movement shared by both modes. Returns true if the key was used.
fn handle_movement(app: &mut App, key: KeyEvent) -> bool {
    let count = app.store.count();
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Down | KeyCode::Char('j')) => {
            if app.cursor + 1 < count {
                app.cursor += 1;
            }
        }
        (KeyModifiers::NONE, KeyCode::Up | KeyCode::Char('k')) => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        (KeyModifiers::NONE, KeyCode::Home | KeyCode::Char('g')) => app.cursor = 0,
        (_, KeyCode::End | KeyCode::Char('G')) => app.cursor = count.saturating_sub(1),
        _ => return false,
    }
    true
}
