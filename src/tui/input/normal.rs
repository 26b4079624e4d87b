use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::actions::*;
use super::handle_movement;

pub(super) fn handle_normal(app: &mut App, key: KeyEvent) {
    if handle_movement(app, key) {
        return;
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('q') | KeyCode::Esc)
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,
        (KeyModifiers::NONE, KeyCode::Char('a')) => open_add_prompt(app),
        (KeyModifiers::NONE, KeyCode::Enter) => open_rename_prompt(app),
        (KeyModifiers::NONE, KeyCode::Char('x')) => complete_current(app),
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => delete_current(app),
        (KeyModifiers::NONE, KeyCode::Char('e')) => toggle_edit_mode(app),
        _ => {}
    }
}
