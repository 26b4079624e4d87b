use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

use super::actions::*;
use super::handle_movement;

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    if handle_movement(app, key) {
        return;
    }
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('K')) | (KeyModifiers::SHIFT, KeyCode::Up) => move_current(app, true),
        (_, KeyCode::Char('J')) | (KeyModifiers::SHIFT, KeyCode::Down) => move_current(app, false),
        (KeyModifiers::NONE, KeyCode::Char('e') | KeyCode::Esc) => toggle_edit_mode(app),
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('?')) => app.show_help = true,
        (KeyModifiers::NONE, KeyCode::Char('a')) => open_add_prompt(app),
        (KeyModifiers::NONE, KeyCode::Enter) => open_rename_prompt(app),
        (KeyModifiers::NONE, KeyCode::Char('d') | KeyCode::Delete) => delete_current(app),
        _ => {}
    }
}
