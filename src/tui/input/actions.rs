use crate::ops::list_ops::ListError;
use crate::tui::app::{App, Mode};
use crate::tui::prompt::{Prompt, PromptKind};

pub(super) fn open_add_prompt(app: &mut App) {
    if app.mode == Mode::Edit {
        app.status_message = Some("adding is disabled while editing".into());
        return;
    }
    app.prompt = Some(Prompt::add());
}

pub(super) fn open_rename_prompt(app: &mut App) {
    if let Some(current) = app.current_item() {
        app.prompt = Some(Prompt::rename(app.cursor, current));
    }
}

/// Act on a closed dialog. `None` means it was cancelled.
pub(super) fn submit_prompt(app: &mut App, answer: Option<String>) {
    let Some(mut prompt) = app.prompt.take() else {
        return;
    };
    let Some(text) = answer else {
        return;
    };

    let result = match prompt.kind {
        PromptKind::Add => app.store.add(&text).map(|_| "added"),
        PromptKind::Rename { index } => app.store.rename(index, &text).map(|_| "renamed"),
    };

    match result {
        Ok(verb) => {
            app.sync_changes();
            let shown = app.current_item().unwrap_or_default().to_string();
            app.status_message = Some(format!("{} \"{}\"", verb, shown));
        }
        Err(ListError::BlankInput) => {
            // Re-prompt: the user fixes the text or presses Esc
            prompt.error = Some(ListError::BlankInput.to_string());
            app.prompt = Some(prompt);
        }
        Err(e) => app.status_message = Some(e.to_string()),
    }
}

/// Swipe-to-complete: the item leaves the list
pub(super) fn complete_current(app: &mut App) {
    if app.store.is_empty() {
        return;
    }
    match app.store.complete(app.cursor) {
        Ok(item) => app.status_message = Some(format!("completed \"{}\"", item)),
        Err(e) => app.status_message = Some(e.to_string()),
    }
}

pub(super) fn delete_current(app: &mut App) {
    if app.store.is_empty() {
        return;
    }
    match app.store.remove(app.cursor) {
        Ok(item) => app.status_message = Some(format!("deleted \"{}\"", item)),
        Err(e) => app.status_message = Some(e.to_string()),
    }
}

/// Swap the current item with its neighbour above (`up`) or below
pub(super) fn move_current(app: &mut App, up: bool) {
    let count = app.store.count();
    let target = if up {
        app.cursor.checked_sub(1)
    } else {
        Some(app.cursor + 1).filter(|&t| t < count)
    };
    let Some(target) = target else {
        return;
    };
    if let Err(e) = app.store.swap(app.cursor, target) {
        app.status_message = Some(e.to_string());
    }
}

pub(super) fn toggle_edit_mode(app: &mut App) {
    app.mode = match app.mode {
        Mode::Normal => Mode::Edit,
        Mode::Edit => Mode::Normal,
    };
    tracing::debug!(mode = ?app.mode, "mode changed");
}
