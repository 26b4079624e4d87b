use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Config, ListChange, UiConfig};
use crate::ops::list_ops::{ChangeLog, TodoListStore};

use super::input;
use super::prompt::Prompt;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Reordering allowed, adding disabled
    Edit,
}

/// Main application state
pub struct App {
    pub store: TodoListStore,
    /// Subscribed to `store`; drained after every action
    pub changes: ChangeLog,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub title: String,
    pub show_key_hints: bool,
    /// Index of the selected item (0 when the list is empty)
    pub cursor: usize,
    /// First visible row of the list
    pub scroll: usize,
    /// Open add/rename dialog
    pub prompt: Option<Prompt>,
    /// Help overlay visible
    pub show_help: bool,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
}

impl App {
    pub fn new(mut store: TodoListStore, ui: &UiConfig) -> Self {
        let changes = ChangeLog::new();
        store.subscribe(changes.clone());
        App {
            store,
            changes,
            mode: Mode::Normal,
            should_quit: false,
            theme: Theme::from_config(ui),
            title: ui.title.clone(),
            show_key_hints: ui.show_key_hints,
            cursor: 0,
            scroll: 0,
            prompt: None,
            show_help: false,
            status_message: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        App::new(seed_store(&config.list.seed), &config.ui)
    }

    /// Text of the item under the cursor
    pub fn current_item(&self) -> Option<&str> {
        self.store.item(self.cursor).ok()
    }

    /// Apply every pending store notification to the view state
    pub fn sync_changes(&mut self) {
        for change in self.changes.drain() {
            self.apply_change(change);
        }
    }

    fn apply_change(&mut self, change: ListChange) {
        let count = self.store.count();
        match change {
            ListChange::Inserted { at } => self.cursor = at,
            ListChange::Updated { .. } => {}
            ListChange::Removed { at } => {
                if at < self.cursor {
                    self.cursor -= 1;
                }
                self.cursor = self.cursor.min(count.saturating_sub(1));
            }
            ListChange::Reordered { from, to } => {
                if self.cursor == from {
                    self.cursor = to;
                } else if self.cursor == to {
                    self.cursor = from;
                }
            }
        }
    }

    /// Keep the cursor row inside a viewport of `height` rows
    pub fn clamp_scroll(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
        let max_scroll = self.store.count().saturating_sub(height);
        self.scroll = self.scroll.min(max_scroll);
    }
}

/// Build a store holding the configured seed items. Blank seeds are skipped.
pub fn seed_store(seed: &[String]) -> TodoListStore {
    let mut store = TodoListStore::new();
    for (i, text) in seed.iter().enumerate() {
        if let Err(e) = store.add(text) {
            tracing::warn!(index = i, error = %e, "skipping seed item");
        }
    }
    store
}

/// Run the TUI application
pub fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::from_config(config);
    tracing::info!(items = app.store.count(), "starting list screen");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    tracing::info!(items = app.store.count(), "list screen closed");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
