use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::util::text;

/// What the prompt will do with its text once confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Add,
    Rename { index: usize },
}

/// Result of feeding one key to a prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Still typing
    Editing,
    /// Closed: `Some(text)` when confirmed, `None` when cancelled
    Finished(Option<String>),
}

/// A modal single-line text dialog
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub buffer: String,
    /// Byte offset into `buffer`, always on a grapheme boundary
    pub cursor: usize,
    /// Shown under the input after a rejected submission
    pub error: Option<String>,
}

impl Prompt {
    pub fn add() -> Self {
        Prompt {
            kind: PromptKind::Add,
            buffer: String::new(),
            cursor: 0,
            error: None,
        }
    }

    pub fn rename(index: usize, current: &str) -> Self {
        Prompt {
            kind: PromptKind::Rename { index },
            buffer: current.to_string(),
            cursor: current.len(),
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            PromptKind::Add => "New Item",
            PromptKind::Rename { .. } => "Rename Item",
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptOutcome {
        match (key.modifiers, key.code) {
            (_, KeyCode::Enter) => return PromptOutcome::Finished(Some(self.buffer.clone())),
            (_, KeyCode::Esc) => return PromptOutcome::Finished(None),
            (_, KeyCode::Left) => {
                if let Some(pos) = text::prev_boundary(&self.buffer, self.cursor) {
                    self.cursor = pos;
                }
            }
            (_, KeyCode::Right) => {
                if let Some(pos) = text::next_boundary(&self.buffer, self.cursor) {
                    self.cursor = pos;
                }
            }
            (_, KeyCode::Home) | (KeyModifiers::CONTROL, KeyCode::Char('a')) => self.cursor = 0,
            (_, KeyCode::End) | (KeyModifiers::CONTROL, KeyCode::Char('e')) => {
                self.cursor = self.buffer.len()
            }
            (_, KeyCode::Backspace) => {
                if let Some(pos) = text::prev_boundary(&self.buffer, self.cursor) {
                    self.buffer.replace_range(pos..self.cursor, "");
                    self.cursor = pos;
                }
            }
            (_, KeyCode::Delete) => {
                if let Some(pos) = text::next_boundary(&self.buffer, self.cursor) {
                    self.buffer.replace_range(self.cursor..pos, "");
                }
            }
            (KeyModifiers::CONTROL, KeyCode::Char('w')) => {
                let start = text::prev_word_start(&self.buffer, self.cursor);
                self.buffer.replace_range(start..self.cursor, "");
                self.cursor = start;
            }
            (KeyModifiers::CONTROL, KeyCode::Char('u')) => {
                self.buffer.replace_range(..self.cursor, "");
                self.cursor = 0;
            }
            (m, KeyCode::Char(c)) if !m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_str(&c.to_string());
            }
            _ => return PromptOutcome::Editing,
        }
        self.error = None;
        PromptOutcome::Editing
    }

    /// Insert text at the cursor (typed or pasted)
    pub fn insert_str(&mut self, s: &str) {
        let clean = text::single_line(s);
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }
}
