use serde::Serialize;

use crate::model::ListChange;
use crate::ops::script::{Outcome, ScriptError};

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ReplayJson<'a> {
    pub items: &'a [String],
    pub changes: &'a [ListChange],
    pub errors: Vec<ErrorJson>,
}

#[derive(Serialize)]
pub struct ErrorJson {
    pub line: usize,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn error_to_json(err: &ScriptError) -> ErrorJson {
    // The line number has its own field; drop the "line N: " prefix
    let message = match err {
        ScriptError::List { source, .. } => source.to_string(),
        other => {
            let full = other.to_string();
            let prefix = format!("line {}: ", other.line());
            full.strip_prefix(&prefix).map(str::to_string).unwrap_or(full)
        }
    };
    ErrorJson {
        line: err.line(),
        message,
    }
}

pub fn replay_to_json<'a>(items: &'a [String], outcome: &'a Outcome) -> ReplayJson<'a> {
    ReplayJson {
        items,
        changes: &outcome.changes,
        errors: outcome.errors.iter().map(error_to_json).collect(),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line per item: zero-based index, two spaces, text
pub fn format_items(items: &[String]) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        out.push_str(&format!("{}  {}\n", i, item));
    }
    out
}
