//! Plain-text scripts of list operations, one command per line.
//!
//! ```text
//! # groceries
//! add Buy milk
//! add Walk dog
//! swap 0 1
//! rename 1 Buy oat milk
//! complete 0
//! ```

use crate::model::list::ListChange;
use crate::ops::list_ops::{ListError, TodoListStore};

/// Error type for script parsing and execution. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command: {command}")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: {command} is missing <{argument}>")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },
    #[error("line {line}: not an index: {value}")]
    BadIndex { line: usize, value: String },
    #[error("line {line}: {source}")]
    List { line: usize, source: ListError },
}

impl ScriptError {
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::MissingArgument { line, .. }
            | ScriptError::BadIndex { line, .. }
            | ScriptError::List { line, .. } => *line,
        }
    }
}

/// One parsed script command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(String),
    Rename(usize, String),
    Remove(usize),
    Complete(usize),
    Swap(usize, usize),
}

/// Parse a single line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Command>, ScriptError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = split_word(line);
    let command = match word {
        "add" => Command::Add(rest.to_string()),
        "rename" => {
            let (index, text) = split_word(rest);
            let index = parse_index(line_no, "rename", "index", index)?;
            Command::Rename(index, text.to_string())
        }
        "remove" => Command::Remove(parse_index(line_no, "remove", "index", rest)?),
        "complete" => Command::Complete(parse_index(line_no, "complete", "index", rest)?),
        "swap" => {
            let (i, j) = split_word(rest);
            Command::Swap(
                parse_index(line_no, "swap", "i", i)?,
                parse_index(line_no, "swap", "j", j)?,
            )
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line: line_no,
                command: other.to_string(),
            });
        }
    };
    Ok(Some(command))
}

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], s[pos..].trim_start()),
        None => (s, ""),
    }
}

fn parse_index(
    line: usize,
    command: &'static str,
    argument: &'static str,
    value: &str,
) -> Result<usize, ScriptError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ScriptError::MissingArgument {
            line,
            command,
            argument,
        });
    }
    value.parse().map_err(|_| ScriptError::BadIndex {
        line,
        value: value.to_string(),
    })
}

/// Apply one command to the store
pub fn apply(store: &mut TodoListStore, command: &Command) -> Result<(), ListError> {
    match command {
        Command::Add(text) => store.add(text).map(|_| ()),
        Command::Rename(index, text) => store.rename(*index, text).map(|_| ()),
        Command::Remove(index) => store.remove(*index).map(|_| ()),
        Command::Complete(index) => store.complete(*index).map(|_| ()),
        Command::Swap(i, j) => store.swap(*i, *j).map(|_| ()),
    }
}

/// Result of running a whole script
#[derive(Debug, Default)]
pub struct Outcome {
    pub changes: Vec<ListChange>,
    pub errors: Vec<ScriptError>,
    /// True when a strict run stopped at the first error
    pub aborted: bool,
}

/// Run every line of `script` against `store`, collecting the changes it
/// produced and the lines that failed. With `strict`, stops at the first
/// failure. Leaves a change log subscribed to `store`.
pub fn run(store: &mut TodoListStore, script: &str, strict: bool) -> Outcome {
    let log = crate::ops::list_ops::ChangeLog::new();
    store.subscribe(log.clone());

    let mut outcome = Outcome::default();
    for (i, line) in script.lines().enumerate() {
        let line_no = i + 1;
        let result = parse_line(line_no, line).and_then(|cmd| match cmd {
            Some(cmd) => apply(store, &cmd).map_err(|source| ScriptError::List {
                line: line_no,
                source,
            }),
            None => Ok(()),
        });
        if let Err(e) = result {
            tracing::debug!(line = line_no, error = %e, "script line failed");
            outcome.errors.push(e);
            if strict {
                outcome.aborted = true;
                break;
            }
        }
    }
    outcome.changes = log.drain();
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            parse_line(1, "add Buy milk"),
            Ok(Some(Command::Add("Buy milk".into())))
        );
        assert_eq!(
            parse_line(1, "rename 2 Walk the dog"),
            Ok(Some(Command::Rename(2, "Walk the dog".into())))
        );
        assert_eq!(parse_line(1, "remove 0"), Ok(Some(Command::Remove(0))));
        assert_eq!(parse_line(1, "complete 4"), Ok(Some(Command::Complete(4))));
        assert_eq!(parse_line(1, "  swap 1   3 "), Ok(Some(Command::Swap(1, 3))));
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(parse_line(1, ""), Ok(None));
        assert_eq!(parse_line(1, "   "), Ok(None));
        assert_eq!(parse_line(1, "# a note"), Ok(None));
    }

    #[test]
    fn test_parse_add_without_text_reaches_store() {
        // Blank text is the store's call, not the parser's
        assert_eq!(parse_line(1, "add"), Ok(Some(Command::Add(String::new()))));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_line(3, "frobnicate 1"),
            Err(ScriptError::UnknownCommand {
                line: 3,
                command: "frobnicate".into()
            })
        );
        assert_eq!(
            parse_line(4, "remove"),
            Err(ScriptError::MissingArgument {
                line: 4,
                command: "remove",
                argument: "index"
            })
        );
        assert_eq!(
            parse_line(5, "swap 1"),
            Err(ScriptError::MissingArgument {
                line: 5,
                command: "swap",
                argument: "j"
            })
        );
        assert_eq!(
            parse_line(6, "remove -1"),
            Err(ScriptError::BadIndex {
                line: 6,
                value: "-1".into()
            })
        );
    }

    #[test]
    fn test_run_scenario() {
        let mut store = TodoListStore::new();
        let script = "\
# start empty
add Buy milk
add Walk dog
add Call mom
remove 1
swap 0 1
";
        let outcome = run(&mut store, script, false);
        assert!(outcome.errors.is_empty());
        assert_eq!(store.items(), &["Call mom".to_string(), "Buy milk".to_string()]);
        assert_eq!(
            outcome.changes,
            vec![
                ListChange::Inserted { at: 0 },
                ListChange::Inserted { at: 1 },
                ListChange::Inserted { at: 2 },
                ListChange::Removed { at: 1 },
                ListChange::Reordered { from: 0, to: 1 },
            ]
        );
    }

    #[test]
    fn test_run_collects_errors_and_continues() {
        let mut store = TodoListStore::new();
        let outcome = run(&mut store, "add A\nadd   \nremove 7\nadd B\n", false);
        assert_eq!(store.count(), 2);
        assert_eq!(outcome.errors.len(), 2);
        assert_eq!(outcome.errors[0].line(), 2);
        assert_eq!(outcome.errors[0].to_string(), "line 2: item text cannot be blank");
        assert_eq!(
            outcome.errors[1].to_string(),
            "line 3: index 7 out of range for list of 1 items"
        );
        assert!(!outcome.aborted);
    }

    #[test]
    fn test_run_strict_stops_at_first_error() {
        let mut store = TodoListStore::new();
        let outcome = run(&mut store, "add A\nbogus\nadd B\n", true);
        assert_eq!(store.count(), 1);
        assert_eq!(outcome.errors.len(), 1);
        assert!(outcome.aborted);
        assert_eq!(outcome.changes, vec![ListChange::Inserted { at: 0 }]);
    }
}
