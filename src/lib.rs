//! A single-screen todo list for the terminal.
//!
//! The list itself lives in [`ops::list_ops::TodoListStore`]; the terminal
//! screen in [`tui`] and the `replay` command in [`cli`] drive it.

pub mod cli;
pub mod io;
pub mod model;
pub mod ops;
pub mod tui;
pub mod util;
