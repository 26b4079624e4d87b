use std::fs;
use std::io::{self, Read};

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::config_io::{self, ConfigSource};
use crate::io::logging::{self, LogTarget};
use crate::model::Config;
use crate::ops::list_ops::TodoListStore;
use crate::ops::script;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let (config, source) = config_io::load_config(cli.config.as_deref())?;

    match cli.command {
        None => cmd_tui(&config, &source),
        Some(Commands::Replay(args)) => cmd_replay(args, &config, &source),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_tui(config: &Config, source: &ConfigSource) -> Result<(), Box<dyn std::error::Error>> {
    // Logging to stderr would draw over the screen
    if let Some(path) = &config.log.file {
        let filter = logging::build_filter(config.log.level.as_deref(), "info");
        logging::init(LogTarget::File(path), filter)?;
    }
    tracing::info!(?source, "config loaded");
    crate::tui::run(config)
}

fn cmd_replay(
    args: ReplayArgs,
    config: &Config,
    source: &ConfigSource,
) -> Result<(), Box<dyn std::error::Error>> {
    // `[log] file` is for the terminal UI; replay runs in a shell and logs there
    let filter = logging::build_filter(config.log.level.as_deref(), "warn");
    logging::init(LogTarget::Stderr, filter)?;
    tracing::info!(?source, "config loaded");

    let text = read_script(&args)?;

    // Replay always starts from an empty list; seeds are a TUI convenience
    let mut store = TodoListStore::new();
    let outcome = script::run(&mut store, &text, args.strict);

    if args.json {
        let json = replay_to_json(store.items(), &outcome);
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print!("{}", format_items(store.items()));
        for err in &outcome.errors {
            eprintln!("{}", err);
        }
    }

    if outcome.aborted {
        return Err(format!("replay stopped at line {}", outcome.errors[0].line()).into());
    }
    Ok(())
}

fn read_script(args: &ReplayArgs) -> Result<String, Box<dyn std::error::Error>> {
    match args.file.as_deref() {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e).into()),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
