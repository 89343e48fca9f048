use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use recnik_config::Config;
use recnik_core::{Glossary, Host};
use recnik_store::FileStore;
use tracing_subscriber::EnvFilter;

mod events;
mod state;
mod ui;


use self::state::AppState;
use self::ui::TerminalUi;

/// Personal bilingual glossary: save word pairs, search both sides.
#[derive(Debug, Parser)]
#[command(name = "recnik", version, about)]
struct Cli {
    /// Dictionary file to use instead of the configured one
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Config file to read instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(path) => Config::load_from(Some(path)),
        None => Config::load(),
    };
    if let Some(path) = cli.dictionary {
        config.store.path = Some(path);
    }

    let path = config.store.dictionary_path();
    let mut ui = TerminalUi::new(config.ui.clone());
    let glossary = open_glossary(&path, &mut ui);
    tracing::info!(entries = glossary.len(), path = %path.display(), "dictionary ready");

    let mut state = AppState { config, glossary };
    run(&mut state, &mut ui, io::stdin().lock())
}

/// Prepare the glossary for `path`. Nothing here is fatal: a file that
/// cannot be created or read leaves the app running over an empty map,
/// with the failure surfaced as a notification, and later adds retry the
/// file per call.
fn open_glossary(path: &Path, ui: &mut dyn Host) -> Glossary {
    let mut glossary = match FileStore::open(path) {
        Ok(store) => Glossary::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "cannot prepare dictionary file, starting empty");
            ui.notify(&format!("Error loading dictionary: {e}"));
            return Glossary::new(FileStore::at(path));
        }
    };

    if let Err(e) = glossary.reload() {
        tracing::warn!(error = %e, "dictionary load failed, starting empty");
        ui.notify(&format!("Error loading dictionary: {e}"));
    }
    glossary
}

fn run(state: &mut AppState, ui: &mut TerminalUi, input: impl BufRead) -> anyhow::Result<()> {
    ui.notify(&format!(
        "recnik — {} entries from {}",
        state.glossary.len(),
        state.config.store.dictionary_path().display()
    ));
    ui.notify(events::USAGE);

    for line in input.lines() {
        let line = line.context("failed to read input")?;

        let Some(event) = events::parse_command(&line) else {
            if !line.trim().is_empty() {
                ui.notify(events::USAGE);
            }
            continue;
        };

        if events::dispatch(state, ui, event).is_break() {
            break;
        }
    }

    Ok(())
}
