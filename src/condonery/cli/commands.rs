//! # CLI Layer
//!
//! This module is **one possible front end** for condonery. It is the only
//! place that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Sets up logging
//! - Resolves where files live on disk
//!
//! ## Modes
//!
//! - **Session**: no trailing command. Reads one command per line from stdin
//!   until `exit` or end of input. Command errors are printed and the session
//!   goes on.
//! - **One-shot**: `condonery add n/...`. Runs the command, prints the result
//!   and exits. A failing command makes the process exit with status 1.
//!
//! Both modes load the directory before the first command (a missing file
//! starts empty, a broken one is fatal) and write the preferences back when
//! they finish.

use super::print::{print_clients, print_error, print_feedback, print_help, print_properties};
use super::setup::Cli;
use clap::Parser;
use condonery::commands::{CommandResult, Transition};
use condonery::error::{Result, StorageError};
use condonery::logic::Logic;
use condonery::model::Model;
use condonery::prefs::{UserPrefs, PREFS_FILENAME};
use condonery::store::json::JsonStorage;
use condonery::store::Storage;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const HOME_ENV: &str = "CONDONERY_HOME";
const PROMPT: &str = "> ";
const INVALID_INPUT: &str = "Input is not valid UTF-8, line ignored";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut logic = init_logic(&cli)?;

    let outcome = match cli.one_shot() {
        Some(line) => run_one_shot(&mut logic, &line),
        None => run_session(&mut logic),
    };

    logic.save_user_prefs()?;
    outcome
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// `CONDONERY_HOME` if set, otherwise the platform data directory.
fn home_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "condonery", "condonery")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            StorageError::Io(io::Error::other("could not determine a data directory")).into()
        })
}

fn resolve(home: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        home.join(path)
    }
}

fn init_logic(cli: &Cli) -> Result<Logic<JsonStorage>> {
    let home = home_dir()?;
    let prefs_path = cli
        .prefs
        .clone()
        .unwrap_or_else(|| home.join(PREFS_FILENAME));

    let prefs = UserPrefs::load(&prefs_path)?;
    let data_path = match &cli.data {
        Some(path) => path.clone(),
        None => resolve(&home, &prefs.directory_file_path),
    };
    debug!(
        prefs = %prefs_path.display(),
        data = %data_path.display(),
        "resolved file locations"
    );

    let storage = JsonStorage::new(data_path, prefs_path);
    let directory = match storage.read_directory()? {
        Some(directory) => directory,
        None => {
            info!("starting with an empty directory");
            Default::default()
        }
    };

    Ok(Logic::new(Model::new(directory, prefs), storage))
}

fn run_one_shot(logic: &mut Logic<JsonStorage>, line: &str) -> Result<()> {
    let result = logic.execute(line)?;
    show(logic, &result);
    Ok(())
}

fn run_session(logic: &mut Logic<JsonStorage>) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut buf = Vec::new();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush().map_err(StorageError::from)?;

        buf.clear();
        if input
            .read_until(b'\n', &mut buf)
            .map_err(StorageError::from)?
            == 0
        {
            println!();
            return Ok(());
        }
        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line.trim(),
            Err(_) => {
                print_error(INVALID_INPUT);
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match logic.execute(line) {
            Ok(result) => {
                show(logic, &result);
                if result.is_exit() {
                    return Ok(());
                }
            }
            Err(err) => print_error(&err.to_string()),
        }
    }
}

fn show(logic: &Logic<JsonStorage>, result: &CommandResult) {
    print_feedback(&result.feedback);
    match result.transition {
        Some(Transition::ShowProperties) => print_properties(&logic.filtered_properties()),
        Some(Transition::ShowClients) => print_clients(&logic.filtered_clients()),
        Some(Transition::ShowHelp) => print_help(),
        Some(Transition::Exit) | None => {}
    }
}
