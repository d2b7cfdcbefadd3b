//! Terminal shell and entry point.
//!
//! This is the thin runtime around the library: it owns stdin, the clock and
//! the worker channel, feeds everything through
//! [`handle_event`](recipe_explorer::handle_event), and executes the resulting
//! actions.
//!
//! # Event Loop
//!
//! ```text
//!  stdin line ──parse_command──┐
//!  50 ms tick ──Event::Tick────┼──► handle_event ──► Action::PostToWorker ──► ApiWorker
//!  worker channel ─────────────┘          │                                     │
//!        ▲                                ▼                                     │
//!        │                             render                                   │
//!        └──────────────────── WorkerResponse ◄─────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! `$RECIPE_CONFIG` or `~/.config/recipe-explorer/config.toml` is read when
//! present, then `RECIPE_*` environment variables override it.

use recipe_explorer::api::ApiClient;
use recipe_explorer::observability::init_tracing;
use recipe_explorer::ui::{parse_command, render};
use recipe_explorer::worker::{ApiWorker, WorkerResponse};
use recipe_explorer::{handle_event, infrastructure, initialize, Action, AppState, Config, Event, Result};
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};
use tokio::time::MissedTickBehavior;

/// How often the debounce clock is polled.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Width used when `$COLUMNS` is unset or invalid.
const DEFAULT_COLS: usize = 100;

fn load_config() -> Config {
    let path = std::env::var("RECIPE_CONFIG")
        .map(|p| infrastructure::expand_tilde(&p))
        .unwrap_or_else(|_| infrastructure::config_file());

    if !path.exists() {
        return Config::from_env();
    }

    Config::from_file(&path)
        .unwrap_or_else(|e| {
            eprintln!("{e}; using defaults");
            Config::default()
        })
        .with_overrides(&Config::env_overrides())
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.trim().parse().ok())
        .unwrap_or(DEFAULT_COLS)
}

/// Prints a one-line message under the frame and restores the prompt.
fn notify(message: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{message}")?;
    write!(stdout, "> ")?;
    stdout.flush()?;
    Ok(())
}

/// Runs one event through the state machine and executes its actions.
///
/// # Returns
///
/// `(needs_render, quit)`
fn process(
    state: &mut AppState,
    event: &Event,
    worker: &ApiWorker,
    responses: &UnboundedSender<WorkerResponse>,
) -> Result<(bool, bool)> {
    let (needs_render, actions) = handle_event(state, event)?;

    let mut quit = false;
    for action in actions {
        match action {
            Action::PostToWorker(message) => {
                tracing::debug!(ticket = %message.ticket(), "posting message to worker");
                worker.dispatch(message, responses.clone());
            }
            Action::Quit => quit = true,
        }
    }

    Ok((needs_render, quit))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = load_config();
    init_tracing(&config);
    tracing::info!(api_base_url = %config.api_base_url, "starting recipe explorer");

    let worker = ApiWorker::new(ApiClient::with_reqwest(config.api_config())?);
    let (responses, mut inbox) = mpsc::unbounded_channel();
    let mut state = initialize(&config);
    let cols = terminal_width();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(TICK_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    process(&mut state, &Event::Mount, &worker, &responses)?;
    render(&state, cols)?;

    loop {
        let event = tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                let categories = state.categories.data().map(Vec::as_slice).unwrap_or_default();
                match parse_command(&line, categories) {
                    Ok(Some(event)) => event,
                    Ok(None) => {
                        render(&state, cols)?;
                        continue;
                    }
                    Err(e) => {
                        notify(&e.to_string())?;
                        continue;
                    }
                }
            }
            _ = ticker.tick() => Event::Tick(Instant::now()),
            Some(response) = inbox.recv() => Event::WorkerResponse(response),
        };

        let (needs_render, quit) = match process(&mut state, &event, &worker, &responses) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::error!(error = %e, "event handling failed");
                notify(&e.to_string())?;
                continue;
            }
        };
        if quit {
            break;
        }
        if needs_render {
            render(&state, cols)?;
        }
    }

    tracing::info!("recipe explorer exiting");
    println!();
    Ok(())
}
