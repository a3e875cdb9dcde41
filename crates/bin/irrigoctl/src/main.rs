//! # irrigoctl: terminal front-end for an irrigation controller
//!
//! Composition root that wires the reqwest adapter into the dashboard
//! use-cases and exposes them as subcommands.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialise logging
//! - Construct the controller adapter and the terminal ports
//! - Run one use-case per invocation, or poll the run state until Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** native crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;
mod render;
mod terminal;

use std::ops::ControlFlow;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use irrigo_adapter_http_reqwest::HttpController;
use irrigo_app::ports::ControllerApi;
use irrigo_app::services::actions::{ActionDispatcher, ActionError, FollowUp};
use irrigo_app::services::loader::DashboardLoader;
use irrigo_app::services::poller::StatePoller;
use irrigo_domain::command::parse_switch;
use irrigo_domain::id::ProgramId;
use irrigo_domain::run_state::RunState;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::terminal::{FileEditTarget, TerminalView, TokioSleeper};

#[derive(Debug, Parser)]
#[command(name = "irrigoctl", version, about = "Inspect and drive an irrigation controller")]
struct Cli {
    /// Controller root URL; overrides the config file and `IRRIGO_URL`.
    #[arg(long, global = true)]
    url: Option<String>,

    /// Config file to read instead of `./irrigo.toml`.
    #[arg(long, global = true, env = "IRRIGO_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Show the global switch, the run state, and every program.
    Status,
    /// List the configured zones.
    Zones,
    /// Start a program now.
    Start { id: ProgramId },
    /// Stop the running program.
    Stop {
        /// Defaults to whatever is running.
        id: Option<ProgramId>,
    },
    /// Delete a program.
    Delete {
        id: ProgramId,
        /// Do not ask for confirmation.
        #[arg(long, short)]
        yes: bool,
    },
    /// Mark a program for the controller's edit page and print its URL.
    Edit { id: ProgramId },
    /// Turn one program's automatic scheduling on or off.
    Auto {
        id: ProgramId,
        #[arg(value_parser = parse_switch, action = ArgAction::Set)]
        state: bool,
    },
    /// Turn automatic scheduling on or off for the whole controller.
    AutoAll {
        #[arg(value_parser = parse_switch, action = ArgAction::Set)]
        state: bool,
    },
    /// Print run-state changes until interrupted.
    Watch,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("loading configuration")?;
    if let Some(url) = cli.url {
        config.controller.base_url = url;
        config.validate()?;
    }
    init_tracing(&config.logging.filter);
    for warning in &config.warnings {
        tracing::warn!("{warning}");
    }

    let api = HttpController::from_config(&config.controller)?;
    tracing::debug!(base_url = api.base_url(), "controller configured");

    run(cli.command, api, &config).await
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?} ({err}), using \"info\"");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(command: Cmd, api: HttpController, config: &Config) -> anyhow::Result<ExitCode> {
    let assume_yes = matches!(command, Cmd::Delete { yes: true, .. });
    let actions = ActionDispatcher::new(api.clone(), TerminalView::new(assume_yes));

    let outcome = match command {
        Cmd::Status => {
            let data = DashboardLoader::new(api).load().await?;
            print!("{}", render::status(&data, irrigo_domain::time::today()));
            return Ok(ExitCode::SUCCESS);
        }
        Cmd::Zones => {
            let settings = api.fetch_settings().await?;
            print!("{}", render::zones(&settings));
            return Ok(ExitCode::SUCCESS);
        }
        Cmd::Watch => return watch(api, config.poll_interval()).await,
        Cmd::Start { id } => {
            let state = api.fetch_run_state().await?;
            if !state.activity_for(&id).start_enabled {
                anyhow::bail!(
                    "program {} is already running; stop it first",
                    state
                        .active_program()
                        .map_or_else(|| "?".to_string(), ToString::to_string)
                );
            }
            actions.start(&id).await
        }
        Cmd::Stop { id } => {
            let id = match id {
                Some(id) => id,
                None => running_program(&api).await?,
            };
            actions.stop(&id).await
        }
        Cmd::Delete { id, .. } => actions.delete(&id).await,
        Cmd::Edit { id } => actions.edit(&FileEditTarget::default(), &id),
        Cmd::Auto { id, state } => actions.toggle_program_automatic(&id, state).await,
        Cmd::AutoAll { state } => actions.toggle_global_automatic(state).await,
    };

    match outcome {
        Ok(follow_up) => {
            after(follow_up, &api).await?;
            Ok(ExitCode::SUCCESS)
        }
        Err(ActionError::Cancelled) => {
            println!("Cancelled.");
            Ok(ExitCode::SUCCESS)
        }
        // already reported through the view
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

async fn running_program(api: &HttpController) -> anyhow::Result<ProgramId> {
    let state = api.fetch_run_state().await?;
    state
        .active_program()
        .cloned()
        .context("no program is running")
}

async fn after(follow_up: FollowUp, api: &HttpController) -> anyhow::Result<()> {
    match follow_up {
        FollowUp::RefreshState => {
            let (state, programs) = tokio::join!(api.fetch_run_state(), api.fetch_programs());
            let programs = programs.unwrap_or_default();
            println!("{}", render::run_state(&state?, &programs));
        }
        FollowUp::Reload => {
            let data = DashboardLoader::new(api.clone()).load().await?;
            print!("{}", render::status(&data, irrigo_domain::time::today()));
        }
        FollowUp::Navigate(page) => println!("{}/{page}", api.base_url()),
        FollowUp::Nothing => {}
    }
    Ok(())
}

async fn watch(api: HttpController, interval: Duration) -> anyhow::Result<ExitCode> {
    let programs = api.fetch_programs().await.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "program names unavailable");
        irrigo_domain::program::ProgramBook::default()
    });
    eprintln!(
        "watching {} every {} ms, Ctrl-C to stop",
        api.base_url(),
        interval.as_millis()
    );

    let mut last: Option<RunState> = None;
    let poller = StatePoller::new(api, TokioSleeper, interval);
    let (handle, task) = poller.start(move |result| {
        let now = chrono::Local::now().format("%H:%M:%S");
        match result {
            Ok(state) => {
                if last.as_ref() != Some(&state) {
                    println!("{now} {}", render::run_state(&state, &programs));
                    last = Some(state);
                }
            }
            Err(err) => {
                eprintln!("{now} poll failed: {err}");
                last = None;
            }
        }
        ControlFlow::Continue(())
    });

    tokio::select! {
        () = task => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("listening for Ctrl-C")?;
            handle.cancel();
        }
    }
    Ok(ExitCode::SUCCESS)
}
