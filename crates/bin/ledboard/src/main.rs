//! # ledboard: terminal dashboard for the board's button/LED API
//!
//! Composition root that wires the device client and the terminal surfaces
//! together and runs the dashboard.
//!
//! ## Responsibilities
//! - Parse configuration (CLI args, env vars, config file)
//! - Initialize logging
//! - Construct the reqwest device client and the terminal surfaces
//! - Run the requested command on a single-threaded `LocalSet`
//! - Stop polling on Ctrl-C
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer; no dashboard logic belongs here.

mod config;
mod runtime;
mod terminal;

use std::error::Error;
use std::io::Stdout;
use std::path::PathBuf;
use std::rc::Rc;

use clap::{Parser, Subcommand};
use ledboard_adapter_http_reqwest::ReqwestDeviceApi;
use ledboard_app::config::DashboardConfig;
use ledboard_app::dashboard::{Dashboard, Surfaces};
use ledboard_app::poller::Poller;
use ledboard_domain::id::LedNumber;
use ledboard_domain::led::LedAction;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::runtime::TokioRuntime;
use crate::terminal::{Console, ControlPanel, TerminalButtons, TerminalFeedback, TerminalLeds};

type TerminalDashboard = Dashboard<
    ReqwestDeviceApi,
    TokioRuntime,
    TerminalButtons<Stdout>,
    TerminalLeds<Stdout>,
    TerminalFeedback<Stdout>,
>;

#[derive(Debug, Parser)]
#[command(name = "ledboard", version, about = "Watch and drive the board's buttons and LEDs")]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./ledboard.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base URL of the device, overriding the configuration
    #[arg(long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Poll continuously and accept `<led> <on|off|toggle>` lines on stdin (default)
    Watch,
    /// Poll buttons and LEDs once and print them
    Status,
    /// Send a single LED command
    Led {
        /// LED number as reported by the device
        number: LedNumber,
        /// One of `on`, `off` or `toggle`
        action: LedAction,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref(), cli.url)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let command = cli.command.unwrap_or(Command::Watch);
    LocalSet::new().run_until(run(command, &config)).await
}

async fn run(command: Command, config: &Config) -> Result<(), Box<dyn Error>> {
    let settings = config.dashboard();
    let console = Console::new(std::io::stdout());
    let panel = ControlPanel::default();

    let dashboard = Dashboard::new(
        &settings,
        ReqwestDeviceApi::new(settings.api_base.clone()),
        TokioRuntime,
        Surfaces {
            buttons: TerminalButtons::new(console.clone()),
            leds: TerminalLeds::new(console.clone(), panel.clone()),
            feedback: TerminalFeedback::new(console),
        },
    );

    match command {
        Command::Watch => watch(&dashboard, &settings, &panel).await,
        Command::Status => {
            dashboard.poll_buttons().await;
            dashboard.poll_leds().await;
            Ok(())
        }
        Command::Led { number, action } => {
            // availability comes from the device's LED list
            dashboard.poll_leds().await;
            dashboard.control_led(number, action).await?;
            Ok(())
        }
    }
}

async fn watch(
    dashboard: &Rc<TerminalDashboard>,
    settings: &DashboardConfig,
    panel: &ControlPanel,
) -> Result<(), Box<dyn Error>> {
    tracing::info!(
        url = %settings.api_base,
        ssid = %settings.wifi_ssid,
        "watching device"
    );

    dashboard.tick();
    let poller = {
        let dashboard = Rc::clone(dashboard);
        Poller::new(TokioRuntime, settings.refresh_interval(), move || {
            dashboard.tick();
        })
    };
    poller.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result?;
                break;
            }
            line = lines.next_line(), if stdin_open => match line? {
                Some(line) if line.trim().is_empty() => {}
                Some(line) => {
                    if let Err(err) = panel.dispatch(&line) {
                        eprintln!("{err}");
                    }
                }
                None => stdin_open = false,
            },
        }
    }

    poller.stop();
    tracing::info!("stopped");
    Ok(())
}
