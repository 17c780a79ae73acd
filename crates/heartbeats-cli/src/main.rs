use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use heartbeats_core::timeline::{SmoothingMode, Viewport};
use heartbeats_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "heartbeats")]
#[command(author, version, about = "Scroll-driven landing page timeline with a terminal preview")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scroll through the page in the terminal
    Preview {
        /// Smoothing mode (defaults to timeline.mode from the config)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Print settled phase progress and styles for a range of offsets
    Sample {
        /// Viewport height in pixels
        #[arg(long, default_value_t = 800.0)]
        height: f64,
        /// Viewport width in pixels
        #[arg(long, default_value_t = 1280.0)]
        width: f64,
        /// First scroll offset
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        from: f64,
        /// Last scroll offset (defaults to the bottom of the page)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<f64>,
        /// Distance between samples
        #[arg(long, default_value_t = 100.0)]
        step: f64,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Smoothing mode (defaults to timeline.mode from the config)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,
    },
    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// List the gallery media
    Gallery,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the effective configuration
    Show,
    /// Print the configuration file path
    Path,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Auto,
    Desktop,
    Lightweight,
}

impl From<ModeArg> for SmoothingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Auto => SmoothingMode::Auto,
            ModeArg::Desktop => SmoothingMode::Desktop,
            ModeArg::Lightweight => SmoothingMode::Lightweight,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Config commands must work even when the file on disk is broken
        Some(Commands::Config { action }) => {
            init_logging(&AppConfig::default().general.log_level, None)?;
            match action {
                ConfigAction::Init { force } => commands::config::init(force),
                ConfigAction::Show => commands::config::show(),
                ConfigAction::Path => commands::config::path(),
            }
        }
        command => run(command, AppConfig::load()?).await,
    }
}

async fn run(command: Option<Commands>, config: AppConfig) -> Result<()> {
    match command {
        Some(Commands::Preview { mode }) => {
            // Keep the terminal clean while the TUI owns it
            init_logging(&config.general.log_level, Some(config.log_path().as_path()))?;
            commands::preview::run(config, mode.map(Into::into)).await
        }
        None => {
            init_logging(&config.general.log_level, Some(config.log_path().as_path()))?;
            commands::preview::run(config, None).await
        }
        Some(Commands::Sample {
            height,
            width,
            from,
            to,
            step,
            json,
            mode,
        }) => {
            init_logging(&config.general.log_level, None)?;
            let mode = mode.map(Into::into).unwrap_or(config.timeline.mode);
            commands::sample::run(
                &config,
                Viewport::new(width, height),
                mode,
                commands::sample::Range { from, to, step },
                json,
            )
        }
        Some(Commands::Gallery) => {
            init_logging(&config.general.log_level, None)?;
            commands::gallery::run(&config)
        }
        Some(Commands::Config { .. }) => Ok(()),
    }
}

/// Initialize logging to `log_file`, or stderr when `None`
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_logging(level: &str, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| level.to_string()));
    let registry = tracing_subscriber::registry().with(filter);

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_sample_defaults() {
        let cli = Cli::parse_from(["heartbeats", "sample", "--json", "--mode", "lightweight"]);
        match cli.command {
            Some(Commands::Sample {
                height,
                width,
                from,
                to,
                step,
                json,
                mode,
            }) => {
                assert_eq!((height, width, from, step), (800.0, 1280.0, 0.0, 100.0));
                assert_eq!(to, None);
                assert!(json);
                assert_eq!(mode, Some(ModeArg::Lightweight));
            }
            _ => panic!("expected sample command"),
        }
    }

    #[test]
    fn test_no_command_means_preview() {
        assert!(Cli::parse_from(["heartbeats"]).command.is_none());
    }

    #[test]
    fn test_mode_arg_maps_to_smoothing_mode() {
        assert_eq!(SmoothingMode::from(ModeArg::Auto), SmoothingMode::Auto);
        assert_eq!(SmoothingMode::from(ModeArg::Desktop), SmoothingMode::Desktop);
    }
}
