use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use noteboard_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "noteboard")]
#[command(author, version, about = "A terminal todo list with drag-and-drop reordering")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run {
        /// Read initial todos from this file (one per line, list markers allowed)
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,
    },
    /// Turn pasted text from stdin into list records (JSON on stdout)
    Paste {
        /// Produce bookmarks instead of todos
        #[arg(short, long)]
        bookmarks: bool,
    },
    /// Run the auto-scroller against a virtual container and print each tick
    Simulate(commands::simulate::SimulateArgs),
    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,
    },
}

fn env_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()))
}

/// The terminal belongs to the TUI, so its logs go to a file under the data dir
fn init_file_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let log_path = config.log_path();
    let dir = log_path.parent().map(Path::to_path_buf).unwrap_or_else(|| config.data_dir());
    std::fs::create_dir_all(&dir)?;

    let appender = tracing_appender::rolling::never(dir, "noteboard.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_writer(writer).with_ansi(false))
        .init();
    Ok(guard)
}

fn init_stderr_logging(config: &AppConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Arc::new(AppConfig::load()?);

    // Handle commands
    match cli.command.unwrap_or(Commands::Run { file: None }) {
        Commands::Run { file } => {
            let _guard = init_file_logging(&config)?;
            commands::run::run(config, file).await
        }
        Commands::Paste { bookmarks } => {
            init_stderr_logging(&config);
            commands::paste::run(bookmarks)
        }
        Commands::Simulate(args) => {
            init_stderr_logging(&config);
            commands::simulate::run(&config, args).await
        }
        Commands::Config { init } => {
            if init {
                config.save()?;
                println!("Wrote {}", AppConfig::config_path().display());
            } else {
                print!("{}", config.to_toml()?);
            }
            Ok(())
        }
    }
}
