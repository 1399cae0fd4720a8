//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use seha_core::config::{self, Config};
use seha_core::session::SessionStore;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "seha")]
#[command(version)]
#[command(about = "Seha+ healthcare portal demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Sign in as a mock user
    Login {
        /// Role to sign in as (patient or doctor)
        #[arg(long, default_value = "patient")]
        role: String,
    },

    /// Sign out and delete the persisted session
    Logout,

    /// Show the signed-in user, if any
    Whoami,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;
    let session = SessionStore::load();

    // default to the interactive portal
    let Some(command) = cli.command else {
        init_file_logging().context("init logging")?;
        return commands::portal::run(config, session).await;
    };

    init_stderr_logging();

    match command {
        Commands::Login { role } => commands::auth::login(session, &role),
        Commands::Logout => commands::auth::logout(session),
        Commands::Whoami => {
            commands::auth::whoami(&session);
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}

/// Logs to a timestamped file under the Seha home. Writing to the terminal
/// would corrupt the alternate screen, so the portal never logs there.
fn init_file_logging() -> Result<()> {
    let logs_dir = config::paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create {}", logs_dir.display()))?;
    let name = format!("seha-{}.log", chrono::Local::now().format("%Y%m%d-%H%M%S"));
    let file = std::fs::File::create(logs_dir.join(name)).context("create log file")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file)),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    Ok(())
}

fn init_stderr_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}
