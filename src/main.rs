use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use expense::cli::{handle_batch_command, handle_theme_command, BatchArgs, ThemeCommands};
use expense::config::{paths::ExpensePaths, settings::Settings};
use expense::services::read_theme;
use expense::storage::LocalStore;

#[derive(Parser)]
#[command(
    name = "expense",
    version,
    about = "Terminal expense list editor",
    long_about = "Keep a quick list of expenses in the terminal. Type an expense, \
                  press Enter to add it, and delete rows you no longer need. \
                  The list lives only for the session; only the light/dark \
                  theme preference is saved."
)]
struct Cli {
    /// Directory for settings, preferences and logs
    #[arg(long, global = true, env = "EXPENSE_TRACKER_DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive editor (default)
    #[command(alias = "ui")]
    Tui,

    /// Replay a script of add/delete actions and print the result
    Batch(BatchArgs),

    /// Show or change the light/dark theme
    #[command(subcommand)]
    Theme(ThemeCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.dir {
        Some(dir) => ExpensePaths::with_base_dir(dir),
        None => ExpensePaths::new()?,
    };

    let interactive = matches!(cli.command, None | Some(Commands::Tui));
    init_logging(&paths, interactive)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            let settings = Settings::load_or_create(&paths)?;
            expense::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Batch(args)) => {
            handle_batch_command(args)?;
        }
        Some(Commands::Theme(cmd)) => {
            handle_theme_command(&paths, cmd)?;
        }
        Some(Commands::Config) => {
            let settings = Settings::load_or_create(&paths)?;
            let store = LocalStore::open(paths.local_store_file());
            println!("Expense Tracker Configuration");
            println!("=============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Preferences file: {}", paths.local_store_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Confirm delete: {}", settings.confirm_delete);
            println!("  Tick rate (ms): {}", settings.tick_rate_ms);
            println!("  Theme:          {}", read_theme(&store));
        }
    }

    Ok(())
}

/// Set up tracing. The editor logs to a file, truncated per session, so
/// output doesn't land on the alternate screen; every other command logs to
/// stderr.
fn init_logging(paths: &ExpensePaths, interactive: bool) -> Result<()> {
    let directive = std::env::var("EXPENSE_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| {
            if interactive {
                "expense=info".into()
            } else {
                "expense=warn".into()
            }
        });
    let filter = EnvFilter::new(directive);

    if interactive {
        let file = paths.open_log_file()?;

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
