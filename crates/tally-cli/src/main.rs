use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use log::LevelFilter;
use tally_cli::{headless, interactive_ui};
use tally_term::configuration::{Config, ConfigKey};

#[derive(Parser, Debug)]
#[clap(name = "tally", author, version, about = "Keyboard-driven terminal calculator")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    /// Path to the config file.
    #[clap(long = "config-file", id = "config-file", global = true, env = "TALLY_CONFIG_FILE")]
    config_file: Option<String>,

    /// Minimum log level written to the log.
    #[clap(
        long = "log-level",
        id = "log-level",
        global = true,
        value_parser = ["off", "error", "warn", "info", "debug", "trace"]
    )]
    log_level: Option<String>,

    /// Where logs are written while the calculator is open.
    #[clap(long = "log-file", id = "log-file", global = true)]
    log_file: Option<String>,

    /// Milliseconds between UI refreshes when no key is pressed.
    #[clap(long = "tick-rate", id = "tick-rate", global = true)]
    tick_rate: Option<String>,

    /// Move the grid cursor onto buttons typed from the keyboard (off by default).
    #[clap(
        long = "track-focus",
        id = "track-focus",
        global = true,
        value_parser = ["true", "false"]
    )]
    track_focus: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive calculator (default command)
    Run,
    /// Replay keys without a terminal and print the display, e.g. `tally eval 12+30=`
    Eval {
        #[clap(required = true, allow_hyphen_values = true)]
        keys: Vec<String>,
    },
    /// Inspect the configuration file
    Config {
        #[clap(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Print a config.toml containing every default value
    Default,
    /// Show the config file location
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches)?;

    let mut all_matches = vec![&matches];
    if let Some((_, sub_matches)) = matches.subcommand() {
        all_matches.push(sub_matches);
    }
    Config::load(Cli::command(), all_matches).await?;

    let log_level_filter = Config::get(ConfigKey::LogLevel)
        .parse()
        .unwrap_or(LevelFilter::Warn);

    match cli.command {
        Some(Commands::Eval { keys }) => {
            // Stdout carries the result, logs go to stderr.
            env_logger::Builder::new()
                .filter_level(log_level_filter)
                .init();

            let tokens = headless::parse_keys(&keys)?;
            let outcome = headless::replay(&tokens, Config::track_focus());
            println!("{}", outcome.display);
            if let Some(err) = outcome.error {
                eprintln!("error: {err}");
            }

            Ok(())
        }
        Some(Commands::Config { action }) => {
            match action {
                ConfigCommands::Default => print!("{}", Config::serialize_default(Cli::command())),
                ConfigCommands::Path => println!("{}", Config::get(ConfigKey::ConfigFile)),
            }

            Ok(())
        }
        Some(Commands::Run) | None => {
            // Keep the alternate screen clean by logging to a file.
            init_file_logger(&Config::get(ConfigKey::LogFile), log_level_filter)?;
            interactive_ui::run_interactive_ui().await
        }
    }
}

fn init_file_logger(log_file: &str, level: LevelFilter) -> Result<()> {
    if let Some(parent) = Path::new(log_file).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
        }
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {log_file}"))?;

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}
