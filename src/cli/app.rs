//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use super::output::{Output, OutputFormat};
use super::{repl, tui};
use crate::session::Session;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "wowo")]
#[command(author, version, about = "A grumpy line-oriented personal task tracker")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Task file (overrides the config file)
    #[arg(long, global = true, env = "WOWO_DATA")]
    pub data: Option<PathBuf>,

    /// Maximum number of tasks (overrides the config file)
    #[arg(long, global = true, env = "WOWO_CAPACITY")]
    pub capacity: Option<usize>,

    /// Config file to use instead of the default location
    #[arg(long, global = true, env = "WOWO_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Read commands from stdin, one per line (default)
    Repl,

    /// Full-screen chat interface
    Tui,

    /// Run a single command and exit
    ///
    /// Examples:
    ///   wowo run todo Read book
    ///   wowo run deadline return book /by 2019-12-02
    Run {
        /// The command, as it would be typed in the REPL
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file if it does not exist
        #[arg(long)]
        init: bool,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("wowo starting");

    let config_path = cli.config.clone().or_else(Config::default_path);
    let mut config = match &config_path {
        Some(path) => {
            output.verbose_ctx("config", &format!("Reading {}", path.display()));
            Config::from_path(path)?
        }
        None => Config::default(),
    };
    if let Some(data) = cli.data {
        config.data_file = data;
    }
    if let Some(capacity) = cli.capacity {
        config.capacity = Some(capacity);
    }
    config.validate()?;

    output.verbose_ctx("config", &format!("Task file: {}", config.data_file.display()));

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let mut session = Session::open(&config);
            let stdin = std::io::stdin();
            repl::run(&mut session, stdin.lock(), &output)?
        }

        Commands::Tui => {
            let session = Session::open(&config);
            tui::run(session, &output)?
        }

        Commands::Run { words } => {
            let mut session = Session::open(&config);
            if let Some(warning) = session.take_warning() {
                output.warning(&warning);
            }

            let response = session.handle(&words.join(" "));
            output.verbose_ctx("run", &format!("error={}", response.is_error()));
            if response.is_error() {
                output.error(response.message());
                std::process::exit(1);
            }
            if !response.is_empty() {
                output.response(&response);
            }
        }

        Commands::Config { init } => show_config(&output, &config, config_path, init)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

fn show_config(output: &Output, config: &Config, path: Option<PathBuf>, init: bool) -> Result<()> {
    if init {
        let path = path.context("Could not determine config directory")?;
        if path.exists() {
            output.success(&format!("Config already exists at {}", path.display()));
        } else {
            config.save(&path)?;
            output.success(&format!("Wrote config to {}", path.display()));
        }
        return Ok(());
    }

    if output.is_json() {
        output.data(config);
    } else {
        let text = toml::to_string_pretty(config).context("Failed to serialize config")?;
        print!("{}", text);
        println!("# sort command orders by {}", config.sort_order.as_str());
    }

    Ok(())
}

/// Sends `tracing` events to stderr when `--verbose` or `RUST_LOG` asks for them
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("wowo=debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
