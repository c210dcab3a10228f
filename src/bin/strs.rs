//! CLI entry point for the `strs` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use string_analyzer::cli::commands;
use string_analyzer::config::{load_config, resolve_store_path, StrsConfig};
use string_analyzer::service::StatusCode;
use string_analyzer::StrsError;

#[derive(Parser)]
#[command(
    name = "strs",
    about = "strs: content-addressed string analysis with natural-language filters"
)]
struct Cli {
    /// Path to the .strs store file
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: "text" (default) or "json"
    #[arg(long, global = true)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the computed properties of a string without storing it
    Analyze {
        /// The string to analyze
        value: String,
    },
    /// Analyze a string and store it
    Add {
        /// The string to store
        value: String,
    },
    /// Show the stored record for a string
    Get {
        /// The exact string value
        value: String,
    },
    /// Delete the stored record for a string
    Delete {
        /// The exact string value
        value: String,
    },
    /// List stored strings, optionally filtered
    List {
        /// "true" or "false"
        #[arg(long)]
        is_palindrome: Option<String>,
        /// Minimum length (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        min_length: Option<String>,
        /// Maximum length (inclusive)
        #[arg(long, allow_hyphen_values = true)]
        max_length: Option<String>,
        /// Exact word count
        #[arg(long, allow_hyphen_values = true)]
        word_count: Option<String>,
        /// A single character the string must contain
        #[arg(long)]
        contains_character: Option<String>,
    },
    /// List stored strings matching a natural-language phrase
    Filter {
        /// e.g. "single word palindromic strings"
        phrase: String,
    },
    /// Show how a phrase would be interpreted
    Parse {
        /// The phrase to interpret
        phrase: String,
    },
    /// Statistics about the store
    Stats,
}

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => StrsConfig::default(),
    };

    let level = if cli.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let json = cli.format.as_deref().unwrap_or(&config.format) == "json";
    let store = resolve_store_path(cli.store.as_deref(), &config);

    let result = match cli.command {
        Commands::Analyze { value } => commands::cmd_analyze(&value, json),
        Commands::Add { value } => commands::cmd_add(&store, &value, json),
        Commands::Get { value } => commands::cmd_get(&store, &value, json),
        Commands::Delete { value } => commands::cmd_delete(&store, &value, json),
        Commands::List {
            is_palindrome,
            min_length,
            max_length,
            word_count,
            contains_character,
        } => {
            let params: Vec<(&str, &str)> = [
                ("is_palindrome", &is_palindrome),
                ("min_length", &min_length),
                ("max_length", &max_length),
                ("word_count", &word_count),
                ("contains_character", &contains_character),
            ]
            .into_iter()
            .filter_map(|(name, value)| value.as_deref().map(|v| (name, v)))
            .collect();
            commands::cmd_list(&store, &params, json)
        }
        Commands::Filter { phrase } => commands::cmd_filter(&store, &phrase, json),
        Commands::Parse { phrase } => commands::cmd_parse(&phrase, json),
        Commands::Stats => commands::cmd_stats(&store, json),
    };

    match result {
        Ok(status) if status.is_success() => {}
        Ok(status) => {
            let code = match status {
                StatusCode::NotFound => 4,
                StatusCode::Conflict => 5,
                StatusCode::InternalError => 1,
                _ => 3,
            };
            process::exit(code);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                StrsError::Io(_) | StrsError::Config(_) => 1,
                StrsError::InvalidMagic
                | StrsError::UnsupportedVersion(_)
                | StrsError::Truncated
                | StrsError::Corrupt(_)
                | StrsError::Compression(_) => 2,
                StrsError::Duplicate(_) => 5,
            };
            process::exit(code);
        }
    }
}
