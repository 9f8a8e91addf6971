// Sentiment Insight - command line entry point

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

use sentiment_insight::commands::{
    analyze_statements, get_health, get_settings, get_ui_text, list_languages, reset_settings,
    set_language, update_settings,
};
use sentiment_insight::services::render_session;
use sentiment_insight::storage::ConfigService;
use sentiment_insight::{AppConfig, AppState, CommandResponse, SettingsUpdate};

#[derive(Parser)]
#[command(name = "sentiment-insight")]
#[command(about = "Multilingual sentiment analysis with structured, actionable guidance")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Inference service base URL (overrides the config file)
    #[arg(long, global = true)]
    service_url: Option<String>,

    /// Config file path (default: ~/.sentiment-insight/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze statements, one per line, from a file or stdin
    Analyze {
        /// Read statements from this file instead of stdin
        #[arg(long)]
        file: Option<PathBuf>,

        /// Language code ("auto", "en", "hi", ...)
        #[arg(long)]
        lang: Option<String>,

        /// Print the JSON response instead of the text report
        #[arg(long)]
        json: bool,
    },

    /// Print the user-visible strings for a language as JSON
    UiText {
        #[arg(long, default_value = "auto")]
        lang: String,
    },

    /// List supported languages
    Languages,

    /// Check that the inference service is reachable
    Health,

    /// Show or change the saved configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the current configuration
    Show,

    /// Change one or more settings; omitted settings are kept
    Set {
        /// Inference service base URL
        #[arg(long)]
        url: Option<String>,

        /// Per-request timeout in seconds
        #[arg(long)]
        timeout_secs: Option<u64>,

        /// Proxy URL; an empty value removes it
        #[arg(long)]
        proxy: Option<String>,

        /// Default language code
        #[arg(long)]
        language: Option<String>,
    },

    /// Restore the default configuration
    Reset,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Languages => print_json(&list_languages()),
        Commands::UiText { lang } => print_json(&get_ui_text(&lang)),
        Commands::Health => {
            let state = build_state(cli.config, cli.service_url)?;
            let response = get_health(&state).await;
            let healthy = response.data.as_ref().is_some_and(|h| h.inference);
            print_json(&response)?;
            Ok(exit_code(healthy))
        }
        Commands::Config { action } => {
            let mut config = open_config(cli.config)?;
            let response = match action {
                ConfigAction::Show => get_settings(&config),
                ConfigAction::Set {
                    url,
                    timeout_secs,
                    proxy,
                    language,
                } => update_settings(
                    &mut config,
                    SettingsUpdate {
                        service_url: url,
                        timeout_secs,
                        proxy,
                        language,
                    },
                ),
                ConfigAction::Reset => reset_settings(&mut config),
            };
            print_json(&response)
        }
        Commands::Analyze { file, lang, json } => {
            let state = build_state(cli.config, cli.service_url)?;
            if let Some(code) = lang {
                set_language(&state, &code).await;
            }

            let input = read_input(file).await?;
            let response = analyze_statements(&state, &input).await;
            let success = response.success;

            if json {
                print_json(&response)?;
            } else {
                let snapshot = state.session().snapshot().await;
                println!("{}", render_session(&snapshot));
            }
            Ok(exit_code(success))
        }
    }
}

/// Load the config file and apply command line overrides.
fn build_state(config_path: Option<PathBuf>, service_url: Option<String>) -> Result<AppState> {
    let service = open_config(config_path)?;

    let mut config: AppConfig = service.get_config().clone();
    if let Some(url) = service_url {
        config.service_url = url;
    }

    Ok(AppState::new(config)?)
}

fn open_config(config_path: Option<PathBuf>) -> Result<ConfigService> {
    let service = match config_path {
        Some(path) => ConfigService::from_path(path)?,
        None => ConfigService::new()?,
    };
    tracing::debug!("Using config {}", service.path().display());
    Ok(service)
}

async fn read_input(file: Option<PathBuf>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read statements from stdin")?;
            Ok(input)
        }
    }
}

fn print_json<T: Serialize>(response: &CommandResponse<T>) -> Result<ExitCode> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(exit_code(response.success))
}

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
