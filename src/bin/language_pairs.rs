//! Headless access to the translation backend.
//!
//! Prints the language selects exactly as the page would build them, checks
//! pairs, dumps the history and submits translation requests.
//!
//! # Environment Variables
//! - `CERVANTES_BASE_URL` - Backend base URL (default: http://127.0.0.1:5000)
//! - `CERVANTES_DEFAULT_SOURCE` / `CERVANTES_DEFAULT_TARGET` - Default selections

use anyhow::{Context, Result};
use cervantes::application::select_synchronizer::SelectSynchronizer;
use cervantes::config::Config;
use cervantes::domain::ports::{
    LanguagePairSource, SelectWidget, TranslationHistorySource, TranslationSubmitter,
};
use cervantes::domain::translation::TranslationRequest;
use cervantes::infrastructure::CervantesApiClient;
use cervantes::interfaces::view_models::SelectViewModel;
use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(author, version, about = "Cervantes language pairs and history", long_about = None)]
struct Cli {
    /// Override CERVANTES_BASE_URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List source languages as the source select shows them
    Pairs,
    /// List the target languages offered for a source language
    Targets {
        /// Source language code
        source: String,
    },
    /// Check whether a source -> target pair is available
    Check { source: String, target: String },
    /// Print the translation history
    History {
        /// Print the JSON records instead of the HTML fragment
        #[arg(long)]
        json: bool,
    },
    /// Request a new translation
    Submit {
        source: String,
        target: String,
        text: String,
    },
}

fn print_select(select: &SelectViewModel) {
    for option in select.options() {
        let marker = if option.selected { "*" } else { " " };
        println!("{} {:<6} {}", marker, option.value, option.label);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(base_url) = cli.base_url {
        config.http.base_url = base_url
            .parse()
            .with_context(|| format!("Invalid --base-url: {}", base_url))?;
    }

    let backend = CervantesApiClient::new(&config.http)?;

    match cli.command {
        Commands::Pairs => {
            let records = backend.fetch_language_pairs().await?;
            let sync = SelectSynchronizer::from_records(&records, config.selection.clone());
            let mut source = SelectViewModel::new("source-language");
            sync.populate_source(&mut source);
            print_select(&source);
        }
        Commands::Targets { source } => {
            let records = backend.fetch_language_pairs().await?;
            let sync = SelectSynchronizer::from_records(&records, config.selection.clone());
            let mut target = SelectViewModel::new("target-language");
            sync.update_target(&mut target, &source)?;
            print_select(&target);
        }
        Commands::Check { source, target } => {
            let records = backend.fetch_language_pairs().await?;
            let sync = SelectSynchronizer::from_records(&records, config.selection.clone());
            if sync.index().supports(&source, &target) {
                println!("{} -> {} is available", source, target);
            } else {
                println!("{} -> {} is not available", source, target);
                std::process::exit(1);
            }
        }
        Commands::History { json } => {
            if json {
                let records = backend.fetch_history_records().await?;
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("{}", backend.fetch_history_html().await?);
            }
        }
        Commands::Submit {
            source,
            target,
            text,
        } => {
            let records = backend.fetch_language_pairs().await?;
            let sync = SelectSynchronizer::from_records(&records, config.selection.clone());
            let request = TranslationRequest::new(source, target, text);
            request.validate(sync.index())?;
            backend.submit_translation(&request).await?;
            println!(
                "Requested {} -> {} translation",
                request.source_language, request.target_language
            );
        }
    }

    Ok(())
}
