//! # Quillpad CLI
//!
//! Command-line shell over the Quillpad client: login, listing, search and
//! post editing with image uploads.

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

mod cli;
mod commands;
mod config;
mod notifier;
mod telemetry;

use cli::Cli;
use commands::Context;
use config::AppConfig;
use notifier::ConsoleNotifier;
use quillpad_core::ClientError;
use quillpad_infra::{FileSessionStore, HttpBlogApi};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::from_env().with_api_url(cli.api_url.clone());

    telemetry::init_telemetry(&config.telemetry.clone().verbose(cli.verbose));

    tracing::debug!(
        api_url = %config.http.base_url,
        token_file = %config.token_file.display(),
        "Configuration loaded"
    );

    let api = match HttpBlogApi::new(config.http.clone()) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context {
        api: Arc::new(api),
        store: Arc::new(FileSessionStore::new(config.token_file.clone())),
        notifier: Arc::new(ConsoleNotifier),
    };

    let mut stdout = std::io::stdout().lock();
    match commands::run(cli.command, &ctx, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Client errors were already shown as notices.
            if e.downcast_ref::<ClientError>().is_none() {
                eprintln!("error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}
