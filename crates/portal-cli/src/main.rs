mod cli;
mod commands;

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Parser;
use portal_config::Config;
use portal_engine::RecordingNotifier;
use portal_provider::JsonFileProvider;
use tracing::debug;

use crate::commands::{Context, menu::MenuArgs};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    // RUST_LOG wins over the config file
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.filter)),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(path = %config_path.display(), "loaded config");

    let fixture = cli
        .fixture
        .clone()
        .or_else(|| config.provider.fixture.clone())
        .context("No site data configured; pass --fixture or set provider.fixture in the config file")?;
    let provider = JsonFileProvider::load(fixture.clone())
        .await
        .with_context(|| format!("Failed to load site data from {}", fixture.display()))?;

    let ctx = Context {
        provider: Arc::new(provider),
        notifier: Arc::new(RecordingNotifier::new()),
        config,
        format: cli.format,
    };

    match cli.command {
        cli::Commands::Ideas(cmd) => commands::ideas::handle(cmd, &ctx).await,
        cli::Commands::Admin(cmd) => commands::admin::handle(cmd, &ctx).await,
        cli::Commands::Knowledge {
            article,
            collection,
        } => commands::knowledge::handle(article, collection, &ctx).await,
        cli::Commands::Menu {
            route,
            name,
            guest,
            profile,
            app,
        } => {
            let args = MenuArgs {
                route,
                name,
                guest,
                profile,
                app,
            };
            commands::menu::handle(args, &ctx).await
        }
        cli::Commands::Feedback {
            general,
            suggestions,
        } => commands::forms::feedback(general, suggestions, &ctx).await,
        cli::Commands::Case {
            subject,
            description,
            status,
        } => commands::forms::case(subject, description, status, &ctx).await,
    }
}
