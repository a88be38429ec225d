//! fintrack command-line entry point
//!
//! Drives the same form and list controllers a screen would, against the
//! configured HTTP store. Logs go to stderr; records and messages to stdout.

mod cli;
mod commands;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use fintrack_client::{AppConfig, HttpItemApi};
use fintrack_core::controllers::DateRange;
use fintrack_core::types::entities::{Budget, CashFlowEntry, Category, Holding, Snapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cli::{Cli, Cmd, EntityKind};
use commands::CommandContext;

/// Run a generic command with the record type picked on the command line.
macro_rules! for_entity {
    ($kind:expr, $command:ident, $($arg:expr),* $(,)?) => {
        match $kind {
            EntityKind::Budgets => commands::$command::<Budget>($($arg),*).await,
            EntityKind::CashFlows => commands::$command::<CashFlowEntry>($($arg),*).await,
            EntityKind::Holdings => commands::$command::<Holding>($($arg),*).await,
            EntityKind::Snapshots => commands::$command::<Snapshot>($($arg),*).await,
            EntityKind::Categories => commands::$command::<Category>($($arg),*).await,
        }
    };
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let api = HttpItemApi::new(&config.api)?;
    let ctx = CommandContext {
        api: Arc::new(api),
        page_size: config.list.page_size,
    };

    match cli.cmd {
        Cmd::List {
            entity,
            page,
            from,
            to,
        } => {
            let range = from.zip(to).map(|(start, end)| DateRange::new(start, end));
            for_entity!(entity, list, &ctx, page, range)
        }
        Cmd::Submit { entity, fields } => {
            for_entity!(entity, submit, &ctx, &fields)
        }
        Cmd::Delete { entity, id } => for_entity!(entity, delete, &ctx, id),
    }
}
