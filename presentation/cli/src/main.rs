use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod setup;

use cli::alert::Alert;
use cli::{Cli, Command};
use config::app_config::AppConfig;
use setup::dependency_injection::DependencyContainer;

/// Smart-kitchen terminal client.
///
/// - config/: environment configuration (backend, session file)
/// - setup/: dependency wiring
/// - cli/: argument parsing, command handlers and text rendering
#[tokio::main]
async fn main() -> ExitCode {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter; logs go to stderr
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 3. Parse the command line
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(kind = failure_kind(&err), "command failed: {:#}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    // 4. Load configuration, flags over environment
    let config = AppConfig::from_env().with_api_url(cli.api_url);
    tracing::debug!(
        api_url = %config.backend.api_url,
        session_file = %config.session.file.display(),
        "configuration loaded"
    );

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config)?;

    // 6. Dispatch
    let user = cli.user;
    let output = match cli.command {
        Command::Session(command) => container.session.run(command, user).await?,
        Command::Food(command) => {
            let session = container.session.resolve(user).await?;
            container.food.run(command, &session).await?
        }
        Command::Nutrition(command) => {
            let session = container.session.resolve(user).await?;
            container.nutrition.run(command, &session).await?
        }
        Command::Shopping(command) => {
            let session = container.session.resolve(user).await?;
            container.shopping.run(command, &session).await?
        }
        Command::Cooking(command) => container.cooking.run(command).await?,
    };
    Ok(output)
}

/// Alert name of a failed command; failures outside command handling are `Internal`.
fn failure_kind(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<Alert>()
        .map(|alert| alert.name)
        .unwrap_or("Internal")
}
