use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use quantctl::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quantctl=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init().await,
        Commands::Login { username, password } => commands::login(&username, password).await,
        Commands::Register {
            username,
            email,
            password,
        } => commands::register(&username, &email, password).await,
        Commands::Logout => commands::logout().await,
        Commands::Whoami { format } => commands::whoami(format).await,
        Commands::Check => commands::check().await,
        Commands::Routes { format } => commands::routes(format).await,
        Commands::Navigate { path } => commands::navigate(&path).await,
    }
}
