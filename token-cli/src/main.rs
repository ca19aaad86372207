use anyhow::{Context, Result};
use clap::Parser;
use opentok_auth::ApiClient;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut client = ApiClient::new(cli.credentials.api_key, cli.credentials.api_secret);
    if let Some(host) = cli.credentials.api_host {
        client = client
            .with_api_host(host)
            .context("Failed to apply OPENTOK_API_HOST")?;
    }

    match cli.command {
        Command::Token { issue_type } => {
            let token = client
                .issuer()
                .issue_token(issue_type)
                .context("Failed to sign token")?;
            info!(%issue_type, "token issued");
            println!("{token}");
        }
        Command::Get { path } => {
            let response = client
                .get(&path)
                .await
                .with_context(|| format!("GET {path} failed"))?;
            let body = response
                .text()
                .await
                .context("Failed to read response body")?;
            println!("{body}");
        }
    }

    Ok(())
}
