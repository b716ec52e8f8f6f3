use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use idns_helper::{
    config::{ClientConfig, DEFAULT_API_VERSION, DEFAULT_BASE_URL},
    idns::client::IdnsClient,
    prompt::Prompter,
    workflow,
};
use tracing::error;

#[derive(Parser, Debug)]
#[command(author, version, about, rename_all = "kebab-case")]
struct Cli {
    /// Base URL of the iDNS API
    #[arg(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// API version pinned in the Accept header
    #[arg(long, value_name = "N", default_value_t = DEFAULT_API_VERSION)]
    api_version: u32,
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    let config = ClientConfig {
        base_url: cli.base_url,
        api_version: cli.api_version,
    };

    if let Err(err) = run(&config).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(config: &ClientConfig) -> Result<()> {
    let stdout = io::stdout();
    workflow::welcome(&mut stdout.lock()).context("failed to write to stdout")?;

    let mut prompter = Prompter::new(io::stdin().lock(), stdout.lock());
    let answers = prompter.collect()?;
    let mut out = prompter.into_output();

    let client = IdnsClient::new(config, &answers.token)?;
    workflow::create_zone(&client, &answers, &mut out).await?;
    out.flush().context("failed to write to stdout")?;

    Ok(())
}

fn init_tracing() {
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}
