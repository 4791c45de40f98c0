mod commands;
mod content;
mod discovery;
mod locale;
mod markdown;
mod search;
mod translate;

pub const USER_AGENT: &str = concat!("polyscout/", env!("CARGO_PKG_VERSION"));

use clap::Parser;
use commands::{Cli, Polyscout};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("polyscout=info".parse()?),
        )
        .init();

    info!("starting polyscout");

    let output = Polyscout::from_env()?
        .run(cli.command)
        .await
        .inspect_err(|e| tracing::error!("command failed: {e}"))?;

    println!("{output}");
    Ok(())
}
