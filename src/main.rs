use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use scamcheck::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "scamcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Timeout for the reasoning gateway call, in seconds
    #[arg(long, global = true, default_value = "60")]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = ContainerConfig::from_env().with_timeout_secs(cli.timeout_secs);
    let container = Container::new(config);

    match cli.command {
        Commands::Serve { host, port } => {
            let addr: SocketAddr = format!("{host}:{port}")
                .parse()
                .with_context(|| format!("invalid bind address {host}:{port}"))?;
            scamcheck::serve(addr, Arc::new(container)).await?;
        }
        command => {
            let router = Router::new(&container);
            let output = router.route(command).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
