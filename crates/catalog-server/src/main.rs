//! CLI entry point for the catalog GraphQL server.

use clap::{Parser, Subcommand};

use catalog_core::CatalogConfig;
use catalog_server::{schema, server, telemetry};

#[derive(Parser)]
#[command(name = "catalog-server")]
#[command(about = "GraphQL API over the in-memory item and brand catalog")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Config file prefix (default: catalog).
    #[arg(short, long, default_value = "catalog", global = true)]
    config: String,

    /// Override the listen port from config.
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand, Clone, Copy)]
enum Command {
    /// Run the HTTP server (default).
    Serve,
    /// Print the GraphQL schema definition and exit.
    Schema,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Command::Schema) = cli.command {
        println!("{}", schema::sdl());
        return Ok(());
    }

    let mut config = CatalogConfig::load(&cli.config)?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    telemetry::init_tracing(&config.log);
    server::serve(config).await?;

    Ok(())
}
