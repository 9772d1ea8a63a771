//! Wayfinder CLI entry point

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "wayfinder")]
#[command(about = "Campus shortest-path server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Building records file (shortName,longName,x,y per line)
    #[arg(long, default_value = "data/campus_buildings.csv")]
    buildings: PathBuf,

    /// Path segment records file (x1,y1,x2,y2,distance per line)
    #[arg(long, default_value = "data/campus_paths.csv")]
    paths: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "7890")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
    /// List all buildings
    Buildings,
    /// Compute the shortest route between two buildings
    Route {
        /// Short name of the starting building
        start: String,

        /// Short name of the destination building
        end: String,
    },
    /// Show version
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "wayfinder={}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port, host } => {
            commands::serve(cli.buildings, cli.paths, host, port).await
        }
        Commands::Buildings => commands::buildings(cli.buildings, cli.paths),
        Commands::Route { start, end } => commands::route(cli.buildings, cli.paths, start, end),
        Commands::Version => {
            println!("Wayfinder v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
