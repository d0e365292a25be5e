//! Path Routing Table Service
//!
//! # Architecture Overview
//!
//! ```text
//!                 ┌────────────────────────────────────────────────┐
//!                 │                  ROUTE TABLE                   │
//!   API request   │  ┌─────────┐    ┌──────────────────────────┐   │
//!   ──────────────┼─▶│  http   │───▶│        RouteTable        │   │
//!                 │  │ server  │    │  ┌───────┐  ┌─────────┐  │   │
//!                 │  └─────────┘    │  │ exact │  │ prefix  │  │   │
//!                 │                 │  │ store │  │ index   │  │   │
//!                 │                 │  └───────┘  └─────────┘  │   │
//!                 │                 │       ┌──────────┐       │   │
//!                 │                 │       │  ledger  │       │   │
//!                 │                 │       └──────────┘       │   │
//!                 │                 └──────────────────────────┘   │
//!                 │  ┌───────────────────────────────────────────┐ │
//!                 │  │ config │ observability │ lifecycle        │ │
//!                 │  └───────────────────────────────────────────┘ │
//!                 └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use route_table::config::{load_config, TableConfig};
use route_table::http::HttpServer;
use route_table::lifecycle::{signals, startup, Shutdown};
use route_table::observability::{logging, metrics};
use route_table::routing::{MatchKind, RouteTable};

#[derive(Parser)]
#[command(name = "route-table")]
#[command(about = "Path routing table with exact and longest-prefix matching", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the route table over HTTP
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run the worked example against a fresh table and print the results
    Demo,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => serve(config).await,
        Commands::Demo => {
            logging::init_logging("warn");
            demo()
        }
    }
}

async fn serve(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => TableConfig::default(),
    };

    logging::init_logging(&config.observability.log_level);
    tracing::info!("route-table v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config = ?config_path,
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let table = Arc::new(RouteTable::new());
    startup::seed_routes(&table, &config.routes)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(signals::shutdown_on_ctrl_c(shutdown));

    HttpServer::new(config, table).run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

fn demo() -> Result<(), Box<dyn std::error::Error>> {
    let table = RouteTable::new();

    let registrations = [
        ("/api/1", "exact", "service-1"),
        ("/api/1/1", "exact", "service-2"),
        ("/api/2/1", "prefix", "service-3"),
        ("/api/2/", "prefix", "service-4"),
        ("/api/1", "prefix", "service-5"),
        ("/api/2/1/1", "prefix", "service-6"),
    ];
    for (path, match_type, destination) in registrations {
        table.add_route(path, match_type, destination)?;
        println!("add {match_type:<6} {path:<12} -> {destination}");
    }

    for path in ["/api/1", "/api/1/2", "/api/3", "/api/2/1/2", "/api/2/"] {
        print_lookup(&table, path);
    }

    table.insert("/api/2/", MatchKind::Prefix, "service-7");
    println!("add prefix /api/2/      -> service-7");
    print_lookup(&table, "/api/2/");

    println!("{}", serde_json::to_string_pretty(&table.snapshot())?);
    Ok(())
}

fn print_lookup(table: &RouteTable, path: &str) {
    let lookup = table.lookup(path);
    println!(
        "lookup {path:<12} -> {} ({})",
        lookup.destination,
        lookup.source.as_str()
    );
}
