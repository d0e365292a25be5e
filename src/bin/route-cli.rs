use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "route-cli")]
#[command(about = "Management CLI for the route table service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register or modify a route
    Add {
        path: String,
        /// "exact" or "prefix"
        match_type: String,
        destination: String,
    },
    /// Resolve a path to its destination service
    Lookup { path: String },
    /// Dump exact, prefix and cached routes
    Routes,
    /// Show route counts
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = match cli.command {
        Commands::Add { path, match_type, destination } => {
            client
                .post(format!("{}/routes", cli.url))
                .json(&json!({
                    "path": path,
                    "match_type": match_type,
                    "destination": destination,
                }))
                .send()
                .await?
        }
        Commands::Lookup { path } => {
            client
                .get(format!("{}/lookup", cli.url))
                .query(&[("path", path)])
                .send()
                .await?
        }
        Commands::Routes => client.get(format!("{}/routes", cli.url)).send().await?,
        Commands::Stats => client.get(format!("{}/stats", cli.url)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: route table API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
