use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::*;
use listkeep_cli::{init_tracing, run_server, Config};
use tracing::error;

mod cli;

use cli::items::ItemsCommands;
use cli::lists::ListsCommands;

#[derive(Parser)]
#[command(name = "listkeep")]
#[command(about = "Listkeep - lists and items over a small JSON API")]
#[command(version)]
struct Cli {
    /// Server base URL for list and item commands
    #[arg(long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server
    Serve {
        /// Port to listen on (overrides PORT)
        #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
        port: Option<u16>,
        /// Address to bind (overrides HOST)
        #[arg(long)]
        host: Option<std::net::IpAddr>,
        /// SQLite database file (overrides LISTKEEP_DATABASE_PATH)
        #[arg(short, long)]
        database: Option<PathBuf>,
    },
    /// Manage lists
    #[command(subcommand)]
    Lists(ListsCommands),
    /// Manage items
    #[command(subcommand)]
    Items(ItemsCommands),
}

#[tokio::main]
async fn main() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command, cli.url).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands, url: Option<String>) -> anyhow::Result<()> {
    match command {
        Commands::Serve {
            port,
            host,
            database,
        } => {
            init_tracing();

            let mut config = Config::from_env()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(database) = database {
                config.database_path = database;
            }

            run_server(config).await.inspect_err(|e| {
                error!("Server failed: {:#}", e);
            })
        }
        Commands::Lists(lists_cmd) => cli::lists::handle_lists_command(lists_cmd, url).await,
        Commands::Items(items_cmd) => cli::items::handle_items_command(items_cmd, url).await,
    }
}
