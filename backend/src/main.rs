//! Censusdash CLI - census statistics for one postal area
//!
//! # Main Commands
//!
//! ```bash
//! censusdash serve                  # Start HTTP server (port 3000)
//! censusdash profile 2000          # Print one postcode's view-model
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! censusdash columns population     # Show a domain's expected columns
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use censusdash::{
    area_profile, Ancestry, CensusStore, Dwelling, Income, Population,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "censusdash")]
#[command(about = "Census statistics for Australian postal areas", long_about = None)]
struct Cli {
    /// Directory holding the GCP postal-area CSV tables
    #[arg(long, env = "CENSUS_DATA_DIR", default_value = "data", global = true)]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },

    /// Print the full view-model for one postcode
    Profile {
        /// Postcode, e.g. 2000
        postcode: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the column vocabulary of one domain
    Columns {
        /// Domain to list
        domain: Domain,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Domain {
    Population,
    Income,
    Dwelling,
    Ancestry,
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => cmd_serve(&cli.data_dir, port).await,
        Commands::Profile { postcode, output } => {
            cmd_profile(&cli.data_dir, &postcode, output.as_deref())
        }
        Commands::Columns { domain } => cmd_columns(domain),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(data_dir: &Path, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("loading census tables from: {}", data_dir.display());
    let store = CensusStore::open(data_dir)?;
    censusdash::server::start_server(store, port).await
}

fn cmd_profile(
    data_dir: &Path,
    postcode: &str,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = CensusStore::open(data_dir)?;
    let profile = area_profile(&store, postcode)?;

    let json = serde_json::to_string_pretty(&profile)?;
    match output {
        Some(path) => {
            fs::write(path, &json)?;
            eprintln!("profile written to: {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn cmd_columns(domain: Domain) -> Result<(), Box<dyn std::error::Error>> {
    let columns = match domain {
        Domain::Population => Population::expected_columns(),
        Domain::Income => Income::expected_columns(),
        Domain::Dwelling => Dwelling::expected_columns(),
        Domain::Ancestry => Ancestry::expected_columns(),
    };

    for column in columns {
        println!("{}", column);
    }

    Ok(())
}
