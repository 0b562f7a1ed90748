//! profile-store: CLI for keeping resume profiles in local storage

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::EnvFilter;

use profile_store::config::{Format, RepositoryConfig, DEFAULT_KEY};

mod commands;

use commands::utils::StoreOptions;

#[derive(Parser)]
#[command(name = "profile-store")]
#[command(about = "Store, list, update and delete resume profiles", long_about = None)]
#[command(version)]
struct Cli {
    /// Storage file (default: <data dir>/profile-store/storage.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Storage key holding the profile collection
    #[arg(long, global = true, default_value = DEFAULT_KEY)]
    key: String,

    /// Write the collection as indented JSON
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add the built-in sample profile
    Sample {
        /// Profile id (random UUID if omitted)
        #[arg(long)]
        id: Option<String>,
    },

    /// Add a profile from a JSON file ("-" reads stdin)
    Add {
        /// JSON file containing one profile
        file: String,
    },

    /// List all profiles
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one profile as JSON
    Show {
        /// Profile id
        id: String,
    },

    /// Replace a profile with the JSON record of the same id ("-" reads stdin)
    Update {
        /// JSON file containing the full replacement profile
        file: String,
    },

    /// Delete every profile with the given id
    Delete {
        /// Profile id
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = StoreOptions {
        store: cli.store,
        config: RepositoryConfig {
            key: cli.key,
            format: if cli.pretty {
                Format::Pretty
            } else {
                Format::Compact
            },
        },
    };

    match cli.command {
        Commands::Sample { id } => {
            commands::sample::execute(&options, id)?;
        }

        Commands::Add { file } => {
            commands::add::execute(&options, &file)?;
        }

        Commands::List { json } => {
            let output = commands::list::execute(&options, commands::list::ListOptions { json })?;
            println!("{}", output);
        }

        Commands::Show { id } => {
            println!("{}", commands::show::execute(&options, &id)?);
        }

        Commands::Update { file } => {
            commands::update::execute(&options, &file)?;
        }

        Commands::Delete { id } => {
            commands::delete::execute(&options, &id)?;
        }
    }

    Ok(())
}
