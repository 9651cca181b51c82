//! journalkv CLI
//!
//! Thin driver over the public engine operations: recovers the map from
//! the journal, runs one command, prints the result.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use journalkv::Engine;

/// journalkv CLI
#[derive(Parser, Debug)]
#[command(name = "journalkv")]
#[command(about = "Durable key-value store with journal replay recovery")]
#[command(version)]
struct Args {
    /// Journal file path
    #[arg(short, long, default_value = "db.log")]
    log: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Insert a new key
    Insert {
        /// The key to insert
        key: String,

        /// The value (parsed as JSON, else taken as a string)
        value: String,
    },

    /// Overwrite an existing key
    Update {
        /// The key to update
        key: String,

        /// The new value (parsed as JSON, else taken as a string)
        value: String,
    },

    /// Look up a key
    Get {
        /// The key to look up
        key: String,
    },

    /// Print every recovered key-value pair
    Dump,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,journalkv=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    let mut engine = match Engine::open_path(&args.log) {
        Ok(e) => e,
        Err(e) => {
            tracing::error!("failed to open engine: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&mut engine, args.command) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(engine: &mut Engine, command: Commands) -> journalkv::Result<()> {
    match command {
        Commands::Insert { key, value } => {
            engine.insert(&key, parse_value(&value))?;
            println!("OK");
        }
        Commands::Update { key, value } => {
            engine.update(&key, parse_value(&value))?;
            println!("OK");
        }
        Commands::Get { key } => match engine.get(&key) {
            Some(value) => println!("{}", value),
            None => println!("(not found)"),
        },
        Commands::Dump => {
            for (key, value) in engine.iter() {
                println!("{} = {}", key, value);
            }
        }
    }
    Ok(())
}

/// Treat the argument as JSON when it parses, else as a bare string
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
