// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Allow println! in main.rs for CLI user-facing output (validate command)
#![allow(clippy::print_stdout)]

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::{debug, error, info};
use std::path::{Path, PathBuf};

use jokes_server::config::{load_or_default, JokesServerConfig};
use jokes_server::{seed_jokes, Database, JokeStore, JokesServer, SeedOutcome};

#[derive(Parser)]
#[command(name = "jokes-server")]
#[command(about = "REST API serving short text jokes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a configuration file (defaults are built from the environment)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the server port
    #[arg(short, long, global = true)]
    port: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the server (default if no subcommand specified)
    Run,

    /// Synchronize the schema and insert the default jokes, then exit
    Seed,

    /// Validate the configuration without starting the server
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    load_env_file(cli.config.as_deref());

    match cli.command {
        Some(Commands::Validate) => validate_config(cli.config, cli.port),
        Some(Commands::Seed) => {
            let config = load_config(cli.config, cli.port)?;
            run_seed(config).await
        }
        Some(Commands::Run) | None => {
            let config = load_config(cli.config, cli.port)?;
            run_server(config).await
        }
    }
}

/// Load a `.env` file beside the config file, or from the working directory.
fn load_env_file(config_path: Option<&Path>) {
    let result = match config_path.and_then(Path::parent) {
        Some(dir) if dir.join(".env").exists() => dotenvy::from_path(dir.join(".env")).map(|_| ()),
        _ => dotenvy::dotenv().map(|_| ()),
    };
    if let Err(e) = result {
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }
}

fn load_config(path: Option<PathBuf>, port_override: Option<u16>) -> Result<JokesServerConfig> {
    let mut config = load_or_default(path.as_ref())?;
    if let Some(port) = port_override {
        config.server.port = port;
    }
    init_logging(&config.server.log_level);

    match &path {
        Some(path) => info!("Config file: {}", path.display()),
        None => info!("No config file given, using environment defaults"),
    }
    debug!("Server configuration: {config:?}");
    Ok(config)
}

/// `RUST_LOG` wins over the configured level.
fn init_logging(level: &str) {
    let env = env_logger::Env::default().default_filter_or(level);
    if let Err(e) = env_logger::Builder::from_env(env).try_init() {
        eprintln!("Warning: logger already initialized: {e}");
    }
}

async fn run_server(config: JokesServerConfig) -> Result<()> {
    let server = match JokesServer::new(config).await {
        Ok(server) => server,
        Err(e) => {
            error!("Unable to connect to the database: {e:#}");
            return Err(e);
        }
    };
    if let Err(e) = server.run().await {
        error!("Server startup failed: {e:#}");
        return Err(e);
    }
    Ok(())
}

async fn run_seed(config: JokesServerConfig) -> Result<()> {
    let db = Database::connect(&config.database).await?;
    let store = JokeStore::new(db);
    match seed_jokes(&store, config.environment()).await {
        Ok(SeedOutcome::Inserted(n)) => info!("Seed complete: {n} jokes inserted"),
        Ok(SeedOutcome::AlreadyPopulated(n)) => info!("Seed skipped: {n} jokes already stored"),
        Err(e) => {
            error!("Error while adding default jokes: {e}");
            store.database().close().await;
            return Err(e.into());
        }
    }
    store.database().close().await;
    Ok(())
}

fn validate_config(path: Option<PathBuf>, port_override: Option<u16>) -> Result<()> {
    match &path {
        Some(path) => println!("Validating configuration: {}", path.display()),
        None => println!("Validating default configuration from environment"),
    }
    println!();

    match load_or_default(path.as_ref()) {
        Ok(mut config) => {
            if let Some(port) = port_override {
                config.server.port = port;
            }
            println!("[OK] Configuration is valid");
            println!();
            println!("Summary:");
            println!("  Listen address: {}:{}", config.server.host, config.server.port);
            println!("  Log level: {}", config.server.log_level);
            println!("  Environment: {}", config.environment());
            println!("  Database: {}", config.database.path);
            if config.environment().recreates_schema() {
                println!("  Note: the jokes table is recreated on every start");
            }
            Ok(())
        }
        Err(e) => {
            println!("[ERROR] {e}");
            std::process::exit(1);
        }
    }
}
