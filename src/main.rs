//! # Siroco CLI
//!
//! Command-line interface for label rendering and the upload server.
//!
//! ## Usage
//!
//! ```bash
//! # Render one label per row of data/gen.csv into data/images
//! siroco render
//!
//! # Custom paths and layout
//! siroco render --input artists.csv --output out --config layout.json
//!
//! # Start the upload/snapshot server
//! siroco serve --listen 0.0.0.0:8000
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use siroco::{
    SirocoError, batch,
    config::LayoutConfig,
    server::{self, ServerConfig},
};

/// Siroco - QR label compositor
#[derive(Parser, Debug)]
#[command(name = "siroco")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one label image per table row
    Render {
        /// CSV file with the artist sheet
        #[arg(long, default_value = "data/gen.csv")]
        input: PathBuf,

        /// Directory for the generated PNGs
        #[arg(long, default_value = "data/images")]
        output: PathBuf,

        /// JSON layout configuration (defaults are used when omitted)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Run the upload and state snapshot server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8000")]
        listen: String,

        /// Upload directory
        #[arg(long, default_value = "uploads")]
        uploads: PathBuf,

        /// Static files directory
        #[arg(long = "static", default_value = "static")]
        static_dir: PathBuf,

        /// Snapshot directory
        #[arg(long, default_value = "estados")]
        states: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SirocoError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
        } => {
            let config = match config {
                Some(path) => LayoutConfig::from_file(&path)?,
                None => LayoutConfig::default(),
            };
            let report = batch::render_table(&input, &output, &config)?;
            tracing::info!(
                "Rendered {} labels into {}",
                report.written.len(),
                output.display()
            );
        }
        Commands::Serve {
            listen,
            uploads,
            static_dir,
            states,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                upload_dir: uploads,
                static_dir,
                state_dir: states,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}
