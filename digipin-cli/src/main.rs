use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

/// DIGIPIN geocode CLI tool
#[derive(Parser)]
#[command(name = "digipin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a coordinate into a DIGIPIN code
    Encode {
        /// Latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Decode a DIGIPIN code into the center of its cell
    Decode {
        /// The DIGIPIN code (separators optional)
        code: String,

        /// Output result as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Convert coordinates or codes from a file
    Batch {
        /// Input file (CSV or GeoJSON)
        input: PathBuf,

        /// Output file (derived from input if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Column name for latitude (CSV only)
        #[arg(long, default_value = "latitude")]
        lat_col: String,

        /// Column name for longitude (CSV only)
        #[arg(long, default_value = "longitude")]
        lon_col: String,

        /// Decode this column of codes instead of encoding coordinates (CSV only)
        #[arg(long)]
        code_col: Option<String>,
    },

    /// Display the grid parameters and per-level precision
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { lat, lon, json } => commands::encode::run(lat, lon, json),
        Commands::Decode { code, json } => commands::decode::run(&code, json),
        Commands::Batch {
            input,
            output,
            lat_col,
            lon_col,
            code_col,
        } => commands::batch::run(input, output, &lat_col, &lon_col, code_col.as_deref()),
        Commands::Info => commands::info::run(),
    }
}
