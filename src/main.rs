use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

use stargazer_extract::compare::{compare_catalogs, DEFAULT_TOLERANCE};
use stargazer_extract::constants::{TILE_COLUMNS, TILE_ROWS};
use stargazer_extract::logging;
use stargazer_extract::pipeline::{read_chart, tile_stats};
use stargazer_extract::storage::load_catalog;
use stargazer_extract::{Config, Pipeline};

#[derive(Parser)]
#[command(name = "stargazer_extract")]
#[command(about = "Extracts the named-star catalog from the Stargazer SVG chart")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the catalog and write compact and pretty JSON
    Extract {
        /// Chart SVG to scan (default: data/stars.svg)
        #[arg(long)]
        input: Option<PathBuf>,
        /// Compact catalog path (default: data/stars.json)
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty catalog path (default: data/stars_pretty.json)
        #[arg(long)]
        pretty_output: Option<PathBuf>,
        /// Config file (default: stargazer.toml if present)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show how many stars fall in each chart tile
    Stats {
        #[arg(long)]
        input: Option<PathBuf>,
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Check that two catalog files agree
    Compare {
        left: PathBuf,
        right: PathBuf,
        /// Allowed RA/Dec difference
        #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
        tolerance: f64,
    },
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            input,
            output,
            pretty_output,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            let input = input.unwrap_or(config.paths.input.clone());
            let output = output.unwrap_or(config.paths.compact_output.clone());
            let pretty_output = pretty_output.unwrap_or(config.paths.pretty_output.clone());
            let settings = config.extraction_settings();

            println!("🔭 Scanning {} for star names...", input.display());
            let result = Pipeline::run(&input, &output, &pretty_output, &settings)
                .inspect_err(|e| error!("Extraction failed: {}", e))?;

            println!("✅ Extracted {} stars", result.total_stars);
            println!("💾 Saved {} stars to {}", result.total_stars, result.compact.path.display());
            println!("💾 Saved to {}", result.pretty.path.display());
        }
        Commands::Stats { input, config } => {
            let config = Config::load(config.as_deref())?;
            let input = input.unwrap_or(config.paths.input.clone());
            let text = read_chart(&input)?;
            let stats = tile_stats(&text, &config.extraction_settings());
            info!("Counted {} stars across {} tiles", stats.total, stats.per_tile.len());

            println!("Stars per tile ({} rows x {} cols):", TILE_ROWS, TILE_COLUMNS);
            for row in 0..TILE_ROWS {
                for col in 0..TILE_COLUMNS {
                    let tile = row * TILE_COLUMNS + col;
                    println!(
                        "  Tile {:2} (row {}, col {}): {:3} stars",
                        tile,
                        row,
                        col,
                        stats.count(row, col)
                    );
                }
            }
            println!("Total: {}", stats.total);
        }
        Commands::Compare {
            left,
            right,
            tolerance,
        } => {
            let left_catalog = load_catalog(&left)
                .with_context(|| format!("loading {}", left.display()))?;
            let right_catalog = load_catalog(&right)
                .with_context(|| format!("loading {}", right.display()))?;

            let mismatches = compare_catalogs(&left_catalog, &right_catalog, tolerance);
            if !mismatches.is_empty() {
                println!("❌ Catalogs disagree ({} differences):", mismatches.len());
                for mismatch in &mismatches {
                    println!("   - {}", mismatch);
                }
                bail!(
                    "{} and {} disagree",
                    left.display(),
                    right.display()
                );
            }
            println!(
                "✅ Catalogs agree: {} stars (tolerance {})",
                left_catalog.len(),
                tolerance
            );
        }
    }
    Ok(())
}
