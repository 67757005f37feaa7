//! TerraRisk CLI - environmental risk analysis from raster grids

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use terrarisk_algorithms::risk::{assess_risk, AssessmentParams, Connectivity, RegionParams};
use terrarisk_algorithms::terrain::SlopeFactorParams;
use terrarisk_core::io::read_grid;
use terrarisk_core::{Grid, SceneGrids};

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "terrarisk")]
#[command(author, version, about = "Environmental risk analysis from raster grids", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a full risk assessment over four input grids
    Analyze {
        /// Water index grid at the earlier acquisition
        #[arg(long)]
        old_water: PathBuf,
        /// Water index grid at the later acquisition
        #[arg(long)]
        new_water: PathBuf,
        /// Elevation grid in meters
        #[arg(long)]
        dem: PathBuf,
        /// Precipitation grid in millimeters
        #[arg(long)]
        rainfall: PathBuf,
        /// Latitude of the grid origin
        #[arg(long, default_value = "26.0")]
        lat: f64,
        /// Longitude of the grid origin
        #[arg(long, default_value = "92.0")]
        lon: f64,
        /// Ground distance per pixel in kilometers
        #[arg(long, default_value = "1.0")]
        km_per_pixel: f64,
        /// Ground distance between DEM cells in meters
        #[arg(long, default_value = "30.0")]
        cell_size: f64,
        /// Minimum region size in pixels
        #[arg(long, default_value = "3")]
        min_area: usize,
        /// Use edge-only adjacency when labeling regions
        #[arg(long)]
        rook: bool,
        /// Write the GeoJSON feature collection here (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the alert list here
        #[arg(short, long)]
        alerts: Option<PathBuf>,
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Show information about a grid file
    Info {
        /// Input grid file
        input: PathBuf,
    },
}

// ─── Main ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Analyze {
            old_water,
            new_water,
            dem,
            rainfall,
            lat,
            lon,
            km_per_pixel,
            cell_size,
            min_area,
            rook,
            output,
            alerts,
            pretty,
        } => {
            let start = Instant::now();

            let spinner = ProgressBar::new_spinner();
            spinner.set_style(ProgressStyle::default_spinner());
            spinner.set_message("reading input grids");

            let scene = SceneGrids::new(
                load_grid(&old_water)?,
                load_grid(&new_water)?,
                load_grid(&dem)?,
                load_grid(&rainfall)?,
            )?;
            let (rows, cols) = scene.shape();
            info!("loaded {}x{} scene", rows, cols);

            spinner.set_message("running risk assessment");
            let params = AssessmentParams {
                slope: SlopeFactorParams { cell_size },
                regions: RegionParams {
                    min_area,
                    connectivity: if rook {
                        Connectivity::Four
                    } else {
                        Connectivity::Eight
                    },
                },
                km_per_pixel,
                ..Default::default()
            };

            let assessment = assess_risk(&scene, lat, lon, Utc::now(), &params)?;
            spinner.finish_and_clear();

            info!(
                "found {} risk zones ({} HIGH, {} MEDIUM, {} LOW), {:.1} km² total, confidence {:.1}",
                assessment.summary.total_alerts,
                assessment.summary.high_risk_count,
                assessment.summary.medium_risk_count,
                assessment.summary.low_risk_count,
                assessment.summary.total_risk_area_km2,
                assessment.confidence,
            );

            write_json(&assessment.geojson, output.as_deref(), pretty)?;
            if let Some(path) = alerts.as_deref() {
                write_json(&assessment.alerts, Some(path), pretty)?;
                info!("wrote {} alerts to {}", assessment.alerts.len(), path.display());
            }

            info!("completed in {:.2?}", start.elapsed());
        }

        Commands::Info { input } => {
            let grid = load_grid(&input)?;
            let stats = grid.statistics();

            println!("file:   {}", input.display());
            println!("shape:  {} rows x {} cols", grid.rows(), grid.cols());
            println!("cells:  {} ({} valid)", grid.len(), stats.valid_count);
            if let (Some(min), Some(max), Some(mean)) = (stats.min, stats.max, stats.mean) {
                println!("min:    {min:.4}");
                println!("max:    {max:.4}");
                println!("mean:   {mean:.4}");
            }
        }
    }

    Ok(())
}

fn load_grid(path: &Path) -> Result<Grid<f64>> {
    read_grid(path).with_context(|| format!("reading grid {}", path.display()))
}

fn write_json<T: serde::Serialize>(value: &T, path: Option<&Path>, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    match path {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
