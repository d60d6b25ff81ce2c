#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Interactive CLI for generating Tokyo crime map artifacts.
//!
//! Renders the choropleth + railway map for a `(year, category, rank)`
//! selection and writes the artifact JSON under `data/generated/`.
//! Selections not given as flags are prompted with `dialoguer` menus
//! speaking the dataset's own Japanese labels.

use std::path::{Path, PathBuf};

use clap::Parser;
use dialoguer::{Confirm, Select};
use tokyo_crime_map_analytics::RANK_MENU;
use tokyo_crime_map_crime_models::{CrimeCategory, DataYear};
use tokyo_crime_map_geography::cache::DatasetCache;
use tokyo_crime_map_render::{RenderError, pipeline};
use tokyo_crime_map_render_models::{MapArtifact, NO_DATA_NOTICE};

/// Dataset directory used when `TOKYO_CRIME_DATA_DIR` is unset.
const DEFAULT_DATA_DIR: &str = "data";

/// Directory artifacts are written into when `--out` is not given.
const OUTPUT_DIR: &str = "data/generated";

#[derive(Parser)]
#[command(name = "tokyo_crime_map_cli", about = "Tokyo crime map generator")]
struct Cli {
    /// Dataset year, e.g. "2023" (2019 through 2023)
    #[arg(long)]
    year: Option<DataYear>,
    /// Crime category as labeled in the dataset, e.g. "総合計"
    #[arg(long)]
    category: Option<CrimeCategory>,
    /// How many of the worst regions to fill (0 draws no choropleth)
    #[arg(long)]
    rank: Option<usize>,
    /// Output path for the artifact JSON.
    /// Defaults to `data/generated/map_{year}_{rank}.json`.
    #[arg(long)]
    out: Option<PathBuf>,
    /// Fail instead of prompting when a selection flag is missing
    #[arg(long)]
    non_interactive: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let data_dir = std::env::var("TOKYO_CRIME_DATA_DIR")
        .unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let datasets = DatasetCache::new(data_dir);

    if cli.non_interactive {
        let year = cli.year.ok_or("--year is required with --non-interactive")?;
        let category = cli
            .category
            .ok_or("--category is required with --non-interactive")?;
        let rank = cli.rank.ok_or("--rank is required with --non-interactive")?;
        return generate(&datasets, year, category, rank, cli.out.as_deref());
    }

    // A fully-flagged invocation renders once; anything less opens the menus.
    if let (Some(year), Some(category), Some(rank)) = (cli.year, cli.category, cli.rank) {
        return generate(&datasets, year, category, rank, cli.out.as_deref());
    }

    println!("Tokyo Crime Map");
    println!();

    loop {
        let year = cli.year.map_or_else(prompt_year, Ok)?;
        let category = cli.category.map_or_else(prompt_category, Ok)?;
        let rank = cli.rank.map_or_else(prompt_rank, Ok)?;

        // A failed render leaves the previously written artifact in place.
        if let Err(e) = generate(&datasets, year, category, rank, cli.out.as_deref()) {
            log::error!("Failed to generate map: {e}");
        }

        let again = Confirm::new()
            .with_prompt("Draw another map?")
            .default(true)
            .interact()?;
        if !again {
            break;
        }
    }

    Ok(())
}

/// Prompts for a dataset year, defaulting to the newest.
fn prompt_year() -> Result<DataYear, dialoguer::Error> {
    let years = DataYear::all();
    let labels: Vec<String> = years.iter().map(ToString::to_string).collect();

    let idx = Select::new()
        .with_prompt("Dataset year")
        .items(&labels)
        .default(labels.len() - 1)
        .interact()?;

    Ok(years[idx])
}

/// Prompts for a crime category in dataset column order.
fn prompt_category() -> Result<CrimeCategory, dialoguer::Error> {
    let categories = CrimeCategory::all();
    let labels: Vec<String> = categories.iter().map(ToString::to_string).collect();

    let idx = Select::new()
        .with_prompt("Crime category")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(categories[idx])
}

/// Prompts for the worst-N cut from the fixed rank menu.
fn prompt_rank() -> Result<usize, dialoguer::Error> {
    let labels: Vec<String> = RANK_MENU.iter().map(ToString::to_string).collect();

    let idx = Select::new()
        .with_prompt("Worst regions to fill")
        .items(&labels)
        .default(2)
        .interact()?;

    Ok(RANK_MENU[idx])
}

/// Renders one selection and writes the artifact JSON.
///
/// A category with no reported cases prints the dataset's notice and
/// writes a base-only artifact, so the output always reflects the last
/// selection that produced one.
fn generate(
    datasets: &DatasetCache,
    year: DataYear,
    category: CrimeCategory,
    rank: usize,
    out: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let artifact = match pipeline::build_map(datasets, year, category, rank) {
        Ok(artifact) => artifact,
        Err(RenderError::NoData { category }) => {
            log::info!("No {category} cases reported in {year}");
            println!("{NO_DATA_NOTICE}");
            MapArtifact::base_only()
        }
        Err(e) => return Err(e.into()),
    };

    let path = out.map_or_else(|| default_output_path(year, rank), Path::to_path_buf);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&path, serde_json::to_string_pretty(&artifact)?)?;

    if let Some(layer) = &artifact.choropleth {
        println!(
            "{}: {} regions filled, scale {:?}",
            layer.legend,
            layer.regions.len(),
            layer.threshold_scale
        );
    }
    println!("Railway lines drawn: {}", artifact.railways.len());
    println!("Artifact written to {}", path.display());

    Ok(())
}

/// The default artifact path for a selection.
fn default_output_path(year: DataYear, rank: usize) -> PathBuf {
    PathBuf::from(OUTPUT_DIR).join(format!("map_{year}_{rank}.json"))
}
