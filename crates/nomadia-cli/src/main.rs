mod config;
mod links;

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nomadia_core::{
    bounding_box, export_text, synthesize, PreferenceSet, Route, TravelStyle, TripRequest,
};
use nomadia_store::{load_last_route, save_last_route};

use crate::config::CliConfig;
use crate::links::{share_text, viewer_url};

/// Fallback when the day-count input is not a number, matching the UI's
/// starting value.
const DEFAULT_DAY_COUNT: i32 = 5;

#[derive(Debug, Parser)]
#[command(name = "nomadia-cli")]
#[command(about = "Procedural travel-itinerary generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate a fresh route and save it as the last-route snapshot.
    Generate(GenerateArgs),
    /// Re-render the last saved route.
    Show,
    /// Write the last saved route to a text file.
    Export {
        /// Output directory for the `.txt` file (default: current dir).
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the share summary for the last saved route.
    Share,
    /// Print the map-viewer URL for the last saved route.
    Map,
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Trip length in days; non-numeric input falls back to 5, out-of-range
    /// values are clamped to [2, 30].
    #[arg(long, default_value = "5")]
    days: String,

    /// Free-text region (europe, asia, south america, ...); unknown text
    /// falls back to the Alps.
    #[arg(long, default_value = "")]
    region: String,

    /// Travel style: backpack, mixed, or public. Anything else means
    /// backpack.
    #[arg(long, default_value = "backpack")]
    style: String,

    #[arg(long, default_value_t = 80)]
    nature: u8,
    #[arg(long, default_value_t = 60)]
    culture: u8,
    #[arg(long, default_value_t = 50)]
    people: u8,
    #[arg(long, default_value_t = 50)]
    remote: u8,
    #[arg(long, default_value_t = 40)]
    challenge: u8,

    /// Skip writing the last-route snapshot.
    #[arg(long)]
    no_save: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = config::load_config();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration loaded");

    match cli.command {
        Commands::Generate(args) => run_generate(&config, args),
        Commands::Show => run_show(&config),
        Commands::Export { out } => run_export(&config, out),
        Commands::Share => run_share(&config),
        Commands::Map => run_map(&config),
    }
}

/// Coerce raw day-count input: non-numeric text falls back to the default;
/// range clamping is the generator's job.
fn coerce_day_count(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(DEFAULT_DAY_COUNT)
}

fn run_generate(config: &CliConfig, args: GenerateArgs) -> anyhow::Result<()> {
    let day_count = coerce_day_count(&args.days);
    let request = TripRequest {
        day_count,
        region_text: args.region,
        style: TravelStyle::from_input(&args.style),
        prefs: PreferenceSet::new(
            args.nature,
            args.culture,
            args.people,
            args.remote,
            args.challenge,
        ),
    };
    let route = synthesize(&request);

    print!("{}", export_text(&route));
    if let Some(bbox) = bounding_box(&route.points) {
        println!("Map: {}", viewer_url(&bbox));
    }

    if args.no_save {
        return Ok(());
    }
    let path = save_last_route(&config.data_dir, &route)
        .with_context(|| format!("failed to save route under {}", config.data_dir.display()))?;
    println!("Saved to {}", path.display());
    Ok(())
}

fn run_show(config: &CliConfig) -> anyhow::Result<()> {
    if let Some(route) = last_route(config) {
        print!("{}", export_text(&route));
    }
    Ok(())
}

fn run_export(config: &CliConfig, out: Option<PathBuf>) -> anyhow::Result<()> {
    let Some(route) = last_route(config) else {
        return Ok(());
    };
    let dir = out.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create export dir {}", dir.display()))?;
    let path = dir.join(format!("{}.txt", route.slug()));
    fs::write(&path, export_text(&route))
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Exported {}", path.display());
    Ok(())
}

fn run_share(config: &CliConfig) -> anyhow::Result<()> {
    if let Some(route) = last_route(config) {
        println!("{}", share_text(&route));
        println!("{}", config.page_url);
    }
    Ok(())
}

fn run_map(config: &CliConfig) -> anyhow::Result<()> {
    if let Some(route) = last_route(config) {
        match bounding_box(&route.points) {
            Some(bbox) => println!("{}", viewer_url(&bbox)),
            None => println!("Saved route has no points to map."),
        }
    }
    Ok(())
}

/// Load the last snapshot, printing a notice instead of failing when there
/// is none.
fn last_route(config: &CliConfig) -> Option<Route> {
    let snapshot = load_last_route(&config.data_dir);
    if snapshot.is_none() {
        println!("No saved route yet. Run `nomadia-cli generate` first.");
    }
    snapshot.map(|s| s.route)
}

#[cfg(test)]
mod tests {
    use super::coerce_day_count;

    #[test]
    fn day_count_parses_numbers_verbatim() {
        assert_eq!(coerce_day_count("2"), 2);
        assert_eq!(coerce_day_count(" 30 "), 30);
        assert_eq!(coerce_day_count("1000"), 1000);
    }

    #[test]
    fn day_count_non_numeric_falls_back_to_five() {
        assert_eq!(coerce_day_count("a week"), 5);
        assert_eq!(coerce_day_count(""), 5);
        assert_eq!(coerce_day_count("3.5"), 5);
    }
}
