//! Plan an evacuation route from the command line
//!
//! Reads a layout (file or compact string) and a policy table, then prints the
//! layout with the route drawn in.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use exitmatrix::config::{init_logging, Config, ConfigSource};
use exitmatrix::layout::{from_compact, load_text_file, to_compact, to_text};
use exitmatrix::render::format_path;
use exitmatrix::{plan_route, PolicyTable, Result, RouteResponse};
use tracing::error;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// One row per line
    Text,
    /// Rows joined with `|`
    Compact,
    /// Service response body
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "route", about = "Compute an evacuation route through a floor layout")]
struct Args {
    /// Layout file, one row per line
    #[arg(long, conflicts_with = "compact")]
    layout: Option<PathBuf>,

    /// Layout as a compact `|`-separated string
    #[arg(long)]
    compact: Option<String>,

    /// Policy table (.npy or .json); defaults to the configured path
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Configuration file; defaults to ./config.toml when present
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "text")]
    format: Format,

    /// Also print the visited positions
    #[arg(long)]
    show_path: bool,
}

fn main() {
    let args = Args::parse();

    let (config, source) = match &args.config {
        Some(path) => match Config::load_from(path) {
            Ok(config) => (config, ConfigSource::File(path.display().to_string())),
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(2);
            }
        },
        None => Config::locate(),
    };
    init_logging(&config.logging.filter);
    source.log();

    if let Err(e) = run(&args, &config) {
        error!("{}", e);
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args, config: &Config) -> Result<()> {
    let layout = match (&args.compact, &args.layout) {
        (Some(compact), _) => from_compact(compact),
        (None, Some(path)) => load_text_file(path)?,
        (None, None) => load_text_file(&config.layout.default_file)?,
    };

    let policy_path = args
        .policy
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.policy.path));
    let policy = PolicyTable::load(&policy_path)?;

    let outcome = plan_route(&layout, &policy)?;
    let rendered = outcome.layout();

    match args.format {
        Format::Text => print!("{}", to_text(&rendered)),
        Format::Compact => println!("{}", to_compact(&rendered)),
        Format::Json => {
            let response = RouteResponse::from(&outcome);
            let json = serde_json::to_string_pretty(&response)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            println!("{}", json);
        }
    }

    if args.show_path {
        println!("Path: {}", format_path(&outcome.path));
        if !outcome.reaches_exit() {
            println!("Warning: route ends on a hazard, not the exit");
        }
    }

    Ok(())
}
