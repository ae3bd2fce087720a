use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tint::assets::AssetLoader;
use tint::models::AppConfig;
use tint::{Filter, TintRegistry};

#[derive(Parser)]
#[command(name = "tint")]
#[command(about = "Normalize free-form color names and hex codes")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match free text against the registered color names
    Match {
        /// Color name as typed by a user (e.g. "Weiß", "light pearl")
        text: String,
    },
    /// Find the registered color name closest to a hex code
    Find {
        /// Hex code, with or without '#' (e.g. "#eae0c8")
        hex: String,

        /// Color system to search (e.g. "en", "de", "ral")
        #[arg(short, long, default_value = "en")]
        system: String,

        /// Only consider these names (comma-separated)
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,
    },
    /// List registered color systems
    Systems,
    /// Extract embedded datasets and config to the filesystem for customization
    Init {
        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,
    },
}

#[derive(Serialize)]
struct SystemSummary<'a> {
    system: &'a str,
    colors: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Minimal logging for CLI
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tint=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let loader = AssetLoader::from_env();

    let registry = || -> anyhow::Result<TintRegistry> {
        let config = AppConfig::load_from_assets(&loader);
        Ok(TintRegistry::from_config(&config, &loader)?)
    };

    match cli.command {
        Commands::Match { text } => run_match_command(&registry()?, &text, cli.json),
        Commands::Find { hex, system, only } => {
            run_find_command(&registry()?, &hex, &system, &only, cli.json)
        }
        Commands::Systems => run_systems_command(&registry()?, cli.json),
        Commands::Init { force } => run_init_command(&loader, force),
    }
}

fn run_match_command(registry: &TintRegistry, text: &str, json: bool) -> anyhow::Result<()> {
    let result = registry.match_name(text)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("#{} (score {})", result.hex_code, result.score);
    }
    Ok(())
}

fn run_find_command(
    registry: &TintRegistry,
    hex: &str,
    system: &str,
    only: &[String],
    json: bool,
) -> anyhow::Result<()> {
    let filter = (!only.is_empty()).then(|| Filter::names(only));
    let result = registry.find_nearest(hex, Some(system), filter.as_ref())?;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} (distance {:.2})", result.color_name, result.distance);
    }
    Ok(())
}

fn run_systems_command(registry: &TintRegistry, json: bool) -> anyhow::Result<()> {
    let summaries: Vec<SystemSummary> = registry
        .systems()
        .into_iter()
        .map(|system| SystemSummary {
            system,
            colors: registry.system_len(system).unwrap_or(0),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        for summary in &summaries {
            println!("  {:<8} {} colors", summary.system, summary.colors);
        }
    }
    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(loader: &AssetLoader, force: bool) -> anyhow::Result<()> {
    let report = loader.init(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}
