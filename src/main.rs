use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use addon_devtools::models::{AppConfig, DEFAULT_CONFIG_FILE};
use addon_devtools::services::{self, MaskOptions};

#[derive(Parser)]
#[command(name = "addon-devtools")]
#[command(about = "Build helpers for game-addon projects")]
struct Cli {
    /// Config file (defaults to ./addon-devtools.yaml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert `--color-*: oklch(...)` declarations into a Lua color table
    Colors {
        /// Stylesheet with the color declarations
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Lua file to write
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Name of the generated Lua table
        #[arg(long)]
        table_name: Option<String>,
    },
    /// Generate numbered PNG alpha masks with transparent top/bottom bands
    Masks {
        /// Directory receiving the PNG files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Mask width and height in pixels
        #[arg(short, long)]
        size: Option<u32>,

        /// Number of masks to generate
        #[arg(short, long)]
        count: Option<u32>,
    },
    /// Fill `L["key"] = true` placeholders from other projects' locale files
    Locales {
        /// Locale directory of the addon to patch
        #[arg(short, long)]
        target: Option<PathBuf>,

        /// Locale directory to borrow translations from (repeatable, in priority order)
        #[arg(short, long = "source")]
        sources: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "addon_devtools=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::discover(Path::new(".")),
    };

    match cli.command {
        Some(Commands::Colors {
            input,
            output,
            table_name,
        }) => run_colors_command(&config, input, output, table_name),
        Some(Commands::Masks {
            output_dir,
            size,
            count,
        }) => run_masks_command(&config, output_dir, size, count),
        Some(Commands::Locales { target, sources }) => {
            run_locales_command(&config, target, sources)
        }
        None => {
            run_status_command(&config);
            Ok(())
        }
    }
}

/// Convert the stylesheet and print the summary
fn run_colors_command(
    config: &AppConfig,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    table_name: Option<String>,
) -> anyhow::Result<()> {
    let input = input.unwrap_or_else(|| config.colors.input.clone());
    let output = output.unwrap_or_else(|| config.colors.output.clone());
    let table_name = table_name.unwrap_or_else(|| config.colors.table_name.clone());

    let report = services::convert_file(&input, &output, &table_name)?;

    println!("Conversion complete! {} colors converted.", report.converted);
    println!("Output written to {}", report.output.display());
    Ok(())
}

/// Write the mask set
fn run_masks_command(
    config: &AppConfig,
    output_dir: Option<PathBuf>,
    size: Option<u32>,
    count: Option<u32>,
) -> anyhow::Result<()> {
    let options = MaskOptions {
        output_dir: output_dir.unwrap_or_else(|| config.masks.output_dir.clone()),
        size: size.unwrap_or(config.masks.size),
        count: count.unwrap_or(config.masks.count),
    };

    let written = services::generate_masks(&options)
        .with_context(|| format!("generating masks in {}", options.output_dir.display()))?;

    println!(
        "Generated {} masks ({}x{}) in {}",
        written.len(),
        options.size,
        options.size,
        options.output_dir.display()
    );
    Ok(())
}

/// Patch the target locale files
fn run_locales_command(
    config: &AppConfig,
    target: Option<PathBuf>,
    sources: Vec<PathBuf>,
) -> anyhow::Result<()> {
    let target = target.unwrap_or_else(|| config.locales.target.clone());
    let sources = if sources.is_empty() {
        config.locales.sources.clone()
    } else {
        sources
    };

    if sources.is_empty() {
        tracing::warn!("No source locale directories configured, only the target's own translations apply");
    }

    let report = services::sync_locales(&target, &sources)
        .with_context(|| format!("synchronizing locales in {}", target.display()))?;

    for (lang, patched) in &report.patched {
        println!("  {lang}: {patched} entries filled");
    }
    println!(
        "Locale sync complete! {} entries filled across {} files.",
        report.total(),
        report.patched.len()
    );
    Ok(())
}

/// Print version and effective configuration
fn run_status_command(config: &AppConfig) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("addon-devtools v{VERSION}");
    println!("Build helpers for game-addon projects\n");

    println!("Commands:");
    println!("  colors   Convert OKLCH color declarations into a Lua table");
    println!("  masks    Generate numbered minimap alpha masks");
    println!("  locales  Fill untranslated locale entries\n");

    println!("Configuration ({DEFAULT_CONFIG_FILE} or --config):");
    println!(
        "  colors.input      = {}",
        config.colors.input.display()
    );
    println!(
        "  colors.output     = {}",
        config.colors.output.display()
    );
    println!("  colors.table_name = {}", config.colors.table_name);
    println!(
        "  masks.output_dir  = {}",
        config.masks.output_dir.display()
    );
    println!("  masks.size        = {}", config.masks.size);
    println!("  masks.count       = {}", config.masks.count);
    println!(
        "  locales.target    = {}",
        config.locales.target.display()
    );
    if config.locales.sources.is_empty() {
        println!("  locales.sources   = (none)");
    } else {
        for source in &config.locales.sources {
            println!("  locales.sources   + {}", source.display());
        }
    }
}
