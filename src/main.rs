use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rasterlab::assets::{AssetLoader, ConfigSource};
use rasterlab::error::AppError;
use rasterlab::imaging::{read_png, write_png};
use rasterlab::models::AppConfig;
use rasterlab::services::{Operation, OperationRunner};
use raster_engine::EngineError;

#[derive(Parser)]
#[command(name = "rasterlab")]
#[command(about = "Rasterlab - binarized image analysis and domino pip counting")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply one operation to a PNG and write the result
    Apply {
        /// Operation name (see `rasterlab ops`)
        operation: String,

        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Output PNG file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Count the pips on a domino tile image
    Domino {
        /// Input PNG file
        #[arg(short, long)]
        input: PathBuf,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// List available operations
    Ops,
    /// Extract the embedded config.yaml for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rasterlab=info,raster_engine=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Apply {
            operation,
            input,
            output,
        }) => run_apply_command(&operation, &input, &output),
        Some(Commands::Domino { input, json }) => run_domino_command(&input, json),
        Some(Commands::Ops) => {
            run_ops_command();
            Ok(())
        }
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => run_status_command(),
    }
}

/// Load config from CONFIG_FILE (seeding it if missing) or the embedded default
fn load_runner() -> anyhow::Result<OperationRunner> {
    let loader = AssetLoader::from_env();
    if let Err(e) = loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config file");
    }
    let config = AppConfig::load_from_assets(&loader);
    let settings = config.validate().map_err(AppError::from)?;
    Ok(OperationRunner::new(settings))
}

/// Apply one operation to a PNG file
fn run_apply_command(
    operation: &str,
    input: &PathBuf,
    output: &PathBuf,
) -> anyhow::Result<()> {
    let op: Operation = operation.parse()?;
    let runner = load_runner()?;
    let image = read_png(input)?;

    let result = match runner.apply(op, &image) {
        Ok(result) => result,
        Err(AppError::Engine(EngineError::ConvergenceExceeded { passes, partial })) => {
            tracing::warn!(passes, "Thinning hit the pass cap, writing partial skeleton");
            partial
        }
        Err(e) => return Err(e.into()),
    };

    write_png(output, &result)?;
    println!(
        "{op}: {} -> {} ({}x{})",
        input.display(),
        output.display(),
        result.width(),
        result.height()
    );
    Ok(())
}

/// Count domino pips on a PNG file
fn run_domino_command(input: &PathBuf, json: bool) -> anyhow::Result<()> {
    let runner = load_runner()?;
    let image = read_png(input)?;
    let result = runner.count_pips(&image)?;

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        println!("Top:    {}", result.top_pips);
        println!("Bottom: {}", result.bottom_pips);
        println!("Total:  {}", result.total());
    }
    Ok(())
}

fn run_ops_command() {
    println!("Operations:\n");
    for op in Operation::ALL {
        println!("  {:<12} {}", op.name(), op.summary());
    }
    println!("\nDomino pip counting has its own command: rasterlab domino");
}

/// Extract the embedded config to the filesystem
fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::from_env();
    let report = loader.init(force)?;

    for f in &report.written {
        println!("  + {f}");
    }
    if !report.skipped.is_empty() {
        println!("Skipped existing files (use --force to overwrite):");
        for f in &report.skipped {
            println!("  - {f}");
        }
    }
    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and effective configuration
fn run_status_command() -> anyhow::Result<()> {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    println!("Rasterlab v{VERSION}");
    println!("Binarized image analysis and domino pip counting\n");

    let loader = AssetLoader::from_env();
    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE = {}",
        loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );

    let source = match loader.config_source() {
        ConfigSource::Embedded => "embedded".to_string(),
        ConfigSource::File(path) => path.display().to_string(),
        ConfigSource::MissingFile(_) => "embedded (file not found)".to_string(),
    };
    println!("\nConfig:  {source}");

    let config = AppConfig::load_from_assets(&loader);
    print!("{}", serde_yaml::to_string(&config)?);
    if let Err(e) = config.validate() {
        println!("\nWarning: {e}");
    }

    println!("\nCommands:");
    println!("  rasterlab apply    Apply an operation to a PNG file");
    println!("  rasterlab domino   Count pips on a domino tile");
    println!("  rasterlab ops      List operations");
    println!("  rasterlab init     Extract embedded config.yaml");
    println!("\nRun 'rasterlab --help' for more details.");
    Ok(())
}
