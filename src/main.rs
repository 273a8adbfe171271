use anyhow::{Context, Result};
use clap::Parser;
use recipe_importer::id_generator::{IdGenerator, SequentialIds, TimestampIds};
use recipe_importer::importer::{load_raw_text, RecipeImporter};
use recipe_importer::importer_config::ImporterConfig;
use recipe_importer::recipe_model::FormSnapshot;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Convert free-form recipe text into structured JSON
#[derive(Parser, Debug)]
#[command(name = "recipe-importer", version, about)]
struct Args {
    /// File with the raw recipe text; reads stdin when omitted
    file: Option<PathBuf>,

    /// Title already set in the form; suppresses title detection
    #[arg(long, default_value = "")]
    title: String,

    /// Description already set in the form; suppresses the generated description
    #[arg(long, default_value = "")]
    description: String,

    /// Cooking time already set in the form, in minutes
    #[arg(long)]
    cooking_time: Option<u32>,

    /// Use deterministic ids (`id-1`, `id-2`, ...) instead of timestamp ids
    #[arg(long)]
    sequential_ids: bool,

    /// Print compact JSON instead of pretty-printed JSON
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = ImporterConfig::from_env()?;
    init_logging(config.log_json);

    info!(file = ?args.file, "Starting recipe importer");

    let raw = match &args.file {
        Some(path) => load_raw_text(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read recipe text from stdin")?;
            buffer
        }
    };

    let snapshot = FormSnapshot {
        title: args.title,
        description: args.description,
        cooking_time_minutes: args.cooking_time,
    };

    let importer = RecipeImporter::with_config(config)?;
    let mut ids: Box<dyn IdGenerator> = if args.sequential_ids {
        Box::new(SequentialIds::default())
    } else {
        Box::new(TimestampIds::new())
    };
    let result = importer.convert_with_ids(&raw, &snapshot, ids.as_mut());

    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };
    println!("{json}");

    Ok(())
}

fn init_logging(json: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
