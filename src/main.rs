//! @ai:module:intent CLI for survey generation and dashboard reporting
//! @ai:module:layer presentation

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use survey_dashboard::{
    config::{SurveyConfig, DEFAULT_CONFIG_FILE},
    dataset::{DatasetLoader, DatasetLoaderTrait},
    generator::{rng_from_seed, SurveyGenerator, SurveyGeneratorTrait},
    report::ReportGenerator,
    stats::{StatsAggregator, StatsAggregatorTrait},
    SurveyError,
};

#[derive(Parser)]
#[command(name = "survey-dashboard")]
#[command(about = "Synthetic hospitality survey generator and dashboard reporter")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic survey files
    Generate {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of surveys to generate
        #[arg(short = 'n', long)]
        count: Option<u32>,

        /// Output directory for survey files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build the HTML dashboard from survey files
    Report {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory containing survey JSON files
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output HTML file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("survey_dashboard=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            count,
            output,
            seed,
        } => generate_surveys(config, count, output, seed),
        Commands::Report {
            config,
            input,
            output,
        } => generate_dashboard(config, input, output),
        Commands::Init { output } => init_config(output),
    }
}

/// @ai:intent Generate survey files
/// @ai:effects random, fs:write
fn generate_surveys(
    config_path: Option<PathBuf>,
    count: Option<u32>,
    output: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let mut config = load_or_default_config(config_path)?.generator;

    if let Some(count) = count {
        config.file_count = count;
    }
    if let Some(output) = output {
        config.output_dir = output;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    println!(
        "Erstelle {} simulierte Umfragen im Ordner '{}'...",
        config.file_count,
        config.output_dir.display()
    );

    let generator = SurveyGenerator::from_config(&config)?;
    let mut rng = rng_from_seed(config.seed);
    let records = generator.generate(config.file_count, &mut rng);
    generator.write_all(&records, &config.output_dir)?;

    println!("Fertig! Die Daten wurden generiert.");
    Ok(())
}

/// @ai:intent Load surveys, aggregate and write the dashboard
/// @ai:effects fs:read, fs:write
fn generate_dashboard(
    config_path: Option<PathBuf>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_or_default_config(config_path)?.report;

    if let Some(input) = input {
        config.input_dir = input;
    }
    if let Some(output) = output {
        config.output_file = output;
    }

    let dataset = match DatasetLoader::new().load(&config.input_dir) {
        Ok(dataset) => dataset,
        Err(SurveyError::MissingDirectory(dir)) => {
            println!("Fehler: Ordner '{}' fehlt.", dir.display());
            return Ok(());
        }
        Err(SurveyError::NoData(_)) => {
            println!("Keine Daten gefunden.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let stats = StatsAggregator::new().aggregate(&dataset);
    ReportGenerator::new().generate(&stats, &config.output_file)?;

    println!(
        "Erfolg! Optimiertes Dashboard erstellt: {}",
        config.output_file.display()
    );
    Ok(())
}

/// @ai:intent Write default configuration
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = SurveyConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration from file or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<SurveyConfig> {
    match path {
        Some(p) => SurveyConfig::load(&p),
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);

            if default_path.exists() {
                SurveyConfig::load(&default_path)
            } else {
                Ok(SurveyConfig::default())
            }
        }
    }
}
