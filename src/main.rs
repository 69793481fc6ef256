// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use paper_distill::utils::logging::{format_error, format_success, init_logger};
use paper_distill::{Config, DocumentPipeline, OutputFormat, Validator};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "paper_distill")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Restructures academic-paper PDFs with described tables and equations", long_about = None)]
struct Cli {
    /// Input paper (pdf or txt)
    input: PathBuf,

    /// Output file; defaults to the configured name with the format's extension
    output: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Output format: html, markdown, or json (defaults to the configured format)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<String>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    info!("Paper Distill");

    if !cli.input.exists() {
        eprintln!(
            "{}",
            format_error(&format!("Input file '{}' not found", cli.input.display()))
        );
        std::process::exit(1);
    }

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    Validator::validate_input_path(&cli.input).context("Invalid input path")?;
    if let Err(e) = Validator::validate_supported_extension(&cli.input) {
        // Unknown extensions still get a best-effort run through the cascade
        warn!("{}", e);
    }

    let format_name = cli.format.as_deref().unwrap_or(&config.output.format);
    let format = OutputFormat::parse(format_name).context("Invalid output format")?;

    let output = cli.output.clone().unwrap_or_else(|| {
        PathBuf::from(format!(
            "{}.{}",
            config.output.default_output,
            format.extension()
        ))
    });

    let pipeline = DocumentPipeline::new(&config);
    let stats = pipeline
        .run(&cli.input, &output, format)
        .await
        .context("Processing failed")?;

    println!(
        "{}",
        format_success(&format!(
            "Processing complete: {} sections, {} substitutions -> {}",
            stats.sections_found,
            stats.substitutions(),
            output.display()
        ))
    );

    Ok(())
}
