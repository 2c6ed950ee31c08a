/*
cargo run --bin select_prompts

cargo run --bin select_prompts -- \
    --output-dir data/clickbait \
    --log-dir    data/clickbait/logs
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::PathBuf;

use fewshot_select::dataset::{clickbait_prompts, FEW_SHOT_INDICES};
use fewshot_select::{run, Outputs};

// Split the clickbait examples into few-shot picks and the rest
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    // Directory that receives both JSON files
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    // Directory for the run log
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging setup
    create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log dir {}", cli.log_dir.display()))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = cli.log_dir.join(format!("select_prompts_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    info!("Starting few-shot selection");
    info!("Few-shot indices: {:?}", FEW_SHOT_INDICES);

    create_dir_all(&cli.output_dir)
        .with_context(|| format!("Failed to create output dir {}", cli.output_dir.display()))?;
    let outputs = Outputs::in_dir(&cli.output_dir);

    let data = clickbait_prompts();
    info!("Loaded {} examples", data.len());

    run(&data, &FEW_SHOT_INDICES, &outputs).context("Few-shot selection failed")?;

    println!("Filtered original examples saved to: {}", outputs.remainder.display());
    println!("Selected few-shot examples saved to: {}", outputs.selected.display());

    info!("All done successfully.");
    Ok(())
}
