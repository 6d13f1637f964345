//! parallel-cucumber - Parallel Cucumber test runner
//!
//! A CLI tool that drives the cucumber executable across several worker
//! processes and merges their individually-printed summaries into one
//! coherent report.
//!
//! ## Features
//!
//! - Shell-safe per-worker command construction
//! - Balanced feature grouping by file size or Gherkin step count
//! - Automatic `--profile parallel` discovery from cucumber.yml
//! - Merged scenario/step counts and failing-scenario report
//!
//! ## Usage
//!
//! ```bash
//! # Run everything under features/ on 4 workers
//! parallel-cucumber run -n 4
//!
//! # Pass options through to cucumber
//! parallel-cucumber run -o "--tags @smoke" features
//!
//! # Balance groups by step count instead of file size
//! parallel-cucumber run --group-by steps
//!
//! # Preview the group assignment without running anything
//! parallel-cucumber list -n 4
//! ```

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing::{debug, error, info};

mod aggregate;
mod cli;
mod command;
mod config;
mod executor;
mod grouping;
mod models;
mod utils;

use aggregate::{summarize_results, LineClassifier};
use cli::Args;
use command::CommandBuilder;
use config::{AppConfig, EnvConfig};
use executor::ProcessExecutor;
use grouping::{FeatureGroup, GroupBy};
use models::RunOptions;
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let env_config = EnvConfig::load();

    let verbose = args.verbose || env_config.verbose.unwrap_or(false);
    let level = env_config
        .log_level
        .as_deref()
        .and_then(LogLevel::from_str)
        .unwrap_or(if verbose { LogLevel::Debug } else { LogLevel::Info });
    init_logger(level);

    match args.command {
        cli::Command::Run(run_args) => run_features(run_args, env_config).await,
        cli::Command::List(list_args) => list_features(list_args, env_config),
    }
}

async fn run_features(args: cli::RunArgs, env_config: EnvConfig) -> Result<()> {
    let config = AppConfig::load_default()?;

    let processes = args
        .processes
        .or(env_config.processes)
        .unwrap_or(config.processes);
    let test_options = args
        .test_options
        .or_else(|| env_config.test_options.clone())
        .or_else(|| config.test_options.clone());
    let group_by = resolve_group_by(args.group_by, &env_config, &config)?;

    let features = grouping::find_feature_files(&to_paths(&args.paths))?;
    if features.is_empty() {
        info!("No feature files found under {:?}", args.paths);
        return Ok(());
    }

    let strategy = group_by.strategy();
    let groups = grouping::in_even_groups(&features, processes, strategy.as_ref())?;

    info!(
        "Running {} features across {} processes (grouped by {})",
        features.len(),
        processes,
        group_by.as_str()
    );

    let mut options = RunOptions::new();
    if let Some(test_options) = test_options {
        options = options.with_test_options(test_options);
    }
    for pair in &args.env {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("Invalid --env value (expected KEY=VALUE): {pair}"))?;
        options = options.with_env(key, value);
    }

    let builder = CommandBuilder::new(std::env::current_dir()?);
    let options = builder.forward_color(&options);

    let commands: Vec<String> = groups
        .iter()
        .filter(|group| !group.files.is_empty())
        .map(|group| builder.build(&group.files, &options))
        .collect();

    let start = Instant::now();
    let outputs = executor::run_workers(&ProcessExecutor::new(), &commands, &options).await?;

    for output in &outputs {
        debug!("{output}");
        for line in &output.lines {
            println!("{line}");
        }
    }

    let classifier = LineClassifier::new();
    let result_lines: Vec<String> = outputs
        .iter()
        .flat_map(|output| output.lines.iter())
        .filter(|line| classifier.is_result_line(line))
        .cloned()
        .collect();

    let report = summarize_results(&result_lines);
    if !report.is_empty() {
        println!();
        println!("{report}");
    }

    let failed = outputs.iter().filter(|output| !output.success).count();
    info!(
        "Completed {} workers in {}ms",
        outputs.len(),
        start.elapsed().as_millis()
    );

    if failed > 0 {
        error!("{failed} of {} workers exited non-zero", outputs.len());
        std::process::exit(1);
    }

    Ok(())
}

fn list_features(args: cli::ListArgs, env_config: EnvConfig) -> Result<()> {
    let config = AppConfig::load_default()?;

    let processes = args
        .processes
        .or(env_config.processes)
        .unwrap_or(config.processes);
    let group_by = resolve_group_by(args.group_by, &env_config, &config)?;

    let features = grouping::find_feature_files(&to_paths(&args.paths))?;
    if features.is_empty() {
        println!("No feature files found under {:?}", args.paths);
        return Ok(());
    }

    let strategy = group_by.strategy();
    let groups = grouping::in_even_groups(&features, processes, strategy.as_ref())?;

    println!(
        "\n{} features in {} groups (by {})\n",
        features.len(),
        groups.len(),
        group_by.as_str()
    );

    for (index, group) in groups.iter().enumerate() {
        print_group(index, group);
    }

    Ok(())
}

fn print_group(index: usize, group: &FeatureGroup) {
    println!(
        "Group {} ({} files, weight {})",
        index + 1,
        group.files.len(),
        group.weight
    );
    println!("──────────────────────────────────────────────────");
    for file in &group.files {
        println!("  {}", file.display());
    }
    println!();
}

fn resolve_group_by(
    flag: Option<String>,
    env_config: &EnvConfig,
    config: &AppConfig,
) -> Result<GroupBy> {
    let name = flag
        .or_else(|| env_config.group_by.clone())
        .unwrap_or_else(|| config.group_by.clone());
    GroupBy::from_str(&name).ok_or_else(|| anyhow!("Unknown grouping strategy: {name}"))
}

fn to_paths(paths: &[String]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}
