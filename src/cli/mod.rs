//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{Parser, Subcommand};

/// Parallel Cucumber test runner
#[derive(Parser, Debug)]
#[command(name = "parallel-cucumber")]
#[command(version = "0.1.0")]
#[command(about = "Run Cucumber features across parallel worker processes")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run features across worker processes and merge their summaries
    Run(RunArgs),

    /// Show discovered features and their group assignment
    List(ListArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Feature files or directories
    #[arg(default_value = "features")]
    pub paths: Vec<String>,

    /// Number of worker processes
    #[arg(short = 'n', long)]
    pub processes: Option<usize>,

    /// Options passed through to cucumber
    #[arg(short = 'o', long, allow_hyphen_values = true)]
    pub test_options: Option<String>,

    /// Grouping strategy (size, steps)
    #[arg(short, long)]
    pub group_by: Option<String>,

    /// Extra KEY=VALUE environment for workers (repeatable)
    #[arg(short, long)]
    pub env: Vec<String>,
}

/// Arguments for list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Feature files or directories
    #[arg(default_value = "features")]
    pub paths: Vec<String>,

    /// Number of groups to preview
    #[arg(short = 'n', long)]
    pub processes: Option<usize>,

    /// Grouping strategy (size, steps)
    #[arg(short, long)]
    pub group_by: Option<String>,
}
