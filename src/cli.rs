// ABOUTME: Command-line interface definition using clap derive macros.
// ABOUTME: One-shot job flags: config path, dry run, repository preview, output mode.

use clap::Parser;
use harbor_job::config::DEFAULT_CONFIG_PATH;
use harbor_job::job::RunMode;
use harbor_job::output::OutputMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "harbor-job")]
#[command(about = "Delete old image tags from a Harbor registry, keeping the newest per repository")]
#[command(version)]
pub struct Cli {
    /// Configuration file (INI, or YAML with a .yml/.yaml extension)
    #[arg(short = 'f', long = "config", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Plan and log deletions without performing them
    #[arg(long)]
    pub dry_run: bool,

    /// Only show which repositories each rule matches
    #[arg(long)]
    pub mean_repo: bool,

    /// Log at debug level regardless of the configured level
    #[arg(short, long)]
    pub verbose: bool,

    /// Print only the final summary line
    #[arg(short, long, conflicts_with = "json")]
    pub quiet: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        RunMode::from_flags(self.dry_run, self.mean_repo)
    }

    pub fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else if self.quiet {
            OutputMode::Quiet
        } else {
            OutputMode::Normal
        }
    }
}
