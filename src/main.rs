// ABOUTME: Entry point for the harbor-job CLI application.
// ABOUTME: Loads config, logs in to Harbor, runs the retention job and prints the summary.

mod cli;

use clap::Parser;
use cli::Cli;
use harbor_job::config::Config;
use harbor_job::error::{Error, Result};
use harbor_job::job::Job;
use harbor_job::logging;
use harbor_job::output::Output;
use harbor_job::registry::HarborClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let mut output = Output::new(cli.output_mode());

    if let Err(e) = run(cli, &mut output).await {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

async fn run(cli: Cli, output: &mut Output) -> Result<()> {
    output.start_timer();

    // Config errors are fatal before any network activity.
    let config = Config::load(&cli.config)?;
    let _log_guard = logging::init(&config.logging, cli.verbose)?;

    let mode = cli.run_mode();
    tracing::info!(
        config = %cli.config.display(),
        registry = %config.registry.url,
        rules = config.rules.len(),
        ?mode,
        "starting harbor-job {}",
        env!("CARGO_PKG_VERSION")
    );

    let client = HarborClient::new(&config.registry)?;
    client
        .login(&config.registry.user, &config.registry.password)
        .await
        .map_err(Error::Authentication)?;

    let summary = Job::new(config.job_options(mode))
        .run(&config.rules, &client)
        .await?;

    output.summary(&summary);
    tracing::info!("{}", summary.headline());
    Ok(())
}
