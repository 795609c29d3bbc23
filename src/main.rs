//! pricescout CLI
//!
//! Single entry point: `run` (the default) executes the whole pipeline,
//! `validate` checks the config and input file without touching any site.
//! Exit code is non-zero only for configuration or report-write failures;
//! individual site failures are logged and skipped.

use clap::{Parser, Subcommand};
use pricescout::{
    config::load_specs,
    error::Result,
    models::Config,
    notify::{Notifier, SmtpNotifier},
    pipeline,
    services::build_sources,
    utils::http,
};

/// pricescout - price research across e-commerce sites
#[derive(Parser, Debug)]
#[command(
    name = "pricescout",
    version,
    about = "Searches e-commerce sites for products within a price range"
)]
struct Cli {
    /// Path to the application config file
    #[arg(short, long, default_value = "data/config.toml")]
    config: String,

    /// Path to the search specs CSV (overrides the config)
    #[arg(short, long)]
    input: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch, filter, write the report and email it (default)
    Run,

    /// Validate the config and input file without querying any site
    Validate,
}

/// Initialize logging from the verbosity flag and the configured level.
fn init_logging(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load before init_logging so the configured level applies; the
    // fallback is logged afterwards, once a logger exists.
    let (mut config, load_error) = match Config::load(&cli.config) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };
    if let Some(input) = cli.input {
        config.paths.input_file = input;
    }
    init_logging(cli.verbose, &config.logging.level);

    if let Some(error) = load_error {
        log::warn!(
            "Config load failed from {}: {}. Using defaults.",
            cli.config,
            error
        );
    }
    log::info!("pricescout starting...");

    match cli.command.unwrap_or(Command::Run) {
        Command::Run => {
            config.validate()?;
            let specs = load_specs(&config.paths.input_file)?;
            log::info!(
                "Loaded {} search specs from {}",
                specs.len(),
                config.paths.input_file
            );

            let client = http::create_client(&config.fetcher)?;
            let sources = build_sources(&config, &client);

            let notifier = if config.email.enabled {
                Some(SmtpNotifier::from_env(config.email.clone())?)
            } else {
                log::warn!("Email dispatch disabled; results stay on disk only");
                None
            };

            let summary = pipeline::run(
                &config,
                &specs,
                &sources,
                notifier.as_ref().map(|n| n as &dyn Notifier),
            )
            .await?;

            log::info!(
                "Done! {} results written to {}",
                summary.stats.accepted,
                summary.report_path.display()
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK ({} sites enabled)", config.enabled_sites().len());

            let specs = load_specs(&config.paths.input_file)?;
            log::info!(
                "✓ Input OK ({} search specs in {})",
                specs.len(),
                config.paths.input_file
            );

            log::info!("All validations passed!");
        }
    }

    Ok(())
}
