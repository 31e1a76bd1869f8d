use clap::Parser;
use spendlog::application::{init_config, list_days, PlotService, SummarizeService};
use spendlog::cli::{format_days, format_summary, Cli, Commands};
use spendlog::domain::UndatedHeadingPolicy;
use spendlog::error::SpendlogError;
use spendlog::infrastructure::config::LOG_FILE_ENV;
use spendlog::infrastructure::{init_tracing, ChartRenderer, Config};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Config file (or defaults) with command-line overrides applied
fn load_config(cli: &Cli) -> Result<Config, SpendlogError> {
    let cwd = std::env::current_dir()?;
    let mut config = Config::discover_in(&cwd, cli.config.as_deref())?;

    if let Some(budget) = cli.budget {
        config.daily_budget = budget;
    }
    if let Some(policy) = &cli.undated {
        config.undated_heading =
            UndatedHeadingPolicy::from_str(policy).map_err(SpendlogError::Config)?;
    }
    config.log_file =
        config.resolve_log_file(cli.log.as_deref(), std::env::var(LOG_FILE_ENV).ok());
    config.validate()?;

    Ok(config)
}

fn run(cli: Cli) -> Result<(), SpendlogError> {
    match &cli.command {
        Commands::InitConfig { path } => {
            let written = init_config(path)?;
            println!("Wrote {}", written.display());
            Ok(())
        }
        Commands::Summary => {
            let config = load_config(&cli)?;
            let log = config.log_file.clone();
            let currency = config.currency.clone();

            let summary = SummarizeService::new(config).execute(&log)?;
            print!("{}", format_summary(&summary.report, &currency));
            if summary.report.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Days { items } => {
            let config = load_config(&cli)?;
            let listing = list_days(&config.log_file, config.undated_heading)?;
            print!("{}", format_days(&listing.days, *items, &config.currency));
            if listing.days.is_empty() {
                println!();
            }
            Ok(())
        }
        Commands::Plot { output } => {
            let config = load_config(&cli)?;
            let log = config.log_file.clone();

            let service =
                PlotService::new(SummarizeService::new(config), ChartRenderer::default());
            let summary = service.execute(&log, output)?;
            println!(
                "Plotted {} days to {}",
                summary.report.dates.len(),
                output.display()
            );
            Ok(())
        }
    }
}
