//! Food review API suite runner.

use std::process::ExitCode;

use clap::Parser;
use foody::{Scenario, SuiteConfig, SuiteRunner, init_logging};
use tracing::error;

/// Ordered API checks for the Food review service.
#[derive(Debug, Parser)]
#[command(name = "foody", version, about)]
struct Cli {
    #[command(flatten)]
    config: SuiteConfig,

    /// Run only the named scenario (repeatable). Defaults to all.
    #[arg(long = "scenario", short = 's', value_enum)]
    scenarios: Vec<Scenario>,

    /// Print the scenario catalogue and exit.
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.list {
        for scenario in Scenario::ALL {
            println!("{}. {:<36} {}", scenario.order(), scenario.name(), scenario.summary());
        }
        return Ok(ExitCode::SUCCESS);
    }

    init_logging(&cli.config.log_level);

    let runner = SuiteRunner::new(cli.config).with_selection(cli.scenarios);
    match runner.run().await {
        Ok(report) => {
            println!("{}", report.render());
            if report.success() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::from(1))
            }
        }
        Err(e) => {
            error!(error = %e, fatal = e.is_fatal(), "Suite could not start");
            eprintln!("{}", e);
            Ok(ExitCode::from(2))
        }
    }
}
