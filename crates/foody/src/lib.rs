//! # foody - Food review API suite
//!
//! An ordered end-to-end check of the Food review REST service. The suite logs
//! in once, then exercises create, edit, list and delete, followed by three
//! negative checks against an id that does not exist.
//!
//! ## Scenarios
//!
//! | Order | Name | Needs the created food |
//! |-------|------|------------------------|
//! | 1 | `create-food` | |
//! | 2 | `edit-food-title` | yes |
//! | 3 | `get-all-foods` | |
//! | 4 | `delete-food` | yes |
//! | 5 | `create-food-without-required-fields` | |
//! | 6 | `edit-non-existing-food` | |
//! | 7 | `delete-non-existing-food` | |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use foody::{SuiteConfig, SuiteRunner};
//!
//! # async fn example() -> foody::SuiteResult<()> {
//! let report = SuiteRunner::new(SuiteConfig::from_env()?).run().await?;
//! println!("{}", report.render());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod assertions;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod paths;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod session;

pub use client::{ApiClient, ApiResponse};
pub use config::SuiteConfig;
pub use error::{AssertionFailure, SuiteError, SuiteResult};
pub use models::FoodHandle;
pub use report::{OutcomeStatus, ScenarioOutcome, SuiteReport};
pub use runner::{PlannedScenario, SuiteRunner};
pub use scenario::Scenario;
pub use session::Session;

/// Initializes logging with the specified level.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("foody={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
