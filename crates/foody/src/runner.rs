//! Sequential execution of the scenario catalogue.
//!
//! The runner executes scenarios strictly one after another in canonical
//! order. The food handle produced by `create-food` lives in a local of the
//! run loop and is passed by reference to the scenarios that need it. When
//! create fails, those scenarios are recorded as skipped.

use std::collections::BTreeSet;
use std::time::Instant;

use tracing::{info, warn};

use crate::client::ApiClient;
use crate::config::SuiteConfig;
use crate::error::{SuiteError, SuiteResult};
use crate::models::FoodHandle;
use crate::report::{OutcomeStatus, ScenarioOutcome, SuiteReport};
use crate::scenario::{self, Scenario};
use crate::session::Session;

/// A scenario scheduled for execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedScenario {
    /// The scenario.
    pub scenario: Scenario,
    /// True if it was added only because a selected scenario depends on it.
    pub prerequisite: bool,
}

/// Runs a selection of scenarios against one session.
#[derive(Debug, Clone)]
pub struct SuiteRunner {
    config: SuiteConfig,
    selection: BTreeSet<Scenario>,
}

impl SuiteRunner {
    /// Creates a runner that executes the full catalogue.
    pub fn new(config: SuiteConfig) -> Self {
        Self {
            config,
            selection: BTreeSet::new(),
        }
    }

    /// Restricts the run to the given scenarios. An empty selection runs all.
    pub fn with_selection(mut self, scenarios: impl IntoIterator<Item = Scenario>) -> Self {
        self.selection = scenarios.into_iter().collect();
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Returns the execution plan: canonical order, no duplicates, with
    /// `create-food` added when a selected scenario needs its food.
    pub fn plan(&self) -> Vec<PlannedScenario> {
        if self.selection.is_empty() {
            return Scenario::ALL
                .into_iter()
                .map(|scenario| PlannedScenario {
                    scenario,
                    prerequisite: false,
                })
                .collect();
        }

        let mut scenarios = self.selection.clone();
        let needs_create = scenarios.iter().any(|s| s.requires_food());
        let create_added = needs_create && scenarios.insert(Scenario::CreateFood);

        scenarios
            .into_iter()
            .map(|scenario| PlannedScenario {
                scenario,
                prerequisite: create_added && scenario == Scenario::CreateFood,
            })
            .collect()
    }

    /// Authenticates, runs the plan and closes the session.
    ///
    /// Fails only when the session cannot be established; scenario failures
    /// are recorded in the returned report.
    pub async fn run(&self) -> SuiteResult<SuiteReport> {
        let session = Session::bootstrap(&self.config).await?;
        let report = self.run_with_session(&session).await;
        session.close();
        Ok(report)
    }

    /// Runs the plan over an existing session.
    pub async fn run_with_session(&self, session: &Session) -> SuiteReport {
        let client = session.client();
        let mut report = SuiteReport::new();
        let mut food: Option<FoodHandle> = None;

        for planned in self.plan() {
            let started = Instant::now();
            let result = self.execute(planned.scenario, client, food.as_ref()).await;

            let status = match result {
                Ok(Some(handle)) => {
                    food = Some(handle);
                    OutcomeStatus::Passed
                }
                Ok(None) => OutcomeStatus::Passed,
                Err(SuiteError::MissingFoodHandle { reason }) => OutcomeStatus::Skipped(reason),
                Err(e) => OutcomeStatus::Failed(e.to_string()),
            };

            let elapsed = started.elapsed();
            match &status {
                OutcomeStatus::Passed => {
                    info!(scenario = %planned.scenario, elapsed_ms = elapsed.as_millis() as u64, "Scenario passed")
                }
                OutcomeStatus::Failed(message) => {
                    warn!(scenario = %planned.scenario, error = %message, "Scenario failed")
                }
                OutcomeStatus::Skipped(reason) => {
                    warn!(scenario = %planned.scenario, reason = %reason, "Scenario skipped")
                }
            }

            report.push(ScenarioOutcome {
                scenario: planned.scenario,
                status,
                elapsed,
                prerequisite: planned.prerequisite,
            });
        }

        info!(
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "Suite finished"
        );

        report
    }

    /// Executes one scenario. Returns the food handle when one was created.
    async fn execute(
        &self,
        which: Scenario,
        client: &ApiClient,
        food: Option<&FoodHandle>,
    ) -> SuiteResult<Option<FoodHandle>> {
        let missing_id = self.config.missing_food_id.as_str();

        match which {
            Scenario::CreateFood => scenario::create_food(client).await.map(Some),
            Scenario::EditFoodTitle => {
                scenario::edit_food_title(client, require_food(food)?).await?;
                Ok(None)
            }
            Scenario::GetAllFoods => {
                let count = scenario::get_all_foods(client).await?;
                info!(count, "Listed foods");
                Ok(None)
            }
            Scenario::DeleteFood => {
                scenario::delete_food(client, require_food(food)?).await?;
                Ok(None)
            }
            Scenario::CreateFoodWithoutRequiredFields => {
                scenario::create_food_without_required_fields(client).await?;
                Ok(None)
            }
            Scenario::EditNonExistingFood => {
                scenario::edit_non_existing_food(client, missing_id).await?;
                Ok(None)
            }
            Scenario::DeleteNonExistingFood => {
                scenario::delete_non_existing_food(client, missing_id).await?;
                Ok(None)
            }
        }
    }
}

fn require_food(food: Option<&FoodHandle>) -> SuiteResult<&FoodHandle> {
    food.ok_or_else(|| SuiteError::MissingFoodHandle {
        reason: format!("{} did not produce a food id", Scenario::CreateFood),
    })
}
