//! Per-scenario outcomes and the run summary.

use std::fmt::Write as _;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::scenario::Scenario;

/// Result of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Every assertion held.
    Passed,
    /// An assertion or the HTTP exchange failed.
    Failed(String),
    /// The scenario could not run because a prerequisite failed.
    Skipped(String),
}

impl OutcomeStatus {
    fn label(&self) -> &'static str {
        match self {
            OutcomeStatus::Passed => "PASS",
            OutcomeStatus::Failed(_) => "FAIL",
            OutcomeStatus::Skipped(_) => "SKIP",
        }
    }
}

/// What happened to one scenario of the plan.
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    /// The scenario.
    pub scenario: Scenario,
    /// Its result.
    pub status: OutcomeStatus,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// True if it ran only because a selected scenario depends on it.
    pub prerequisite: bool,
}

impl ScenarioOutcome {
    /// Returns true if the scenario passed.
    pub fn passed(&self) -> bool {
        self.status == OutcomeStatus::Passed
    }
}

/// Outcomes of a whole run, in execution order.
#[derive(Debug, Clone)]
pub struct SuiteReport {
    started_at: DateTime<Utc>,
    outcomes: Vec<ScenarioOutcome>,
}

impl Default for SuiteReport {
    fn default() -> Self {
        Self::new()
    }
}

impl SuiteReport {
    /// Creates an empty report stamped with the current time.
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            outcomes: Vec::new(),
        }
    }

    /// Records an outcome.
    pub fn push(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    /// Returns when the run started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Returns every outcome in execution order.
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    /// Returns the outcome of a scenario, if it ran.
    pub fn outcome(&self, scenario: Scenario) -> Option<&ScenarioOutcome> {
        self.outcomes.iter().find(|o| o.scenario == scenario)
    }

    /// Number of passed scenarios.
    pub fn passed(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Passed))
    }

    /// Number of failed scenarios.
    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Failed(_)))
    }

    /// Number of skipped scenarios.
    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, OutcomeStatus::Skipped(_)))
    }

    /// Returns true when every scenario passed.
    pub fn success(&self) -> bool {
        self.outcomes.iter().all(ScenarioOutcome::passed)
    }

    /// Total time spent in scenarios.
    pub fn elapsed(&self) -> Duration {
        self.outcomes.iter().map(|o| o.elapsed).sum()
    }

    /// Renders one line per scenario followed by a summary line.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for outcome in &self.outcomes {
            let _ = write!(
                out,
                "{} {}. {} ({} ms)",
                outcome.status.label(),
                outcome.scenario.order(),
                outcome.scenario,
                outcome.elapsed.as_millis()
            );
            if outcome.prerequisite {
                out.push_str(" [prerequisite]");
            }
            match &outcome.status {
                OutcomeStatus::Passed => {}
                OutcomeStatus::Failed(message) | OutcomeStatus::Skipped(message) => {
                    let _ = write!(out, "\n    {}", message);
                }
            }
            out.push('\n');
        }

        let _ = write!(
            out,
            "{} passed, {} failed, {} skipped ({} ms, started {})",
            self.passed(),
            self.failed(),
            self.skipped(),
            self.elapsed().as_millis(),
            self.started_at.to_rfc3339()
        );

        out
    }

    fn count(&self, predicate: impl Fn(&OutcomeStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }
}
