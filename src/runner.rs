use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};

use crate::{
    client::LibraryClient,
    contract::{Outcome, Scenario},
    error::Error,
    fixture::Fixture,
};

/// Where a failing scenario broke down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Failure {
    /// Seeding the fixture failed; the scenario's request was never sent.
    Setup,
    /// The request was sent and the answer broke the contract, or never came.
    Contract,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResult {
    pub scenario:   Scenario,
    pub expected:   u16,
    pub actual:     Option<u16>,
    pub outcome:    Option<Outcome>,
    pub failure:    Option<Failure>,
    pub error:      Option<String>,
    pub elapsed_ms: u128,
}

impl ScenarioResult {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub base_url: String,
    pub run_tag:  String,
    pub started:  DateTime<Utc>,
    pub finished: DateTime<Utc>,
    pub results:  Vec<ScenarioResult>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    pub fn setup_failures(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.failure == Some(Failure::Setup))
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} passed, {} failed ({} in setup) in {}ms",
            self.passed(),
            self.failed(),
            self.setup_failures(),
            (self.finished - self.started).num_milliseconds()
        )
    }
}

/// Run each scenario against its own freshly seeded fixture, in order.
pub async fn run(client: &LibraryClient, run_tag: &str, scenarios: &[Scenario]) -> Report {
    let started = Utc::now();
    let mut results = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        results.push(run_one(client, run_tag, *scenario).await);
    }
    let report = Report {
        base_url: client.base_url().to_string(),
        run_tag: run_tag.to_string(),
        started,
        finished: Utc::now(),
        results,
    };
    info!(summary = %report.summary(), "contract run finished");
    report
}

pub async fn run_one(
    client: &LibraryClient,
    run_tag: &str,
    scenario: Scenario,
) -> ScenarioResult {
    let start = Instant::now();
    let mut result = ScenarioResult {
        scenario,
        expected: scenario.expected_status().as_u16(),
        actual: None,
        outcome: None,
        failure: None,
        error: None,
        elapsed_ms: 0,
    };

    let outcome = match Fixture::setup(client.clone(), run_tag).await {
        Ok(fixture) => scenario.verify(&fixture).await,
        Err(e) => Err(e),
    };
    match outcome {
        Ok(response) => {
            result.actual = Some(response.status.as_u16());
            result.outcome = Some(Outcome::classify(response.status));
        }
        Err(e) => {
            match &e {
                Error::UnexpectedStatus { actual, .. } => {
                    result.actual = Some(actual.as_u16());
                    result.outcome = Some(Outcome::classify(*actual));
                }
                // The status matched; only the body broke the contract.
                Error::UnexpectedBody { .. } | Error::Decode { .. } => {
                    result.actual = Some(result.expected);
                    result.outcome = Some(scenario.expected_outcome());
                }
                _ => (),
            }
            result.failure = Some(if e.is_setup() {
                Failure::Setup
            } else {
                Failure::Contract
            });
            warn!(scenario = scenario.name(), error = %e, "scenario failed");
            result.error = Some(e.to_string());
        }
    }
    result.elapsed_ms = start.elapsed().as_millis();
    result
}
