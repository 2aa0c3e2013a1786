//! Scenario and step bookkeeping.
//!
//! A scenario is a named sequence of steps with tags (`smoke`, ...) used
//! by the runner to select subsets. Steps are plain futures wrapped by
//! [`step`], which logs the outcome and attributes a failure to the step
//! that raised it.

use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{error, info};

use crate::result::ComprarResult;

/// A test scenario: a named, tagged sequence of steps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario name
    pub name: String,
    /// Selection tags (e.g. `smoke`)
    pub tags: Vec<String>,
}

impl Scenario {
    /// Create a new scenario
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: Vec::new(),
        }
    }

    /// Add a selection tag
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Check whether the scenario carries a tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Filter scenarios down to those carrying the given tag
#[must_use]
pub fn filter_by_tag<'a>(scenarios: &'a [Scenario], tag: &str) -> Vec<&'a Scenario> {
    scenarios.iter().filter(|s| s.has_tag(tag)).collect()
}

/// Run one step of a scenario.
///
/// Logs the step on success; on failure, logs and returns the error so the
/// scenario aborts at the failing step (there is no recovery or retry).
pub async fn step<T, F>(name: &str, fut: F) -> ComprarResult<T>
where
    F: Future<Output = ComprarResult<T>>,
{
    let started = Instant::now();
    match fut.await {
        Ok(value) => {
            info!(step = name, elapsed_ms = started.elapsed().as_millis() as u64, "step passed");
            Ok(value)
        }
        Err(err) => {
            error!(step = name, %err, "step failed");
            Err(err)
        }
    }
}

/// Result of running a single step
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepResult {
    /// Step name
    pub name: String,
    /// Whether the step passed
    pub passed: bool,
    /// Error message if failed
    pub error: Option<String>,
    /// Step duration
    pub duration: Duration,
}

impl StepResult {
    /// Create a passing step result
    #[must_use]
    pub fn pass(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: true,
            error: None,
            duration: Duration::ZERO,
        }
    }

    /// Create a failing step result
    #[must_use]
    pub fn fail(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            error: Some(error.into()),
            duration: Duration::ZERO,
        }
    }

    /// Set duration
    #[must_use]
    pub const fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Aggregated outcome of one scenario run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Scenario name
    pub scenario: String,
    /// Individual step results, in execution order
    pub steps: Vec<StepResult>,
}

impl ScenarioReport {
    /// Create an empty report for a scenario
    #[must_use]
    pub fn new(scenario: impl Into<String>) -> Self {
        Self {
            scenario: scenario.into(),
            steps: Vec::new(),
        }
    }

    /// Record a step result
    pub fn record(&mut self, result: StepResult) {
        self.steps.push(result);
    }

    /// Check if every step passed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.steps.iter().all(|s| s.passed)
    }

    /// Count passed steps
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.steps.iter().filter(|s| s.passed).count()
    }

    /// Count failed steps
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.steps.iter().filter(|s| !s.passed).count()
    }

    /// Total scenario duration (sum of step durations)
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.steps.iter().map(|s| s.duration).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::result::ComprarError;

    #[test]
    fn test_scenario_tags() {
        let scenario = Scenario::new("Add Makeup Product").with_tag("smoke");
        assert!(scenario.has_tag("smoke"));
        assert!(!scenario.has_tag("regression"));
    }

    #[test]
    fn test_filter_by_tag() {
        let scenarios = vec![
            Scenario::new("Add Makeup Product").with_tag("smoke"),
            Scenario::new("Full checkout").with_tag("regression"),
            Scenario::new("Login").with_tag("smoke").with_tag("regression"),
        ];
        let smoke = filter_by_tag(&scenarios, "smoke");
        assert_eq!(smoke.len(), 2);
        assert!(smoke.iter().all(|s| s.has_tag("smoke")));
    }

    #[tokio::test]
    async fn test_step_passes_through_value() {
        let value = step("compute", async { Ok::<_, ComprarError>(42) })
            .await
            .unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_step_propagates_error() {
        let err = step("boom", async {
            Err::<(), _>(ComprarError::assertion("expected X, got Y", 5000))
        })
        .await
        .unwrap_err();
        assert!(matches!(err, ComprarError::Assertion { .. }));
    }

    #[test]
    fn test_report_aggregation() {
        let mut report = ScenarioReport::new("Add Makeup Product");
        report.record(StepResult::pass("Login as Default Login").with_duration(Duration::from_millis(800)));
        report.record(StepResult::pass("Navigating to Makeup products page"));
        report.record(StepResult::fail("Adding product to cart", "element not found"));

        assert!(!report.all_passed());
        assert_eq!(report.passed_count(), 2);
        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.duration(), Duration::from_millis(800));
    }

    #[test]
    fn test_report_serializes() {
        let mut report = ScenarioReport::new("smoke");
        report.record(StepResult::pass("login"));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"passed\":true"));
    }
}
