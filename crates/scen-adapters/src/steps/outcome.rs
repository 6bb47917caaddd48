//! Steps triviales: uno que siempre pasa y otro que siempre falla.

use serde::{Deserialize, Serialize};

use scen_core::{StepContexts, StepFailure, StepResult, TestStep};

#[derive(Debug, Clone, Copy, Default)]
pub struct PassStep;

impl TestStep for PassStep {
    fn execute(&mut self, _ctx: &StepContexts) -> StepResult {
        Ok(())
    }
}

fn default_failure_message() -> String {
    "A legitimate failure".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailParams {
    #[serde(default = "default_failure_message")]
    pub message: String,
}

/// Falla en `execute` como lo haría una aserción del autor del test.
#[derive(Debug, Clone)]
pub struct FailStep {
    message: String,
}

impl FailStep {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl Default for FailStep {
    fn default() -> Self {
        Self::new(default_failure_message())
    }
}

impl From<FailParams> for FailStep {
    fn from(params: FailParams) -> Self {
        Self::new(params.message)
    }
}

impl TestStep for FailStep {
    fn execute(&mut self, _ctx: &StepContexts) -> StepResult {
        Err(StepFailure::Assertion(self.message.clone()))
    }
}
