use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::ENGINE_VERSION;
use crate::hashing::hash_value;

/// Identidad reportable de un escenario (suite) o de uno de sus steps.
///
/// `id` es un hash estable de `(engine_version, scenario, step)`: el mismo
/// nombre produce el mismo id en cualquier ejecución, lo que permite
/// correlacionar y deduplicar eventos del sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Description {
    pub scenario: String,
    pub step: Option<String>,
    pub id: String,
}

impl Description {
    pub fn suite(scenario: impl Into<String>) -> Self {
        Self::build(scenario.into(), None)
    }

    pub fn step(scenario: impl Into<String>, step: impl Into<String>) -> Self {
        Self::build(scenario.into(), Some(step.into()))
    }

    fn build(scenario: String, step: Option<String>) -> Self {
        let id = hash_value(&json!({
            "engine_version": ENGINE_VERSION,
            "scenario": scenario,
            "step": step,
        }));
        Self { scenario, step, id }
    }

    pub fn is_suite(&self) -> bool {
        self.step.is_none()
    }

    /// Nombre del step o, para una suite, el del escenario.
    pub fn display_name(&self) -> &str {
        self.step.as_deref().unwrap_or(&self.scenario)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.step {
            Some(step) => write!(f, "{}::{}", self.scenario, step),
            None => f.write_str(&self.scenario),
        }
    }
}
