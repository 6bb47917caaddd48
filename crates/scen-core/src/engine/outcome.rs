use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::RunnerState;
use crate::context::SharedContext;
use crate::descriptor::Description;
use crate::errors::ScenarioError;
use crate::step::StepStatus;

/// Resultado de un step principal intentado.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub name: String,
    pub description: Description,
    #[serde(flatten)]
    pub status: StepStatus,
}

/// Resumen de una ejecución de escenario que llegó a `Finished`.
///
/// `steps` contiene los steps intentados hasta el primer fallo inclusive;
/// `skipped` los que no llegaron a empezar por fail-fast.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub run_id: Uuid,
    pub scenario: String,
    pub state: RunnerState,
    pub steps: Vec<StepOutcome>,
    pub skipped: Vec<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Contexto de escenario de esta ejecución (para inspección posterior).
    #[serde(skip)]
    pub scenario_context: SharedContext,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.status.is_passed())
    }

    pub fn failed_step(&self) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| !s.status.is_passed())
    }

    pub fn step_names(&self) -> Vec<&str> {
        self.steps.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Resultados de una suite, en el orden de declaración de los escenarios.
#[derive(Debug)]
pub struct SuiteReport {
    pub scenarios: Vec<Result<ScenarioReport, ScenarioError>>,
}

impl SuiteReport {
    /// Todos los escenarios terminaron y ningún step falló.
    pub fn passed(&self) -> bool {
        self.scenarios.iter().all(|r| matches!(r, Ok(report) if report.passed()))
    }

    pub fn fatal_errors(&self) -> impl Iterator<Item = &ScenarioError> {
        self.scenarios.iter().filter_map(|r| r.as_ref().err())
    }

    pub fn reports(&self) -> impl Iterator<Item = &ScenarioReport> {
        self.scenarios.iter().filter_map(|r| r.as_ref().ok())
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
