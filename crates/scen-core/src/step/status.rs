use std::fmt;

use serde::{Deserialize, Serialize};

/// Fases del ciclo de vida de un step, en orden de ejecución.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    PreExecute,
    Execute,
    PostExecute,
    Verify,
}

impl Phase {
    /// Fases de un step de setup (sin `verify`).
    pub const SETUP: [Phase; 3] = [Phase::PreExecute, Phase::Execute, Phase::PostExecute];
    /// Fases de un step principal.
    pub const MAIN: [Phase; 4] = [Phase::PreExecute, Phase::Execute, Phase::PostExecute, Phase::Verify];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::PreExecute => "pre_execute",
            Phase::Execute => "execute",
            Phase::PostExecute => "post_execute",
            Phase::Verify => "verify",
        };
        f.write_str(s)
    }
}

/// Estado final de un step principal dentro de un reporte.
///
/// Los steps posteriores a un fallo no llegan a tener estado: aparecen en
/// `ScenarioReport::skipped`, nunca como `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "error", rename_all = "snake_case")]
pub enum StepStatus {
    Passed,
    Failed(String),
}

impl StepStatus {
    pub fn is_passed(&self) -> bool {
        matches!(self, StepStatus::Passed)
    }
}
