//! Eventos de reporte registrados por los sinks que guardan historial.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::descriptor::Description;
use crate::errors::StepFailure;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ReportEventKind {
    SuiteStarted { suite: Description },
    SuiteFinished { suite: Description },
    StepStarted { step: Description },
    StepFinished { step: Description },
    /// El step falló; `error` es el fallo que lo causó.
    StepFailed { step: Description, error: StepFailure },
}

impl ReportEventKind {
    /// Código compacto de una letra (útil para asserts sobre secuencias).
    pub fn code(&self) -> char {
        match self {
            ReportEventKind::SuiteStarted { .. } => 'S',
            ReportEventKind::StepStarted { .. } => 's',
            ReportEventKind::StepFinished { .. } => 'f',
            ReportEventKind::StepFailed { .. } => 'x',
            ReportEventKind::SuiteFinished { .. } => 'F',
        }
    }

    pub fn description(&self) -> &Description {
        match self {
            ReportEventKind::SuiteStarted { suite } | ReportEventKind::SuiteFinished { suite } => suite,
            ReportEventKind::StepStarted { step }
            | ReportEventKind::StepFinished { step }
            | ReportEventKind::StepFailed { step, .. } => step,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEvent {
    pub seq: u64, // orden de llegada al sink
    pub run_id: Uuid,
    pub kind: ReportEventKind,
    pub ts: DateTime<Utc>,
}
