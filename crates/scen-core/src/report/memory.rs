use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use super::{ReportEvent, ReportEventKind, ReportingSink};
use crate::descriptor::Description;
use crate::errors::StepFailure;

/// Sink en memoria, append-only. Pensado para tests y para serializar el
/// historial completo al final de una ejecución.
#[derive(Debug, Default)]
pub struct RecordingSink {
    inner: Mutex<Vec<ReportEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&self, run_id: Uuid, kind: ReportEventKind) {
        // un panic dentro de otro sink no debe perder el historial
        let mut events = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        let seq = events.len() as u64;
        events.push(ReportEvent { seq,
                                  run_id,
                                  kind,
                                  ts: Utc::now() });
    }

    pub fn events(&self) -> Vec<ReportEvent> {
        self.inner.lock().unwrap_or_else(|p| p.into_inner()).clone()
    }

    /// Eventos de una ejecución concreta (orden ascendente por seq).
    pub fn events_for(&self, run_id: Uuid) -> Vec<ReportEvent> {
        self.events().into_iter().filter(|e| e.run_id == run_id).collect()
    }

    /// Secuencia compacta de códigos, p.ej. `"SsfsxfF"`.
    pub fn event_codes(&self) -> String {
        self.events().iter().map(|e| e.kind.code()).collect()
    }

    pub fn event_codes_for(&self, run_id: Uuid) -> String {
        self.events_for(run_id).iter().map(|e| e.kind.code()).collect()
    }

    /// Nombres (step o escenario) de los eventos, en orden.
    pub fn names_for(&self, run_id: Uuid) -> Vec<String> {
        self.events_for(run_id)
            .iter()
            .map(|e| e.kind.description().display_name().to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|p| p.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportingSink for RecordingSink {
    fn suite_started(&self, run_id: Uuid, suite: &Description) {
        self.append(run_id, ReportEventKind::SuiteStarted { suite: suite.clone() });
    }

    fn suite_finished(&self, run_id: Uuid, suite: &Description) {
        self.append(run_id, ReportEventKind::SuiteFinished { suite: suite.clone() });
    }

    fn step_started(&self, run_id: Uuid, step: &Description) {
        self.append(run_id, ReportEventKind::StepStarted { step: step.clone() });
    }

    fn step_finished(&self, run_id: Uuid, step: &Description) {
        self.append(run_id, ReportEventKind::StepFinished { step: step.clone() });
    }

    fn step_failed(&self, run_id: Uuid, step: &Description, error: &StepFailure) {
        self.append(run_id,
                    ReportEventKind::StepFailed { step: step.clone(),
                                                  error: error.clone() });
    }
}
