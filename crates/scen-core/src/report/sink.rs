use std::sync::Arc;

use uuid::Uuid;

use crate::descriptor::Description;
use crate::errors::StepFailure;

/// Colaborador externo que recibe los eventos de una ejecución.
///
/// Los métodos reciben `&self`: un mismo sink puede compartirse entre
/// escenarios que corren en paralelo, así que las implementaciones deben
/// sincronizar su estado interno. `run_id` identifica la ejecución concreta
/// del escenario.
pub trait ReportingSink: Send + Sync {
    fn suite_started(&self, run_id: Uuid, suite: &Description);
    fn suite_finished(&self, run_id: Uuid, suite: &Description);
    fn step_started(&self, run_id: Uuid, step: &Description);
    fn step_finished(&self, run_id: Uuid, step: &Description);
    fn step_failed(&self, run_id: Uuid, step: &Description, error: &StepFailure);
}

impl<T: ReportingSink + ?Sized> ReportingSink for Arc<T> {
    fn suite_started(&self, run_id: Uuid, suite: &Description) {
        (**self).suite_started(run_id, suite)
    }
    fn suite_finished(&self, run_id: Uuid, suite: &Description) {
        (**self).suite_finished(run_id, suite)
    }
    fn step_started(&self, run_id: Uuid, step: &Description) {
        (**self).step_started(run_id, step)
    }
    fn step_finished(&self, run_id: Uuid, step: &Description) {
        (**self).step_finished(run_id, step)
    }
    fn step_failed(&self, run_id: Uuid, step: &Description, error: &StepFailure) {
        (**self).step_failed(run_id, step, error)
    }
}

/// Sink que descarta todo.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportingSink for NullSink {
    fn suite_started(&self, _run_id: Uuid, _suite: &Description) {}
    fn suite_finished(&self, _run_id: Uuid, _suite: &Description) {}
    fn step_started(&self, _run_id: Uuid, _step: &Description) {}
    fn step_finished(&self, _run_id: Uuid, _step: &Description) {}
    fn step_failed(&self, _run_id: Uuid, _step: &Description, _error: &StepFailure) {}
}

/// Reenvía cada evento a varios sinks, en orden.
#[derive(Default)]
pub struct FanoutSink {
    sinks: Vec<Box<dyn ReportingSink>>,
}

impl FanoutSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, sink: impl ReportingSink + 'static) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl ReportingSink for FanoutSink {
    fn suite_started(&self, run_id: Uuid, suite: &Description) {
        self.sinks.iter().for_each(|s| s.suite_started(run_id, suite));
    }
    fn suite_finished(&self, run_id: Uuid, suite: &Description) {
        self.sinks.iter().for_each(|s| s.suite_finished(run_id, suite));
    }
    fn step_started(&self, run_id: Uuid, step: &Description) {
        self.sinks.iter().for_each(|s| s.step_started(run_id, step));
    }
    fn step_finished(&self, run_id: Uuid, step: &Description) {
        self.sinks.iter().for_each(|s| s.step_finished(run_id, step));
    }
    fn step_failed(&self, run_id: Uuid, step: &Description, error: &StepFailure) {
        self.sinks.iter().for_each(|s| s.step_failed(run_id, step, error));
    }
}
