use log::{info, warn};
use uuid::Uuid;

use super::ReportingSink;
use crate::descriptor::Description;
use crate::errors::StepFailure;

/// Escribe cada evento de reporte a través de la fachada `log`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ReportingSink for LogSink {
    fn suite_started(&self, run_id: Uuid, suite: &Description) {
        info!("[{run_id}] scenario started: {suite}");
    }

    fn suite_finished(&self, run_id: Uuid, suite: &Description) {
        info!("[{run_id}] scenario finished: {suite}");
    }

    fn step_started(&self, run_id: Uuid, step: &Description) {
        info!("[{run_id}] step started: {step}");
    }

    fn step_finished(&self, run_id: Uuid, step: &Description) {
        info!("[{run_id}] step finished: {step}");
    }

    fn step_failed(&self, run_id: Uuid, step: &Description, error: &StepFailure) {
        warn!("[{run_id}] step failed: {step}: {error}");
    }
}
