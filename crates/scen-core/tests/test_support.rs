//! Steps reutilizables para los tests de integración del runner.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use scen_core::{inject_fields, Injection, Phase, StepContexts, StepFailure, StepResult, TestStep};

/// Registro compartido de las fases ejecutadas (`"nombre:fase"`).
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, entry: String) {
        self.0.lock().unwrap().push(entry);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    /// Nombres de steps cuyo `execute` corrió, en orden.
    pub fn executed(&self) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter_map(|e| e.strip_suffix(":execute").map(str::to_string))
            .collect()
    }
}

/// Step que anota cada fase y falla (opcionalmente) en una de ellas.
pub struct JournalStep {
    pub journal: Journal,
    pub fail_in: Option<Phase>,
    pub panic_in: Option<Phase>,
}

impl JournalStep {
    pub fn passing(journal: &Journal) -> Self {
        Self { journal: journal.clone(),
               fail_in: None,
               panic_in: None }
    }

    pub fn failing_in(journal: &Journal, phase: Phase) -> Self {
        Self { journal: journal.clone(),
               fail_in: Some(phase),
               panic_in: None }
    }

    pub fn panicking_in(journal: &Journal, phase: Phase) -> Self {
        Self { journal: journal.clone(),
               fail_in: None,
               panic_in: Some(phase) }
    }

    fn record(&self, ctx: &StepContexts, phase: Phase) -> StepResult {
        self.journal.push(format!("{}:{}", ctx.name(), phase));
        if self.panic_in == Some(phase) {
            panic!("{} asserted in {}", ctx.name(), phase);
        }
        if self.fail_in == Some(phase) {
            return Err(StepFailure::msg(format!("{} failed in {}", ctx.name(), phase)));
        }
        Ok(())
    }
}

impl TestStep for JournalStep {
    fn pre_execute(&mut self, ctx: &StepContexts) -> StepResult {
        self.record(ctx, Phase::PreExecute)
    }

    fn execute(&mut self, ctx: &StepContexts) -> StepResult {
        self.record(ctx, Phase::Execute)
    }

    fn post_execute(&mut self, ctx: &StepContexts) -> StepResult {
        self.record(ctx, Phase::PostExecute)
    }

    fn verify(&mut self, ctx: &StepContexts) -> StepResult {
        self.record(ctx, Phase::Verify)
    }
}

/// Step que necesita `port` (i64) del contexto global; anota sus fases.
pub struct PortStep {
    pub journal: Journal,
    pub port: Option<i64>,
}

impl PortStep {
    pub fn new(journal: &Journal) -> Self {
        Self { journal: journal.clone(),
               port: None }
    }
}

impl TestStep for PortStep {
    fn injections(&self) -> Vec<Injection<Self>> {
        inject_fields![port <- Global("port")]
    }

    fn pre_execute(&mut self, ctx: &StepContexts) -> StepResult {
        self.journal.push(format!("{}:pre_execute", ctx.name()));
        Ok(())
    }

    fn execute(&mut self, ctx: &StepContexts) -> StepResult {
        self.journal.push(format!("{}:execute", ctx.name()));
        Ok(())
    }

    fn post_execute(&mut self, ctx: &StepContexts) -> StepResult {
        self.journal.push(format!("{}:post_execute", ctx.name()));
        Ok(())
    }
}
