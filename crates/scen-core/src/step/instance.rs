use std::any::type_name;
use std::fmt;

use log::debug;

use super::{Phase, StepContexts, TestStep};
use crate::descriptor::StepKind;
use crate::errors::{InjectionError, StepResult};
use crate::injection::{InjectionDeclaration, InjectionResolver};

/// Vista object-safe de un `TestStep`; es lo que producen las factories.
pub trait ErasedStep {
    fn step_type(&self) -> &'static str;
    fn declarations(&self) -> Vec<InjectionDeclaration>;
    fn inject_all(&mut self, contexts: &StepContexts) -> Result<usize, InjectionError>;
    fn run_phase(&mut self, phase: Phase, contexts: &StepContexts) -> StepResult;
}

impl<T: TestStep> ErasedStep for T {
    fn step_type(&self) -> &'static str {
        type_name::<T>()
    }

    fn declarations(&self) -> Vec<InjectionDeclaration> {
        self.injections().iter().map(|i| i.declaration().clone()).collect()
    }

    fn inject_all(&mut self, contexts: &StepContexts) -> Result<usize, InjectionError> {
        let manifest = self.injections();
        InjectionResolver::new(contexts).inject(self, &manifest)
    }

    fn run_phase(&mut self, phase: Phase, contexts: &StepContexts) -> StepResult {
        match phase {
            Phase::PreExecute => self.pre_execute(contexts),
            Phase::Execute => self.execute(contexts),
            Phase::PostExecute => self.post_execute(contexts),
            Phase::Verify => self.verify(contexts),
        }
    }
}

/// Instancia de step lista para ejecutar: nombre, tipo (setup/main),
/// contextos inmutables y el step concreto.
pub struct StepInstance {
    kind: StepKind,
    contexts: StepContexts,
    step: Box<dyn ErasedStep>,
}

impl StepInstance {
    pub fn new(kind: StepKind, contexts: StepContexts, step: Box<dyn ErasedStep>) -> Self {
        Self { kind, contexts, step }
    }

    pub fn name(&self) -> &str {
        self.contexts.name()
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn contexts(&self) -> &StepContexts {
        &self.contexts
    }

    pub fn step_type(&self) -> &'static str {
        self.step.step_type()
    }

    /// Manifiesto de inyección de la instancia.
    pub fn manifest(&self) -> Vec<InjectionDeclaration> {
        self.step.declarations()
    }

    pub fn inject(&mut self) -> Result<usize, InjectionError> {
        self.step.inject_all(&self.contexts)
    }

    pub fn run_phase(&mut self, phase: Phase) -> StepResult {
        debug!("step {}: {}", self.contexts.name(), phase);
        self.step.run_phase(phase, &self.contexts)
    }
}

impl fmt::Debug for StepInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepInstance")
         .field("name", &self.name())
         .field("kind", &self.kind)
         .field("step_type", &self.step_type())
         .finish()
    }
}
