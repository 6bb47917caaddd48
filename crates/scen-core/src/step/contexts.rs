use crate::context::{Context, Scope, SharedContext};

/// Contextos cableados a una instancia de step.
///
/// Se asignan una sola vez al instanciar el step y no pueden reasignarse:
/// los campos son privados y no hay setters. El contexto STEP es siempre
/// uno nuevo por instancia.
#[derive(Debug, Clone)]
pub struct StepContexts {
    name: String,
    global: SharedContext,
    scenario: SharedContext,
    step: SharedContext,
}

impl StepContexts {
    pub fn new(name: impl Into<String>, global: SharedContext, scenario: SharedContext) -> Self {
        Self { name: name.into(),
               global,
               scenario,
               step: Context::shared() }
    }

    /// Nombre del step (copiado de su descriptor).
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn global_context(&self) -> &Context {
        &self.global
    }

    pub fn scenario_context(&self) -> &Context {
        &self.scenario
    }

    pub fn step_context(&self) -> &Context {
        &self.step
    }

    pub fn for_scope(&self, scope: Scope) -> &Context {
        match scope {
            Scope::Global => &self.global,
            Scope::Scenario => &self.scenario,
            Scope::Step => &self.step,
        }
    }
}
