use log::debug;

use super::declaration::{Injection, Staged};
use crate::context::{Context, Scope};
use crate::errors::InjectionError;
use crate::step::StepContexts;

/// Resuelve manifiestos de inyección contra los contextos de un step.
pub struct InjectionResolver<'a> {
    contexts: &'a StepContexts,
}

impl<'a> InjectionResolver<'a> {
    pub fn new(contexts: &'a StepContexts) -> Self {
        Self { contexts }
    }

    /// GLOBAL -> contexto global, SCENARIO -> contexto del escenario,
    /// STEP -> contexto propio (fresco) del step.
    pub fn context_for(&self, scope: Scope) -> &Context {
        self.contexts.for_scope(scope)
    }

    /// Fase 1: valida cada declaración y devuelve los setters listos.
    fn stage<S>(&self, injections: &[Injection<S>]) -> Result<Vec<Staged<S>>, InjectionError> {
        let mut staged = Vec::with_capacity(injections.len());
        for inj in injections {
            let decl = inj.declaration();
            let entry = self.context_for(decl.scope)
                            .get_entry(&decl.key)
                            .ok_or_else(|| InjectionError::MissingConfiguration { key: decl.key.clone(),
                                                                                  scope: decl.scope })?;
            let apply = inj.bind(&entry).ok_or_else(|| InjectionError::Binding { key: decl.key.clone(),
                                                                                 scope: decl.scope,
                                                                                 expected: decl.expected.to_string(),
                                                                                 found: entry.type_name().to_string() })?;
            staged.push(apply);
        }
        Ok(staged)
    }

    /// Resuelve todo el manifiesto y, sólo si no hubo errores, aplica los
    /// setters sobre `step`. Devuelve la cantidad de campos asignados.
    pub fn inject<S>(&self, step: &mut S, injections: &[Injection<S>]) -> Result<usize, InjectionError> {
        let staged = self.stage(injections)?;
        let count = staged.len();
        for apply in staged {
            apply(step);
        }
        if count > 0 {
            debug!("step {}: {} injected field(s)", self.contexts.name(), count);
        }
        Ok(count)
    }
}
