use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::context::{ContextEntry, Scope};

/// Parte observable de una inyección: de dónde se lee y qué tipo se espera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InjectionDeclaration {
    pub scope: Scope,
    pub key: String,
    pub expected: &'static str,
}

/// Setter ya validado, pendiente de aplicar sobre el step.
pub(crate) type Staged<S> = Box<dyn FnOnce(&mut S)>;

type Binder<S> = Box<dyn Fn(&ContextEntry) -> Option<Staged<S>> + Send + Sync>;

/// Declaración de inyección ligada a un setter del step `S`.
pub struct Injection<S> {
    declaration: InjectionDeclaration,
    binder: Binder<S>,
}

impl<S: 'static> Injection<S> {
    /// Declara que `key` (leída de `scope`) debe asignarse vía `setter`.
    ///
    /// El tipo `V` es el tipo que debe tener el valor guardado en el
    /// contexto; cualquier otro produce `InjectionError::Binding`.
    pub fn new<V, F>(scope: Scope, key: impl Into<String>, setter: F) -> Self
        where V: Any + Clone + Send + Sync,
              F: Fn(&mut S, V) + Send + Sync + 'static
    {
        let setter = Arc::new(setter);
        let binder: Binder<S> = Box::new(move |entry: &ContextEntry| {
            let value = entry.downcast::<V>()?;
            let setter = Arc::clone(&setter);
            Some(Box::new(move |step: &mut S| setter(step, value)) as Staged<S>)
        });
        Self { declaration: InjectionDeclaration { scope,
                                                   key: key.into(),
                                                   expected: type_name::<V>() },
               binder }
    }

    /// Inyección con el scope por defecto (`Scenario`).
    pub fn scenario<V, F>(key: impl Into<String>, setter: F) -> Self
        where V: Any + Clone + Send + Sync,
              F: Fn(&mut S, V) + Send + Sync + 'static
    {
        Self::new(crate::constants::DEFAULT_SCOPE, key, setter)
    }

    pub fn global<V, F>(key: impl Into<String>, setter: F) -> Self
        where V: Any + Clone + Send + Sync,
              F: Fn(&mut S, V) + Send + Sync + 'static
    {
        Self::new(Scope::Global, key, setter)
    }

    pub fn step<V, F>(key: impl Into<String>, setter: F) -> Self
        where V: Any + Clone + Send + Sync,
              F: Fn(&mut S, V) + Send + Sync + 'static
    {
        Self::new(Scope::Step, key, setter)
    }
}

impl<S> Injection<S> {
    pub fn declaration(&self) -> &InjectionDeclaration {
        &self.declaration
    }

    pub fn scope(&self) -> Scope {
        self.declaration.scope
    }

    pub fn key(&self) -> &str {
        &self.declaration.key
    }

    pub(crate) fn bind(&self, entry: &ContextEntry) -> Option<Staged<S>> {
        (self.binder)(entry)
    }
}

impl<S> fmt::Debug for Injection<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Injection").field("declaration", &self.declaration).finish()
    }
}
