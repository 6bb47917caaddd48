//! Steps para escribir y verificar valores tipados en un contexto.
//!
//! Los valores vienen de JSON (`with` de un plan) y se guardan con su tipo
//! nativo: `bool`, `i64`, `f64` o `String`. `ExpectValueStep` los lee por
//! inyección, por lo que un tipo distinto al esperado es un error de
//! binding y no una simple desigualdad.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use scen_core::{Context, Injection, Scope, StepContexts, StepFailure, StepResult, TestStep};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl ContextValue {
    pub fn store(&self, ctx: &Context, key: impl Into<String>) {
        match self {
            ContextValue::Bool(v) => ctx.set(key, *v),
            ContextValue::Int(v) => ctx.set(key, *v),
            ContextValue::Float(v) => ctx.set(key, *v),
            ContextValue::Text(v) => ctx.set(key, v.clone()),
        }
    }
}

impl fmt::Display for ContextValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextValue::Bool(v) => write!(f, "{v}"),
            ContextValue::Int(v) => write!(f, "{v}"),
            ContextValue::Float(v) => write!(f, "{v}"),
            ContextValue::Text(v) => write!(f, "{v:?}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetValueParams {
    pub key: String,
    pub value: ContextValue,
    #[serde(default)]
    pub scope: Scope,
}

#[derive(Debug, Clone)]
pub struct SetValueStep {
    scope: Scope,
    key: String,
    value: ContextValue,
}

impl SetValueStep {
    pub fn new(scope: Scope, key: impl Into<String>, value: ContextValue) -> Self {
        Self { scope,
               key: key.into(),
               value }
    }
}

impl From<SetValueParams> for SetValueStep {
    fn from(p: SetValueParams) -> Self {
        Self::new(p.scope, p.key, p.value)
    }
}

impl TestStep for SetValueStep {
    fn execute(&mut self, ctx: &StepContexts) -> StepResult {
        debug!("{}: {}[{}] = {}", ctx.name(), self.scope, self.key, self.value);
        self.value.store(ctx.for_scope(self.scope), self.key.clone());
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectValueParams {
    pub key: String,
    pub equals: ContextValue,
    #[serde(default)]
    pub scope: Scope,
}

/// Inyecta `key` desde `scope` y compara en `verify`.
///
/// El manifiesto depende de la instancia: la clave y el tipo esperado salen
/// de los parámetros, así que `StepInstance::manifest` lo reporta igual que
/// el de cualquier step con campos fijos.
#[derive(Debug, Clone)]
pub struct ExpectValueStep {
    scope: Scope,
    key: String,
    expected: ContextValue,
    actual: Option<ContextValue>,
}

impl ExpectValueStep {
    pub fn new(scope: Scope, key: impl Into<String>, expected: ContextValue) -> Self {
        Self { scope,
               key: key.into(),
               expected,
               actual: None }
    }

    fn injection(&self) -> Injection<Self> {
        let (scope, key) = (self.scope, self.key.clone());
        match self.expected {
            ContextValue::Bool(_) => {
                Injection::new(scope, key, |s: &mut Self, v: bool| s.actual = Some(ContextValue::Bool(v)))
            }
            ContextValue::Int(_) => Injection::new(scope, key, |s: &mut Self, v: i64| s.actual = Some(ContextValue::Int(v))),
            ContextValue::Float(_) => {
                Injection::new(scope, key, |s: &mut Self, v: f64| s.actual = Some(ContextValue::Float(v)))
            }
            ContextValue::Text(_) => {
                Injection::new(scope, key, |s: &mut Self, v: String| s.actual = Some(ContextValue::Text(v)))
            }
        }
    }
}

impl From<ExpectValueParams> for ExpectValueStep {
    fn from(p: ExpectValueParams) -> Self {
        Self::new(p.scope, p.key, p.equals)
    }
}

impl TestStep for ExpectValueStep {
    fn injections(&self) -> Vec<Injection<Self>> {
        vec![self.injection()]
    }

    fn execute(&mut self, ctx: &StepContexts) -> StepResult {
        debug!("{}: {} in scope {} resolved to {:?}", ctx.name(), self.key, self.scope, self.actual);
        Ok(())
    }

    fn verify(&mut self, _ctx: &StepContexts) -> StepResult {
        match &self.actual {
            Some(actual) if *actual == self.expected => Ok(()),
            Some(actual) => Err(StepFailure::Assertion(format!("{} in scope {}: expected {}, found {}",
                                                               self.key, self.scope, self.expected, actual))),
            None => Err(StepFailure::msg(format!("{} in scope {} was never resolved", self.key, self.scope))),
        }
    }
}
