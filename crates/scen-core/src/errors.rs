//! Taxonomía de errores del motor.
//!
//! - `StepFailure`: fallo atribuible a un step (recuperable a nivel escenario).
//! - `InjectionError`: la resolución de configuración no pudo completarse.
//! - `ConfigurationError`: la definición del escenario es inválida (fatal).
//! - `ScenarioError`: aborto fatal de una ejecución (setup o instanciación).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::context::Scope;
use crate::descriptor::StepKind;

/// Resultado de una fase del ciclo de vida de un step.
pub type StepResult = Result<(), StepFailure>;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum InjectionError {
    #[error("configuration with key: {key} not found in scope: {scope}")]
    MissingConfiguration { key: String, scope: Scope },
    #[error("configuration with key: {key} in scope: {scope} has type {found}, expected {expected}")]
    Binding {
        key: String,
        scope: Scope,
        expected: String,
        found: String,
    },
}

impl InjectionError {
    pub fn key(&self) -> &str {
        match self {
            Self::MissingConfiguration { key, .. } | Self::Binding { key, .. } => key,
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            Self::MissingConfiguration { scope, .. } | Self::Binding { scope, .. } => *scope,
        }
    }
}

/// Fallo reconocido de un step. Es lo que recibe el sink en `step_failed`.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum StepFailure {
    #[error("step failed: {0}")]
    Failed(String),
    #[error("assertion failed: {0}")]
    Assertion(String),
    #[error(transparent)]
    Injection(#[from] InjectionError),
    #[error("io: {0}")]
    Io(String),
}

impl StepFailure {
    /// Atajo para `StepFailure::Failed`.
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub fn is_injection(&self) -> bool {
        matches!(self, Self::Injection(_))
    }
}

impl From<std::io::Error> for StepFailure {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigurationError {
    #[error("duplicate {kind} step name: {name}")]
    DuplicateStepName { kind: StepKind, name: String },
    #[error("{kind} step declared with an empty name")]
    EmptyStepName { kind: StepKind },
    #[error("step {step} uses unknown factory: {factory}")]
    MissingFactory { step: String, factory: String },
    #[error("invalid plan: {0}")]
    InvalidPlan(String),
}

/// Errores fatales: la ejecución del escenario se aborta sin atribuir el
/// fallo a un step reportable.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ScenarioError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("could not instantiate {kind} step {step}: {source}")]
    Instantiation {
        step: String,
        kind: StepKind,
        #[source]
        source: StepFailure,
    },
    #[error("setup step {step} failed: {source}")]
    SetupFailed {
        step: String,
        #[source]
        source: StepFailure,
    },
}
