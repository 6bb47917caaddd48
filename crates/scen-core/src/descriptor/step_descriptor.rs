use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::errors::StepFailure;
use crate::step::{ErasedStep, TestStep};

/// Tipo de step: de setup (corre una vez antes, su fallo es fatal) o
/// principal (su fallo corta los restantes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Setup,
    #[default]
    Main,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Setup => f.write_str("setup"),
            StepKind::Main => f.write_str("main"),
        }
    }
}

/// Factory que produce una instancia nueva del step en cada invocación.
pub type StepFactory = Arc<dyn Fn() -> Result<Box<dyn ErasedStep>, StepFailure> + Send + Sync>;

/// `{name, kind, factory}`.
#[derive(Clone)]
pub struct StepDescriptor {
    name: String,
    kind: StepKind,
    factory: StepFactory,
}

impl StepDescriptor {
    pub fn from_factory(name: impl Into<String>, kind: StepKind, factory: StepFactory) -> Self {
        Self { name: name.into(),
               kind,
               factory }
    }

    /// Descriptor con factory infalible.
    pub fn new<S, F>(name: impl Into<String>, kind: StepKind, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> S + Send + Sync + 'static
    {
        Self::from_factory(name, kind, Arc::new(move || Ok::<_, StepFailure>(Box::new(factory()) as Box<dyn ErasedStep>)))
    }

    /// Descriptor cuya factory puede fallar (p.ej. validación de parámetros).
    pub fn try_new<S, F>(name: impl Into<String>, kind: StepKind, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> Result<S, StepFailure> + Send + Sync + 'static
    {
        Self::from_factory(name,
                           kind,
                           Arc::new(move || factory().map(|s| Box::new(s) as Box<dyn ErasedStep>)))
    }

    pub fn setup<S, F>(name: impl Into<String>, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> S + Send + Sync + 'static
    {
        Self::new(name, StepKind::Setup, factory)
    }

    pub fn main<S, F>(name: impl Into<String>, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> S + Send + Sync + 'static
    {
        Self::new(name, StepKind::Main, factory)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    /// Invoca la factory. No captura panics (lo hace el runner).
    pub fn produce(&self) -> Result<Box<dyn ErasedStep>, StepFailure> {
        (self.factory)()
    }
}

impl fmt::Debug for StepDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDescriptor")
         .field("name", &self.name)
         .field("kind", &self.kind)
         .finish()
    }
}
