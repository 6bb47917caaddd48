//! Planes declarativos de escenarios y registro de factories.
//!
//! Un `ScenarioPlan` es una tabla (JSON) de steps que referencian factories
//! por nombre (`uses`) con parámetros libres (`with`). El `StepRegistry`
//! resuelve cada referencia a una factory concreta; una referencia
//! desconocida es un `ConfigurationError::MissingFactory`.
//!
//! ```json
//! {
//!   "name": "Client",
//!   "steps": [
//!     { "name": "1_read", "kind": "setup", "uses": "import_properties",
//!       "with": { "path": "system.properties" } },
//!     { "name": "1_pass", "uses": "pass" }
//!   ]
//! }
//! ```

use std::sync::Arc;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{StepDescriptor, StepDescriptorSet, StepKind};
use crate::errors::{ConfigurationError, StepFailure};
use crate::step::{ErasedStep, TestStep};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepPlan {
    pub name: String,
    #[serde(default)]
    pub kind: StepKind,
    pub uses: String,
    #[serde(default)]
    pub with: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPlan {
    pub name: String,
    #[serde(default)]
    pub steps: Vec<StepPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuitePlan {
    pub scenarios: Vec<ScenarioPlan>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PlanFile {
    Suite(SuitePlan),
    Scenario(ScenarioPlan),
}

impl ScenarioPlan {
    pub fn from_json_str(input: &str) -> Result<Self, ConfigurationError> {
        serde_json::from_str(input).map_err(|e| ConfigurationError::InvalidPlan(e.to_string()))
    }
}

impl SuitePlan {
    /// Acepta tanto `{ "scenarios": [...] }` como un único escenario.
    pub fn from_json_str(input: &str) -> Result<Self, ConfigurationError> {
        let file: PlanFile = serde_json::from_str(input).map_err(|e| ConfigurationError::InvalidPlan(e.to_string()))?;
        Ok(match file {
               PlanFile::Suite(suite) => suite,
               PlanFile::Scenario(scenario) => SuitePlan { scenarios: vec![scenario] },
           })
    }
}

/// Factory parametrizada por el bloque `with` de un `StepPlan`.
pub type ParamFactory = Arc<dyn Fn(&Value) -> Result<Box<dyn ErasedStep>, StepFailure> + Send + Sync>;

/// Registro de factories disponibles para los planes.
#[derive(Default, Clone)]
pub struct StepRegistry {
    factories: IndexMap<String, ParamFactory>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra una factory que recibe los parámetros JSON crudos.
    pub fn register<S, F>(&mut self, uses: impl Into<String>, factory: F) -> &mut Self
        where S: TestStep,
              F: Fn(&Value) -> Result<S, StepFailure> + Send + Sync + 'static
    {
        let f: ParamFactory = Arc::new(move |params: &Value| factory(params).map(|s| Box::new(s) as Box<dyn ErasedStep>));
        self.factories.insert(uses.into(), f);
        self
    }

    /// Registra una factory con parámetros tipados (deserializados con serde).
    /// Un `with` ausente se trata como objeto vacío.
    pub fn register_with<P, S, F>(&mut self, uses: impl Into<String>, factory: F) -> &mut Self
        where P: DeserializeOwned,
              S: TestStep,
              F: Fn(P) -> Result<S, StepFailure> + Send + Sync + 'static
    {
        let uses = uses.into();
        let label = uses.clone();
        self.register(uses, move |params: &Value| {
                let params = if params.is_null() { Value::Object(Default::default()) } else { params.clone() };
                let typed: P = serde_json::from_value(params).map_err(|e| StepFailure::Failed(format!("invalid params for {label}: {e}")))?;
                factory(typed)
            })
    }

    pub fn contains(&self, uses: &str) -> bool {
        self.factories.contains_key(uses)
    }

    /// Nombres registrados, en orden de registro.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(|k| k.as_str())
    }

    fn descriptor_for(&self, step: &StepPlan) -> Result<StepDescriptor, ConfigurationError> {
        let factory = self.factories
                          .get(&step.uses)
                          .cloned()
                          .ok_or_else(|| ConfigurationError::MissingFactory { step: step.name.clone(),
                                                                              factory: step.uses.clone() })?;
        let params = step.with.clone();
        Ok(StepDescriptor::from_factory(step.name.clone(), step.kind, Arc::new(move || factory(&params))))
    }

    /// Construye el set de descriptores de un plan de escenario.
    pub fn build_scenario(&self, plan: &ScenarioPlan) -> Result<StepDescriptorSet, ConfigurationError> {
        let mut setup = Vec::new();
        let mut main = Vec::new();
        for step in &plan.steps {
            let descriptor = self.descriptor_for(step)?;
            match step.kind {
                StepKind::Setup => setup.push(descriptor),
                StepKind::Main => main.push(descriptor),
            }
        }
        StepDescriptorSet::new(plan.name.clone(), setup, main)
    }

    pub fn build_suite(&self, plan: &SuitePlan) -> Result<Vec<StepDescriptorSet>, ConfigurationError> {
        plan.scenarios.iter().map(|s| self.build_scenario(s)).collect()
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepRegistry").field("factories", &self.factories.keys().collect::<Vec<_>>()).finish()
    }
}
