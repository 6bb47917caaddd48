//! Builder para `StepDescriptorSet`.
//!
//! Reemplaza el descubrimiento por anotaciones: los steps se registran
//! explícitamente al componer el escenario.
//!
//! ```ignore
//! let set = ScenarioBuilder::new("Client")
//!     .setup("1_readProperties", || ImportPropertiesStep::new("system.properties"))
//!     .step("2_save", SaveStep::default)
//!     .step("1_pass", || PassStep)
//!     .build()?;
//! ```

use super::{StepDescriptor, StepDescriptorSet, StepKind};
use crate::errors::{ConfigurationError, StepFailure};
use crate::step::TestStep;

#[derive(Debug)]
pub struct ScenarioBuilder {
    name: String,
    setup: Vec<StepDescriptor>,
    main: Vec<StepDescriptor>,
}

impl ScenarioBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(),
               setup: Vec::new(),
               main: Vec::new() }
    }

    /// Añade un step de setup.
    pub fn setup<S, F>(mut self, name: impl Into<String>, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> S + Send + Sync + 'static
    {
        self.setup.push(StepDescriptor::new(name, StepKind::Setup, factory));
        self
    }

    pub fn try_setup<S, F>(mut self, name: impl Into<String>, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> Result<S, StepFailure> + Send + Sync + 'static
    {
        self.setup.push(StepDescriptor::try_new(name, StepKind::Setup, factory));
        self
    }

    /// Añade un step principal.
    pub fn step<S, F>(mut self, name: impl Into<String>, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> S + Send + Sync + 'static
    {
        self.main.push(StepDescriptor::new(name, StepKind::Main, factory));
        self
    }

    pub fn try_step<S, F>(mut self, name: impl Into<String>, factory: F) -> Self
        where S: TestStep,
              F: Fn() -> Result<S, StepFailure> + Send + Sync + 'static
    {
        self.main.push(StepDescriptor::try_new(name, StepKind::Main, factory));
        self
    }

    /// Añade un descriptor ya construido en la lista que corresponde a su kind.
    pub fn descriptor(mut self, descriptor: StepDescriptor) -> Self {
        match descriptor.kind() {
            StepKind::Setup => self.setup.push(descriptor),
            StepKind::Main => self.main.push(descriptor),
        }
        self
    }

    pub fn build(self) -> Result<StepDescriptorSet, ConfigurationError> {
        StepDescriptorSet::new(self.name, self.setup, self.main)
    }
}
