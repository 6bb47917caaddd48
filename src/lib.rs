//! scenflow-rust
//!
//! Fachada del workspace: re-exporta el motor (`scen-core`) y los steps
//! incluidos (`scen-adapters`) para que un cliente dependa de un solo crate.
//!
//! - `scen_core`: contextos, inyección, runner, suite y sinks de reporte.
//! - `scen_adapters`: properties, steps genéricos y `builtin_registry()`.

pub use scen_adapters;
pub use scen_core;
pub use scen_core::inject_fields;

/// Imports habituales para escribir y ejecutar escenarios.
pub mod prelude {
    pub use scen_adapters::{builtin_registry, builtin_registry_in, ContextValue, ExpectValueStep, FailStep,
                            ImportPropertiesStep, PassStep, SetValueStep};
    pub use scen_core::{Context, EngineConfig, Injection, RecordingSink, ReportingSink, ScenarioBuilder,
                        ScenarioError, ScenarioReport, ScenarioRunner, ScenarioSuite, Scope, StepContexts,
                        StepFailure, StepResult, SuitePlan, TestStep};
}
