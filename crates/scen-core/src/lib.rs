//! scen-core: motor de escenarios por steps con contextos con scope.
//!
//! Un escenario es una secuencia ordenada (por nombre) de steps principales,
//! precedida por steps de setup, que comparten estado en tres niveles
//! (global, escenario, step) mediante inyección tipada clave-valor.
pub mod config;
pub mod constants;
pub mod context;
pub mod descriptor;
pub mod engine;
pub mod errors;
pub mod hashing;
pub mod injection;
pub mod report;
pub mod step;

pub use config::EngineConfig;
pub use context::{Context, ContextEntry, Scope, SharedContext};
pub use descriptor::{Description, ScenarioBuilder, ScenarioPlan, StepDescriptor, StepDescriptorSet, StepKind,
                     StepPlan, StepRegistry, SuitePlan};
pub use engine::{RunnerState, ScenarioReport, ScenarioRunner, ScenarioSuite, StepOutcome, SuiteReport};
pub use errors::{ConfigurationError, InjectionError, ScenarioError, StepFailure, StepResult};
pub use injection::{Injection, InjectionDeclaration, InjectionResolver};
pub use report::{FanoutSink, LogSink, NullSink, RecordingSink, ReportEvent, ReportEventKind, ReportingSink};
pub use step::{ErasedStep, Phase, StepContexts, StepInstance, StepStatus, TestStep};

// `inject_fields!` se exporta en la raíz vía #[macro_export]
