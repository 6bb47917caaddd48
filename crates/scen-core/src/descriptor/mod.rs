//! Descriptores de steps y su conjunto ordenado.
//!
//! Un escenario se compone de dos listas de `StepDescriptor` (setup y main)
//! que se ordenan lexicográficamente por nombre al construir el
//! `StepDescriptorSet`. Los nombres con prefijos (`"1_..."`, `"2_..."`) son la
//! forma de controlar la secuencia.
//!
//! Formas de construir un set:
//! - `ScenarioBuilder` (composición en código).
//! - `ScenarioPlan` + `StepRegistry` (tabla declarativa JSON).

mod builder;
mod description;
pub mod plan;
mod set;
mod step_descriptor;

pub use builder::ScenarioBuilder;
pub use description::Description;
pub use plan::{ScenarioPlan, StepPlan, StepRegistry, SuitePlan};
pub use set::StepDescriptorSet;
pub use step_descriptor::{StepDescriptor, StepFactory, StepKind};
